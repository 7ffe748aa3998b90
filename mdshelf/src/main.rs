//! mdshelf - an interactive terminal browser for a directory of docs

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Browse, outline, read, and search the Markdown files in a directory
#[derive(Parser, Debug)]
#[command(name = "mdshelf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root directory to browse (defaults to the current directory)
    #[arg(value_name = "DIR")]
    root: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine the current directory")?,
    };

    // Validate the root up front so an invalid directory exits non-zero with
    // a clear message instead of failing inside the menu loop
    mdshelf_core::list_documents(&root)
        .with_context(|| format!("Cannot browse {}", root.display()))?;

    mdshelf_shell::run(&root)
}
