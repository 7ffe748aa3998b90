//! mdshelf shell - the interactive terminal front end
//!
//! This crate owns everything environment-dependent:
//! - Menu loop and dispatch
//! - Prompting and key input (with interrupt handling)
//! - Terminal size detection and screen clearing
//! - Rendering of inventories, TOCs, pages, and search results
//!
//! All document logic lives in `mdshelf-core`; the shell re-scans the
//! directory on every menu iteration instead of caching an inventory, so
//! added or removed files show up without a restart.

pub mod input;
pub mod terminal;
pub mod ui;

use anyhow::{Context, Result};
use std::io::{stdout, Write};
use std::path::Path;

use mdshelf_core::search::DEFAULT_CONTEXT;
use mdshelf_core::{extract_toc, list_documents, paginate, search_documents, Document};

use input::Prompt;

enum MenuAction {
    ListDocuments,
    ShowToc,
    ReadDocument,
    Search,
}

/// Run the interactive browser over `root` until the user quits or cancels.
pub fn run(root: &Path) -> Result<()> {
    loop {
        terminal::clear_screen()?;
        let mut out = stdout();
        ui::draw_menu(&mut out, root)?;
        out.flush()?;

        let choice = match input::read_line("\nChoose an option: ")? {
            Prompt::Cancelled => {
                println!("Interrupted.");
                return Ok(());
            }
            Prompt::Value(raw) => raw,
        };

        let action = match choice.trim() {
            "1" => MenuAction::ListDocuments,
            "2" => MenuAction::ShowToc,
            "3" => MenuAction::ReadDocument,
            "4" => MenuAction::Search,
            "0" | "q" => {
                println!("Bye.");
                return Ok(());
            }
            _ => {
                println!("Invalid option, choose 0-4.");
                input::pause()?;
                continue;
            }
        };

        // Fresh scan every iteration so new and removed files are picked up
        let inventory =
            list_documents(root).context("Failed to scan the documentation directory")?;

        match action {
            MenuAction::ListDocuments => {
                terminal::clear_screen()?;
                ui::draw_inventory(&mut out, &inventory)?;
                input::pause()?;
            }
            MenuAction::ShowToc => show_toc(&inventory.markdown)?,
            MenuAction::ReadDocument => read_document(&inventory.markdown)?,
            MenuAction::Search => search(&inventory.markdown)?,
        }
    }
}

/// Show a numbered pick list and prompt for a selection.
///
/// Returns `None` when there is nothing to pick or the user cancels.
fn pick_document<'a>(docs: &'a [Document], title: &str) -> Result<Option<&'a Document>> {
    if docs.is_empty() {
        println!("No Markdown documents available.");
        input::pause()?;
        return Ok(None);
    }
    let mut out = stdout();
    ui::draw_document_list(&mut out, title, docs)?;
    out.flush()?;
    match input::read_index("Choose a number: ", docs.len())? {
        Prompt::Cancelled => Ok(None),
        Prompt::Value(idx) => Ok(Some(&docs[idx])),
    }
}

fn show_toc(docs: &[Document]) -> Result<()> {
    terminal::clear_screen()?;
    let Some(doc) = pick_document(docs, "Choose a document to outline:")? else {
        return Ok(());
    };
    match doc.read_text() {
        Ok(text) => {
            terminal::clear_screen()?;
            ui::draw_toc(&mut stdout(), doc.file_name(), &extract_toc(&text))?;
        }
        Err(err) => println!("Warning: {err}"),
    }
    input::pause()
}

fn read_document(docs: &[Document]) -> Result<()> {
    terminal::clear_screen()?;
    let Some(doc) = pick_document(docs, "Choose a document to read:")? else {
        return Ok(());
    };
    let text = match doc.read_text() {
        Ok(text) => text,
        Err(err) => {
            println!("Warning: {err}");
            return input::pause();
        }
    };

    // Viewport is sampled once per read; a resize takes effect next time
    let pages = paginate(&text, Some(doc.file_name()), terminal::viewport());
    let title = pages.title().map(str::to_string);
    let mut out = stdout();
    for page in pages {
        terminal::clear_screen()?;
        let last = page.number == page.total;
        ui::draw_page(&mut out, title.as_deref(), &page)?;
        out.flush()?;
        if !last {
            if let Prompt::Cancelled = input::wait_for_advance()? {
                return Ok(());
            }
        }
    }
    input::pause()
}

fn search(docs: &[Document]) -> Result<()> {
    terminal::clear_screen()?;
    if docs.is_empty() {
        println!("No Markdown documents to search.");
        return input::pause();
    }

    let query = loop {
        match input::read_line("Text to search (min. 2 characters): ")? {
            Prompt::Cancelled => return Ok(()),
            Prompt::Value(raw) => {
                let trimmed = raw.trim().to_string();
                if trimmed.chars().count() >= ui::MIN_QUERY_LEN {
                    break trimmed;
                }
                println!("Query too short.");
            }
        }
    };

    let matches = search_documents(docs, &query, DEFAULT_CONTEXT);
    terminal::clear_screen()?;
    ui::draw_search_results(&mut stdout(), &query, &matches)?;
    input::pause()
}
