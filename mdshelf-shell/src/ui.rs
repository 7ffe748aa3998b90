//! Rendering of menus, inventories, TOCs, pages, and search results
//!
//! Every function writes to a caller-supplied sink so rendering stays
//! testable without a terminal; the shell passes stdout.

use std::io::{self, Write};
use std::path::Path;

use mdshelf_core::{Document, HeaderEntry, Inventory, Page, SearchMatch};

/// Shell policy: at most this many search results are rendered per query
pub const MAX_RESULTS: usize = 200;

/// Shell policy: queries shorter than this are rejected before reaching the
/// search engine
pub const MIN_QUERY_LEN: usize = 2;

pub fn draw_menu(out: &mut impl Write, root: &Path) -> io::Result<()> {
    writeln!(out, "===== mdshelf - documentation browser =====")?;
    writeln!(out, "Directory: {}", root.display())?;
    writeln!(out)?;
    writeln!(out, "1) List documents")?;
    writeln!(out, "2) Show the TOC of a Markdown file")?;
    writeln!(out, "3) Read a Markdown file with pagination")?;
    writeln!(out, "4) Search all Markdown files")?;
    writeln!(out, "0) Quit")?;
    Ok(())
}

pub fn draw_inventory(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    writeln!(out, "Documents detected:")?;
    writeln!(out)?;
    if inventory.markdown.is_empty() {
        writeln!(out, "No Markdown files found.")?;
    } else {
        writeln!(out, "Markdown:")?;
        for doc in &inventory.markdown {
            writeln!(out, "  - {}", doc.file_name())?;
        }
    }
    writeln!(out)?;
    if inventory.images.is_empty() {
        writeln!(out, "No images found (PNG/JPG/GIF/SVG).")?;
    } else {
        writeln!(out, "Images:")?;
        for doc in &inventory.images {
            writeln!(out, "  - {} -> {}", doc.file_name(), doc.path.display())?;
        }
    }
    Ok(())
}

/// Numbered pick list shown before TOC and read operations
pub fn draw_document_list(out: &mut impl Write, title: &str, docs: &[Document]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for (i, doc) in docs.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, doc.file_name())?;
    }
    Ok(())
}

/// Render a header outline, indenting two spaces per level above 1
pub fn draw_toc(out: &mut impl Write, name: &str, toc: &[HeaderEntry]) -> io::Result<()> {
    writeln!(out, "Table of contents for {name}")?;
    if toc.is_empty() {
        writeln!(out, "  (no Markdown headers detected)")?;
        return Ok(());
    }
    for entry in toc {
        let indent = "  ".repeat((entry.level.saturating_sub(1)) as usize);
        writeln!(out, "{indent}- L{}: {}", entry.line, entry.title)?;
    }
    Ok(())
}

/// Render one page: title chrome, body lines, and a footer prompt while
/// pages remain
pub fn draw_page(out: &mut impl Write, title: Option<&str>, page: &Page) -> io::Result<()> {
    if let Some(title) = title {
        writeln!(out, "{title}")?;
        writeln!(out, "{}", "-".repeat(title.len() + 2))?;
    }
    for line in &page.lines {
        writeln!(out, "{line}")?;
    }
    if page.number < page.total {
        writeln!(out)?;
        writeln!(
            out,
            "[page {}/{}] Enter for next page, q to stop",
            page.number, page.total
        )?;
    }
    Ok(())
}

/// Render search results, capped at [`MAX_RESULTS`]
pub fn draw_search_results(
    out: &mut impl Write,
    query: &str,
    matches: &[SearchMatch],
) -> io::Result<()> {
    writeln!(out, "Results for '{query}': {}", matches.len())?;
    writeln!(out)?;
    if matches.is_empty() {
        writeln!(out, "No matches.")?;
        return Ok(());
    }
    for m in matches.iter().take(MAX_RESULTS) {
        let name = m
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        writeln!(out, "- {} (line {})", name, m.line)?;
        for line in m.snippet.lines() {
            writeln!(out, "  {line}")?;
        }
        writeln!(out, "{}", "-".repeat(60))?;
    }
    if matches.len() > MAX_RESULTS {
        writeln!(out, "...showing the first {MAX_RESULTS} matches")?;
    }
    Ok(())
}
