//! Integration tests for mdshelf-shell
//!
//! These tests exercise the browse flow end-to-end through the rendering
//! layer: scan a directory, outline a document, paginate it, and search it,
//! asserting on the text the shell would print.

use mdshelf_core::{extract_toc, list_documents, paginate, search_documents, Viewport};
use mdshelf_shell::ui;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Build a documentation directory with a couple of known files
fn create_test_docs() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("guide.md"),
        "# Guide\n\nintro text\n\n## Usage\n\nrun the tool\nThe Cat sat\n",
    )
    .expect("Failed to write guide.md");
    fs::write(dir.path().join("notes.markdown"), "no headers here\n")
        .expect("Failed to write notes.markdown");
    fs::write(dir.path().join("logo.png"), [0u8; 4]).expect("Failed to write logo.png");
    fs::write(dir.path().join("ignored.txt"), "nope").expect("Failed to write ignored.txt");
    dir
}

fn render(draw: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut buf = Vec::new();
    draw(&mut buf).expect("render");
    String::from_utf8(buf).expect("utf8 output")
}

#[test]
fn integration_scan_and_list() {
    let dir = create_test_docs();
    let inventory = list_documents(dir.path()).expect("scan");

    assert_eq!(inventory.markdown.len(), 2);
    assert_eq!(inventory.images.len(), 1);

    let text = render(|out| ui::draw_inventory(out, &inventory));
    assert!(text.contains("  - guide.md"));
    assert!(text.contains("  - notes.markdown"));
    assert!(text.contains("logo.png"));
    assert!(!text.contains("ignored.txt"));
}

#[test]
fn integration_outline_document() {
    let dir = create_test_docs();
    let inventory = list_documents(dir.path()).expect("scan");

    let guide = &inventory.markdown[0];
    assert_eq!(guide.file_name(), "guide.md");

    let toc = extract_toc(&guide.read_text().expect("read"));
    assert_eq!(toc.len(), 2);
    assert_eq!((toc[0].level, toc[0].line), (1, 1));
    assert_eq!((toc[1].level, toc[1].line), (2, 5));

    let text = render(|out| ui::draw_toc(out, guide.file_name(), &toc));
    assert!(text.contains("- L1: Guide\n"));
    assert!(text.contains("  - L5: Usage\n"));
}

#[test]
fn integration_outline_without_headers() {
    let dir = create_test_docs();
    let inventory = list_documents(dir.path()).expect("scan");

    let notes = &inventory.markdown[1];
    let toc = extract_toc(&notes.read_text().expect("read"));
    assert!(toc.is_empty());

    let text = render(|out| ui::draw_toc(out, notes.file_name(), &toc));
    assert!(text.contains("no Markdown headers detected"));
}

#[test]
fn integration_read_paginated() {
    let dir = create_test_docs();
    let inventory = list_documents(dir.path()).expect("scan");

    let guide = &inventory.markdown[0];
    let text = guide.read_text().expect("read");
    let pages = paginate(
        &text,
        Some(guide.file_name()),
        Viewport {
            columns: 40,
            rows: 30,
        },
    );
    let title = pages.title().map(str::to_string);

    let mut rendered = String::new();
    for page in pages {
        rendered.push_str(&render(|out| ui::draw_page(out, title.as_deref(), &page)));
    }

    assert!(rendered.starts_with("guide.md\n"));
    assert!(rendered.contains("# Guide\n"));
    assert!(rendered.contains("The Cat sat\n"));
}

#[test]
fn integration_search_with_highlighting() {
    let dir = create_test_docs();
    let inventory = list_documents(dir.path()).expect("scan");

    let matches = search_documents(&inventory.markdown, "cat", 1);
    assert_eq!(matches.len(), 1);
    assert!(matches[0].path.ends_with("guide.md"));
    assert_eq!(matches[0].line, 8);

    let text = render(|out| ui::draw_search_results(out, "cat", &matches));
    assert!(text.contains("Results for 'cat': 1"));
    assert!(text.contains("The [Cat] sat"));
    assert!(text.contains("guide.md (line 8)"));
}

#[test]
fn integration_rescan_picks_up_new_files() {
    let dir = create_test_docs();
    let before = list_documents(dir.path()).expect("scan");
    assert_eq!(before.markdown.len(), 2);

    fs::write(dir.path().join("added.md"), "# Added\n").expect("write added.md");

    let after = list_documents(dir.path()).expect("rescan");
    assert_eq!(after.markdown.len(), 3);
    assert_eq!(after.markdown[0].file_name(), "added.md");
}

#[test]
fn integration_invalid_root_is_an_error() {
    let missing = Path::new("/definitely/not/here");
    assert!(list_documents(missing).is_err());
}
