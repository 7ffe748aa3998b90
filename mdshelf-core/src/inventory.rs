//! Document discovery and classification

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extensions recognized as Markdown documents (lowercase)
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Extensions recognized as image documents (lowercase)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg"];

/// Classification of a discovered file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocKind {
    Markdown,
    Image,
}

impl DocKind {
    /// Classify a path by its extension (case-insensitive), if recognized
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if MARKDOWN_EXTENSIONS.contains(&ext.as_str()) {
            Some(DocKind::Markdown)
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(DocKind::Image)
        } else {
            None
        }
    }
}

/// A discovered document: a path plus its classification.
///
/// Identity is the path. Documents are immutable once discovered; a fresh
/// scan produces fresh values rather than mutating old ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub kind: DocKind,
}

impl Document {
    /// The file name component, for display
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Read the document as UTF-8 text.
    ///
    /// Malformed byte sequences are replaced with U+FFFD rather than failing;
    /// only an I/O error is reported.
    pub fn read_text(&self) -> Result<String> {
        let bytes = fs::read(&self.path).map_err(|source| Error::FileRead {
            path: self.path.clone(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// The result of scanning a directory: Markdown and image documents,
/// each sorted by file name.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    pub markdown: Vec<Document>,
    pub images: Vec<Document>,
}

/// Scan a directory (non-recursively) for Markdown and image documents.
///
/// Only regular files directly inside `root` are considered; symlinks,
/// directories, and unrecognized extensions are silently skipped. Both
/// returned lists are sorted by file name (case-sensitive lexicographic).
///
/// # Errors
///
/// Returns `Error::InvalidDirectory` if `root` does not exist or is not a
/// directory.
pub fn list_documents(root: &Path) -> Result<Inventory> {
    let root = root
        .canonicalize()
        .map_err(|_| Error::InvalidDirectory(root.to_path_buf()))?;
    if !root.is_dir() {
        return Err(Error::InvalidDirectory(root));
    }

    let entries = fs::read_dir(&root).map_err(|_| Error::InvalidDirectory(root.clone()))?;

    let mut inventory = Inventory::default();
    for entry in entries.flatten() {
        // file_type() does not follow symlinks, so links are excluded here
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        let path = entry.path();
        match DocKind::from_path(&path) {
            Some(kind @ DocKind::Markdown) => inventory.markdown.push(Document { path, kind }),
            Some(kind @ DocKind::Image) => inventory.images.push(Document { path, kind }),
            None => {}
        }
    }

    inventory
        .markdown
        .sort_by(|a, b| a.file_name().cmp(b.file_name()));
    inventory
        .images
        .sort_by(|a, b| a.file_name().cmp(b.file_name()));

    log::debug!(
        "scanned {}: {} markdown, {} images",
        root.display(),
        inventory.markdown.len(),
        inventory.images.len()
    );

    Ok(inventory)
}
