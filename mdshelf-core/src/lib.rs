//! mdshelf core - document discovery, TOC extraction, pagination, and search
//!
//! This crate contains the logic of the documentation browser, independent of
//! terminal concerns:
//! - File inventory: scan a directory for Markdown and image documents
//! - TOC extraction: parse a document's header outline
//! - Pagination: reflow text to a viewport as a sequence of pages
//! - Search: literal case-insensitive substring search with context snippets
//!
//! Everything here is a pure function of its inputs (plus the file reads it
//! is asked to perform); there is no cached state between calls. The
//! interactive shell lives in `mdshelf-shell`.

pub mod error;
pub mod inventory;
pub mod paginate;
pub mod search;
pub mod toc;

// Re-export commonly used types
pub use error::{Error, Result};
pub use inventory::{list_documents, DocKind, Document, Inventory};
pub use paginate::{paginate, Page, Pages, Viewport};
pub use search::{highlight, search_documents, SearchMatch};
pub use toc::{extract_toc, HeaderEntry};
