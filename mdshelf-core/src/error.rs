//! Error taxonomy for the core operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the core crate
#[derive(Debug, Error)]
pub enum Error {
    /// The browse root does not exist or is not a directory
    #[error("not a directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    /// A single document could not be read from disk
    #[error("failed to read {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
