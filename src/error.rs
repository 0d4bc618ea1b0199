//! Error types for loading, patching and saving a collection

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a patch run
#[derive(Debug, Error)]
pub enum PatchError {
    /// Collection file does not exist
    #[error("Collection file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// File exists but is not well-formed JSON
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// No top-level item carries the anchor name
    #[error("Anchor item not found: no entry named \"{0}\" in collection items")]
    AnchorNotFound(String),
    /// A field the patcher reads or writes has the wrong shape
    #[error("Invalid collection structure: {0}")]
    InvalidStructure(String),
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Building or rendering JSON failed
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PatchError>;
