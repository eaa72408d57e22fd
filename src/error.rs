//! Error types for foldout operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while compiling a page.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },

    /// A heading reached extraction without an anchor id assigned by the
    /// Markdown engine. Indicates an engine configuration fault, so the
    /// whole compilation aborts and nothing is written.
    #[error("heading \"{0}\" has no anchor id")]
    MissingAnchor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
