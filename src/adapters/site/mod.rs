//! Site directory adapter
//!
//! Implements `RecordSource` over a Jekyll-style site directory.
//!
//! - [`frontmatter`] - Split and deserialize YAML front matter
//! - [`source`] - Walk the posts and drafts directories

pub mod frontmatter;
pub mod source;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use source::{ScanResult, SiteSource};

/// Errors reading documents from a site directory
#[derive(Debug, Error)]
pub enum SourceError {
    /// Site root does not exist
    #[error("site root does not exist: {0}")]
    RootNotFound(PathBuf),

    /// A document file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error walking the directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// The file does not open with a `---` line
    #[error("{0}: missing front matter")]
    MissingFrontMatter(PathBuf),

    /// The front matter block is never closed
    #[error("{0}: unterminated front matter")]
    UnterminatedFrontMatter(PathBuf),

    /// The front matter is not valid YAML for the document schema
    #[error("{path}: invalid front matter: {source}")]
    Yaml {
        /// File path
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },
}

impl SourceError {
    /// The file or directory the error concerns, if known
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::RootNotFound(path)
            | Self::MissingFrontMatter(path)
            | Self::UnterminatedFrontMatter(path)
            | Self::Io { path, .. }
            | Self::Yaml { path, .. } => Some(path.as_path()),
            Self::WalkDir(err) => err.path(),
        }
    }
}
