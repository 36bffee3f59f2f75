//! Document publication status
//!
//! Defines whether a document is live on the site or still being written.

use serde::{Deserialize, Serialize};

/// Publication status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Unpublished work in progress, date optional
    #[default]
    Draft,
    /// Live post, must carry a publication date
    Published,
}

impl Status {
    /// Whether documents with this status must carry a date
    #[must_use]
    pub const fn requires_date(self) -> bool {
        matches!(self, Self::Published)
    }

    /// Infer the status of a document from its logical path
    ///
    /// A path whose first segment is `drafts` or `_drafts` is a draft,
    /// everything else is published.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
        if first == "drafts" || first == "_drafts" {
            Self::Draft
        } else {
            Self::Published
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            _ => Err(format!("Invalid status: {s}. Use: draft, published")),
        }
    }
}
