//! Document model
//!
//! A document is one validated unit of content (a draft or a post): its
//! metadata plus the raw body.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use super::code_block::{CodeBlock, extract_code_blocks};
use super::Status;

/// Layout used when the front matter does not name one
pub const DEFAULT_LAYOUT: &str = "post";

/// A validated document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Unique logical identifier (e.g., "/posts/slick-tx")
    pub path: String,

    /// Draft or published
    pub status: Status,

    /// Rendering template name, opaque to this model
    pub layout: String,

    /// Display title
    pub title: String,

    /// Publication date; always present for published documents
    pub date: Option<NaiveDate>,

    /// Category set, no enforced vocabulary
    pub categories: BTreeSet<String>,

    /// Tag set, no enforced vocabulary
    pub tags: BTreeSet<String>,

    /// Author, if named
    pub author: Option<String>,

    /// Raw body text
    pub body: String,

    /// Front matter keys not interpreted by the model
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Document {
    /// Whether the document is live
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }

    /// Case-sensitive tag membership
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Case-sensitive category membership
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// Last segment of the logical path
    #[must_use]
    pub fn slug(&self) -> &str {
        self.path.trim_end_matches('/').rsplit('/').next().unwrap_or(&self.path)
    }

    /// First paragraph of the body, trimmed
    ///
    /// The paragraph ends at the first blank line. Leading blank lines are
    /// skipped.
    #[must_use]
    pub fn excerpt(&self) -> &str {
        let body = self.body.trim_start();
        let mut end = body.len();
        let mut offset = 0;
        for line in body.split_inclusive('\n') {
            if line.trim().is_empty() {
                end = offset;
                break;
            }
            offset += line.len();
        }
        body[..end].trim_end()
    }

    /// Code samples embedded in the body
    #[must_use]
    pub fn code_blocks(&self) -> Vec<CodeBlock> {
        extract_code_blocks(&self.body)
    }
}
