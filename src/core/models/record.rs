//! Raw records
//!
//! A raw record is one file-like unit of content before validation: a
//! logical path, the front matter block and the body text.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One unvalidated document as read from a source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Logical path (e.g., "/posts/slick-tx")
    pub path: String,

    /// Parsed front matter
    #[serde(default)]
    pub metadata: FrontMatter,

    /// Raw body text following the front matter
    #[serde(default)]
    pub body: String,
}

impl RawRecord {
    /// Create a record from its parts
    pub fn new(path: impl Into<String>, metadata: FrontMatter, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            metadata,
            body: body.into(),
        }
    }
}

/// The metadata block preceding a document's body
///
/// Every key is optional. Keys this model does not know about are kept in
/// [`FrontMatter::extra`] untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    /// Rendering template name (defaults to "post" when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// Display title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication date as written (ISO-8601 date or datetime)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Categories, as a list or a space separated string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<StringList>,

    /// Singular category alias
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Tags, as a list or a space separated string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<StringList>,

    /// Author name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Explicit status override: "draft" or "published"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Publishing flag; `false` marks the document as a draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Keys not interpreted by this model
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl FrontMatter {
    /// All categories, merging the list form with the singular alias
    #[must_use]
    pub fn category_items(&self) -> Vec<String> {
        let mut items = self.categories.as_ref().map(StringList::items).unwrap_or_default();
        if let Some(single) = &self.category {
            let single = single.trim();
            if !single.is_empty() {
                items.push(single.to_string());
            }
        }
        items
    }

    /// All tags
    #[must_use]
    pub fn tag_items(&self) -> Vec<String> {
        self.tags.as_ref().map(StringList::items).unwrap_or_default()
    }
}

/// A list of terms written either as a sequence or as one scalar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    /// `tags: scala transactions` or `categories: 2014`
    Inline(Term),
    /// `tags: [scala, 2.10]`
    List(Vec<Term>),
}

impl StringList {
    /// The non-empty terms of the list
    ///
    /// The inline form is split on whitespace; list entries are trimmed.
    #[must_use]
    pub fn items(&self) -> Vec<String> {
        match self {
            Self::Inline(term) => term.to_string().split_whitespace().map(String::from).collect(),
            Self::List(terms) => terms
                .iter()
                .map(Term::to_string)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

impl From<Vec<&str>> for StringList {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(Term::from).collect())
    }
}

/// A single tag or category as written in YAML
///
/// YAML reads `2014` or `2.10` as numbers; they are kept as terms and
/// rendered with their numeric text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term {
    /// Plain text
    Text(String),
    /// `true` or `false`
    Flag(bool),
    /// Integer or float
    Number(serde_json::Number),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
