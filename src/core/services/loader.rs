//! Load service - turns raw records into a validated repository
//!
//! A record that fails validation is rejected on its own: the error is
//! reported and loading continues with the next record. A rejected record
//! never reaches the repository, and an earlier document holding the same
//! path is kept.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use log::{debug, info, warn};
use thiserror::Error;

use crate::core::models::{DEFAULT_LAYOUT, Document, RawRecord, Status};
use crate::core::ports::RecordSource;

use super::repository::ContentRepository;

/// Errors raised while loading a single record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Required metadata is missing or malformed
    #[error("invalid document {path}: {reason}")]
    Validation {
        /// Logical path of the rejected record
        path: String,
        /// What was wrong with it
        reason: String,
    },

    /// The path is already held by a loaded document
    #[error("duplicate document path: {path}")]
    DuplicatePath {
        /// The colliding logical path
        path: String,
    },
}

impl LoadError {
    fn validation(path: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Logical path of the record that failed
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Validation { path, .. } | Self::DuplicatePath { path } => path,
        }
    }

    /// Short machine-readable name of the error kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::DuplicatePath { .. } => "duplicate_path",
        }
    }
}

/// Outcome of loading a batch of records
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// The documents that passed validation
    pub repository: ContentRepository,

    /// One error per rejected record, in input order
    pub errors: Vec<LoadError>,
}

impl LoadReport {
    /// Whether every record was accepted
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Accumulates validated documents before freezing them into a repository
#[derive(Debug, Default)]
pub struct RepositoryBuilder {
    documents: Vec<Document>,
    index: HashMap<String, usize>,
}

impl RepositoryBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate one record and add it
    ///
    /// On error the builder is left unchanged.
    pub fn insert(&mut self, record: RawRecord) -> Result<&Document, LoadError> {
        if self.index.contains_key(&record.path) {
            return Err(LoadError::DuplicatePath { path: record.path });
        }

        let document = parse_record(record)?;
        debug!("Loaded {} ({})", document.path, document.status);

        let position = self.documents.len();
        self.index.insert(document.path.clone(), position);
        self.documents.push(document);
        Ok(&self.documents[position])
    }

    /// Number of documents accepted so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no document has been accepted yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Freeze the accepted documents into a read-only repository
    #[must_use]
    pub fn build(self) -> ContentRepository {
        ContentRepository::from_parts(self.documents, self.index)
    }
}

/// Load an ordered batch of records
///
/// Every record is attempted; rejected ones are reported in
/// [`LoadReport::errors`].
pub fn load<I>(records: I) -> LoadReport
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut builder = RepositoryBuilder::new();
    let mut errors = Vec::new();

    for record in records {
        if let Err(err) = builder.insert(record) {
            warn!("Rejected record: {err}");
            errors.push(err);
        }
    }

    info!("Loaded {} document(s), rejected {}", builder.len(), errors.len());

    LoadReport {
        repository: builder.build(),
        errors,
    }
}

/// Load every record a source provides
pub fn load_from<S>(source: &S) -> anyhow::Result<LoadReport>
where
    S: RecordSource + ?Sized,
{
    Ok(load(source.records()?))
}

/// Validate a record and convert it into a document
fn parse_record(record: RawRecord) -> Result<Document, LoadError> {
    let RawRecord { path, metadata, body } = record;

    if path.trim().is_empty() {
        return Err(LoadError::validation(&path, "path is empty"));
    }

    let status = match metadata.status.as_deref() {
        Some(raw) => raw.parse::<Status>().map_err(|e| LoadError::validation(&path, e))?,
        None if metadata.published == Some(false) => Status::Draft,
        None => Status::from_path(&path),
    };

    let date = match metadata.date.as_deref() {
        Some(raw) => Some(
            parse_date(raw)
                .ok_or_else(|| LoadError::validation(&path, format!("unparseable date '{raw}'")))?,
        ),
        None => None,
    };

    if status.requires_date() && date.is_none() {
        return Err(LoadError::validation(&path, "published document has no date"));
    }

    let categories: BTreeSet<String> = metadata.category_items().into_iter().collect();
    let tags: BTreeSet<String> = metadata.tag_items().into_iter().collect();

    Ok(Document {
        status,
        layout: metadata.layout.unwrap_or_else(|| DEFAULT_LAYOUT.to_string()),
        title: metadata.title.unwrap_or_default(),
        date,
        categories,
        tags,
        author: metadata.author.filter(|a| !a.trim().is_empty()),
        body,
        extra: metadata.extra,
        path,
    })
}

/// Parse an ISO-8601 date, or the date part of a datetime
///
/// Accepts `2014-08-26`, `2014-08-26 10:00:00 +0200` and
/// `2014-08-26T10:00:00Z`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day = raw.get(..10)?;
    let rest = &raw[10..];
    if !(rest.is_empty() || rest.starts_with(' ') || rest.starts_with('T')) {
        return None;
    }
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
