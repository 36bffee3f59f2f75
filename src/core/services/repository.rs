//! Content repository - read-only queries over loaded documents
//!
//! The repository is immutable once built. Every query is a pure function
//! of the loaded collection, so a repository can be shared between
//! readers freely.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use serde::Serialize;

use crate::core::models::{Document, RawRecord, Status};

use super::loader::{self, LoadReport};

/// An immutable collection of documents in load order
#[derive(Debug, Clone, Default)]
pub struct ContentRepository {
    documents: Vec<Document>,
    index: HashMap<String, usize>,
}

/// A taxonomy term and how many documents carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    /// The tag or category
    pub name: String,
    /// Number of documents carrying it
    pub count: usize,
}

/// Published documents from one year, newest first
#[derive(Debug, Clone, Serialize)]
pub struct YearGroup<'a> {
    /// Calendar year
    pub year: i32,
    /// Documents dated in that year
    pub documents: Vec<&'a Document>,
}

impl ContentRepository {
    pub(super) const fn from_parts(documents: Vec<Document>, index: HashMap<String, usize>) -> Self {
        Self { documents, index }
    }

    /// Load an ordered batch of records
    ///
    /// See [`loader::load`] for the rejection policy.
    pub fn load<I>(records: I) -> LoadReport
    where
        I: IntoIterator<Item = RawRecord>,
    {
        loader::load(records)
    }

    /// Look up a document by logical path
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Document> {
        self.index.get(path).map(|&i| &self.documents[i])
    }

    /// Number of documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the repository holds no documents
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All documents in load order
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Documents with the given status, in load order
    pub fn by_status(&self, status: Status) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(move |d| d.status == status)
    }

    /// Documents carrying the tag (case-sensitive), in load order
    pub fn by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Document> + 'a {
        self.documents.iter().filter(move |d| d.has_tag(tag))
    }

    /// Documents in the category (case-sensitive), in load order
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Document> + 'a {
        self.documents.iter().filter(move |d| d.in_category(category))
    }

    /// Documents by the given author (exact match), in load order
    pub fn by_author<'a>(&'a self, author: &'a str) -> impl Iterator<Item = &'a Document> + 'a {
        self.documents.iter().filter(move |d| d.author.as_deref() == Some(author))
    }

    /// Dated documents ordered by date
    ///
    /// Undated documents are left out. Documents sharing a date keep their
    /// load order in either direction.
    #[must_use]
    pub fn sorted_by_date(&self, descending: bool) -> Vec<&Document> {
        let mut dated: Vec<&Document> = self.documents.iter().filter(|d| d.date.is_some()).collect();
        if descending {
            dated.sort_by(|a, b| b.date.cmp(&a.date));
        } else {
            dated.sort_by(|a, b| a.date.cmp(&b.date));
        }
        dated
    }

    /// Every distinct tag with its document count, sorted by name
    #[must_use]
    pub fn tags(&self) -> Vec<TermCount> {
        count_terms(self.documents.iter().flat_map(|d| d.tags.iter()))
    }

    /// Every distinct category with its document count, sorted by name
    #[must_use]
    pub fn categories(&self) -> Vec<TermCount> {
        count_terms(self.documents.iter().flat_map(|d| d.categories.iter()))
    }

    /// Published documents grouped by year, newest year first
    #[must_use]
    pub fn archive(&self) -> Vec<YearGroup<'_>> {
        let mut years: BTreeMap<i32, Vec<&Document>> = BTreeMap::new();
        for doc in self.sorted_by_date(true) {
            if let (Status::Published, Some(date)) = (doc.status, doc.date) {
                years.entry(date.year()).or_default().push(doc);
            }
        }
        years
            .into_iter()
            .rev()
            .map(|(year, documents)| YearGroup { year, documents })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ContentRepository {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

fn count_terms<'a>(terms: impl Iterator<Item = &'a String>) -> Vec<TermCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(name, count)| TermCount {
            name: name.to_string(),
            count,
        })
        .collect()
}
