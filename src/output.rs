//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::adapters::SourceError;
use crate::core::models::Document;
use crate::core::services::{LoadError, TermCount, YearGroup};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One document as shown in listings
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    /// Logical path
    pub path: String,
    /// "draft" or "published"
    pub status: String,
    /// Display title
    pub title: String,
    /// Publication date (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Layout name
    pub layout: String,
    /// Author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Categories, sorted
    pub categories: Vec<String>,
    /// Tags, sorted
    pub tags: Vec<String>,
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        Self {
            path: doc.path.clone(),
            status: doc.status.to_string(),
            title: doc.title.clone(),
            date: doc.date.map(|d| d.format("%Y-%m-%d").to_string()),
            layout: doc.layout.clone(),
            author: doc.author.clone(),
            categories: doc.categories.iter().cloned().collect(),
            tags: doc.tags.iter().cloned().collect(),
        }
    }
}

impl DocumentSummary {
    fn line(&self) -> String {
        let title = if self.title.is_empty() { "(untitled)" } else { self.title.as_str() };
        format!("{:<10} {:<9} {}  {}", self.date.as_deref().unwrap_or("-"), self.status, self.path, title)
    }
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Matching documents
    pub documents: Vec<DocumentSummary>,
}

impl ListResult {
    /// Build a listing from documents
    pub fn from_documents<'a>(docs: impl IntoIterator<Item = &'a Document>) -> Self {
        Self {
            documents: docs.into_iter().map(DocumentSummary::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.documents.is_empty() {
            println!("No documents found.");
            return;
        }

        for doc in &self.documents {
            println!("{}", doc.line());
        }
        println!("\n{} document(s)", self.documents.len());
    }
}

/// Full view of a single document
#[derive(Debug, Serialize)]
pub struct DocumentDetail {
    /// Metadata
    #[serde(flatten)]
    pub summary: DocumentSummary,
    /// First paragraph of the body
    pub excerpt: String,
    /// Languages of the embedded code samples, in order
    pub code_languages: Vec<String>,
    /// Number of embedded code samples
    pub code_blocks: usize,
}

impl From<&Document> for DocumentDetail {
    fn from(doc: &Document) -> Self {
        let blocks = doc.code_blocks();
        Self {
            summary: DocumentSummary::from(doc),
            excerpt: doc.excerpt().to_string(),
            code_languages: blocks.iter().filter_map(|b| b.language.clone()).collect(),
            code_blocks: blocks.len(),
        }
    }
}

impl DocumentDetail {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let s = &self.summary;
        println!("Path:       {}", s.path);
        println!("Title:      {}", s.title);
        println!("Status:     {}", s.status);
        println!("Date:       {}", s.date.as_deref().unwrap_or("-"));
        println!("Layout:     {}", s.layout);
        if let Some(author) = &s.author {
            println!("Author:     {author}");
        }
        println!("Categories: {}", s.categories.join(", "));
        println!("Tags:       {}", s.tags.join(", "));
        if self.code_blocks > 0 {
            println!(
                "Code:       {} block(s) [{}]",
                self.code_blocks,
                self.code_languages.join(", ")
            );
        }
        if !self.excerpt.is_empty() {
            println!("\n{}", self.excerpt);
        }
    }
}

/// Result of a tags or categories listing
#[derive(Debug, Serialize)]
pub struct TaxonomyResult {
    /// "tags" or "categories"
    pub kind: String,
    /// Terms with document counts
    pub terms: Vec<TermCount>,
}

impl TaxonomyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.terms.is_empty() {
            println!("No {} found.", self.kind);
            return;
        }

        for term in &self.terms {
            println!("  {:>4}  {}", term.count, term.name);
        }
    }
}

/// Published documents by year
#[derive(Debug, Serialize)]
pub struct ArchiveResult {
    /// Years, newest first
    pub years: Vec<ArchiveYear>,
}

/// One year of the archive
#[derive(Debug, Serialize)]
pub struct ArchiveYear {
    /// Calendar year
    pub year: i32,
    /// Documents of that year, newest first
    pub documents: Vec<DocumentSummary>,
}

impl From<Vec<YearGroup<'_>>> for ArchiveResult {
    fn from(groups: Vec<YearGroup<'_>>) -> Self {
        Self {
            years: groups
                .into_iter()
                .map(|g| ArchiveYear {
                    year: g.year,
                    documents: g.documents.into_iter().map(DocumentSummary::from).collect(),
                })
                .collect(),
        }
    }
}

impl ArchiveResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.years.is_empty() {
            println!("No published documents.");
            return;
        }

        for year in &self.years {
            println!("{}", year.year);
            for doc in &year.documents {
                println!("  {}", doc.line());
            }
        }
    }
}

/// A record or file that did not make it into the repository
#[derive(Debug, Clone, Serialize)]
pub struct Rejection {
    /// Logical path or file path
    pub path: String,
    /// Error kind (e.g., "validation", "duplicate_path", "source")
    pub kind: String,
    /// Error message
    pub message: String,
}

impl From<&LoadError> for Rejection {
    fn from(err: &LoadError) -> Self {
        Self {
            path: err.path().to_string(),
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<&SourceError> for Rejection {
    fn from(err: &SourceError) -> Self {
        Self {
            path: err.path().map(|p| p.display().to_string()).unwrap_or_default(),
            kind: "source".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result of a site check
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether every file loaded cleanly
    pub passed: bool,
    /// What was checked (e.g., a site directory)
    pub source: String,
    /// Number of documents loaded
    pub loaded: usize,
    /// Everything that was rejected
    pub rejected: Vec<Rejection>,
}

impl CheckReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Checked {}: {} document(s) loaded.", self.source, self.loaded);

        if self.passed {
            println!("All documents valid.");
            return;
        }

        println!("\nRejected:");
        for r in &self.rejected {
            println!("  [{}] {}", r.kind, r.path);
            println!("          {}\n", r.message);
        }
        println!("FAILED: {} rejected file(s) or record(s)", self.rejected.len());
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
