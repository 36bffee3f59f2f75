//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing quire components.

use std::fs;
use std::path::Path;

use quire::core::models::{FrontMatter, RawRecord};
use tempfile::TempDir;

/// A test site with a standard directory structure
pub struct TestSite {
    dir: TempDir,
}

impl TestSite {
    /// Create a test site mirroring a small blog:
    /// ```text
    /// /
    /// ├── _posts/
    /// │   └── 2014-08-26-slick-tx.md
    /// └── _drafts/
    ///     └── oauth2.html
    /// ```
    pub fn new() -> Self {
        let site = Self::empty();
        site.add_file(
            "_posts/2014-08-26-slick-tx.md",
            "---\n\
             layout: post\n\
             title: \"Transactions with Slick\"\n\
             categories: [development]\n\
             tags: [scala, transactions]\n\
             author: Jane Doe\n\
             ---\n\
             Hiding the session behind a transaction abstraction.\n\
             \n\
             ```scala\n\
             db.withTransaction { implicit s => users.insert(u) }\n\
             ```\n",
        );
        site.add_file(
            "_drafts/oauth2.html",
            "---\n\
             layout: page\n\
             title: OAuth2 flows\n\
             categories: [security]\n\
             ---\n\
             <p>Authorization code, implicit and client credentials.</p>\n",
        );
        site
    }

    /// Create a site with no files at all
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Get the root path of the test site
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file to the test site
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test records
pub struct RecordBuilder {
    path: String,
    metadata: FrontMatter,
    body: String,
}

impl RecordBuilder {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            metadata: FrontMatter::default(),
            body: String::new(),
        }
    }

    pub fn layout(mut self, layout: &str) -> Self {
        self.metadata.layout = Some(layout.to_string());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.metadata.title = Some(title.to_string());
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.metadata.date = Some(date.to_string());
        self
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.metadata.categories = Some(categories.to_vec().into());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.metadata.tags = Some(tags.to_vec().into());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.metadata.author = Some(author.to_string());
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn build(self) -> RawRecord {
        RawRecord::new(self.path, self.metadata, self.body)
    }
}

/// Record (a): the OAuth2 draft
pub fn oauth2_draft() -> RawRecord {
    RecordBuilder::new("/drafts/oauth2").layout("page").categories(&["security"]).build()
}

/// Record (b): the Slick transactions post
pub fn slick_post() -> RawRecord {
    RecordBuilder::new("/posts/slick-tx")
        .date("2014-08-26")
        .categories(&["development"])
        .tags(&["scala", "transactions"])
        .build()
}

/// Logical paths of a sequence of documents
pub fn paths<'a>(docs: impl IntoIterator<Item = &'a quire::core::models::Document>) -> Vec<&'a str> {
    docs.into_iter().map(|d| d.path.as_str()).collect()
}
