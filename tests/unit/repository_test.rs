//! Tests for the content repository
//!
//! Loading, rejection policy and the read-only queries.

use quire::core::models::Status;
use quire::core::services::{ContentRepository, LoadError, RepositoryBuilder};

use crate::common::{RecordBuilder, oauth2_draft, paths, slick_post};

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_draft_and_post_queries() {
    let report = ContentRepository::load(vec![oauth2_draft(), slick_post()]);
    assert!(report.is_clean());
    let repo = report.repository;

    assert_eq!(paths(repo.by_status(Status::Draft)), vec!["/drafts/oauth2"]);
    assert_eq!(paths(repo.by_status(Status::Published)), vec!["/posts/slick-tx"]);
    assert_eq!(paths(repo.by_tag("scala")), vec!["/posts/slick-tx"]);
    assert_eq!(paths(repo.by_category("security")), vec!["/drafts/oauth2"]);
}

#[test]
fn test_duplicate_path_keeps_single_document() {
    let report = ContentRepository::load(vec![oauth2_draft(), oauth2_draft()]);

    assert_eq!(
        report.errors,
        vec![LoadError::DuplicatePath {
            path: "/drafts/oauth2".to_string()
        }]
    );
    assert_eq!(report.repository.len(), 1);
}

#[test]
fn test_builder_reports_duplicate_on_second_insert() {
    let mut builder = RepositoryBuilder::new();
    assert!(builder.insert(oauth2_draft()).is_ok());

    let err = builder.insert(oauth2_draft()).unwrap_err();
    assert!(matches!(err, LoadError::DuplicatePath { .. }));
    assert_eq!(builder.build().len(), 1);
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_published_without_date_is_absent_from_every_query() {
    let undated = RecordBuilder::new("/posts/undated")
        .categories(&["security"])
        .tags(&["scala"])
        .build();
    let report = ContentRepository::load(vec![undated, slick_post()]);

    assert_eq!(report.errors.len(), 1);
    assert!(matches!(&report.errors[0], LoadError::Validation { path, .. } if path == "/posts/undated"));

    let repo = report.repository;
    assert!(repo.get("/posts/undated").is_none());
    assert!(repo.iter().all(|d| d.path != "/posts/undated"));
    assert!(repo.by_tag("scala").all(|d| d.path != "/posts/undated"));
    assert_eq!(repo.by_category("security").count(), 0);
    assert!(repo.sorted_by_date(true).iter().all(|d| d.path != "/posts/undated"));
}

#[test]
fn test_published_documents_always_have_dates() {
    let report = ContentRepository::load(vec![
        oauth2_draft(),
        slick_post(),
        RecordBuilder::new("/posts/no-date").build(),
        RecordBuilder::new("/posts/dated").date("2015-01-02").build(),
    ]);
    assert!(report.repository.by_status(Status::Published).all(|d| d.date.is_some()));
    assert_eq!(report.repository.by_status(Status::Published).count(), 2);
}

#[test]
fn test_datetime_front_matter_is_truncated_to_date() {
    let report = ContentRepository::load(vec![
        RecordBuilder::new("/posts/timed").date("2014-08-26 10:00:00 +0200").build(),
    ]);
    let doc = report.repository.get("/posts/timed").unwrap();
    assert_eq!(doc.date.map(|d| d.to_string()).as_deref(), Some("2014-08-26"));
}

// =============================================================================
// QUERIES
// =============================================================================

#[test]
fn test_tag_and_category_matching_is_case_sensitive() {
    let repo = ContentRepository::load(vec![slick_post()]).repository;
    assert_eq!(repo.by_tag("Scala").count(), 0);
    assert_eq!(repo.by_category("Development").count(), 0);
    assert_eq!(repo.by_category("development").count(), 1);
}

#[test]
fn test_queries_keep_load_order() {
    let repo = ContentRepository::load(vec![
        RecordBuilder::new("/posts/c").date("2014-03-01").tags(&["scala"]).build(),
        RecordBuilder::new("/posts/a").date("2014-01-01").tags(&["scala"]).build(),
        RecordBuilder::new("/posts/b").date("2014-02-01").tags(&["scala"]).build(),
    ])
    .repository;
    assert_eq!(paths(repo.by_tag("scala")), vec!["/posts/c", "/posts/a", "/posts/b"]);
    assert_eq!(paths(&repo), vec!["/posts/c", "/posts/a", "/posts/b"]);
}

#[test]
fn test_sorted_by_date_both_directions() {
    let repo = ContentRepository::load(vec![
        oauth2_draft(),
        RecordBuilder::new("/posts/mid").date("2014-05-01").build(),
        slick_post(),
        RecordBuilder::new("/posts/early").date("2013-11-11").build(),
    ])
    .repository;

    assert_eq!(
        paths(repo.sorted_by_date(true)),
        vec!["/posts/slick-tx", "/posts/mid", "/posts/early"]
    );
    assert_eq!(
        paths(repo.sorted_by_date(false)),
        vec!["/posts/early", "/posts/mid", "/posts/slick-tx"]
    );
}

#[test]
fn test_dated_draft_appears_in_date_view() {
    let dated_draft = RecordBuilder::new("/drafts/dated").date("2015-01-01").build();
    let repo = ContentRepository::load(vec![dated_draft, slick_post()]).repository;
    assert_eq!(paths(repo.sorted_by_date(true)), vec!["/drafts/dated", "/posts/slick-tx"]);
    assert!(repo.archive().iter().all(|g| g.year != 2015));
}

#[test]
fn test_categories_and_tags_collapse_duplicates() {
    let repo = ContentRepository::load(vec![
        RecordBuilder::new("/drafts/x").tags(&["scala", "scala", " scala "]).build(),
    ])
    .repository;
    let doc = repo.get("/drafts/x").unwrap();
    assert_eq!(doc.tags.len(), 1);
    assert_eq!(repo.tags()[0].count, 1);
}

#[test]
fn test_category_counts() {
    let repo = ContentRepository::load(vec![
        oauth2_draft(),
        slick_post(),
        RecordBuilder::new("/posts/other").date("2014-09-01").categories(&["development"]).build(),
    ])
    .repository;
    let counts: Vec<(String, usize)> =
        repo.categories().into_iter().map(|t| (t.name, t.count)).collect();
    assert_eq!(
        counts,
        vec![("development".to_string(), 2), ("security".to_string(), 1)]
    );
}

#[test]
fn test_empty_repository() {
    let report = ContentRepository::load(Vec::new());
    assert!(report.is_clean());
    assert!(report.repository.is_empty());
    assert!(report.repository.sorted_by_date(true).is_empty());
    assert!(report.repository.tags().is_empty());
    assert!(report.repository.archive().is_empty());
}

#[test]
fn test_repository_is_shareable_between_threads() {
    let repo = ContentRepository::load(vec![oauth2_draft(), slick_post()]).repository;
    std::thread::scope(|s| {
        let a = s.spawn(|| repo.by_status(Status::Draft).count());
        let b = s.spawn(|| repo.by_tag("scala").count());
        assert_eq!(a.join().unwrap(), 1);
        assert_eq!(b.join().unwrap(), 1);
    });
}
