//! Property-based tests for the content repository
//!
//! Uses proptest to verify properties that should hold for all inputs.

use chrono::NaiveDate;
use proptest::prelude::*;
use quire::core::models::Status;
use quire::core::services::{ContentRepository, LoadError};
use std::collections::HashSet;

use crate::common::RecordBuilder;

/// (path suffix, is draft, optional day offset)
fn record_shape() -> impl Strategy<Value = (u8, bool, Option<u16>)> {
    (0u8..20, any::<bool>(), proptest::option::of(0u16..2000))
}

fn build(shapes: &[(u8, bool, Option<u16>)]) -> Vec<quire::core::models::RawRecord> {
    let epoch = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    shapes
        .iter()
        .map(|(n, draft, day)| {
            let collection = if *draft { "drafts" } else { "posts" };
            let mut builder = RecordBuilder::new(&format!("/{collection}/doc-{n}"));
            if let Some(day) = day {
                let date = epoch + chrono::Days::new(u64::from(*day));
                builder = builder.date(&date.format("%Y-%m-%d").to_string());
            }
            builder.build()
        })
        .collect()
}

proptest! {
    /// Loaded paths are unique and every collision is reported
    #[test]
    fn paths_are_unique(shapes in proptest::collection::vec(record_shape(), 0..40)) {
        let records = build(&shapes);
        let total = records.len();
        let report = ContentRepository::load(records);

        let mut seen = HashSet::new();
        for doc in report.repository.iter() {
            prop_assert!(seen.insert(doc.path.clone()));
        }
        prop_assert_eq!(report.repository.len() + report.errors.len(), total);
    }

    /// Published documents always carry a date
    #[test]
    fn published_have_dates(shapes in proptest::collection::vec(record_shape(), 0..40)) {
        let report = ContentRepository::load(build(&shapes));
        prop_assert!(report.repository.by_status(Status::Published).all(|d| d.date.is_some()));
        for err in &report.errors {
            if let LoadError::Validation { path, .. } = err {
                prop_assert!(path.starts_with("/posts/"));
            }
        }
    }

    /// The date view is monotonic and holds exactly the dated documents
    #[test]
    fn sorted_by_date_is_monotonic(
        shapes in proptest::collection::vec(record_shape(), 0..40),
        descending in any::<bool>(),
    ) {
        let repo = ContentRepository::load(build(&shapes)).repository;
        let sorted = repo.sorted_by_date(descending);

        prop_assert_eq!(sorted.len(), repo.iter().filter(|d| d.date.is_some()).count());
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0].date, pair[1].date);
            if descending {
                prop_assert!(a >= b);
            } else {
                prop_assert!(a <= b);
            }
        }
    }
}
