//! Adapter tests
//!
//! Tests for record source implementations:
//! - Site directory (front matter files)
//! - In-memory records
