//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the content model and
//! wherever records come from (a site directory, memory, ...).
//!
//! Implementations live in the `adapters` module.

mod record_source;

pub use record_source::RecordSource;
