//! Core domain logic for quire
//!
//! This module contains the pure content model with no I/O dependencies.
//! Where records come from is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Document, RawRecord, Status, CodeBlock)
//! - `services/` - Loading, validation and queries
//! - `ports/` - Trait definitions for record sources

pub mod models;
pub mod ports;
pub mod services;
