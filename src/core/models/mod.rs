//! Domain models for quire
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RawRecord`] - One unvalidated file-like unit: path, front matter, body
//! - [`Document`] - A validated draft or post
//! - [`Status`] - Draft or published
//! - [`CodeBlock`] - A code sample embedded in a body

mod code_block;
mod document;
mod record;
mod status;

pub use code_block::{CodeBlock, extract_code_blocks};
pub use document::{DEFAULT_LAYOUT, Document};
pub use record::{FrontMatter, RawRecord, StringList, Term};
pub use status::Status;
