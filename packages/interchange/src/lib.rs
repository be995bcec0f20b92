//! # Formdoc Interchange
//!
//! Versioned JSON interchange format for formdoc documents.
//!
//! ```text
//! Document ──export──▶ InterchangeDocument ──to_json_string──▶ file
//! Document ◀─import─── sanitized Value    ◀──read_to_string── file
//! ```
//!
//! Export captures live section content and the canonical visible
//! component list. Import sanitizes absent or malformed fields to safe
//! defaults and is all-or-nothing: a `Format` error commits nothing.

mod errors;
mod export;
mod format;
mod fs;
mod import;

pub use errors::{InterchangeError, InterchangeResult};
pub use export::{export, export_file_name, to_json_string};
pub use format::{InterchangeDocument, InterchangeSection, FORMAT_VERSION};
pub use fs::{read_to_string, write_string};
pub use import::import;
