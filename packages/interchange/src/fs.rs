//! File collaborators.
//!
//! Single-shot read and write of the interchange payload; the core only
//! ever sees a complete string or a failure.

use crate::errors::{InterchangeError, InterchangeResult};
use std::path::Path;

pub fn read_to_string(path: &Path) -> InterchangeResult<String> {
    std::fs::read_to_string(path).map_err(InterchangeError::Read)
}

pub fn write_string(path: &Path, contents: &str) -> InterchangeResult<()> {
    std::fs::write(path, contents).map_err(InterchangeError::Write)
}
