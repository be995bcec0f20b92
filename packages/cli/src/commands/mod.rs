pub mod check;
pub mod export;
pub mod fill;

pub use check::CheckArgs;
pub use export::ExportArgs;
pub use fill::FillArgs;

use anyhow::{Context, Result};
use formdoc_model::Document;
use std::path::Path;

/// Load a document from an interchange file, naming it after the file stem.
pub fn load_document(path: &Path) -> Result<Document> {
    let raw = formdoc_interchange::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let doc = formdoc_interchange::import(&raw, &name)
        .with_context(|| format!("importing {}", path.display()))?;
    Ok(doc)
}
