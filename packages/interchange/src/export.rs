use crate::errors::{InterchangeError, InterchangeResult};
use crate::format::{InterchangeDocument, InterchangeSection, FORMAT_VERSION};
use chrono::{DateTime, Local};
use formdoc_model::Document;

/// Capture a document into interchange form.
///
/// Section content is serialized from the live tree at call time, and the
/// component list is the canonical visible ordering; store order and
/// orphaned entries play no part.
pub fn export(doc: &Document) -> InterchangeDocument {
    InterchangeDocument {
        version: FORMAT_VERSION.to_string(),
        sections: doc
            .sections
            .iter()
            .map(|s| InterchangeSection {
                id: s.id.clone(),
                title: s.title.clone(),
                content: s.content_blob(),
                enabled: s.enabled,
            })
            .collect(),
        components: doc.visible_components().into_iter().cloned().collect(),
    }
}

/// Pretty-printed JSON payload for the export file.
pub fn to_json_string(doc: &InterchangeDocument) -> InterchangeResult<String> {
    serde_json::to_string_pretty(doc).map_err(|e| InterchangeError::Format(e.to_string()))
}

/// Date-stamped export filename convention. Not load-bearing for
/// correctness; just what the save dialog suggests.
pub fn export_file_name(now: DateTime<Local>) -> String {
    format!("formdoc-export-{}.json", now.format("%Y-%m-%d"))
}
