//! Import with sanitization.
//!
//! Import is all-or-nothing: the raw payload is parsed and sanitized into
//! a fresh `Document` before anything is committed, so a rejected import
//! leaves the caller's state untouched. Only the top-level shape is fatal;
//! every per-entry defect is patched to a safe default instead.

use crate::errors::{InterchangeError, InterchangeResult};
use formdoc_content::{FieldKind, IdGenerator};
use formdoc_model::{ComponentMetadata, ComponentStore, Document, FieldAttributes, Section};
use serde_json::Value;
use tracing::warn;

/// Parse and sanitize an interchange payload into a document.
pub fn import(raw: &str, document_name: &str) -> InterchangeResult<Document> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| InterchangeError::Format(e.to_string()))?;

    let sections_value = value
        .get("sections")
        .and_then(Value::as_array)
        .ok_or_else(|| InterchangeError::Format("missing 'sections' array".to_string()))?;
    let components_value = value
        .get("components")
        .and_then(Value::as_array)
        .ok_or_else(|| InterchangeError::Format("missing 'components' array".to_string()))?;

    let mut store = ComponentStore::new();
    for entry in components_value {
        match sanitize_component(entry) {
            Some(component) => store.upsert(component),
            None => warn!(entry = %entry, "skipping component with unusable id or type"),
        }
    }

    let mut ids = IdGenerator::from_seed("imported");
    let sections = sections_value
        .iter()
        .map(|entry| sanitize_section(entry, &mut ids))
        .collect();

    // from_parts synthesizes the mandatory section if none survived and
    // re-runs marker repair against the sanitized store.
    Ok(Document::from_parts(document_name, sections, store))
}

/// `id` and `type` are taken as-is; everything else defaults. A component
/// without a usable id or type cannot be addressed and is dropped.
fn sanitize_component(entry: &Value) -> Option<ComponentMetadata> {
    let id = entry.get("id").and_then(Value::as_str)?;
    if id.is_empty() {
        return None;
    }
    let kind = entry
        .get("type")
        .and_then(Value::as_str)
        .and_then(FieldKind::parse)?;

    let label = string_or_default(entry.get("label"));
    let attributes = entry.get("attributes");
    let variable_name = string_or_default(attributes.and_then(|a| a.get("variableName")));
    // Absent, non-array or empty options are left empty here; the store's
    // canonicalization backfills the type-specific three-item defaults.
    let options = attributes
        .and_then(|a| a.get("options"))
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(ComponentMetadata {
        id: id.to_string(),
        kind,
        label,
        attributes: FieldAttributes {
            variable_name,
            options,
        },
    })
}

fn sanitize_section(entry: &Value, ids: &mut IdGenerator) -> Section {
    let id = match entry.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => ids.next_id("section"),
    };
    let mut section = Section::new(id, string_or_default(entry.get("title")));
    section.set_content_blob(&string_or_default(entry.get("content")));
    // default true; explicit false preserved
    section.enabled = entry.get("enabled").and_then(Value::as_bool).unwrap_or(true);
    section
}

fn string_or_default(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}
