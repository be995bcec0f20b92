//! Marker fragment contract.
//!
//! A marker is the inline fragment that stands in for a field inside rich
//! content. Recognition is attribute-based, keyed on `data-field-id` alone,
//! so fragments produced by older encoders (or mangled by a foreign
//! copy/paste context) still scan; `repair` restores whatever they lost
//! from the store's current metadata.

use crate::node::{ContentNode, ContentTree, FieldKind};
use crate::serializer::escape_attr;

/// Component identifier attribute. Presence of this attribute alone makes a
/// fragment a marker.
pub const ATTR_FIELD_ID: &str = "data-field-id";

/// Field type attribute (`single-line-text` etc.).
pub const ATTR_FIELD_TYPE: &str = "data-field-type";

/// Display label attribute; the visible inner text mirrors it.
pub const ATTR_FIELD_LABEL: &str = "data-field-label";

/// Marks a fragment as UI chrome that must never reach exported text.
pub const ATTR_UI_ONLY: &str = "data-ui-only";

/// Encode a field as its canonical marker fragment.
///
/// The fragment carries id, type and label as addressable attributes, is
/// tagged non-editable, and embeds the visually-hidden remove affordance
/// (UI-only, stripped from every plain-text projection).
pub fn encode_marker(id: &str, kind: Option<FieldKind>, label: &str) -> String {
    let mut out = String::with_capacity(128);
    out.push_str("<span ");
    out.push_str(ATTR_FIELD_ID);
    out.push_str("=\"");
    out.push_str(&escape_attr(id));
    out.push('"');
    if let Some(kind) = kind {
        out.push(' ');
        out.push_str(ATTR_FIELD_TYPE);
        out.push_str("=\"");
        out.push_str(kind.as_str());
        out.push('"');
    }
    out.push(' ');
    out.push_str(ATTR_FIELD_LABEL);
    out.push_str("=\"");
    out.push_str(&escape_attr(label));
    out.push_str("\" contenteditable=\"false\" class=\"field-marker\">");
    out.push_str(&crate::serializer::escape_text(label));
    out.push_str("<span ");
    out.push_str(ATTR_UI_ONLY);
    out.push_str("=\"true\" class=\"field-remove\">\u{d7}</span>");
    out.push_str("</span>");
    out
}

/// Resolved metadata for a marker id, as the store knows it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    pub kind: FieldKind,
    pub label: String,
}

/// Lookup seam between the content layer and whatever owns field metadata.
pub trait FieldLookup {
    fn field_info(&self, id: &str) -> Option<FieldInfo>;
}

/// Collect every field id in document order. Duplicates are preserved
/// positionally; deduplication is the reconciler's job, not the codec's.
pub fn scan(tree: &ContentTree) -> Vec<&str> {
    let mut ids = Vec::new();
    scan_into(tree, &mut ids);
    ids
}

fn scan_into<'a>(nodes: &'a [ContentNode], ids: &mut Vec<&'a str>) {
    for node in nodes {
        match node {
            ContentNode::Field { id, .. } => ids.push(id.as_str()),
            ContentNode::Block { children, .. } => scan_into(children, ids),
            ContentNode::Text { .. } | ContentNode::Break => {}
        }
    }
}

/// Re-derive each resolvable marker's type and label from the store.
///
/// Markers whose id the lookup does not know are left untouched (dangling
/// markers are tolerated, not repaired away). Returns whether anything
/// changed; repairing well-formed content is a no-op, so
/// `repair(repair(t)) == repair(t)`.
pub fn repair(tree: &mut ContentTree, lookup: &impl FieldLookup) -> bool {
    let mut changed = false;
    repair_nodes(tree, lookup, &mut changed);
    changed
}

fn repair_nodes(nodes: &mut [ContentNode], lookup: &impl FieldLookup, changed: &mut bool) {
    for node in nodes {
        match node {
            ContentNode::Field { id, kind, label } => {
                if let Some(info) = lookup.field_info(id) {
                    if *kind != Some(info.kind) {
                        *kind = Some(info.kind);
                        *changed = true;
                    }
                    if *label != info.label {
                        *label = info.label;
                        *changed = true;
                    }
                }
            }
            ContentNode::Block { children, .. } => repair_nodes(children, lookup, changed),
            ContentNode::Text { .. } | ContentNode::Break => {}
        }
    }
}
