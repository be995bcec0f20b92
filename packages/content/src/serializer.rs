//! Content tree → content blob.
//!
//! The serializer emits canonical markup: markers always come back in full
//! form (id, type, label attributes, non-editable tag, remove affordance)
//! regardless of how degraded the fragment was that produced the node.
//! `serialize(parse(s))` is therefore stable after one round.

use crate::marker::encode_marker;
use crate::node::{ContentNode, ContentTree};

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            // a literal '>' would terminate the tag at re-parse time
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a content tree back to its HTML-like blob form.
pub fn serialize(tree: &ContentTree) -> String {
    let mut out = String::new();
    serialize_nodes(tree, &mut out);
    out
}

fn serialize_nodes(nodes: &[ContentNode], out: &mut String) {
    for node in nodes {
        match node {
            ContentNode::Text { text } => out.push_str(&escape_text(text)),
            ContentNode::Break => out.push_str("<br>"),
            ContentNode::Field { id, kind, label } => {
                out.push_str(&encode_marker(id, *kind, label));
            }
            ContentNode::Block { tag, children } => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
                serialize_nodes(children, out);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}
