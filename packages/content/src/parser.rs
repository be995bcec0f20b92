//! Content blob → content tree.
//!
//! The parser is deliberately tolerant: content arrives from an editing
//! surface (or a foreign export) we do not control, so nothing here ever
//! fails. Malformed markup degrades to text, mismatched close tags are
//! dropped, and unknown tags become plain `Block` nodes. The store and the
//! content blob are allowed to be momentarily out of sync; the parser's job
//! is only to report structure, never to judge it.

use crate::marker::{ATTR_FIELD_ID, ATTR_FIELD_LABEL, ATTR_FIELD_TYPE, ATTR_UI_ONLY};
use crate::node::{ContentNode, ContentTree, FieldKind};
use crate::tokenizer::{close_tag_name, decode_entity, parse_open_tag, tokenize, Tag, Token};

/// Elements that never take a close tag.
fn is_void_tag(name: &str) -> bool {
    matches!(
        name,
        "br" | "hr" | "img" | "input" | "meta" | "link" | "wbr" | "area" | "base" | "col"
            | "embed" | "source" | "track"
    )
}

fn is_ui_only(tag: &Tag) -> bool {
    tag.attr(ATTR_UI_ONLY).is_some()
        || tag
            .attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == "field-remove"))
}

struct Frame {
    tag: String,
    children: Vec<ContentNode>,
}

/// Parse an HTML-like content blob into a content tree.
pub fn parse(source: &str) -> ContentTree {
    let tokens = tokenize(source);
    let mut root: Vec<ContentNode> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Text(text) => {
                push_text(&mut root, &mut stack, text);
                i += 1;
            }
            Token::Entity(entity) => {
                match decode_entity(entity) {
                    Some(c) => {
                        let mut buf = [0u8; 4];
                        push_text(&mut root, &mut stack, c.encode_utf8(&mut buf));
                    }
                    None => push_text(&mut root, &mut stack, entity),
                }
                i += 1;
            }
            Token::OpenTag(raw) => match parse_open_tag(raw) {
                Some(tag) if tag.attr(ATTR_FIELD_ID).is_some() => {
                    let (field, next) = consume_marker(&tokens, i, &tag);
                    push_node(&mut root, &mut stack, field);
                    i = next;
                }
                Some(tag) if is_ui_only(&tag) => {
                    // UI chrome outside a marker: drop the whole subtree.
                    i = skip_subtree(&tokens, i, &tag);
                }
                Some(tag) => {
                    if tag.name == "br" || tag.name == "hr" {
                        push_node(&mut root, &mut stack, ContentNode::Break);
                    } else if tag.self_closing || is_void_tag(&tag.name) {
                        // void element with no text projection
                    } else {
                        stack.push(Frame {
                            tag: tag.name,
                            children: Vec::new(),
                        });
                    }
                    i += 1;
                }
                None => {
                    push_text(&mut root, &mut stack, raw);
                    i += 1;
                }
            },
            Token::CloseTag(raw) => {
                if let Some(name) = close_tag_name(raw) {
                    close_frame(&mut root, &mut stack, &name);
                }
                i += 1;
            }
            Token::Comment => {
                i += 1;
            }
        }
    }

    // Unterminated frames fold into their parents.
    while let Some(frame) = stack.pop() {
        let node = ContentNode::Block {
            tag: frame.tag,
            children: frame.children,
        };
        push_node(&mut root, &mut stack, node);
    }

    root
}

fn push_node(root: &mut Vec<ContentNode>, stack: &mut [Frame], node: ContentNode) {
    match stack.last_mut() {
        Some(frame) => frame.children.push(node),
        None => root.push(node),
    }
}

fn push_text(root: &mut Vec<ContentNode>, stack: &mut [Frame], text: &str) {
    let target = match stack.last_mut() {
        Some(frame) => &mut frame.children,
        None => root,
    };
    if let Some(ContentNode::Text { text: existing }) = target.last_mut() {
        existing.push_str(text);
    } else {
        target.push(ContentNode::Text {
            text: text.to_string(),
        });
    }
}

fn close_frame(root: &mut Vec<ContentNode>, stack: &mut Vec<Frame>, name: &str) {
    let Some(pos) = stack.iter().rposition(|f| f.tag == name) else {
        // Close tag with no matching open: ignored.
        return;
    };
    while stack.len() > pos {
        let frame = stack.pop().unwrap();
        let node = ContentNode::Block {
            tag: frame.tag,
            children: frame.children,
        };
        push_node(root, stack, node);
    }
}

/// Consume a marker fragment starting at `start` (its open tag) and return
/// the field node plus the index just past the fragment.
///
/// Inner text becomes the display label when the label attribute is absent;
/// UI-only children (the remove affordance) are excluded from it.
fn consume_marker(tokens: &[Token<'_>], start: usize, tag: &Tag) -> (ContentNode, usize) {
    let id = tag.attr(ATTR_FIELD_ID).unwrap_or_default().to_string();
    let kind = tag.attr(ATTR_FIELD_TYPE).and_then(FieldKind::parse);
    let attr_label = tag
        .attr(ATTR_FIELD_LABEL)
        .filter(|l| !l.is_empty())
        .map(str::to_string);

    if tag.self_closing {
        return (
            ContentNode::Field {
                id,
                kind,
                label: attr_label.unwrap_or_default(),
            },
            start + 1,
        );
    }

    let mut inner_text = String::new();
    let mut depth = 1usize;
    let mut i = start + 1;

    while i < tokens.len() && depth > 0 {
        match &tokens[i] {
            Token::Text(text) => {
                inner_text.push_str(text);
                i += 1;
            }
            Token::Entity(entity) => {
                if let Some(c) = decode_entity(entity) {
                    inner_text.push(c);
                }
                i += 1;
            }
            Token::OpenTag(raw) => match parse_open_tag(raw) {
                Some(inner) if is_ui_only(&inner) => {
                    i = skip_subtree(tokens, i, &inner);
                }
                Some(inner) => {
                    if inner.name == tag.name && !inner.self_closing && !is_void_tag(&inner.name) {
                        depth += 1;
                    }
                    i += 1;
                }
                None => {
                    i += 1;
                }
            },
            Token::CloseTag(raw) => {
                if close_tag_name(raw).as_deref() == Some(tag.name.as_str()) {
                    depth -= 1;
                }
                i += 1;
            }
            Token::Comment => {
                i += 1;
            }
        }
    }

    let label = attr_label.unwrap_or_else(|| inner_text.trim().to_string());
    (ContentNode::Field { id, kind, label }, i)
}

/// Skip a subtree rooted at `start` (an open tag), returning the index just
/// past its matching close tag.
fn skip_subtree(tokens: &[Token<'_>], start: usize, tag: &Tag) -> usize {
    if tag.self_closing || is_void_tag(&tag.name) {
        return start + 1;
    }
    let mut depth = 1usize;
    let mut i = start + 1;
    while i < tokens.len() && depth > 0 {
        match &tokens[i] {
            Token::OpenTag(raw) => {
                if let Some(inner) = parse_open_tag(raw) {
                    if inner.name == tag.name && !inner.self_closing && !is_void_tag(&inner.name) {
                        depth += 1;
                    }
                }
            }
            Token::CloseTag(raw) => {
                if close_tag_name(raw).as_deref() == Some(tag.name.as_str()) {
                    depth -= 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    i
}
