//! Clipboard flattener.
//!
//! Best-effort structural projection of rendered rich content into plain
//! text: block boundaries and explicit breaks become newlines, section
//! blocks are separated by a blank line, and runs of three or more
//! newlines collapse to exactly two. Not a layout engine.

use formdoc_content::{is_block_tag, parse, ContentNode};

/// Flatten one rendered block to plain text.
pub fn flatten(rendered: &str) -> String {
    let tree = parse(rendered);
    let mut out = String::new();
    flatten_nodes(&tree, &mut out);
    collapse_newlines(out.trim_matches('\n'))
}

/// Flatten per-section blocks and join them with a blank line.
pub fn flatten_sections(blocks: &[String]) -> String {
    let flattened: Vec<String> = blocks
        .iter()
        .map(|b| flatten(b))
        .filter(|t| !t.is_empty())
        .collect();
    collapse_newlines(&flattened.join("\n\n"))
}

fn flatten_nodes(nodes: &[ContentNode], out: &mut String) {
    for node in nodes {
        match node {
            ContentNode::Text { text } => out.push_str(text),
            ContentNode::Break => out.push('\n'),
            ContentNode::Field { label, .. } => {
                // Rendered output has no markers left; raw content might.
                // The label is the only sensible text projection.
                out.push_str(label);
            }
            ContentNode::Block { tag, children } => {
                let block = is_block_tag(tag);
                if block && !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                flatten_nodes(children, out);
                // every block closes a line, so empty paragraphs still
                // separate their neighbors (collapse caps the run at two)
                if block {
                    out.push('\n');
                }
            }
        }
    }
}

/// Collapse three-or-more consecutive newlines to exactly two.
fn collapse_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run <= 2 {
                out.push('\n');
            }
        } else {
            run = 0;
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_lines() {
        assert_eq!(flatten("<p>one</p><p>two</p>"), "one\ntwo");
    }

    #[test]
    fn test_breaks_and_list_items() {
        assert_eq!(flatten("a<br>b"), "a\nb");
        assert_eq!(
            flatten("<ul><li>first</li><li>second</li></ul>"),
            "first\nsecond"
        );
    }

    #[test]
    fn test_inline_tags_do_not_break_lines() {
        assert_eq!(flatten("<p>a <b>bold</b> word</p>"), "a bold word");
    }

    #[test]
    fn test_newline_runs_collapse_to_two() {
        assert_eq!(flatten("<p>a</p><p></p><p></p><p>b</p>"), "a\n\nb");
        assert_eq!(collapse_newlines("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_sections_joined_with_blank_line() {
        let blocks = vec!["<p>alpha</p>".to_string(), "<p>beta</p>".to_string()];
        assert_eq!(flatten_sections(&blocks), "alpha\n\nbeta");
    }

    #[test]
    fn test_empty_sections_skipped() {
        let blocks = vec![
            "<p>alpha</p>".to_string(),
            String::new(),
            "<p>beta</p>".to_string(),
        ];
        assert_eq!(flatten_sections(&blocks), "alpha\n\nbeta");
    }

    #[test]
    fn test_remove_affordance_never_reaches_text() {
        let rendered = r#"<p>before<span data-ui-only="true" class="field-remove">x</span>after</p>"#;
        assert_eq!(flatten(rendered), "beforeafter");
    }
}
