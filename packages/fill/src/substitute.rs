//! Marker substitution and `{variable}` resolution.
//!
//! Rendering one section is a single walk over its content tree: text runs
//! get one pass of `{name}` resolution, field markers are replaced by
//! their computed value. Substitution is not re-entrant: a substituted
//! value's own `{...}` text is never re-expanded, because replacements are
//! inserted verbatim into the output rather than re-scanned.

use crate::values::{reconcile_flags, FieldValue, ValueMap};
use formdoc_content::serializer::escape_text;
use formdoc_content::{ContentNode, FieldKind};
use formdoc_model::{ComponentMetadata, Section};
use tracing::debug;

/// Literal rendered for a multi-choice reference with nothing selected.
pub const NONE_SELECTED: &str = "[None selected]";

/// Resolves values against the whole document's components: variable
/// lookups are global, not per-section, so a disabled section's fields
/// still resolve by name.
pub struct Resolver<'a> {
    components: &'a [ComponentMetadata],
    values: &'a ValueMap,
}

impl<'a> Resolver<'a> {
    pub fn new(components: &'a [ComponentMetadata], values: &'a ValueMap) -> Self {
        Self { components, values }
    }

    /// Render one enabled section to rich output. UI-only chrome never
    /// made it into the tree, so there is nothing to strip here.
    pub fn render_section(&self, section: &Section) -> String {
        let mut out = String::new();
        self.render_nodes(&section.content, &mut out);
        out
    }

    fn render_nodes(&self, nodes: &[ContentNode], out: &mut String) {
        for node in nodes {
            match node {
                ContentNode::Text { text } => {
                    out.push_str(&escape_text(&self.resolve_references(text)));
                }
                ContentNode::Break => out.push_str("<br>"),
                ContentNode::Block { tag, children } => {
                    out.push('<');
                    out.push_str(tag);
                    out.push('>');
                    self.render_nodes(children, out);
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
                ContentNode::Field { id, .. } => {
                    match self.components.iter().find(|c| c.id == *id) {
                        Some(component) => out.push_str(&self.marker_replacement(component)),
                        None => {
                            debug!(marker = %id, "dangling marker rendered as nothing");
                        }
                    }
                }
            }
        }
    }

    /// Replacement markup for one marker occurrence.
    fn marker_replacement(&self, component: &ComponentMetadata) -> String {
        let value = self.values.get(component.variable_key());
        match value {
            Some(FieldValue::Flags(flags)) => {
                let options = &component.attributes.options;
                let flags = reconcile_flags(flags, options.len());
                let selected: Vec<String> = options
                    .iter()
                    .zip(flags.iter())
                    .filter(|(_, on)| **on)
                    .map(|(label, _)| escape_text(label))
                    .collect();
                selected.join("<br>")
            }
            Some(FieldValue::List(items)) => {
                let non_empty: Vec<String> = items
                    .iter()
                    .filter(|s| !s.is_empty())
                    .map(|s| escape_text(s))
                    .collect();
                non_empty.join("<br>")
            }
            Some(FieldValue::Text(text)) => {
                // One resolution pass over the scalar value; the result is
                // inserted verbatim and never re-expanded.
                escape_text(&self.resolve_references(text))
            }
            None => String::new(),
        }
    }

    /// Resolve every `{name}` reference in free text, one pass.
    pub fn resolve_references(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            match tail[1..].find(['{', '}']) {
                Some(i) if tail.as_bytes()[1 + i] == b'}' && i > 0 => {
                    let name = &tail[1..1 + i];
                    out.push_str(&self.resolve_one(name));
                    rest = &tail[i + 2..];
                }
                _ => {
                    // unterminated or empty braces stay literal
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn resolve_one(&self, name: &str) -> String {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => text.clone(),
            Some(FieldValue::List(items)) => {
                let non_empty: Vec<&str> = items
                    .iter()
                    .map(String::as_str)
                    .filter(|s| !s.is_empty())
                    .collect();
                non_empty.join(", ")
            }
            Some(FieldValue::Flags(flags)) => self.resolve_flags(name, flags),
            // No value at all: literal placeholder.
            None => format!("[{}]", name),
        }
    }

    /// A flag array referenced by name resolves to the comma-joined labels
    /// of its selected options, found by matching the variable name across
    /// the whole document's components.
    fn resolve_flags(&self, name: &str, flags: &[bool]) -> String {
        let component = self
            .components
            .iter()
            .find(|c| c.variable_key() == name && c.kind == FieldKind::MultiChoice);

        let selected: Vec<&str> = match component {
            Some(component) => {
                let options = &component.attributes.options;
                let flags = reconcile_flags(flags, options.len());
                options
                    .iter()
                    .map(String::as_str)
                    .zip(flags)
                    .filter(|(_, on)| *on)
                    .map(|(label, _)| label)
                    .collect()
            }
            None => Vec::new(),
        };

        if selected.is_empty() {
            NONE_SELECTED.to_string()
        } else {
            selected.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::initial_values;
    use formdoc_content::parse;

    fn multi_choice() -> ComponentMetadata {
        ComponentMetadata::new("f-colors", FieldKind::MultiChoice, "Colors")
            .with_variable_name("colors")
            .with_options(vec!["Red".into(), "Green".into(), "Blue".into()])
    }

    fn section_with(blob: &str) -> Section {
        let mut section = Section::new("s-1", "S");
        section.content = parse(blob);
        section
    }

    #[test]
    fn test_multi_choice_marker_renders_line_broken() {
        let components = vec![multi_choice()];
        let mut values = initial_values(&components);
        values.insert("colors".into(), FieldValue::Flags(vec![true, false, true]));

        let resolver = Resolver::new(&components, &values);
        let section = section_with(&components[0].marker());
        assert_eq!(resolver.render_section(&section), "Red<br>Blue");
    }

    #[test]
    fn test_multi_choice_reference_renders_comma_joined() {
        let components = vec![multi_choice()];
        let mut values = initial_values(&components);
        values.insert("colors".into(), FieldValue::Flags(vec![true, false, true]));

        let resolver = Resolver::new(&components, &values);
        let section = section_with("<p>We chose {colors}.</p>");
        assert_eq!(
            resolver.render_section(&section),
            "<p>We chose Red, Blue.</p>"
        );
    }

    #[test]
    fn test_multi_choice_nothing_selected() {
        let components = vec![multi_choice()];
        let values = initial_values(&components);
        let resolver = Resolver::new(&components, &values);

        let marker_section = section_with(&components[0].marker());
        assert_eq!(resolver.render_section(&marker_section), "");

        let reference_section = section_with("{colors}");
        assert_eq!(resolver.render_section(&reference_section), NONE_SELECTED);
    }

    #[test]
    fn test_missing_variable_renders_bracketed_placeholder() {
        let components = Vec::new();
        let values = ValueMap::new();
        let resolver = Resolver::new(&components, &values);
        assert_eq!(
            resolver.resolve_references("Hello {unknownVar}!"),
            "Hello [unknownVar]!"
        );
    }

    #[test]
    fn test_scalar_value_gets_one_resolution_pass_only() {
        let components = vec![
            ComponentMetadata::new("f-greet", FieldKind::SingleLineText, "Greeting")
                .with_variable_name("greeting"),
        ];
        let mut values = initial_values(&components);
        values.insert("greeting".into(), FieldValue::text("Dear {name}"));
        values.insert("name".into(), FieldValue::text("{greeting}"));

        let resolver = Resolver::new(&components, &values);
        let section = section_with(&components[0].marker());
        // {name} inside the scalar resolves once; the substituted
        // "{greeting}" is not expanded again
        assert_eq!(resolver.render_section(&section), "Dear {greeting}");
    }

    #[test]
    fn test_list_marker_skips_empty_entries() {
        let components = vec![
            ComponentMetadata::new("f-lines", FieldKind::SingleLineText, "Lines")
                .with_variable_name("lines"),
        ];
        let mut values = ValueMap::new();
        values.insert(
            "lines".into(),
            FieldValue::List(vec!["one".into(), String::new(), "two".into()]),
        );

        let resolver = Resolver::new(&components, &values);
        let section = section_with(&components[0].marker());
        assert_eq!(resolver.render_section(&section), "one<br>two");
    }

    #[test]
    fn test_unterminated_brace_stays_literal() {
        let values = ValueMap::new();
        let resolver = Resolver::new(&[], &values);
        assert_eq!(resolver.resolve_references("a { b"), "a { b");
        assert_eq!(resolver.resolve_references("{}"), "{}");
    }

    #[test]
    fn test_dangling_marker_renders_as_nothing() {
        let values = ValueMap::new();
        let resolver = Resolver::new(&[], &values);
        let section = section_with(r#"<p>x<span data-field-id="ghost">g</span>y</p>"#);
        assert_eq!(resolver.render_section(&section), "<p>xy</p>");
    }

    #[test]
    fn test_flags_reconciled_when_options_changed() {
        // Value recorded against 4 options, component now has 3.
        let components = vec![multi_choice()];
        let mut values = ValueMap::new();
        values.insert(
            "colors".into(),
            FieldValue::Flags(vec![true, false, true, true]),
        );

        let resolver = Resolver::new(&components, &values);
        let section = section_with(&components[0].marker());
        assert_eq!(resolver.render_section(&section), "Red<br>Blue");
    }
}
