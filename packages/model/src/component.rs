use formdoc_content::{encode_marker, FieldKind};
use serde::{Deserialize, Serialize};

/// Default options backfilled for a single-choice field that arrives with
/// no usable options list.
pub const DEFAULT_SINGLE_CHOICE_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// Default options backfilled for a multi-choice field.
pub const DEFAULT_MULTI_CHOICE_OPTIONS: [&str; 3] = ["Choice 1", "Choice 2", "Choice 3"];

/// Field attributes beyond type and label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldAttributes {
    /// Optional alias for `{name}` references; empty means "use the id".
    #[serde(rename = "variableName", default)]
    pub variable_name: String,

    /// Ordered options for choice kinds. Order is semantically meaningful
    /// (multi-choice values are flag arrays indexed by position).
    #[serde(default)]
    pub options: Vec<String>,
}

/// A typed, labeled field definition, stored independently of where its
/// marker is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: FieldKind,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub attributes: FieldAttributes,
}

impl ComponentMetadata {
    pub fn new(id: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        let mut component = Self {
            id: id.into(),
            kind,
            label: label.into(),
            attributes: FieldAttributes::default(),
        };
        canonicalize(&mut component);
        component
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.attributes.options = options;
        canonicalize(&mut self);
        self
    }

    pub fn with_variable_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.variable_name = name.into();
        self
    }

    /// The key this component's value is stored and referenced under:
    /// the variable name, falling back to the id.
    pub fn variable_key(&self) -> &str {
        if self.attributes.variable_name.is_empty() {
            &self.id
        } else {
            &self.attributes.variable_name
        }
    }

    /// Canonical marker fragment for this component.
    pub fn marker(&self) -> String {
        encode_marker(&self.id, Some(self.kind), &self.label)
    }
}

/// Enforce the component shape invariant in exactly one place: a choice
/// component always carries a non-empty options list. Invoked at every
/// mutation boundary (store insert/update, import).
pub fn canonicalize(component: &mut ComponentMetadata) {
    if component.kind.has_options() && component.attributes.options.is_empty() {
        component.attributes.options = default_options(component.kind);
    }
    if !component.kind.has_options() {
        component.attributes.options.clear();
    }
}

/// Type-specific placeholder options, distinct per choice kind.
pub fn default_options(kind: FieldKind) -> Vec<String> {
    let defaults: &[&str] = match kind {
        FieldKind::SingleChoice => &DEFAULT_SINGLE_CHOICE_OPTIONS,
        FieldKind::MultiChoice => &DEFAULT_MULTI_CHOICE_OPTIONS,
        FieldKind::SingleLineText => &[],
    };
    defaults.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_component_gets_default_options() {
        let component = ComponentMetadata::new("f-1", FieldKind::SingleChoice, "Size");
        assert_eq!(
            component.attributes.options,
            vec!["Option 1", "Option 2", "Option 3"]
        );

        let component = ComponentMetadata::new("f-2", FieldKind::MultiChoice, "Extras");
        assert_eq!(
            component.attributes.options,
            vec!["Choice 1", "Choice 2", "Choice 3"]
        );
    }

    #[test]
    fn test_text_component_has_no_options() {
        let component = ComponentMetadata::new("f-1", FieldKind::SingleLineText, "Name")
            .with_options(vec!["stray".to_string()]);
        assert!(component.attributes.options.is_empty());
    }

    #[test]
    fn test_variable_key_falls_back_to_id() {
        let component = ComponentMetadata::new("f-1", FieldKind::SingleLineText, "Name");
        assert_eq!(component.variable_key(), "f-1");

        let component = component.with_variable_name("customer");
        assert_eq!(component.variable_key(), "customer");
    }

    #[test]
    fn test_explicit_options_preserved() {
        let component = ComponentMetadata::new("f-1", FieldKind::SingleChoice, "Size")
            .with_options(vec!["S".to_string(), "M".to_string()]);
        assert_eq!(component.attributes.options, vec!["S", "M"]);
    }
}
