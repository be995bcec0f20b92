use formdoc_model::{ComponentMetadata, FieldKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user-supplied value for one field, keyed by variable name (falling
/// back to the component id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Scalar text (single-line-text, single-choice).
    Text(String),

    /// One flag per option, by position (multi-choice).
    Flags(Vec<bool>),

    /// Free-form list of strings.
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }
}

/// Value map keyed by variable name. BTreeMap keeps iteration order
/// deterministic for preview purity.
pub type ValueMap = BTreeMap<String, FieldValue>;

/// Initial value for one component: text fields start empty, single-choice
/// starts on its first option, multi-choice starts all-unselected.
pub fn initial_value(component: &ComponentMetadata) -> FieldValue {
    match component.kind {
        FieldKind::SingleLineText => FieldValue::Text(String::new()),
        FieldKind::SingleChoice => FieldValue::Text(
            component
                .attributes
                .options
                .first()
                .cloned()
                .unwrap_or_default(),
        ),
        FieldKind::MultiChoice => {
            FieldValue::Flags(vec![false; component.attributes.options.len()])
        }
    }
}

/// (Re)initialize values for the currently visible components.
pub fn initial_values(components: &[ComponentMetadata]) -> ValueMap {
    components
        .iter()
        .map(|c| (c.variable_key().to_string(), initial_value(c)))
        .collect()
}

/// Reconcile a flag array against the current option count: pad with
/// `false`, truncate extras. Options edited after values exist keep their
/// selections by position.
pub fn reconcile_flags(flags: &[bool], option_count: usize) -> Vec<bool> {
    let mut out = flags.to_vec();
    out.resize(option_count, false);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi(options: &[&str]) -> ComponentMetadata {
        ComponentMetadata::new("f-1", FieldKind::MultiChoice, "M")
            .with_options(options.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_initial_values_by_kind() {
        let text = ComponentMetadata::new("t", FieldKind::SingleLineText, "T");
        assert_eq!(initial_value(&text), FieldValue::Text(String::new()));

        let single = ComponentMetadata::new("s", FieldKind::SingleChoice, "S")
            .with_options(vec!["Small".into(), "Large".into()]);
        assert_eq!(initial_value(&single), FieldValue::Text("Small".into()));

        let multi = multi(&["a", "b", "c"]);
        assert_eq!(initial_value(&multi), FieldValue::Flags(vec![false; 3]));
    }

    #[test]
    fn test_reconcile_pads_and_truncates_by_position() {
        assert_eq!(
            reconcile_flags(&[true, false], 4),
            vec![true, false, false, false]
        );
        assert_eq!(reconcile_flags(&[true, false, true, true], 2), vec![true, false]);
        assert_eq!(reconcile_flags(&[], 0), Vec::<bool>::new());
    }

    #[test]
    fn test_values_keyed_by_variable_name_with_id_fallback() {
        let named = ComponentMetadata::new("f-1", FieldKind::SingleLineText, "N")
            .with_variable_name("customer");
        let anonymous = ComponentMetadata::new("f-2", FieldKind::SingleLineText, "A");

        let values = initial_values(&[named, anonymous]);
        assert!(values.contains_key("customer"));
        assert!(values.contains_key("f-2"));
    }

    #[test]
    fn test_field_value_json_shapes() {
        let text: FieldValue = serde_json::from_str(r#""hello""#).unwrap();
        assert_eq!(text, FieldValue::Text("hello".into()));

        let flags: FieldValue = serde_json::from_str("[true,false]").unwrap();
        assert_eq!(flags, FieldValue::Flags(vec![true, false]));

        let list: FieldValue = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(list, FieldValue::List(vec!["a".into(), "b".into()]));
    }
}
