//! End-to-end fill properties over real documents.

use formdoc_fill::{flatten_sections, FieldValue, FillSession, NONE_SELECTED};
use formdoc_model::{ComponentMetadata, Document, FieldKind, Mutation};

/// Two sections: the first references `{colors}` in prose, the component
/// defining `colors` lives in the second.
fn two_section_document() -> Document {
    let mut doc = Document::new("letter");
    let first = doc.sections[0].id.clone();
    doc.apply(Mutation::SetSectionContent {
        section_id: first,
        blob: "<p>Chosen colors: {colors}</p>".to_string(),
    })
    .unwrap();

    doc.apply(Mutation::AddSection {
        title: "Palette".to_string(),
    })
    .unwrap();
    let second = doc.sections[1].id.clone();
    doc.apply(Mutation::InsertComponent {
        section_id: second,
        component: ComponentMetadata::new("f-colors", FieldKind::MultiChoice, "Colors")
            .with_variable_name("colors")
            .with_options(vec!["Red".into(), "Green".into(), "Blue".into()]),
    })
    .unwrap();
    doc
}

#[test]
fn test_disabled_section_excluded_but_its_variables_resolve() {
    let doc = two_section_document();
    let second_id = doc.sections[1].id.clone();

    let mut session = FillSession::new(doc.snapshot());
    session.set_value("colors", FieldValue::Flags(vec![true, false, true]));

    // disable the section that defines the component
    session.set_section_enabled(&second_id, false);

    let preview = session.generate_preview();
    assert_eq!(preview, "<p>Chosen colors: Red, Blue</p>");
}

#[test]
fn test_enabled_sections_concatenate_in_order() {
    let mut session = FillSession::new(two_section_document().snapshot());
    session.set_value("colors", FieldValue::Flags(vec![false, true, false]));

    let preview = session.generate_preview();
    assert!(preview.starts_with("<p>Chosen colors: Green</p>"));
    assert!(preview.contains("Green<br>") || preview.ends_with("Green"));
}

#[test]
fn test_marker_and_reference_render_differently() {
    // Marker substitution uses line breaks, reference substitution commas.
    let mut doc = Document::new("letter");
    let first = doc.sections[0].id.clone();
    doc.apply(Mutation::InsertComponent {
        section_id: first.clone(),
        component: ComponentMetadata::new("f-colors", FieldKind::MultiChoice, "Colors")
            .with_variable_name("colors")
            .with_options(vec!["Red".into(), "Green".into(), "Blue".into()]),
    })
    .unwrap();

    let mut session = FillSession::new(doc.snapshot());
    session.set_value("colors", FieldValue::Flags(vec![true, false, true]));
    assert_eq!(session.generate_preview(), "Red<br>Blue");
}

#[test]
fn test_unselected_multi_choice_reference_renders_none_selected() {
    let mut session = FillSession::new(two_section_document().snapshot());
    let preview = session.generate_preview();
    assert!(preview.contains(&format!("Chosen colors: {}", NONE_SELECTED)));
}

#[test]
fn test_missing_variable_placeholder_in_full_pipeline() {
    let mut doc = Document::new("letter");
    let first = doc.sections[0].id.clone();
    doc.apply(Mutation::SetSectionContent {
        section_id: first,
        blob: "<p>Hello {unknownVar}</p>".to_string(),
    })
    .unwrap();

    let mut session = FillSession::new(doc.snapshot());
    assert_eq!(session.generate_preview(), "<p>Hello [unknownVar]</p>");
}

#[test]
fn test_preview_flattens_to_copy_ready_text() {
    let mut session = FillSession::new(two_section_document().snapshot());
    session.set_value("colors", FieldValue::Flags(vec![true, true, false]));

    session.generate_preview();
    let text = flatten_sections(&session.rendered_blocks());
    assert_eq!(text, "Chosen colors: Red, Green\n\nRed\nGreen");
}

#[test]
fn test_fill_session_does_not_mutate_document() {
    let doc = two_section_document();
    let before = doc.snapshot();

    let mut session = FillSession::new(doc.snapshot());
    session.set_value("colors", FieldValue::Flags(vec![true, true, true]));
    let second_id = doc.sections[1].id.clone();
    session.set_section_enabled(&second_id, false);
    session.generate_preview();

    assert_eq!(doc.snapshot(), before);
}
