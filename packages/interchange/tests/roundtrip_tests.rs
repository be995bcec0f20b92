//! Round-trip property: import(export(D)) preserves sections and the
//! canonical visible-component list.

use formdoc_interchange::{export, import, to_json_string};
use formdoc_model::{ComponentMetadata, Document, FieldKind, Mutation};

fn sample_document() -> Document {
    let mut doc = Document::new("roundtrip");
    let first = doc.sections[0].id.clone();
    doc.apply(Mutation::SetSectionTitle {
        section_id: first.clone(),
        title: "Greeting".to_string(),
    })
    .unwrap();
    doc.apply(Mutation::InsertComponent {
        section_id: first.clone(),
        component: ComponentMetadata::new("f-name", FieldKind::SingleLineText, "Name")
            .with_variable_name("name"),
    })
    .unwrap();

    doc.apply(Mutation::AddSection {
        title: "Details".to_string(),
    })
    .unwrap();
    let second = doc.sections[1].id.clone();
    doc.apply(Mutation::InsertComponent {
        section_id: second.clone(),
        component: ComponentMetadata::new("f-toppings", FieldKind::MultiChoice, "Toppings")
            .with_options(vec!["Red".into(), "Green".into(), "Blue".into()]),
    })
    .unwrap();
    doc.apply(Mutation::SetSectionEnabled {
        section_id: second,
        enabled: false,
    })
    .unwrap();

    // orphaned entry: must not survive the trip
    doc.store
        .upsert(ComponentMetadata::new("f-orphan", FieldKind::SingleChoice, "Orphan"));

    doc
}

#[test]
fn test_round_trip_preserves_sections_and_canonical_components() {
    let original = sample_document();
    let json = to_json_string(&export(&original)).unwrap();
    let restored = import(&json, "roundtrip").unwrap();

    assert_eq!(restored.sections.len(), original.sections.len());
    for (a, b) in original.sections.iter().zip(restored.sections.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.title, b.title);
        assert_eq!(a.enabled, b.enabled);
        assert_eq!(a.content_blob(), b.content_blob());
    }

    let original_visible: Vec<_> = original.visible_components().into_iter().cloned().collect();
    let restored_visible: Vec<_> = restored.visible_components().into_iter().cloned().collect();
    assert_eq!(original_visible, restored_visible);

    // the orphan stayed behind
    assert!(!restored.store.contains("f-orphan"));
}

#[test]
fn test_second_trip_is_fixpoint() {
    let original = sample_document();
    let once = import(&to_json_string(&export(&original)).unwrap(), "roundtrip").unwrap();
    let twice = import(&to_json_string(&export(&once)).unwrap(), "roundtrip").unwrap();

    assert_eq!(export(&once), export(&twice));
}
