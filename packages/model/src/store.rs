use crate::component::{canonicalize, ComponentMetadata};
use formdoc_content::{FieldInfo, FieldLookup};
use serde::{Deserialize, Serialize};

/// Sole source of truth for field definitions.
///
/// Owned by the document session that created it, never a process-wide
/// singleton, so independent documents (and tests) don't share state.
/// Entries may be orphaned: a component whose marker the author deleted
/// stays here until explicitly removed, and that is not an error.
///
/// Backed by a Vec to keep insertion order deterministic; stores are small
/// (a document has tens of fields, not thousands).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentStore {
    components: Vec<ComponentMetadata>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by id. The component is canonicalized on the way
    /// in; this is the only write path.
    pub fn upsert(&mut self, mut component: ComponentMetadata) {
        canonicalize(&mut component);
        match self.components.iter_mut().find(|c| c.id == component.id) {
            Some(existing) => *existing = component,
            None => self.components.push(component),
        }
    }

    /// Remove by id; returns the removed entry if it existed.
    pub fn remove(&mut self, id: &str) -> Option<ComponentMetadata> {
        let pos = self.components.iter().position(|c| c.id == id)?;
        Some(self.components.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&ComponentMetadata> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Find a component by the key its value is referenced under.
    pub fn get_by_variable(&self, name: &str) -> Option<&ComponentMetadata> {
        self.components.iter().find(|c| c.variable_key() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentMetadata> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl FieldLookup for ComponentStore {
    fn field_info(&self, id: &str) -> Option<FieldInfo> {
        self.get(id).map(|c| FieldInfo {
            kind: c.kind,
            label: c.label.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdoc_content::FieldKind;

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut store = ComponentStore::new();
        store.upsert(ComponentMetadata::new("f-1", FieldKind::SingleLineText, "Old"));
        store.upsert(ComponentMetadata::new("f-1", FieldKind::SingleLineText, "New"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("f-1").unwrap().label, "New");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = ComponentStore::new();
        for id in ["c", "a", "b"] {
            store.upsert(ComponentMetadata::new(id, FieldKind::SingleLineText, id));
        }
        let ids: Vec<_> = store.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_upsert_canonicalizes() {
        let mut store = ComponentStore::new();
        let mut raw = ComponentMetadata::new("f-1", FieldKind::SingleLineText, "x");
        raw.kind = FieldKind::MultiChoice;
        raw.attributes.options.clear();
        store.upsert(raw);

        assert_eq!(store.get("f-1").unwrap().attributes.options.len(), 3);
    }

    #[test]
    fn test_field_lookup_seam() {
        let mut store = ComponentStore::new();
        store.upsert(ComponentMetadata::new("f-1", FieldKind::SingleChoice, "Size"));

        let info = store.field_info("f-1").unwrap();
        assert_eq!(info.kind, FieldKind::SingleChoice);
        assert_eq!(info.label, "Size");
        assert!(store.field_info("missing").is_none());
    }
}
