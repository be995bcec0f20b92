//! # Document Handle
//!
//! The aggregate a fill session, export, or host embeds: ordered sections
//! plus the component store, with a monotonically increasing revision.
//!
//! ## Lifecycle
//!
//! ```text
//! New / Import → Edit (mutations) → Snapshot → Fill / Export
//!      ↓              ↓                ↓            ↓
//!   sections      revision++      pure views    rendered text / JSON
//! ```

use crate::component::ComponentMetadata;
use crate::errors::ModelResult;
use crate::mutations::Mutation;
use crate::reconciler::visible_components_all;
use crate::section::Section;
use crate::store::ComponentStore;
use formdoc_content::{repair, IdGenerator};

/// An editable formdoc document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Human name; seeds id generation.
    pub name: String,

    /// Authorial order. Never empty.
    pub sections: Vec<Section>,

    /// Sole owner of component metadata. May hold orphaned entries.
    pub store: ComponentStore,

    /// Increments on each successful mutation.
    pub revision: u64,

    ids: IdGenerator,
}

/// Read-only view handed to fill sessions and host embedders.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub sections: Vec<Section>,
    /// Canonical visible-component list (document order, deduplicated).
    pub components: Vec<ComponentMetadata>,
}

impl Document {
    /// New document with the mandatory single empty section.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut ids = IdGenerator::new(&name);
        let first = Section::new(ids.next_id("section"), String::new());
        Self {
            name,
            sections: vec![first],
            store: ComponentStore::new(),
            revision: 0,
            ids,
        }
    }

    /// Assemble a document from imported parts. Guarantees the at-least-one
    /// -section invariant and repairs every section's markers against the
    /// store so fragments from a foreign serialization context render.
    pub fn from_parts(
        name: impl Into<String>,
        mut sections: Vec<Section>,
        store: ComponentStore,
    ) -> Self {
        let name = name.into();
        let mut ids = IdGenerator::new(&name);

        if sections.is_empty() {
            sections.push(Section::new(ids.next_id("section"), String::new()));
        }
        for section in &mut sections {
            repair(&mut section.content, &store);
        }

        Self {
            name,
            sections,
            store,
            revision: 0,
            ids,
        }
    }

    pub fn apply(&mut self, mutation: Mutation) -> ModelResult<()> {
        mutation.apply(self)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    /// Canonical visible components across the whole document.
    pub fn visible_components(&self) -> Vec<&ComponentMetadata> {
        visible_components_all(&self.sections, &self.store)
    }

    /// Live state for external consumers. Cloned so the caller sees a
    /// consistent view regardless of later mutations.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            sections: self.sections.clone(),
            components: self.visible_components().into_iter().cloned().collect(),
        }
    }

    /// Re-run marker repair across every section. Idempotent; returns
    /// whether any content changed, so a caller retrying a raced injection
    /// can detect "no effective change".
    pub fn repair_content(&mut self) -> bool {
        let mut changed = false;
        for section in &mut self.sections {
            changed |= repair(&mut section.content, &self.store);
        }
        if changed {
            self.revision += 1;
        }
        changed
    }

    pub(crate) fn next_id(&mut self, prefix: &str) -> String {
        self.ids.next_id(prefix)
    }

    pub(crate) fn bump_revision(&mut self) {
        self.revision += 1;
    }
}
