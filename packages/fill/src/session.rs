//! Fill session state machine.
//!
//! ```text
//!        generate_preview()
//! Filling ──────────────────▶ Preview
//!    ▲                           │
//!    └───── back_to_filling ─────┘
//! ```
//!
//! Returning to Filling re-shows the values entered so far; nothing is
//! reset until the session is dropped.
//!
//! ## Determinism contract
//!
//! `generate_preview` is a pure function of (snapshot, enablement, values):
//! calling it twice without an intervening `set_value` or
//! `set_section_enabled` yields byte-identical output. Value maps are
//! BTreeMaps and the snapshot is immutable for the session's lifetime, so
//! no iteration-order or shared-state effects can leak in.

use crate::substitute::Resolver;
use crate::values::{initial_values, reconcile_flags, FieldValue, ValueMap};
use formdoc_model::{ComponentMetadata, DocumentSnapshot, FieldKind};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillState {
    Filling,
    Preview,
}

/// One fill-and-preview session over a document snapshot.
pub struct FillSession {
    snapshot: DocumentSnapshot,
    enabled: BTreeMap<String, bool>,
    values: ValueMap,
    state: FillState,
}

impl FillSession {
    /// Start filling: visible components are computed from the snapshot
    /// and every field gets its initial value.
    pub fn new(snapshot: DocumentSnapshot) -> Self {
        let values = initial_values(&snapshot.components);
        let enabled = snapshot
            .sections
            .iter()
            .map(|s| (s.id.clone(), s.enabled))
            .collect();
        Self {
            snapshot,
            enabled,
            values,
            state: FillState::Filling,
        }
    }

    pub fn state(&self) -> FillState {
        self.state
    }

    /// The fields to present, in canonical document order.
    pub fn components(&self) -> &[ComponentMetadata] {
        &self.snapshot.components
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Record a user-entered value. Multi-choice flag arrays are
    /// reconciled to the current option count by position.
    pub fn set_value(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        let value = match value {
            FieldValue::Flags(flags) => {
                let option_count = self
                    .snapshot
                    .components
                    .iter()
                    .find(|c| c.variable_key() == name && c.kind == FieldKind::MultiChoice)
                    .map(|c| c.attributes.options.len())
                    .unwrap_or(flags.len());
                FieldValue::Flags(reconcile_flags(&flags, option_count))
            }
            other => other,
        };
        self.values.insert(name, value);
    }

    /// Toggle a section for this fill only; the document itself is not
    /// mutated.
    pub fn set_section_enabled(&mut self, section_id: &str, enabled: bool) {
        if let Some(flag) = self.enabled.get_mut(section_id) {
            *flag = enabled;
        } else {
            debug!(section = %section_id, "enablement toggle for unknown section ignored");
        }
    }

    fn is_enabled(&self, section_id: &str) -> bool {
        self.enabled.get(section_id).copied().unwrap_or(true)
    }

    /// Render the preview and transition to Preview.
    ///
    /// Disabled sections contribute nothing to the output, but variables
    /// defined by their components still resolve: values live globally in
    /// the session, not per section.
    pub fn generate_preview(&mut self) -> String {
        self.state = FillState::Preview;
        self.rendered_blocks().concat()
    }

    /// Per-section rendered blocks for enabled sections, in section order.
    pub fn rendered_blocks(&self) -> Vec<String> {
        let resolver = Resolver::new(&self.snapshot.components, &self.values);
        self.snapshot
            .sections
            .iter()
            .filter(|s| self.is_enabled(&s.id))
            .map(|s| resolver.render_section(s))
            .collect()
    }

    /// Preview → Filling. No recomputation; values are retained.
    pub fn back_to_filling(&mut self) {
        self.state = FillState::Filling;
    }
}
