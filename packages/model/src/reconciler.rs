//! Order reconciler.
//!
//! Computes which fields are actually presentable right now, and in what
//! order. The store and the content trees are allowed to disagree in both
//! directions:
//!
//! - **Orphaned store entry**: the author deleted a marker directly; the
//!   component stays in the store but must not leak into exports or fill
//!   forms.
//! - **Dangling marker**: content references an id with no backing
//!   metadata; it is simply invisible, never an error.
//!
//! Both gaps are logged at debug level for diagnostics and otherwise
//! silently tolerated. Both functions here are pure: unchanged inputs
//! yield identical ordered output on every call.

use crate::component::ComponentMetadata;
use crate::section::Section;
use crate::store::ComponentStore;
use formdoc_content::scan;
use tracing::debug;

/// Ordered, deduplicated metadata for the components visible in one
/// section's content. Order is marker position, never store order.
pub fn visible_components<'a>(
    section: &Section,
    store: &'a ComponentStore,
) -> Vec<&'a ComponentMetadata> {
    let mut seen: Vec<&str> = Vec::new();
    let mut visible = Vec::new();

    for id in scan(&section.content) {
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        match store.get(id) {
            Some(component) => visible.push(component),
            None => {
                debug!(section = %section.id, marker = %id, "dangling marker has no store entry");
            }
        }
    }

    visible
}

/// Canonical ordering across the whole document: per-section results
/// concatenated in section order, first occurrence wins across sections.
/// This is the ordering used for export and for fill-form rendering.
pub fn visible_components_all<'a>(
    sections: &[Section],
    store: &'a ComponentStore,
) -> Vec<&'a ComponentMetadata> {
    let mut visible: Vec<&'a ComponentMetadata> = Vec::new();
    for section in sections {
        for component in visible_components(section, store) {
            if !visible.iter().any(|c| c.id == component.id) {
                visible.push(component);
            }
        }
    }

    for component in store.iter() {
        if !visible.iter().any(|c| c.id == component.id) {
            debug!(component = %component.id, "orphaned store entry has no marker");
        }
    }

    visible
}
