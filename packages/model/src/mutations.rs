//! Document mutations.
//!
//! High-level semantic operations on a formdoc document. Each mutation
//! validates its structural constraints before touching anything, so a
//! failed mutation leaves the document unchanged.

use crate::component::ComponentMetadata;
use crate::document::Document;
use crate::errors::{ModelError, ModelResult};
use crate::section::Section;
use formdoc_content::ContentNode;
use serde::{Deserialize, Serialize};

/// Semantic mutations (intent-preserving operations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Append a new empty, enabled section.
    AddSection { title: String },

    /// Remove a section. Removing the last remaining section is rejected.
    RemoveSection { section_id: String },

    SetSectionTitle {
        section_id: String,
        title: String,
    },

    /// Replace a section's content from its blob form (the editing
    /// surface's change notification).
    SetSectionContent {
        section_id: String,
        blob: String,
    },

    SetSectionEnabled {
        section_id: String,
        enabled: bool,
    },

    /// Create or update a component definition in the store.
    UpsertComponent { component: ComponentMetadata },

    /// Create/update a component and append its marker to a section.
    InsertComponent {
        section_id: String,
        component: ComponentMetadata,
    },

    /// Delete a component: store entry and every marker referencing it.
    RemoveComponent { component_id: String },
}

impl Mutation {
    /// Validate without applying.
    pub fn validate(&self, doc: &Document) -> ModelResult<()> {
        match self {
            Mutation::AddSection { .. } | Mutation::UpsertComponent { .. } => Ok(()),

            Mutation::RemoveSection { section_id } => {
                if doc.section(section_id).is_none() {
                    return Err(ModelError::SectionNotFound(section_id.clone()));
                }
                if doc.sections.len() <= 1 {
                    return Err(ModelError::LastSection);
                }
                Ok(())
            }

            Mutation::SetSectionTitle { section_id, .. }
            | Mutation::SetSectionContent { section_id, .. }
            | Mutation::SetSectionEnabled { section_id, .. }
            | Mutation::InsertComponent { section_id, .. } => doc
                .section(section_id)
                .map(|_| ())
                .ok_or_else(|| ModelError::SectionNotFound(section_id.clone())),

            Mutation::RemoveComponent { component_id } => {
                if doc.store.contains(component_id) {
                    Ok(())
                } else {
                    Err(ModelError::ComponentNotFound(component_id.clone()))
                }
            }
        }
    }

    /// Apply mutation with validation.
    pub fn apply(&self, doc: &mut Document) -> ModelResult<()> {
        self.validate(doc)?;

        match self {
            Mutation::AddSection { title } => {
                let id = doc.next_id("section");
                doc.sections.push(Section::new(id, title.clone()));
            }

            Mutation::RemoveSection { section_id } => {
                doc.sections.retain(|s| s.id != *section_id);
            }

            Mutation::SetSectionTitle { section_id, title } => {
                let section = doc.section_mut(section_id).expect("validated");
                section.title = title.clone();
            }

            Mutation::SetSectionContent { section_id, blob } => {
                let section = doc.section_mut(section_id).expect("validated");
                section.set_content_blob(blob);
            }

            Mutation::SetSectionEnabled {
                section_id,
                enabled,
            } => {
                let section = doc.section_mut(section_id).expect("validated");
                section.enabled = *enabled;
            }

            Mutation::UpsertComponent { component } => {
                doc.store.upsert(component.clone());
            }

            Mutation::InsertComponent {
                section_id,
                component,
            } => {
                doc.store.upsert(component.clone());
                let stored = doc.store.get(&component.id).expect("just upserted").clone();
                let section = doc.section_mut(section_id).expect("validated");
                section.content.push(ContentNode::Field {
                    id: stored.id.clone(),
                    kind: Some(stored.kind),
                    label: stored.label.clone(),
                });
            }

            Mutation::RemoveComponent { component_id } => {
                doc.store.remove(component_id);
                for section in &mut doc.sections {
                    strip_markers(&mut section.content, component_id);
                }
            }
        }

        doc.bump_revision();
        Ok(())
    }
}

/// Remove every marker for `id` from a tree, at any depth.
fn strip_markers(nodes: &mut Vec<ContentNode>, id: &str) {
    nodes.retain_mut(|node| match node {
        ContentNode::Field { id: node_id, .. } => node_id != id,
        ContentNode::Block { children, .. } => {
            strip_markers(children, id);
            true
        }
        _ => true,
    });
}
