//! # Formdoc Model
//!
//! Component store, sections, and the document aggregate.
//!
//! ## Core principles
//!
//! 1. **The store is the sole source of truth for field definitions**;
//!    content trees only reference components by id.
//! 2. **Visual order comes from content**: within a section, component
//!    order is marker position, never store order.
//! 3. **Tolerant reads**: the store and content may be momentarily out of
//!    sync (dangling markers, orphaned entries); reconciliation never
//!    raises on a gap.
//! 4. **Owned, not global**: every document session owns its store, so
//!    independent documents coexist and tests need no shared-state reset.

mod component;
mod document;
mod errors;
mod mutations;
mod reconciler;
mod section;
mod store;

pub use component::{
    canonicalize, default_options, ComponentMetadata, FieldAttributes,
    DEFAULT_MULTI_CHOICE_OPTIONS, DEFAULT_SINGLE_CHOICE_OPTIONS,
};
pub use document::{Document, DocumentSnapshot};
pub use errors::{ModelError, ModelResult};
pub use mutations::Mutation;
pub use reconciler::{visible_components, visible_components_all};
pub use section::Section;
pub use store::ComponentStore;

// Re-export the content-layer vocabulary consumers always need alongside
// the model.
pub use formdoc_content::{ContentNode, ContentTree, FieldKind};
