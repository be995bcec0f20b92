//! # Formdoc Fill
//!
//! Fill/preview engine and clipboard flattener.
//!
//! ```text
//! DocumentSnapshot ─▶ FillSession (values, enablement)
//!                          │ generate_preview
//!                          ▼
//!                   rendered blocks ─▶ flatten_sections ─▶ plain text
//! ```
//!
//! Substitution resolves marker occurrences first, then remaining
//! `{variable}` references; values are held globally per session, so a
//! variable defined in a disabled section still resolves by name even
//! though the section itself contributes nothing to the preview.

mod flatten;
mod session;
mod substitute;
mod values;

pub use flatten::{flatten, flatten_sections};
pub use session::{FillSession, FillState};
pub use substitute::{Resolver, NONE_SELECTED};
pub use values::{initial_value, initial_values, reconcile_flags, FieldValue, ValueMap};
