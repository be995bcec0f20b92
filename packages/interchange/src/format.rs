use formdoc_model::ComponentMetadata;
use serde::{Deserialize, Serialize};

/// Interchange schema version this build writes.
pub const FORMAT_VERSION: &str = "1.0";

/// The exported/imported unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterchangeDocument {
    pub version: String,
    pub sections: Vec<InterchangeSection>,
    /// Visible components only, in canonical document order. Orphaned
    /// store entries never leak into an export.
    pub components: Vec<ComponentMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterchangeSection {
    pub id: String,
    pub title: String,
    /// Content in blob form, captured live at export time.
    pub content: String,
    pub enabled: bool,
}
