//! Error types for the document model.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A document must always keep at least one section.
    #[error("Cannot remove the last remaining section")]
    LastSection,

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Component not found: {0}")]
    ComponentNotFound(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
