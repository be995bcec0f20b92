//! # Formdoc Content
//!
//! Content tree and marker codec for formdoc documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ tokenizer: blob → tokens (logos)            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ parser: tokens → ContentTree                │
//! │  - markers recognized by data-field-id      │
//! │  - tolerant: malformed markup degrades      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ marker: scan / repair / encode              │
//! │ serializer: ContentTree → canonical blob    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The editing surface trades in an opaque HTML-like string; everything in
//! this workspace operates on the structural `ContentTree` instead, so
//! marker lookup, reordering and substitution never pattern-match over
//! serialized markup.

pub mod id_generator;
pub mod marker;
pub mod node;
pub mod parser;
pub mod serializer;
pub mod tokenizer;

pub use id_generator::{document_seed, IdGenerator};
pub use marker::{encode_marker, repair, scan, FieldInfo, FieldLookup};
pub use node::{is_block_tag, ContentNode, ContentTree, FieldKind};
pub use parser::parse;
pub use serializer::serialize;
pub use tokenizer::{tokenize, Token};
