use formdoc_content::{parse, serialize, ContentTree};
use serde::{Deserialize, Serialize};

/// A titled, independently toggleable block of rich content.
///
/// The editing surface supplies content as an opaque HTML-like string;
/// internally a section holds the parsed tree. Disabled sections keep
/// their content: they are only excluded from previews and exports of
/// rendered text, not destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: ContentTree,
    pub enabled: bool,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: ContentTree::new(),
            enabled: true,
        }
    }

    /// Replace content from the editing surface's blob form.
    pub fn set_content_blob(&mut self, blob: &str) {
        self.content = parse(blob);
    }

    /// Content in blob form (canonical serialization).
    pub fn content_blob(&self) -> String {
        serialize(&self.content)
    }
}
