use serde::{Deserialize, Serialize};

/// Field type carried by a marker and by component metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "single-line-text")]
    SingleLineText,

    #[serde(rename = "single-choice")]
    SingleChoice,

    #[serde(rename = "multi-choice")]
    MultiChoice,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::SingleLineText => "single-line-text",
            FieldKind::SingleChoice => "single-choice",
            FieldKind::MultiChoice => "multi-choice",
        }
    }

    /// Parse an interchange/marker type string. Unknown strings yield None.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single-line-text" => Some(FieldKind::SingleLineText),
            "single-choice" => Some(FieldKind::SingleChoice),
            "multi-choice" => Some(FieldKind::MultiChoice),
            _ => None,
        }
    }

    /// Whether this kind carries an options list.
    pub fn has_options(&self) -> bool {
        matches!(self, FieldKind::SingleChoice | FieldKind::MultiChoice)
    }
}

/// A node of section content.
///
/// Section content is an ordered tree, not an opaque markup string: marker
/// lookup, reordering and substitution are structural operations. The
/// HTML-like blob the editing surface trades in is only the serialized form
/// (see `parse` / `serialize`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentNode {
    /// A run of plain text (entities already decoded).
    Text { text: String },

    /// An embedded field marker. `kind` is None when the fragment came from
    /// an encoder that stripped the type attribute; `repair` restores it
    /// from the store.
    Field {
        id: String,
        kind: Option<FieldKind>,
        label: String,
    },

    /// Explicit line break (`<br>`, `<hr>`).
    Break,

    /// A markup container (`p`, `div`, `li`, inline tags...). Unknown tags
    /// land here too so malformed input degrades instead of erroring.
    Block {
        tag: String,
        children: Vec<ContentNode>,
    },
}

/// Ordered content of one section.
pub type ContentTree = Vec<ContentNode>;

/// Tags treated as block-level when flattening to plain text.
pub fn is_block_tag(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div"
            | "li"
            | "ul"
            | "ol"
            | "blockquote"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
    )
}
