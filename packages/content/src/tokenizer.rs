use logos::Logos;

/// Lexical tokens of the HTML-like content blob.
///
/// The lexer never fails hard: anything that does not shape up as a tag,
/// entity or comment is consumed by the parser as literal text.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token<'src> {
    /// `</name ...>`
    #[regex(r"</[a-zA-Z][^>]*>", |lex| lex.slice())]
    CloseTag(&'src str),

    /// `<name ...>` including self-closing `<br/>`
    #[regex(r"<[a-zA-Z][^>]*>", |lex| lex.slice())]
    OpenTag(&'src str),

    /// HTML comments are dropped.
    #[regex(r"<!--([^-]|-[^-]|--[^>])*-->", logos::skip)]
    Comment,

    /// Character entity, decoded by the parser.
    #[regex(r"&[a-zA-Z]+;|&#[0-9]+;", |lex| lex.slice())]
    Entity(&'src str),

    #[regex(r"[^<&]+", |lex| lex.slice())]
    Text(&'src str),
}

/// Tokenize a content blob. Lexer errors (stray `<` or `&`) are demoted to
/// one-character text tokens.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => tokens.push(Token::Text(lexer.slice())),
        }
    }

    tokens
}

/// A parsed open tag: name, attributes in source order, self-closing flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub self_closing: bool,
}

impl Tag {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse the raw slice of an open tag (`<span a="b">`) into a `Tag`.
///
/// Returns None for slices too mangled to carry a tag name; callers degrade
/// those to literal text.
pub fn parse_open_tag(raw: &str) -> Option<Tag> {
    let inner = raw.strip_prefix('<')?.strip_suffix('>')?;
    let (inner, self_closing) = match inner.strip_suffix('/') {
        Some(rest) => (rest, true),
        None => (inner, false),
    };

    let mut chars = inner.char_indices().peekable();
    let mut name_end = inner.len();
    for (i, c) in chars.by_ref() {
        if c.is_whitespace() {
            name_end = i;
            break;
        }
    }
    let name = inner[..name_end].to_ascii_lowercase();
    if name.is_empty() || !name.chars().next().unwrap().is_ascii_alphabetic() {
        return None;
    }

    let mut attributes = Vec::new();
    let rest = &inner[name_end..];
    let mut pos = 0;
    let bytes = rest.as_bytes();

    while pos < bytes.len() {
        // skip whitespace
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        // attribute name
        let name_start = pos;
        while pos < bytes.len()
            && !bytes[pos].is_ascii_whitespace()
            && bytes[pos] != b'='
        {
            pos += 1;
        }
        let attr_name = rest[name_start..pos].to_ascii_lowercase();
        if attr_name.is_empty() {
            pos += 1;
            continue;
        }

        // skip whitespace before '='
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        if pos < bytes.len() && bytes[pos] == b'=' {
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            let value = if pos < bytes.len() && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
                let quote = bytes[pos];
                pos += 1;
                let value_start = pos;
                while pos < bytes.len() && bytes[pos] != quote {
                    pos += 1;
                }
                let value = rest[value_start..pos].to_string();
                if pos < bytes.len() {
                    pos += 1; // closing quote
                }
                value
            } else {
                let value_start = pos;
                while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
                rest[value_start..pos].to_string()
            };
            attributes.push((attr_name, decode_entities(&value)));
        } else {
            // bare attribute
            attributes.push((attr_name, String::new()));
        }
    }

    Some(Tag {
        name,
        attributes,
        self_closing,
    })
}

/// Extract the tag name from a close-tag slice (`</span >` → `span`).
pub fn close_tag_name(raw: &str) -> Option<String> {
    let inner = raw.strip_prefix("</")?.strip_suffix('>')?;
    let name: String = inner
        .chars()
        .take_while(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Decode the entities the serializer emits plus the common named few.
pub fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "&amp;" => Some('&'),
        "&lt;" => Some('<'),
        "&gt;" => Some('>'),
        "&quot;" => Some('"'),
        "&apos;" => Some('\''),
        "&nbsp;" => Some('\u{a0}'),
        _ => {
            let digits = entity.strip_prefix("&#")?.strip_suffix(';')?;
            let code: u32 = digits.parse().ok()?;
            char::from_u32(code)
        }
    }
}

fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(end) = tail.find(';') {
            let candidate = &tail[..=end];
            if let Some(c) = decode_entity(candidate) {
                out.push(c);
                rest = &tail[end + 1..];
                continue;
            }
        }
        out.push('&');
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}
