//! Minimal line tokenizer.
//!
//! Produces just enough lexical structure for list-aware commands: the
//! first token of a list line is its marker (leading indent included), a
//! checkbox line additionally exposes the box and its following space as
//! separate tokens, and everything else is plain text. Command code counts
//! tokens to detect "empty" list items, so token boundaries here are part
//! of the editing behavior, not a rendering detail.

use crate::markdown::{MarkerShape, classify, leading_whitespace};

/// Classification of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Leading list marker, indent included (e.g. `"\t1. "`, `"- "`).
    ListMarker,
    /// The `[ ]` / `[x]` / `[X]` box of a checkbox item.
    CheckboxBox,
    /// Whitespace between the box and the item text.
    Space,
    /// Anything else.
    Text,
}

/// One token of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Split a line into tokens. An empty line yields no tokens.
pub fn tokenize(line: &str) -> Vec<Token> {
    if line.is_empty() {
        return Vec::new();
    }
    let Some(shape) = classify(line) else {
        return vec![Token::new(TokenKind::Text, line)];
    };

    let indent = leading_whitespace(line);
    let rest = &line[indent.len()..];

    if let MarkerShape::Checkbox { .. } = shape {
        // `- `, the box, the run of whitespace after it, then the item text.
        let marker = format!("{indent}- ");
        let boxed = &rest[2..5];
        let after_box = &rest[5..];
        let space = leading_whitespace(after_box);
        let body = &after_box[space.len()..];
        let mut tokens = vec![
            Token::new(TokenKind::ListMarker, marker),
            Token::new(TokenKind::CheckboxBox, boxed),
            Token::new(TokenKind::Space, space),
        ];
        if !body.is_empty() {
            tokens.push(Token::new(TokenKind::Text, body));
        }
        return tokens;
    }

    // Marker head without its trailing whitespace.
    let head_len = if matches!(shape, MarkerShape::Ordered(_)) {
        rest.find('.').map_or(rest.len(), |i| i + 1)
    } else {
        1
    };
    let after_head = &rest[head_len..];
    let trailing = leading_whitespace(after_head);
    let marker_len = indent.len() + head_len + trailing.len();
    let body = &line[marker_len..];

    let mut tokens = vec![Token::new(TokenKind::ListMarker, &line[..marker_len])];
    if !body.is_empty() {
        tokens.push(Token::new(TokenKind::Text, body));
    }
    tokens
}
