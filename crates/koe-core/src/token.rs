//! The token record threaded through the annotation pipeline.

use serde::Serialize;

use crate::tokenizer::RawToken;

/// A span of the input with an optional phonetic annotation.
///
/// `start` and `end` are char (not byte) offsets into the original input,
/// `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub surface: String,
    pub start: usize,
    pub end: usize,
    /// Empty until an annotator claims the token. When set, the reconstructor
    /// emits exactly this text in place of the span.
    pub pronunciation: String,
    /// Kana reading reported by the tokenizer, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
}

impl Token {
    pub fn new(surface: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            surface: surface.into(),
            start,
            end,
            pronunciation: String::new(),
            reading: None,
        }
    }

    pub fn is_annotated(&self) -> bool {
        !self.pronunciation.is_empty()
    }
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        Self {
            surface: raw.surface,
            start: raw.start,
            end: raw.end,
            pronunciation: String::new(),
            reading: raw.reading,
        }
    }
}

/// Map tokenizer output 1:1 onto unannotated tokens, preserving order and
/// offsets.
pub fn adapt(raw: Vec<RawToken>) -> Vec<Token> {
    raw.into_iter().map(Token::from).collect()
}
