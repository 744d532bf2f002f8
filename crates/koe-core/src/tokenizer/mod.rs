//! Tokenizer capability consumed by the converter.
//!
//! The morphological analyzer is an external collaborator. `Tokenizer` is the
//! seam: any backend that can split text into ordered, non-overlapping spans
//! with char offsets plugs in here, and tests substitute mocks.

mod char_class;
#[cfg(feature = "vibrato")]
mod vibrato_backend;

pub use char_class::CharClassTokenizer;
#[cfg(feature = "vibrato")]
pub use vibrato_backend::VibratoTokenizer;

use std::sync::Arc;

/// One token as reported by a tokenizer backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub surface: String,
    /// Char offset of the first character.
    pub start: usize,
    /// Char offset one past the last character.
    pub end: usize,
    /// Kana reading, when the backend knows one.
    pub reading: Option<String>,
}

impl RawToken {
    pub fn new(surface: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            surface: surface.into(),
            start,
            end,
            reading: None,
        }
    }

    pub fn with_reading(mut self, reading: impl Into<String>) -> Self {
        self.reading = Some(reading.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("analyzer error: {0}")]
    Analyzer(String),

    #[error("failed to load dictionary {path}: {reason}")]
    Dictionary { path: String, reason: String },

    #[error("token {index} has invalid span [{start}, {end}) for input of {len} chars")]
    MalformedSpan {
        index: usize,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("token {index} starts at {start} before previous token end {previous_end}")]
    Overlap {
        index: usize,
        start: usize,
        previous_end: usize,
    },
}

/// Splits text into ordered, non-overlapping tokens.
///
/// Implementations must be safe to call concurrently through `&self`.
/// Tokens may leave gaps (e.g. skipped whitespace).
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<RawToken>, TokenizeError>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Result<Vec<RawToken>, TokenizeError> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<RawToken>, TokenizeError> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Arc<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<RawToken>, TokenizeError> {
        (**self).tokenize(text)
    }
}

/// Check tokenizer output against the contract the pipeline relies on:
/// `start < end <= len`, ordered by `start`, non-overlapping.
pub fn validate_tokens(tokens: &[RawToken], len: usize) -> Result<(), TokenizeError> {
    let mut previous_end = 0;
    for (index, t) in tokens.iter().enumerate() {
        if t.start >= t.end || t.end > len {
            return Err(TokenizeError::MalformedSpan {
                index,
                start: t.start,
                end: t.end,
                len,
            });
        }
        if t.start < previous_end {
            return Err(TokenizeError::Overlap {
                index,
                start: t.start,
                previous_end,
            });
        }
        previous_end = t.end;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_gaps() {
        let tokens = vec![RawToken::new("a", 0, 1), RawToken::new("b", 2, 3)];
        assert!(validate_tokens(&tokens, 3).is_ok());
        assert!(validate_tokens(&[], 0).is_ok());
    }

    #[test]
    fn validate_rejects_empty_span() {
        let tokens = vec![RawToken::new("", 1, 1)];
        let err = validate_tokens(&tokens, 3).unwrap_err();
        assert!(matches!(err, TokenizeError::MalformedSpan { index: 0, .. }));
    }

    #[test]
    fn validate_rejects_out_of_bounds() {
        let tokens = vec![RawToken::new("abcd", 0, 4)];
        let err = validate_tokens(&tokens, 3).unwrap_err();
        assert!(err.to_string().contains("[0, 4)"));
    }

    #[test]
    fn validate_rejects_overlap() {
        let tokens = vec![RawToken::new("ab", 0, 2), RawToken::new("bc", 1, 3)];
        let err = validate_tokens(&tokens, 3).unwrap_err();
        assert!(matches!(
            err,
            TokenizeError::Overlap {
                index: 1,
                start: 1,
                previous_end: 2
            }
        ));
    }

    #[test]
    fn boxed_tokenizer_delegates() {
        let boxed: Box<dyn Tokenizer> = Box::new(CharClassTokenizer::new());
        let tokens = boxed.tokenize("ab").unwrap();
        assert_eq!(tokens, vec![RawToken::new("ab", 0, 2)]);
    }
}
