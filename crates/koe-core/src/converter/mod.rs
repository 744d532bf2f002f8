//! Text-to-markup conversion.
//!
//! Tokenizes the input, then runs numeral tagging → tokenizer readings →
//! alphabet spelling, and reconstructs the output around the original text.

pub mod explain;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::annotate::{run_annotators, AlphabetAnnotator, NumeralAnnotator, ReadingAnnotator};
use crate::reconstruct::reconstruct;
use crate::settings::{settings, Settings};
use crate::token::{adapt, Token};
use crate::tokenizer::{validate_tokens, TokenizeError, Tokenizer};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("tokenization failed: {0}")]
    Tokenization(#[from] TokenizeError),
}

/// Stage name for the unannotated token list straight from the tokenizer.
pub const TOKENIZE_STAGE: &str = "tokenize";

/// Converts free text into phonetic markup for the synthesis engine.
///
/// Owns one tokenizer, built once and reused for every call. `Converter` is
/// `Sync` whenever its tokenizer is, and every `Tokenizer` must tolerate
/// concurrent `&self` calls, so a shared converter may serve many threads.
pub struct Converter<T> {
    tokenizer: T,
    settings: Settings,
}

impl<T: Tokenizer> Converter<T> {
    /// Build a converter using the global settings.
    pub fn new(tokenizer: T) -> Self {
        Self::with_settings(tokenizer, settings().clone())
    }

    pub fn with_settings(tokenizer: T, settings: Settings) -> Self {
        Self {
            tokenizer,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Convert `text` to markup. Fails only when the tokenizer fails or
    /// returns tokens that break its contract; no partial output is produced.
    pub fn convert(&self, text: &str) -> Result<String, ConvertError> {
        self.convert_observed(text, |_, _| {})
    }

    /// Run the full pipeline, handing the token list after every stage to
    /// `observe`.
    pub(crate) fn convert_observed<F>(
        &self,
        text: &str,
        mut observe: F,
    ) -> Result<String, ConvertError>
    where
        F: FnMut(&'static str, &[Token]),
    {
        let chars: Vec<char> = text.chars().collect();
        let _span = debug_span!("convert", chars = chars.len()).entered();

        let raw = self.tokenizer.tokenize(text)?;
        validate_tokens(&raw, chars.len())?;
        let tokens = adapt(raw);
        observe(TOKENIZE_STAGE, &tokens);

        let alphabet = AlphabetAnnotator::new(&self.settings.spelling);
        let tokens = run_annotators(
            &[&NumeralAnnotator, &ReadingAnnotator, &alphabet],
            tokens,
            &mut observe,
        );

        let koe = reconstruct(&chars, &tokens, &self.settings.reconstruct);
        debug!(%koe, "converted");
        Ok(koe)
    }
}
