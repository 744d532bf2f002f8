
use super::*;
use crate::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};
use crate::tokenizer::RawToken;

pub(crate) fn default_settings() -> Settings {
    parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap()
}

/// Emits one token per non-whitespace char, with no readings.
pub(crate) struct PerCharTokenizer;

impl Tokenizer for PerCharTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<RawToken>, TokenizeError> {
        Ok(text
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(i, c)| RawToken::new(c.to_string(), i, i + 1))
            .collect())
    }
}

/// Returns a fixed token list regardless of input.
pub(crate) struct FixedTokenizer(pub Vec<RawToken>);

impl Tokenizer for FixedTokenizer {
    fn tokenize(&self, _text: &str) -> Result<Vec<RawToken>, TokenizeError> {
        Ok(self.0.clone())
    }
}

/// Always fails.
pub(crate) struct FailingTokenizer;

impl Tokenizer for FailingTokenizer {
    fn tokenize(&self, _text: &str) -> Result<Vec<RawToken>, TokenizeError> {
        Err(TokenizeError::Analyzer("dictionary not loaded".to_string()))
    }
}

pub(crate) fn converter<T: Tokenizer>(tokenizer: T) -> Converter<T> {
    Converter::with_settings(tokenizer, default_settings())
}
