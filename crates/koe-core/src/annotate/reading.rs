use tracing::{debug, debug_span};

use crate::token::Token;
use crate::unicode::{hiragana_to_katakana, is_kana_reading};

use super::Annotator;

/// Uses the tokenizer's kana reading as the pronunciation of tokens no
/// earlier pass has claimed.
///
/// Readings that are not pure kana (symbols echoed back by the dictionary,
/// `*` placeholders) are ignored so they can never leak into the markup.
pub struct ReadingAnnotator;

impl Annotator for ReadingAnnotator {
    fn name(&self) -> &'static str {
        "reading"
    }

    fn annotate(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        let _span = debug_span!("reading", tokens_in = tokens.len()).entered();

        let mut claimed = 0usize;
        for t in tokens.iter_mut().filter(|t| !t.is_annotated()) {
            if let Some(reading) = t.reading.as_deref().filter(|r| is_kana_reading(r)) {
                t.pronunciation = hiragana_to_katakana(reading);
                claimed += 1;
            }
        }

        debug!(claimed);
        tokens
    }
}
