use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::unicode::{hiragana_to_katakana, is_kana_reading};

use super::{RawToken, TokenizeError, Tokenizer};

/// Column of the comma-separated feature string holding the pronunciation in
/// IPADIC-style dictionaries (surface excluded).
const READING_FIELD: usize = 8;

/// Morphological tokenizer backed by a compiled vibrato system dictionary.
///
/// The dictionary is loaded once. Each `tokenize` call allocates its own
/// worker, so one instance can serve concurrent callers.
pub struct VibratoTokenizer {
    tokenizer: ::vibrato::Tokenizer,
}

impl VibratoTokenizer {
    /// Load an uncompressed `system.dic` and build a tokenizer that skips
    /// spaces.
    pub fn open(path: &Path) -> Result<Self, TokenizeError> {
        let dict_err = |reason: String| TokenizeError::Dictionary {
            path: path.display().to_string(),
            reason,
        };
        let file = File::open(path).map_err(|e| dict_err(e.to_string()))?;
        let dict = ::vibrato::Dictionary::read(BufReader::new(file))
            .map_err(|e| dict_err(e.to_string()))?;
        let tokenizer = ::vibrato::Tokenizer::new(dict)
            .ignore_space(true)
            .map_err(|e| dict_err(e.to_string()))?;
        debug!(path = %path.display(), "vibrato dictionary loaded");
        Ok(Self { tokenizer })
    }
}

fn reading_of(feature: &str) -> Option<String> {
    let field = feature.split(',').nth(READING_FIELD)?;
    if field == "*" || !is_kana_reading(field) {
        return None;
    }
    Some(hiragana_to_katakana(field))
}

impl Tokenizer for VibratoTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<RawToken>, TokenizeError> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();

        let tokens = (0..worker.num_tokens())
            .map(|i| {
                let t = worker.token(i);
                let range = t.range_char();
                RawToken {
                    surface: t.surface().to_string(),
                    start: range.start,
                    end: range.end,
                    reading: reading_of(t.feature()),
                }
            })
            .collect();
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_dictionary() {
        let err = VibratoTokenizer::open(Path::new("/nonexistent/system.dic"))
            .err()
            .unwrap();
        assert!(matches!(err, TokenizeError::Dictionary { .. }));
        assert!(err.to_string().contains("/nonexistent/system.dic"));
    }

    #[test]
    fn reading_from_pronunciation_column() {
        let feature = "名詞,一般,*,*,*,*,今日,キョウ,キョー";
        assert_eq!(reading_of(feature).as_deref(), Some("キョー"));
        assert_eq!(reading_of("記号,一般,*,*,*,*,!,*,*"), None);
        assert_eq!(reading_of("名詞,固有名詞,*"), None);
    }
}
