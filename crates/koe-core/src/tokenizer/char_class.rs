use crate::unicode::{
    hiragana_to_katakana, is_decimal_digit, is_halfwidth_katakana, is_hiragana, is_kanji,
    is_katakana, is_letter, nfkc,
};

use super::{RawToken, TokenizeError, Tokenizer};

/// Dictionary-free tokenizer that splits text at character-class boundaries.
///
/// Maximal runs of digits, hiragana, katakana, kanji and other letters become
/// one token each; every other non-space character is a token of its own.
/// Whitespace is skipped and shows up as gaps. Kana runs (half-width
/// katakana included) report their full-width katakana form as the reading.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharClassTokenizer;

impl CharClassTokenizer {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    Digit,
    Hiragana,
    Katakana,
    Kanji,
    Letter,
    Symbol,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Space
        } else if is_decimal_digit(c) {
            CharClass::Digit
        } else if is_hiragana(c) && is_letter(c) {
            CharClass::Hiragana
        } else if (is_katakana(c) || is_halfwidth_katakana(c)) && is_letter(c) {
            CharClass::Katakana
        } else if is_kanji(c) {
            CharClass::Kanji
        } else if is_letter(c) {
            CharClass::Letter
        } else {
            CharClass::Symbol
        }
    }

    /// Whether consecutive characters of this class form one token.
    fn groups(self) -> bool {
        !matches!(self, CharClass::Space | CharClass::Symbol)
    }
}

struct Run {
    class: CharClass,
    start: usize,
    end: usize,
    text: String,
}

impl Run {
    fn into_token(self) -> RawToken {
        let reading = match self.class {
            CharClass::Hiragana => Some(hiragana_to_katakana(&self.text)),
            // Half-width forms widen under NFKC (ｶﾞ → ガ).
            CharClass::Katakana => Some(nfkc(&self.text)),
            _ => None,
        };
        RawToken {
            surface: self.text,
            start: self.start,
            end: self.end,
            reading,
        }
    }
}

impl Tokenizer for CharClassTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<RawToken>, TokenizeError> {
        let mut tokens = Vec::new();
        let mut run: Option<Run> = None;

        for (i, c) in text.chars().enumerate() {
            let mut class = CharClass::of(c);
            // ー extends a hiragana run (らーめん).
            if c == 'ー' && matches!(&run, Some(r) if r.class == CharClass::Hiragana) {
                class = CharClass::Hiragana;
            }

            if let Some(r) = run.as_mut() {
                if r.class == class && class.groups() {
                    r.text.push(c);
                    r.end = i + 1;
                    continue;
                }
            }
            if let Some(r) = run.take() {
                tokens.push(r.into_token());
            }
            if class != CharClass::Space {
                run = Some(Run {
                    class,
                    start: i,
                    end: i + 1,
                    text: c.to_string(),
                });
            }
        }
        if let Some(r) = run {
            tokens.push(r.into_token());
        }

        Ok(tokens)
    }
}
