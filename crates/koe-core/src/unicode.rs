//! Character-level Unicode classification and normalization.

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Half-width katakana (U+FF66..U+FF9F), including ｰ and the voicing marks.
pub fn is_halfwidth_katakana(c: char) -> bool {
    ('\u{FF66}'..='\u{FF9F}').contains(&c)
}

/// Decimal digit of any script (general category Nd), e.g. `7`, `７`, `٧`.
pub fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Letter of any script (general category L). Letter-like numbers and
/// symbols such as `Ⅱ` or `Ⓐ` are not letters.
pub fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Non-empty and made only of decimal digits.
pub fn is_digit_surface(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_decimal_digit)
}

/// Non-empty and made only of letters (any script).
pub fn is_letter_surface(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_letter)
}

/// Compatibility-compose `s` (NFKC): full-width forms become half-width,
/// ligatures are expanded, and so on.
pub fn nfkc(s: &str) -> String {
    s.nfkc().collect()
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_hiragana(c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Check if a string is a kana reading: hiragana, katakana and the prolonged
/// sound mark only.
pub fn is_kana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || is_katakana(c))
}
