use tracing::{debug, debug_span};

use crate::token::Token;
use crate::unicode::{is_digit_surface, nfkc};

use super::{merge_runs, Annotator, Merged};

/// Decimal separator allowed inside a digit run.
const DECIMAL_POINT: &str = ".";

/// Markup telling the synthesis engine to read `value` as a cardinal number.
pub fn numeral_tag(value: &str) -> String {
    format!("<NUMK VAL={value}>")
}

/// Merges runs of digit tokens (with `.` separators) into one token tagged
/// `<NUMK VAL=...>`.
///
/// The tag is always the plain cardinal form. Readings that depend on the
/// following counter word (人, 本, 日, ...) are not modelled.
pub struct NumeralAnnotator;

impl Annotator for NumeralAnnotator {
    fn name(&self) -> &'static str {
        "numeral"
    }

    fn annotate(&self, tokens: Vec<Token>) -> Vec<Token> {
        let _span = debug_span!("numeral", tokens_in = tokens.len()).entered();

        let out = merge_runs(
            tokens,
            |t| is_digit_surface(&t.surface),
            |t| is_digit_surface(&t.surface) || t.surface == DECIMAL_POINT,
            |text| {
                let value = nfkc(text);
                Merged {
                    pronunciation: numeral_tag(&value),
                    surface: value,
                }
            },
        );

        debug!(tokens_out = out.len());
        out
    }
}
