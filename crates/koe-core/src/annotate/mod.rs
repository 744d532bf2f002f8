//! Annotation passes over the token list.
//!
//! Each pass consumes the whole list and returns a new one. A pass only ever
//! claims tokens whose `pronunciation` is still empty, so earlier passes win.

mod alphabet;
mod numeral;
mod reading;

pub use alphabet::AlphabetAnnotator;
pub use numeral::{numeral_tag, NumeralAnnotator};
pub use reading::ReadingAnnotator;

use crate::token::Token;

/// A pipeline stage that may merge tokens and set pronunciations.
pub trait Annotator {
    /// Short stage name used in diagnostics.
    fn name(&self) -> &'static str;

    fn annotate(&self, tokens: Vec<Token>) -> Vec<Token>;
}

/// Run all annotators in sequence, passing every intermediate list to
/// `observe`.
pub fn run_annotators<F>(
    annotators: &[&dyn Annotator],
    mut tokens: Vec<Token>,
    mut observe: F,
) -> Vec<Token>
where
    F: FnMut(&'static str, &[Token]),
{
    for a in annotators {
        tokens = a.annotate(tokens);
        observe(a.name(), &tokens);
    }
    tokens
}

/// Surface and pronunciation produced for a merged run.
pub(crate) struct Merged {
    pub surface: String,
    pub pronunciation: String,
}

/// Replace every maximal run of tokens with a single token.
///
/// A run opens at a token satisfying `opens` and extends over directly
/// adjacent tokens satisfying `extends`; a gap between tokens ends the run, so
/// a merged token never covers text its parts did not. `reduce` receives the
/// concatenated surfaces of the run. The merged token spans
/// `[first.start, last.end)`; tokens outside runs pass through in order.
pub(crate) fn merge_runs<O, E, R>(
    tokens: Vec<Token>,
    opens: O,
    extends: E,
    reduce: R,
) -> Vec<Token>
where
    O: Fn(&Token) -> bool,
    E: Fn(&Token) -> bool,
    R: Fn(&str) -> Merged,
{
    struct Run {
        start: usize,
        end: usize,
        text: String,
    }

    let close = |run: Run| {
        let merged = reduce(&run.text);
        Token {
            surface: merged.surface,
            start: run.start,
            end: run.end,
            pronunciation: merged.pronunciation,
            reading: None,
        }
    };

    let mut out = Vec::with_capacity(tokens.len());
    let mut run: Option<Run> = None;

    for token in tokens {
        if let Some(r) = run.as_mut() {
            if token.start == r.end && extends(&token) {
                r.text.push_str(&token.surface);
                r.end = token.end;
                continue;
            }
        }
        if let Some(r) = run.take() {
            out.push(close(r));
        }
        if opens(&token) {
            run = Some(Run {
                start: token.start,
                end: token.end,
                text: token.surface,
            });
        } else {
            out.push(token);
        }
    }
    if let Some(r) = run {
        out.push(close(r));
    }

    out
}
