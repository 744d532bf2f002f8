//! Stitches annotated tokens back into the original text.

use tracing::{debug, debug_span};

use crate::settings::ReconstructSettings;
use crate::token::Token;

/// Build the output string from the original chars and the annotated tokens.
///
/// Walks a cursor through `chars`: text between tokens is copied verbatim,
/// annotated tokens emit their pronunciation, unannotated tokens on the
/// passthrough list keep their original text, and every other token becomes
/// the pause marker. Trailing text after the last token is copied verbatim.
///
/// Offsets are clamped to `[cursor, chars.len()]`, so an ill-formed token list
/// degrades instead of panicking.
pub fn reconstruct(chars: &[char], tokens: &[Token], settings: &ReconstructSettings) -> String {
    let _span = debug_span!("reconstruct", chars = chars.len(), tokens = tokens.len()).entered();

    let len = chars.len();
    let mut out = String::with_capacity(len * 3);
    let mut cursor = 0;
    let mut paused = 0usize;

    for token in tokens {
        let start = token.start.clamp(cursor, len);
        let end = token.end.clamp(start, len);

        out.extend(&chars[cursor..start]);
        if token.is_annotated() {
            out.push_str(&token.pronunciation);
        } else if settings.is_passthrough(&token.surface) {
            out.extend(&chars[start..end]);
        } else {
            out.push_str(&settings.pause);
            paused += 1;
        }
        cursor = end;
    }
    out.extend(&chars[cursor..]);

    debug!(paused, out_chars = out.chars().count());
    out
}
