use tracing::{debug, debug_span};

use crate::settings::SpellingTable;
use crate::token::Token;
use crate::unicode::{is_letter_surface, nfkc};

use super::{merge_runs, Annotator, Merged};

/// Merges runs of unannotated letter tokens and spells them out character
/// by character.
///
/// The run is NFKC-normalized and lower-cased before lookup. Characters in
/// neither spelling table contribute nothing, so accented letters or stray
/// glyphs silently vanish from the pronunciation.
pub struct AlphabetAnnotator<'a> {
    spelling: &'a SpellingTable,
}

impl<'a> AlphabetAnnotator<'a> {
    pub fn new(spelling: &'a SpellingTable) -> Self {
        Self { spelling }
    }
}

fn is_eligible(t: &Token) -> bool {
    !t.is_annotated() && is_letter_surface(&t.surface)
}

impl Annotator for AlphabetAnnotator<'_> {
    fn name(&self) -> &'static str {
        "alphabet"
    }

    fn annotate(&self, tokens: Vec<Token>) -> Vec<Token> {
        let _span = debug_span!("alphabet", tokens_in = tokens.len()).entered();

        let out = merge_runs(tokens, is_eligible, is_eligible, |text| {
            let surface = nfkc(text).to_lowercase();
            Merged {
                pronunciation: self.spelling.spell(&surface),
                surface,
            }
        });

        debug!(tokens_out = out.len());
        out
    }
}
