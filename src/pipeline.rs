//! The word pipeline: from raw OCR output to an ordered, classified
//! word list.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::corpus::FrequencyCorpus;
use crate::errors::Result;
use crate::geom::Rect;
use crate::ocr::OcrResult;
use crate::spell::{SpellCheckEngine, SpellingDictionary};
use crate::word::{Token, Word};
use crate::{filter, reconcile, strange};

/// The grammatical-tagger collaborator.
///
/// Given the full recognized text of a page (tagging needs sentence
/// context, so it always sees the whole text, never individual OCR
/// fragments), produce the ordered token/tag stream.  Implementations
/// wrap whatever tagger the platform provides and report failure with
/// [`crate::Error::tagger`].
pub trait Tagger: Send + Sync {
    /// Tokenize and tag `text`, preserving token order.
    fn tag(&self, text: &str) -> Result<Vec<Token>>;
}

/// Turns one scan's OCR output into the final ordered list of
/// classified [`Word`]s.
///
/// The pipeline is synchronous and side-effect-free: hand it OCR output
/// and it either returns a complete word list or fails the scan as a
/// whole.  It holds only read-only state, so one pipeline value can
/// serve any number of concurrent scans without locking; run it on a
/// background worker if the caller must not block.
pub struct WordPipeline<T, D> {
    corpus: Arc<FrequencyCorpus>,
    tagger: T,
    engine: SpellCheckEngine<D>,
}

impl<T: Tagger, D: SpellingDictionary> WordPipeline<T, D> {
    /// Create a pipeline from its collaborators.  The corpus is shared:
    /// the same value ranks suggestions and classifies strangeness.
    pub fn new(corpus: Arc<FrequencyCorpus>, tagger: T, dictionary: D) -> WordPipeline<T, D> {
        let engine = SpellCheckEngine::new(dictionary, corpus.clone());
        WordPipeline {
            corpus,
            tagger,
            engine,
        }
    }

    /// Process one scan's OCR output into `Word`s, preserving token
    /// order.
    ///
    /// Every token that survives filtering produces exactly one `Word`,
    /// duplicates included.  Deduplication and result-count limits are
    /// presentation concerns, not ours.  A scan is atomic: if the tagger
    /// fails, the whole scan fails and no partial list is produced.
    pub fn process(&self, ocr: &OcrResult) -> Result<Vec<Word>> {
        let bounds_map = reconcile::build_bounds_map(&ocr.elements);
        let tokens = self.tagger.tag(&ocr.text)?;
        let tokens = filter::filter(tokens);

        let words: Vec<Word> = tokens
            .into_iter()
            .map(|token| self.build_word(token, &bounds_map))
            .collect();

        let with_bounds = words.iter().filter(|w| w.bounds.is_some()).count();
        debug!("total words: {}, words with bounds: {}", words.len(), with_bounds);
        Ok(words)
    }

    fn build_word(&self, token: Token, bounds_map: &HashMap<String, Rect>) -> Word {
        let check = self.engine.check_spelling(&token.text);
        let bounds = bounds_map.get(&token.text).copied();
        // Strangeness looks at the text as recognized, not the
        // correction.
        let is_strange = strange::is_strange(&self.corpus, &token.text);
        debug!(
            "token: '{}', bounds: {:?}, isCorrect: {}, suggestions: {:?}",
            token.text, bounds, check.is_correct, check.suggestions
        );
        Word {
            text: token.text,
            corrected: check.best_suggestion,
            tag: token.tag,
            bounds,
            is_spelled_correctly: check.is_correct,
            suggestions: check.suggestions,
            is_strange,
        }
    }
}
