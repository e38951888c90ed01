//! Spell checking and frequency-ranked suggestion selection.

use std::sync::Arc;

use log::trace;

use crate::corpus::FrequencyCorpus;

/// The spelling-dictionary collaborator.
///
/// The actual dictionary (Hunspell or whatever else the platform ships)
/// lives outside this crate.  Implementations should build their
/// dictionary up front and report a failed build as
/// [`crate::Error::DictionaryInit`]; the pipeline can't run without a
/// speller, so there is no degraded mode to fall back to.
pub trait SpellingDictionary: Send + Sync {
    /// Is this word spelled correctly?
    fn is_correct(&self, word: &str) -> bool;

    /// Suggestions for a misspelled word, in the dictionary's own
    /// (unranked) order.
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// The result of checking one word's spelling.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpellCheckResult {
    /// Is the word spelled correctly?  When this is true, `suggestions`
    /// is empty and `best_suggestion` is absent.
    pub is_correct: bool,

    /// The dictionary's suggestions, in dictionary order.
    pub suggestions: Vec<String>,

    /// The suggestion with the highest corpus frequency, if any.
    pub best_suggestion: Option<String>,
}

impl SpellCheckResult {
    fn correct() -> SpellCheckResult {
        SpellCheckResult {
            is_correct: true,
            suggestions: vec![],
            best_suggestion: None,
        }
    }
}

/// Checks words against the spelling dictionary and ranks the resulting
/// suggestions by corpus frequency.
///
/// Edit distance alone is a poor signal for which correction a reader
/// actually intended, so the corpus frequency acts as a prior: among the
/// dictionary's suggestions we pick the one readers see most often.
///
/// Read-only after construction; share it across concurrent scans
/// freely.
pub struct SpellCheckEngine<D> {
    dictionary: D,
    corpus: Arc<FrequencyCorpus>,
}

impl<D: SpellingDictionary> SpellCheckEngine<D> {
    /// Create an engine wrapping the given dictionary, using `corpus`
    /// to rank suggestions.
    pub fn new(dictionary: D, corpus: Arc<FrequencyCorpus>) -> SpellCheckEngine<D> {
        SpellCheckEngine { dictionary, corpus }
    }

    /// Check one word's spelling.
    ///
    /// Words of length <= 1 are deemed correct by convention: flagging
    /// single letters and initials produces nothing but noise.
    pub fn check_spelling(&self, word: &str) -> SpellCheckResult {
        if word.chars().count() <= 1 || self.dictionary.is_correct(word) {
            return SpellCheckResult::correct();
        }
        let suggestions = self.dictionary.suggest(word);
        let best_suggestion = self.best_of(&suggestions);
        trace!(
            "'{}' misspelled, {} suggestions, best: {:?}",
            word,
            suggestions.len(),
            best_suggestion
        );
        SpellCheckResult {
            is_correct: false,
            suggestions,
            best_suggestion,
        }
    }

    /// Pick the suggestion with the highest corpus frequency, counting
    /// words missing from the corpus as frequency 0.  Ties keep the
    /// earliest suggestion, so the pick is deterministic.
    fn best_of(&self, suggestions: &[String]) -> Option<String> {
        let mut best: Option<(&String, u64)> = None;
        for suggestion in suggestions {
            let freq = self.corpus.frequency_of(suggestion).unwrap_or(0);
            match best {
                Some((_, best_freq)) if best_freq >= freq => {}
                _ => best = Some((suggestion, freq)),
            }
        }
        best.map(|(s, _)| s.clone())
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    /// A canned dictionary: a set of known words plus fixed suggestion
    /// lists.
    struct FakeDictionary {
        known: Vec<&'static str>,
        suggestions: HashMap<&'static str, Vec<&'static str>>,
    }

    impl SpellingDictionary for FakeDictionary {
        fn is_correct(&self, word: &str) -> bool {
            self.known.iter().any(|&k| k == word)
        }

        fn suggest(&self, word: &str) -> Vec<String> {
            self.suggestions
                .get(word)
                .map(|s| s.iter().map(|w| w.to_string()).collect())
                .unwrap_or_default()
        }
    }

    fn engine() -> SpellCheckEngine<FakeDictionary> {
        let corpus = FrequencyCorpus::from_str_source(
            "the 1000\nephemeral 120\nephemera 40\n",
            3,
        )
        .unwrap();
        let mut suggestions = HashMap::new();
        suggestions.insert("ephemral", vec!["ephemera", "ephemeral", "federal"]);
        suggestions.insert("zzzz", vec![]);
        let dictionary = FakeDictionary {
            known: vec!["the", "ephemeral", "ephemera"],
            suggestions,
        };
        SpellCheckEngine::new(dictionary, Arc::new(corpus))
    }

    #[test]
    fn correct_words_have_no_suggestions() {
        let result = engine().check_spelling("ephemeral");
        assert!(result.is_correct);
        assert!(result.suggestions.is_empty());
        assert!(result.best_suggestion.is_none());
    }

    #[test]
    fn single_letters_are_correct_by_convention() {
        let result = engine().check_spelling("q");
        assert!(result.is_correct);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn best_suggestion_has_the_highest_frequency() {
        let result = engine().check_spelling("ephemral");
        assert!(!result.is_correct);
        assert_eq!(
            result.suggestions,
            vec!["ephemera", "ephemeral", "federal"]
        );
        // "ephemeral" outranks "ephemera"; "federal" is missing from the
        // corpus and counts as 0.
        assert_eq!(result.best_suggestion.as_deref(), Some("ephemeral"));
    }

    #[test]
    fn no_suggestions_means_no_best() {
        let result = engine().check_spelling("zzzz");
        assert!(!result.is_correct);
        assert!(result.suggestions.is_empty());
        assert!(result.best_suggestion.is_none());
    }

    #[test]
    fn check_spelling_is_idempotent() {
        let engine = engine();
        let first = engine.check_spelling("ephemral");
        let second = engine.check_spelling("ephemral");
        assert_eq!(first, second);
    }

    #[test]
    fn ties_keep_the_earliest_suggestion() {
        let corpus = FrequencyCorpus::from_str_source("aa 10\nbb 10\n", 2).unwrap();
        let mut suggestions = HashMap::new();
        suggestions.insert("ab", vec!["bb", "aa"]);
        let dictionary = FakeDictionary {
            known: vec![],
            suggestions,
        };
        let engine = SpellCheckEngine::new(dictionary, Arc::new(corpus));
        assert_eq!(
            engine.check_spelling("ab").best_suggestion.as_deref(),
            Some("bb")
        );
    }
}
