//! Deciding whether a word is worth defining.

use crate::corpus::FrequencyCorpus;

/// Is this word "strange", that is, uncommon enough to be worth defining?
///
/// A word is strange iff it's longer than 3 characters _and_ it isn't in
/// the corpus's common set (case-insensitive).  Short words are never
/// strange, even when the corpus has no entry for them: function words
/// and abbreviations are poorly represented in frequency lists, and
/// flagging them would be all false positives.
///
/// Classification looks at the text as recognized, never at a spelling
/// correction: a misspelling of a common word still reads as strange on
/// the page, and spelling correctness is surfaced as its own signal
/// alongside this one.
pub fn is_strange(corpus: &FrequencyCorpus, word: &str) -> bool {
    word.chars().count() > 3 && !corpus.is_common(word)
}
