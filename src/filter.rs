//! Dropping tokens that can't be meaningful vocabulary candidates.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::word::Token;

lazy_static! {
    /// Part-of-speech tags we never treat as vocabulary: proper nouns,
    /// plus the tagger's punctuation categories (including its quote and
    /// parenthesis markers).
    static ref EXCLUDED_TAGS: HashSet<&'static str> = {
        ["NNP", "NNPS", ",", ".", "HYPH", "``", "''", ":", "RRB-", "LRB-"]
            .iter()
            .cloned()
            .collect()
    };

    static ref DIGIT: Regex = Regex::new("[0-9]").unwrap();
}

/// Drop tokens that can't be vocabulary candidates: proper nouns and
/// punctuation (by tag), words of two characters or fewer, and anything
/// containing a digit.
///
/// This is a pure filter: surviving tokens keep their relative order,
/// and nothing is merged or rewritten.
pub fn filter(tokens: Vec<Token>) -> Vec<Token> {
    tokens.into_iter().filter(is_candidate).collect()
}

fn is_candidate(token: &Token) -> bool {
    !EXCLUDED_TAGS.contains(token.tag.as_str())
        && token.text.chars().count() > 2
        && !DIGIT.is_match(&token.text)
}
