//! The data types which flow through the word pipeline.

use serde::Serialize;

use crate::geom::Rect;

/// A single token produced by the grammatical tagger, with its
/// part-of-speech tag.  Tokenization happens over the full recognized
/// text, so it may not line up 1:1 with the OCR engine's elements.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Token {
    /// The token text, exactly as the tagger produced it.
    pub text: String,

    /// The part-of-speech tag, using the tagger's native tag set
    /// (Penn Treebank tags like `NN` or `NNP` for English).
    pub tag: String,
}

impl Token {
    /// Create a new token.
    pub fn new<S1, S2>(text: S1, tag: S2) -> Token
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Token {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// A recognized, classified word: the terminal record of one pipeline
/// run.
///
/// `Word`s are produced fresh per scan and never mutated afterwards; the
/// next scan supersedes the whole list.  Corrections produce a new
/// `Word`, not an in-place edit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Word {
    /// The word as recognized on the page.
    pub text: String,

    /// The best spelling correction, if `text` is misspelled and the
    /// dictionary had suggestions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected: Option<String>,

    /// The part-of-speech tag assigned by the grammatical tagger.
    pub tag: String,

    /// Where the word appears on the captured image, if the OCR output
    /// could be reconciled with the tagger's tokenization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Rect>,

    /// Is the recognized text spelled correctly?
    pub is_spelled_correctly: bool,

    /// Spelling suggestions for a misspelled word, in dictionary order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,

    /// Is this word uncommon enough to be worth defining?
    pub is_strange: bool,
}

impl Word {
    /// The key to hand to dictionary-lookup and saved-word
    /// collaborators: the corrected spelling when we have one, otherwise
    /// the text as recognized.
    pub fn lookup_key(&self) -> &str {
        self.corrected.as_deref().unwrap_or(&self.text)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn word(text: &str, corrected: Option<&str>) -> Word {
        Word {
            text: text.to_owned(),
            corrected: corrected.map(|c| c.to_owned()),
            tag: "NN".to_owned(),
            bounds: None,
            is_spelled_correctly: corrected.is_none(),
            suggestions: corrected.iter().map(|c| c.to_string()).collect(),
            is_strange: true,
        }
    }

    #[test]
    fn lookup_key_prefers_the_correction() {
        assert_eq!(word("ephemral", Some("ephemeral")).lookup_key(), "ephemeral");
        assert_eq!(word("ephemeral", None).lookup_key(), "ephemeral");
    }
}
