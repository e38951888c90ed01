//! The ranked word-frequency corpus used for commonness checks and
//! suggestion ranking.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::errors::{Error, Result};

/// How many of the corpus's top entries count as "common" unless the
/// caller says otherwise.
pub const DEFAULT_TOP_WORDS: usize = 40_000;

/// One entry of the frequency corpus.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrequencyEntry {
    /// The word, lowercased.
    pub word: String,

    /// The word's 1-based rank.  Ranks are unique and increase
    /// monotonically in load order.
    pub rank: usize,

    /// The word's raw corpus frequency.
    pub frequency: u64,
}

/// A ranked word-frequency table, loaded once at startup from a
/// line-oriented `"<word> <frequency>"` resource sorted by descending
/// frequency.
///
/// The "common" set is exactly the first `top_n` entries.  Raw frequency
/// lookup covers the _full_ table, not just the common prefix, so
/// spelling suggestions can be ranked even among words outside the
/// common bound.
///
/// A corpus is immutable once loaded.  Load it once at application
/// start, wrap it in an [`std::sync::Arc`], and hand it to every
/// consumer; concurrent scans may then share it freely with no locking.
/// Fatal load errors should abort startup: classification without a
/// corpus is not offered.
#[derive(Debug)]
pub struct FrequencyCorpus {
    entries: Vec<FrequencyEntry>,
    by_word: HashMap<String, usize>,
    top_n: usize,
}

impl FrequencyCorpus {
    /// Load a corpus from a line-oriented reader.  Each line must be
    /// `"<word> <frequency>"`; words are trimmed and lowercased.  A word
    /// that appears more than once keeps its first (better) rank.
    pub fn load<R: BufRead>(input: R, top_n: usize) -> Result<FrequencyCorpus> {
        let mut entries = Vec::new();
        let mut by_word = HashMap::new();
        for (i, line) in input.lines().enumerate() {
            let line = line.map_err(|source| Error::CorpusRead { source })?;
            if line.trim().is_empty() {
                continue;
            }
            let (word, frequency) = parse_line(&line).ok_or_else(|| {
                Error::CorpusParse {
                    line: i + 1,
                    text: line.clone(),
                }
            })?;
            if by_word.contains_key(&word) {
                continue;
            }
            let rank = entries.len() + 1;
            by_word.insert(word.clone(), entries.len());
            entries.push(FrequencyEntry {
                word,
                rank,
                frequency,
            });
        }
        debug!("loaded {} corpus entries, top {} common", entries.len(), top_n);
        Ok(FrequencyCorpus {
            entries,
            by_word,
            top_n,
        })
    }

    /// Load a corpus from a file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P, top_n: usize) -> Result<FrequencyCorpus> {
        let file = File::open(path.as_ref())
            .map_err(|source| Error::CorpusRead { source })?;
        FrequencyCorpus::load(BufReader::new(file), top_n)
    }

    /// Is this word one of the corpus's top `top_n` entries?
    /// Case-insensitive.
    pub fn is_common(&self, word: &str) -> bool {
        match self.rank_of(word) {
            Some(rank) => rank <= self.top_n,
            None => false,
        }
    }

    /// Look up a word's raw frequency, across the full table.
    /// Case-insensitive.
    pub fn frequency_of(&self, word: &str) -> Option<u64> {
        self.entry_for(word).map(|e| e.frequency)
    }

    /// Look up a word's 1-based rank, across the full table.
    /// Case-insensitive.
    pub fn rank_of(&self, word: &str) -> Option<usize> {
        self.entry_for(word).map(|e| e.rank)
    }

    /// How many entries the full table holds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured common-set bound.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Load a corpus from a string, using the same line format as
    /// [`FrequencyCorpus::load`].
    pub fn from_str_source(source: &str, top_n: usize) -> Result<FrequencyCorpus> {
        FrequencyCorpus::load(io::Cursor::new(source), top_n)
    }

    fn entry_for(&self, word: &str) -> Option<&FrequencyEntry> {
        self.by_word
            .get(&word.to_lowercase())
            .map(|&i| &self.entries[i])
    }
}

/// Parse one `"<word> <frequency>"` line.  Returns `None` if the line
/// doesn't have exactly a word and an unsigned count.
fn parse_line(line: &str) -> Option<(String, u64)> {
    let mut parts = line.split_whitespace();
    let word = parts.next()?.trim().to_lowercase();
    let frequency = parts.next()?.parse::<u64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((word, frequency))
}

#[cfg(test)]
mod test {
    use super::*;

    const SMALL: &str = "the 23135851162\nof 13151942776\nand 12997637966\nMat 438929\n";

    #[test]
    fn ranks_follow_load_order() {
        let corpus = FrequencyCorpus::from_str_source(SMALL, 3).unwrap();
        assert_eq!(corpus.rank_of("the"), Some(1));
        assert_eq!(corpus.rank_of("of"), Some(2));
        assert_eq!(corpus.rank_of("mat"), Some(4));
        assert_eq!(corpus.len(), 4);
    }

    #[test]
    fn is_common_respects_top_n_and_case() {
        let corpus = FrequencyCorpus::from_str_source(SMALL, 3).unwrap();
        assert!(corpus.is_common("the"));
        assert!(corpus.is_common("The"));
        assert!(corpus.is_common("AND"));
        assert!(!corpus.is_common("mat"));
        assert!(!corpus.is_common("ephemeral"));
    }

    #[test]
    fn frequency_lookup_covers_the_full_table() {
        let corpus = FrequencyCorpus::from_str_source(SMALL, 3).unwrap();
        assert_eq!(corpus.frequency_of("mat"), Some(438929));
        assert_eq!(corpus.frequency_of("Mat"), Some(438929));
        assert_eq!(corpus.frequency_of("missing"), None);
    }

    #[test]
    fn is_common_and_frequency_of_agree() {
        let corpus = FrequencyCorpus::from_str_source(SMALL, 2).unwrap();
        for entry in &["the", "of", "and", "mat"] {
            if corpus.is_common(entry) {
                assert!(corpus.frequency_of(entry).is_some());
                assert!(corpus.rank_of(entry).unwrap() <= corpus.top_n());
            }
        }
    }

    #[test]
    fn duplicate_words_keep_their_first_rank() {
        let corpus =
            FrequencyCorpus::from_str_source("the 10\nthe 9\ncat 8\n", 10).unwrap();
        assert_eq!(corpus.rank_of("the"), Some(1));
        assert_eq!(corpus.frequency_of("the"), Some(10));
        assert_eq!(corpus.rank_of("cat"), Some(2));
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn bad_lines_fail_the_load() {
        let err = FrequencyCorpus::from_str_source("the ten\n", 10).unwrap_err();
        match err {
            Error::CorpusParse { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(FrequencyCorpus::from_str_source("lonely\n", 10).is_err());
        assert!(FrequencyCorpus::from_str_source("too many parts 3\n", 10).is_err());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let corpus = FrequencyCorpus::from_str_source("the 10\n\ncat 8\n", 10).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.rank_of("cat"), Some(2));
    }
}
