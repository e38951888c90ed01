//! Error-handling for this crate.

use std::io;
use std::result;

use thiserror::Error;

/// Our standard result type.
pub type Result<T, E = Error> = result::Result<T, E>;

/// A boxed error returned by one of our collaborators.
type Source = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors which can be returned by this crate.
///
/// The first three variants are fatal at startup: classification without a
/// frequency corpus, or suggestion ranking without a spelling dictionary,
/// is not offered, so there is no degraded mode. `Recognition` and `Tagger`
/// are per-scan failures: the scan that hit them produces no words, earlier
/// results are left alone, and the caller goes back to waiting for a new
/// capture.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// We could not read the frequency corpus stream.
    #[error("could not read frequency corpus")]
    #[non_exhaustive]
    CorpusRead {
        /// The underlying error.
        source: io::Error,
    },

    /// We could not parse a line of the frequency corpus.
    #[error("could not parse frequency corpus line {line}: {text:?}")]
    #[non_exhaustive]
    CorpusParse {
        /// The 1-based line number that failed to parse.
        line: usize,

        /// The offending line.
        text: String,
    },

    /// The spelling dictionary failed to initialize.
    #[error("could not initialize spelling dictionary")]
    #[non_exhaustive]
    DictionaryInit {
        /// The underlying error.
        source: Source,
    },

    /// Text recognition failed for this scan.
    #[error("text recognition failed")]
    #[non_exhaustive]
    Recognition {
        /// The underlying error.
        source: Source,
    },

    /// The grammatical tagger failed for this scan.
    #[error("could not tag recognized text")]
    #[non_exhaustive]
    Tagger {
        /// The underlying error.
        source: Source,
    },
}

impl Error {
    /// Wrap an error reported by a spelling-dictionary collaborator that
    /// failed to initialize.
    pub fn dictionary_init<E: Into<Source>>(source: E) -> Error {
        Error::DictionaryInit {
            source: source.into(),
        }
    }

    /// Wrap an error reported by the OCR collaborator.
    pub fn recognition<E: Into<Source>>(source: E) -> Error {
        Error::Recognition {
            source: source.into(),
        }
    }

    /// Wrap an error reported by the grammatical-tagger collaborator.
    pub fn tagger<E: Into<Source>>(source: E) -> Error {
        Error::Tagger {
            source: source.into(),
        }
    }

    /// Is this error fatal at startup, as opposed to a recoverable,
    /// per-scan failure?
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::CorpusRead { .. }
            | Error::CorpusParse { .. }
            | Error::DictionaryInit { .. } => true,
            Error::Recognition { .. } | Error::Tagger { .. } => false,
        }
    }
}
