//! This crate turns a photographed page of text into a set of
//! interactively-selectable, classified words.  Each recognized token is
//! reconciled with its on-image location, tagged grammatically, checked
//! for spelling, ranked against a frequency corpus, and classified as
//! ordinary or "strange": uncommon enough to be worth defining for a
//! reader building vocabulary.
//!
//! The camera, the OCR engine, the grammatical tagger and the spelling
//! dictionary all live outside this crate.  OCR output arrives as a
//! plain [`OcrResult`] value; the tagger and dictionary plug in through
//! the [`Tagger`] and [`SpellingDictionary`] traits.
//!
//! ## Example code
//!
//! ```
//! use std::sync::Arc;
//!
//! use wordscan::{
//!     FrequencyCorpus, OcrResult, PointF, RawOcrElement, Rect, SizeF,
//!     SpellingDictionary, Tagger, Token, WordPipeline,
//! };
//!
//! // Stand-ins for the platform's tagger and dictionary engines.
//! struct SimpleTagger;
//! impl Tagger for SimpleTagger {
//!     fn tag(&self, text: &str) -> wordscan::Result<Vec<Token>> {
//!         Ok(text.split_whitespace().map(|t| Token::new(t, "NN")).collect())
//!     }
//! }
//!
//! struct WordList(Vec<&'static str>);
//! impl SpellingDictionary for WordList {
//!     fn is_correct(&self, word: &str) -> bool { self.0.iter().any(|&k| k == word) }
//!     fn suggest(&self, _word: &str) -> Vec<String> { vec![] }
//! }
//!
//! let corpus = Arc::new(FrequencyCorpus::from_str_source(
//!     "the 23135851162\ncat 390564835\nsat 52765151\n",
//!     3,
//! ).unwrap());
//! let pipeline = WordPipeline::new(
//!     corpus,
//!     SimpleTagger,
//!     WordList(vec!["the", "cat", "sat", "ephemeral"]),
//! );
//!
//! let ocr = OcrResult {
//!     text: "the ephemeral cat sat".to_owned(),
//!     elements: vec![RawOcrElement {
//!         text: "ephemeral".to_owned(),
//!         bounds: Rect::ltrb(40, 0, 220, 30),
//!     }],
//! };
//! let words = pipeline.process(&ocr).unwrap();
//! let strange: Vec<_> = words.iter().filter(|w| w.is_strange).collect();
//! assert_eq!(strange.len(), 1);
//! assert_eq!(strange[0].text, "ephemeral");
//!
//! // When the user taps the displayed image, resolve the tap to a word.
//! let hit = wordscan::resolve_tap(
//!     PointF::new(65.0, 10.0),
//!     SizeF::new(400.0, 300.0),   // display surface
//!     SizeF::new(800.0, 600.0),   // captured image
//!     &words,
//! );
//! assert_eq!(hit.map(|w| w.text.as_str()), Some("ephemeral"));
//! ```
//!
//! ## Lifecycle
//!
//! Load a [`FrequencyCorpus`] once at application start and abort if
//! loading fails; there is no degraded mode without it, and the same is
//! true of the spelling dictionary.  The pipeline itself is synchronous
//! and side-effect-free; share one [`WordPipeline`] across scans, run
//! each scan on a background worker if the caller must not block, and
//! use a [`ScanGate`] to drop any scan that finishes after a newer one
//! has superseded it.

#![warn(missing_docs)]

pub mod corpus;
pub mod errors;
pub mod filter;
pub mod geom;
pub mod hit;
pub mod ocr;
pub mod pipeline;
pub mod reconcile;
pub mod scan;
pub mod spell;
pub mod strange;
pub mod word;

pub use self::corpus::{FrequencyCorpus, FrequencyEntry, DEFAULT_TOP_WORDS};
pub use self::errors::{Error, Result};
pub use self::geom::{PointF, Rect, RectF, Scale, SizeF};
pub use self::hit::resolve_tap;
pub use self::ocr::{extract_plain_words, OcrResult, RawOcrElement};
pub use self::pipeline::{Tagger, WordPipeline};
pub use self::scan::{ScanGate, ScanTicket};
pub use self::spell::{SpellCheckEngine, SpellCheckResult, SpellingDictionary};
pub use self::word::{Token, Word};
