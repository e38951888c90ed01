//! The input contract with the OCR collaborator.
//!
//! The OCR engine itself lives outside this crate.  Whatever engine the
//! platform provides, its output is handed to us as an [`OcrResult`]:
//! the full recognized text (which the grammatical tagger needs for
//! sentence context) plus one [`RawOcrElement`] per detected fragment,
//! with its box in source-image pixel coordinates.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// One OCR-detected text fragment and where it sits on the image.
///
/// Multiple elements may share identical text; see
/// [`crate::reconcile::build_bounds_map`] for how duplicates resolve.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RawOcrElement {
    /// The fragment text, exactly as the OCR engine reported it.
    pub text: String,

    /// The fragment's bounding box in source-image pixel coordinates.
    pub bounds: Rect,
}

/// Everything the OCR collaborator produced for one captured image.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OcrResult {
    /// The full recognized text of the page.
    pub text: String,

    /// The per-fragment geometry, in the order the engine reported it.
    pub elements: Vec<RawOcrElement>,
}

/// Extract a quick, normalized word list from recognized text, without
/// running the full pipeline: split on anything that isn't a letter or
/// an apostrophe, drop empty pieces, and lowercase the rest.
///
/// This is the cheap path used for a live "words we can see" display
/// while the user is still aiming the camera.
pub fn extract_plain_words(text: &str) -> Vec<String> {
    lazy_static! {
        static ref NON_WORD: Regex = Regex::new(r"[^\p{L}']+").unwrap();
    }
    NON_WORD
        .split(text)
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}
