//! Reconciling OCR geometry with the tagger's tokenization.
//!
//! The OCR engine reports per-fragment boxes; the grammatical tagger
//! re-tokenizes the full text and may segment it differently.  We join
//! the two by literal text: build a map from fragment text to box, then
//! look tokens up by exact match.  Tokens with no matching fragment
//! simply get no bounds.

use std::collections::HashMap;

use log::trace;

use crate::geom::Rect;
use crate::ocr::RawOcrElement;

/// Build the text-to-box map for one scan.
///
/// Elements are inserted in OCR-reported order, and when the same
/// literal text appears more than once, the last occurrence wins.  This
/// is a known limitation of joining by text instead of by position:
/// duplicate words on a page all resolve to one arbitrary box.  Whether
/// the join should instead be positional is an open product question,
/// so we keep the overwrite semantics rather than quietly changing
/// them.
pub fn build_bounds_map(elements: &[RawOcrElement]) -> HashMap<String, Rect> {
    let mut bounds = HashMap::new();
    for element in elements {
        trace!("element: '{}' with bounds: {:?}", element.text, element.bounds);
        bounds.insert(element.text.clone(), element.bounds);
    }
    bounds
}

#[cfg(test)]
mod test {
    use super::*;

    fn element(text: &str, left: i32) -> RawOcrElement {
        RawOcrElement {
            text: text.to_owned(),
            bounds: Rect::ltrb(left, 0, left + 40, 20),
        }
    }

    #[test]
    fn maps_each_text_to_its_box() {
        let map = build_bounds_map(&[element("cat", 0), element("mat", 100)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["cat"], Rect::ltrb(0, 0, 40, 20));
        assert_eq!(map["mat"], Rect::ltrb(100, 0, 140, 20));
    }

    #[test]
    fn duplicate_text_keeps_the_last_box() {
        let map = build_bounds_map(&[element("bank", 0), element("bank", 200)]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["bank"], Rect::ltrb(200, 0, 240, 20));
    }

    #[test]
    fn lookup_is_by_exact_text() {
        let map = build_bounds_map(&[element("Bank", 0)]);
        assert!(map.get("bank").is_none());
        assert!(map.get("Bank").is_some());
    }
}
