//! Resolving a tap on the displayed image to the word under it.

use log::{debug, warn};

use crate::geom::{PointF, Scale, SizeF};
use crate::word::Word;

/// Resolve a display-space tap to the strange word under it, if any.
///
/// The displayed image is the captured image scaled independently on
/// each axis, so the tap is tested against each word's box mapped
/// through those scale factors.  Only strange words with bounds
/// participate; ordinary words aren't selectable.  Words are tested in
/// pipeline order and the first containing box wins; there is no
/// z-order to break ties with, so first-match is the documented
/// tie-break for overlapping boxes.  Containment is closed: a tap
/// exactly on an edge still counts.
pub fn resolve_tap<'a>(
    tap: PointF,
    display: SizeF,
    image: SizeF,
    words: &'a [Word],
) -> Option<&'a Word> {
    if display.width <= 0.0 || display.height <= 0.0
        || image.width <= 0.0 || image.height <= 0.0
    {
        warn!("degenerate sizes: display {:?}, image {:?}", display, image);
        return None;
    }
    let scale = Scale::from_sizes(display, image);
    for word in words {
        if !word.is_strange {
            continue;
        }
        if let Some(bounds) = &word.bounds {
            if bounds.to_display(&scale).contains(tap) {
                debug!("tap {:?} selected '{}'", tap, word.text);
                return Some(word);
            }
        }
    }
    None
}
