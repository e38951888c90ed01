//! Geometry types shared by the reconciliation and hit-testing code.
//!
//! Boxes live in source-image pixel coordinates until they're explicitly
//! mapped to display space with a [`Scale`].

use serde::{Deserialize, Serialize};

/// A word's bounding rectangle, in source-image pixel coordinates.
///
/// Invariant: `left <= right` and `top <= bottom`, enforced at
/// construction.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Rect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Rect {
    /// Create a rectangle from left, top, right and bottom coordinates.
    /// Panics if the rectangle has negative width or height.
    pub fn ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Rect {
        assert!(left <= right, "rectangle has negative width");
        assert!(top <= bottom, "rectangle has negative height");
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The left-most edge of the rectangle.
    pub fn left(&self) -> i32 {
        self.left
    }

    /// The top-most edge of the rectangle.
    pub fn top(&self) -> i32 {
        self.top
    }

    /// The right-most edge of the rectangle.
    pub fn right(&self) -> i32 {
        self.right
    }

    /// The bottom-most edge of the rectangle.
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// The width of the rectangle.
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// The height of the rectangle.
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Does this rectangle have area zero?
    pub fn is_empty(&self) -> bool {
        self.left == self.right || self.top == self.bottom
    }

    /// Map this rectangle to display space by multiplying each coordinate
    /// by the respective scale factor.
    pub fn to_display(&self, scale: &Scale) -> RectF {
        RectF {
            left: cast::f32(self.left) * scale.x,
            top: cast::f32(self.top) * scale.y,
            right: cast::f32(self.right) * scale.x,
            bottom: cast::f32(self.bottom) * scale.y,
        }
    }
}

/// A rectangle in display-space units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    /// The left-most edge of the rectangle.
    pub left: f32,
    /// The top-most edge of the rectangle.
    pub top: f32,
    /// The right-most edge of the rectangle.
    pub right: f32,
    /// The bottom-most edge of the rectangle.
    pub bottom: f32,
}

impl RectF {
    /// Is the specified point in this rectangle?  Containment is closed:
    /// points on the edge count as inside.
    pub fn contains(&self, point: PointF) -> bool {
        self.left <= point.x
            && point.x <= self.right
            && self.top <= point.y
            && point.y <= self.bottom
    }
}

/// A point in display-space units, typically a tap location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointF {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl PointF {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> PointF {
        PointF { x, y }
    }
}

/// The size of a display surface or source image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeF {
    /// Width in the surface's own units.
    pub width: f32,
    /// Height in the surface's own units.
    pub height: f32,
}

impl SizeF {
    /// Create a new size.
    pub fn new(width: f32, height: f32) -> SizeF {
        SizeF { width, height }
    }
}

/// Scale factors mapping image-space coordinates to display-space
/// coordinates.  The two axes are scaled independently: the display
/// surface and the source image need not share an aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    x: f32,
    y: f32,
}

impl Scale {
    /// Compute the scale factors which map `image` coordinates onto
    /// `display` coordinates.
    pub fn from_sizes(display: SizeF, image: SizeF) -> Scale {
        Scale {
            x: display.width / image.width,
            y: display.height / image.height,
        }
    }

    /// The horizontal scale factor.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// The vertical scale factor.
    pub fn y(&self) -> f32 {
        self.y
    }
}

#[cfg(test)]
mod test {
    use quickcheck::{quickcheck, Arbitrary, Gen};

    use super::*;

    impl Arbitrary for Rect {
        fn arbitrary(g: &mut Gen) -> Self {
            let left = i32::from(i16::arbitrary(g));
            let top = i32::from(i16::arbitrary(g));
            let width = i32::from(u8::arbitrary(g));
            let height = i32::from(u8::arbitrary(g));
            Rect::ltrb(left, top, left + width, top + height)
        }
    }

    quickcheck! {
        fn rect_width_and_height_are_valid(r: Rect) -> bool {
            r.width() == r.right() - r.left() &&
                r.height() == r.bottom() - r.top() &&
                r.width() >= 0 && r.height() >= 0
        }

        fn rect_corners_are_contained_after_scaling(r: Rect) -> bool {
            let scale = Scale::from_sizes(
                SizeF::new(400.0, 300.0),
                SizeF::new(800.0, 600.0),
            );
            let d = r.to_display(&scale);
            d.contains(PointF::new(d.left, d.top)) &&
                d.contains(PointF::new(d.right, d.bottom))
        }
    }

    #[test]
    #[should_panic(expected = "negative width")]
    fn ltrb_rejects_inverted_rects() {
        Rect::ltrb(10, 0, 0, 10);
    }

    #[test]
    fn to_display_scales_each_axis_independently() {
        let scale = Scale::from_sizes(
            SizeF::new(200.0, 600.0),
            SizeF::new(100.0, 100.0),
        );
        let r = Rect::ltrb(10, 20, 30, 40);
        let d = r.to_display(&scale);
        assert_eq!(d.left, 20.0);
        assert_eq!(d.top, 120.0);
        assert_eq!(d.right, 60.0);
        assert_eq!(d.bottom, 240.0);
    }

    #[test]
    fn containment_is_closed() {
        let r = RectF {
            left: 0.0,
            top: 0.0,
            right: 10.0,
            bottom: 10.0,
        };
        assert!(r.contains(PointF::new(0.0, 0.0)));
        assert!(r.contains(PointF::new(10.0, 10.0)));
        assert!(r.contains(PointF::new(5.0, 5.0)));
        assert!(!r.contains(PointF::new(10.1, 5.0)));
    }
}
