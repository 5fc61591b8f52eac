//! Geometry types for the widget box tree.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//!
//! All coordinates are *logical* pixels: distances along the inline and
//! block axes, independent of the writing mode. They are stored as whole
//! integer pixels ([`Px`]) so that the odd-pixel rounding rules used by the
//! centering pass are exact — integer arithmetic never accumulates the
//! floating-point drift a repeated `f32` centering adjustment would.

use serde::Serialize;

/// A logical pixel distance.
///
/// Signed: positions may be negative (a trailing control deliberately placed
/// outside its parent's padding, a centered child shifted above its parent's
/// content origin).
pub type Px = i32;

/// A point in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Point {
    /// Inline-axis position.
    pub x: Px,
    /// Block-axis position.
    pub y: Px,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Construct a point from its inline and block coordinates.
    #[must_use]
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// This point shifted by `(dx, dy)`.
    #[must_use]
    pub const fn translated(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// This point with another point's coordinates subtracted.
    ///
    /// Used when re-expressing a point in a child box's coordinate frame:
    /// subtracting the child's origin (relative to the current frame) yields
    /// the same point relative to the child.
    #[must_use]
    pub const fn minus(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// A size in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Size {
    /// Inline-axis extent.
    pub width: Px,
    /// Block-axis extent.
    pub height: Px,
}

impl Size {
    /// Construct a size from its inline and block extents.
    #[must_use]
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// A rectangle positioned in logical coordinates.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rect {
    /// Inline-axis position of the leading corner.
    pub x: Px,
    /// Block-axis position of the leading corner.
    pub y: Px,
    /// Inline-axis extent.
    pub width: Px,
    /// Block-axis extent.
    pub height: Px,
}

impl Rect {
    /// Construct a rectangle from its origin and extents.
    #[must_use]
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle's origin.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// The rectangle's extents.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Inline-axis position one past the trailing edge.
    #[must_use]
    pub const fn right(&self) -> Px {
        self.x + self.width
    }

    /// Block-axis position one past the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> Px {
        self.y + self.height
    }

    /// Whether the point lies inside the rectangle.
    ///
    /// Edges follow the usual half-open convention: the leading edges are
    /// inside, the trailing edges are not.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// The smallest rectangle covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }

    /// This rectangle shifted by the given offset.
    #[must_use]
    pub const fn translated(self, by: Point) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Edge sizes for padding or border.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// The fields are named for the horizontal-tb writing mode the widget lays
/// out in: `top`/`bottom` are the block-start/block-end edges, `left`/`right`
/// the inline edges. Writing-mode translation happens only at the scroll
/// boundary, never in box geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EdgeSizes {
    /// Block-start edge size.
    pub top: Px,
    /// Inline-end edge size.
    pub right: Px,
    /// Block-end edge size.
    pub bottom: Px,
    /// Inline-start edge size.
    pub left: Px,
}

impl EdgeSizes {
    /// Edge sizes of zero on all four sides.
    pub const ZERO: Self = Self {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    /// The same size on all four edges.
    #[must_use]
    pub const fn uniform(size: Px) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }

    /// Total inline-axis extent (`left + right`).
    #[must_use]
    pub const fn inline_sum(&self) -> Px {
        self.left + self.right
    }

    /// Total block-axis extent (`top + bottom`).
    #[must_use]
    pub const fn block_sum(&self) -> Px {
        self.top + self.bottom
    }
}

/// The used geometry of one box: its frame plus the edge widths that carve
/// the content area out of it.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// Unlike a content-box representation, the *frame* (border box) is primary
/// here: the height negotiation compares and assigns border-box heights, so
/// the content box is derived by contraction rather than the border box by
/// expansion:
///
/// ```text
/// content.x      = frame.x + border.left + padding.left
/// content.y      = frame.y + border.top  + padding.top
/// content.width  = frame.width  - border.left - border.right
///                               - padding.left - padding.right
/// content.height = frame.height - border.top - border.bottom
///                               - padding.top - padding.bottom
/// ```
///
/// `frame.x`/`frame.y` are relative to the parent box's frame origin; the
/// root control's frame origin is the widget origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BoxMetrics {
    /// The border box: position relative to the parent's frame origin, and
    /// the box's full extents including border and padding.
    pub frame: Rect,
    /// Padding edge widths.
    pub padding: EdgeSizes,
    /// Border edge widths.
    pub border: EdgeSizes,
}

impl BoxMetrics {
    /// The content box, relative to this box's own frame origin.
    ///
    /// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
    /// "The content box contains the actual content of the element."
    #[must_use]
    pub const fn content_box(&self) -> Rect {
        Rect {
            x: self.border.left + self.padding.left,
            y: self.border.top + self.padding.top,
            width: self.content_logical_width(),
            height: self.content_logical_height(),
        }
    }

    /// Content-box inline extent.
    #[must_use]
    pub const fn content_logical_width(&self) -> Px {
        self.frame.width - self.border.inline_sum() - self.padding.inline_sum()
    }

    /// Content-box block extent.
    #[must_use]
    pub const fn content_logical_height(&self) -> Px {
        self.frame.height - self.border.block_sum() - self.padding.block_sum()
    }

    /// Combined border and padding inline extent.
    #[must_use]
    pub const fn border_and_padding_logical_width(&self) -> Px {
        self.border.inline_sum() + self.padding.inline_sum()
    }

    /// Combined border and padding block extent.
    #[must_use]
    pub const fn border_and_padding_logical_height(&self) -> Px {
        self.border.block_sum() + self.padding.block_sum()
    }

    /// Block-axis position of the bottom of the client area, relative to
    /// this box's frame origin.
    ///
    /// The client area is the border box shrunk by the borders only; the
    /// widget has no scrollbar gutters, so the client bottom sits exactly
    /// one border width above the frame bottom.
    #[must_use]
    pub const fn client_logical_bottom(&self) -> Px {
        self.frame.height - self.border.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_box_contracts_frame_by_border_and_padding() {
        let metrics = BoxMetrics {
            frame: Rect::new(10, 20, 100, 40),
            padding: EdgeSizes::uniform(3),
            border: EdgeSizes::uniform(2),
        };
        assert_eq!(metrics.content_box(), Rect::new(5, 5, 90, 30));
        assert_eq!(metrics.content_logical_width(), 90);
        assert_eq!(metrics.content_logical_height(), 30);
        assert_eq!(metrics.border_and_padding_logical_width(), 10);
        assert_eq!(metrics.client_logical_bottom(), 38);
    }

    #[test]
    fn rect_union_covers_both_operands() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(-4, 5, 6, 20);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(-4, 0, 14, 25));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(9, 9)));
        assert!(!r.contains(Point::new(10, 9)));
        assert!(!r.contains(Point::new(9, 10)));
    }
}
