//! Writing mode and inline direction.
//!
//! [§ 2 Block Flow Direction](https://www.w3.org/TR/css-writing-modes-4/#block-flow)

use serde::Serialize;

/// [§ 2 Block Flow Direction](https://www.w3.org/TR/css-writing-modes-4/#block-flow)
///
/// "The writing-mode property specifies whether lines of text are laid out
/// horizontally or vertically and the direction in which blocks progress."
///
/// Box geometry inside the widget is always expressed in logical
/// coordinates; the writing mode only matters at the scroll boundary, where
/// a writing-mode-relative scroll direction must be translated to a
/// physical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum WritingMode {
    /// [§ 2](https://www.w3.org/TR/css-writing-modes-4/#valdef-writing-mode-horizontal-tb)
    ///
    /// "Top-to-bottom block flow direction."
    ///
    /// Mapping:
    ///   - block-start  → top
    ///   - block-end    → bottom
    #[default]
    HorizontalTb,

    /// [§ 2](https://www.w3.org/TR/css-writing-modes-4/#valdef-writing-mode-vertical-rl)
    ///
    /// "Right-to-left block flow direction." The block axis is flipped:
    /// block-start maps to the right edge.
    ///
    /// Mapping:
    ///   - block-start  → right
    ///   - block-end    → left
    VerticalRl,

    /// [§ 2](https://www.w3.org/TR/css-writing-modes-4/#valdef-writing-mode-vertical-lr)
    ///
    /// "Left-to-right block flow direction."
    ///
    /// Mapping:
    ///   - block-start  → left
    ///   - block-end    → right
    VerticalLr,
}

impl WritingMode {
    /// Whether lines of text are laid out horizontally.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalTb)
    }

    /// Whether the block axis runs against the physical axis direction
    /// (vertical-rl: blocks progress right-to-left).
    #[must_use]
    pub const fn is_flipped_blocks(self) -> bool {
        matches!(self, Self::VerticalRl)
    }
}

/// [§ 2.1 'direction'](https://www.w3.org/TR/css-writing-modes-4/#direction)
///
/// "This property specifies the inline base direction or directionality of
/// any bidi paragraph, embedding, isolate, or override established by the
/// box."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Direction {
    /// Left-to-right inline progression.
    #[default]
    Ltr,
    /// Right-to-left inline progression.
    Rtl,
}

impl Direction {
    /// Whether the inline base direction is left-to-right.
    #[must_use]
    pub const fn is_ltr(self) -> bool {
        matches!(self, Self::Ltr)
    }
}
