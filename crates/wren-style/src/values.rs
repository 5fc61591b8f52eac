//! Style value types consumed by layout.
//!
//! [CSS Values and Units Module Level 4](https://www.w3.org/TR/css-values-4/)

use serde::Serialize;
use strum_macros::Display;
use wren_box::Px;

/// The default line height, in logical pixels, when a widget declares none.
///
/// [§ 10.8.1 Leading and half-leading](https://www.w3.org/TR/CSS2/visudet.html#leading)
/// recommends a used value for `line-height: normal` between 1.0 and 1.2
/// times the font size; 16px body text at 1.2 rounds to 19, but the widget
/// default matches the UA convention of one 16px line.
pub const DEFAULT_LINE_HEIGHT_PX: Px = 16;

/// [§ 10.5 Content height](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
///
/// The logical height of a box: either derived from content (`Auto`) or a
/// fixed pixel value. A fixed value set by the height negotiation applies to
/// the border box, since the negotiation compares and assigns frame heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LogicalHeight {
    /// "The height depends on the values of other properties."
    #[default]
    Auto,
    /// A definite logical height in pixels.
    Fixed(Px),
}

impl LogicalHeight {
    /// Whether this is the `Auto` variant.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The fixed value, if any.
    #[must_use]
    pub const fn fixed(&self) -> Option<Px> {
        match self {
            Self::Auto => None,
            Self::Fixed(value) => Some(*value),
        }
    }
}

/// [§ 3 Overflow](https://www.w3.org/TR/css-overflow-3/#overflow-properties)
///
/// "The overflow-x and overflow-y properties specify whether a box's content
/// is clipped to its padding edge, and if so, whether it is a scroll
/// container."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum Overflow {
    /// Content is not clipped.
    #[default]
    Visible,
    /// Content is clipped; no scrolling interface.
    Hidden,
    /// Content is clipped; the box is a scroll container.
    Scroll,
    /// Content is clipped; scrolling interface appears as needed.
    Auto,
}

/// [§ 5.1 'text-overflow'](https://www.w3.org/TR/css-overflow-3/#text-overflow)
///
/// "This property specifies rendering when inline content overflows its
/// line box edge."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum TextTruncation {
    /// Overflowing text is clipped at the box edge.
    #[default]
    Clip,
    /// Overflowing text is elided with an ellipsis.
    Ellipsis,
}

/// [§ 3 White Space Collapsing](https://www.w3.org/TR/css-text-3/#white-space-property)
///
/// Only the two values the widget distinguishes: collapsible multi-line
/// text, and the single-line preserved mode forced onto the inner text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum WhiteSpace {
    /// Collapse white space; wrap lines as needed.
    #[default]
    Normal,
    /// Preserve white space; never wrap. Single-line text controls force
    /// this on their inner text box.
    Pre,
}

/// [CSS Basic User Interface 'user-modify'](https://www.w3.org/TR/css-ui-3/)
///
/// Whether the user can edit a box's content. The widget's wrapper boxes
/// are read-only even when the control itself is editable, so that only the
/// inner text box accepts edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum UserModify {
    /// Content is editable.
    #[default]
    ReadWrite,
    /// Content cannot be edited.
    ReadOnly,
}
