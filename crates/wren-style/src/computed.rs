//! The per-box style descriptor seen by layout.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//!
//! Cascade resolution happens outside this engine; a [`BoxStyle`] is the
//! already-computed slice of style that layout consumes. Unlike the source
//! of these values, it is never mutated by layout — heights injected during
//! negotiation travel in an explicit
//! [`LayoutOverrides`](crate::overrides::LayoutOverrides) value instead.

use std::collections::HashMap;

use serde::Serialize;
use wren_box::{BoxId, Px};

use crate::values::{
    DEFAULT_LINE_HEIGHT_PX, LogicalHeight, Overflow, TextTruncation, UserModify, WhiteSpace,
};
use crate::writing_mode::{Direction, WritingMode};

/// Computed style values for one box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStyle {
    /// [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    ///
    /// The declared logical height. `Auto` derives the height from content.
    pub logical_height: LogicalHeight,

    /// [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    ///
    /// The declared logical width. `None` means `auto`: fill the available
    /// inline space.
    pub logical_width: Option<Px>,

    /// [§ 2.1 'direction'](https://www.w3.org/TR/css-writing-modes-4/#direction)
    pub direction: Direction,

    /// [§ 2 'writing-mode'](https://www.w3.org/TR/css-writing-modes-4/#block-flow)
    ///
    /// Consulted only when translating writing-mode-relative scroll
    /// directions to physical ones.
    pub writing_mode: WritingMode,

    /// [§ 3 'overflow-x'](https://www.w3.org/TR/css-overflow-3/#overflow-properties)
    pub overflow_x: Overflow,

    /// [§ 3 'overflow-y'](https://www.w3.org/TR/css-overflow-3/#overflow-properties)
    pub overflow_y: Overflow,

    /// [§ 10.8 'line-height'](https://www.w3.org/TR/CSS2/visudet.html#line-height)
    ///
    /// The style-declared line height in logical pixels. Doubles as the
    /// widget's declared text-block logical height: when the inner text
    /// overflows its limit, it is clamped to one line at this height.
    pub line_height: Px,

    /// [§ 5.1 'text-overflow'](https://www.w3.org/TR/css-overflow-3/#text-overflow)
    pub text_truncation: TextTruncation,

    /// [§ 3 'white-space'](https://www.w3.org/TR/css-text-3/#white-space-property)
    pub white_space: WhiteSpace,

    /// Whether the user may edit the box's content.
    pub user_modify: UserModify,

    /// [§ 7.2 'flex-grow'](https://www.w3.org/TR/css-flexbox-1/#flex-grow-property)
    ///
    /// "The flex-grow property sets the flex grow factor." The inner block
    /// is the only box in the widget that stretches.
    pub flex_grow: f32,

    /// [§ 10.4 'min-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    ///
    /// `None` means no minimum constraint. The derived inner-block style
    /// pins this to zero so the wrapper shrinks correctly.
    pub min_logical_width: Option<Px>,
}

impl BoxStyle {
    /// The initial value of every property.
    pub const INITIAL: Self = Self {
        logical_height: LogicalHeight::Auto,
        logical_width: None,
        direction: Direction::Ltr,
        writing_mode: WritingMode::HorizontalTb,
        overflow_x: Overflow::Visible,
        overflow_y: Overflow::Visible,
        line_height: DEFAULT_LINE_HEIGHT_PX,
        text_truncation: TextTruncation::Clip,
        white_space: WhiteSpace::Normal,
        user_modify: UserModify::ReadWrite,
        flex_grow: 0.0,
        min_logical_width: None,
    };
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::INITIAL
    }
}

static INITIAL_STYLE: BoxStyle = BoxStyle::INITIAL;

/// The computed styles for every box in a widget tree.
#[derive(Debug, Clone, Default)]
pub struct StyleSet {
    styles: HashMap<BoxId, BoxStyle>,
}

impl StyleSet {
    /// An empty style set; every box resolves to [`BoxStyle::INITIAL`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the computed style for a box, replacing any previous style.
    pub fn set(&mut self, id: BoxId, style: BoxStyle) {
        let _ = self.styles.insert(id, style);
    }

    /// The computed style for a box. Boxes with no recorded style resolve
    /// to [`BoxStyle::INITIAL`].
    #[must_use]
    pub fn style(&self, id: BoxId) -> &BoxStyle {
        self.styles.get(&id).unwrap_or(&INITIAL_STYLE)
    }
}
