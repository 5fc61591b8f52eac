//! Styles derived for the widget's shadow boxes.
//!
//! The inner boxes of a text control are not styled by author CSS; their
//! styles are derived from the control's own computed style with a fixed
//! set of adjustments that keep the widget editable, single-line, and
//! clipped.

use wren_box::Px;

use crate::computed::BoxStyle;
use crate::font::FontMetrics;
use crate::values::{LogicalHeight, Overflow, TextTruncation, UserModify, WhiteSpace};
use crate::writing_mode::Direction;

/// Whether the control's text should be elided with an ellipsis.
///
/// True iff the control is not focused and its own style asks for ellipsis
/// truncation: a focused control always shows the caret position, so
/// truncation only applies to the blurred presentation.
#[must_use]
pub fn text_should_be_truncated(control: &BoxStyle, focused: bool) -> bool {
    !focused && control.text_truncation == TextTruncation::Ellipsis
}

/// Derive the inner text box's style from a base style.
///
/// `base` is the style the text box inherits from (the inner block's style
/// when the widget is decorated, otherwise the control's). `control` is the
/// control's own style; `desired_logical_height` is the active clamped
/// height from the most recent negotiation, if any.
#[must_use]
pub fn derive_inner_text_style(
    base: &BoxStyle,
    control: &BoxStyle,
    font: &dyn FontMetrics,
    focused: bool,
    desired_logical_height: Option<Px>,
) -> BoxStyle {
    let mut style = base.clone();

    // A single-line control never wraps and never shows its overflow.
    style.white_space = WhiteSpace::Pre;
    style.overflow_x = Overflow::Hidden;
    style.overflow_y = Overflow::Hidden;
    style.text_truncation = if text_should_be_truncated(control, focused) {
        TextTruncation::Ellipsis
    } else {
        TextTruncation::Clip
    };

    if let Some(height) = desired_logical_height {
        style.logical_height = LogicalHeight::Fixed(height);
    }

    // Do not allow line-height to be smaller than the font's natural
    // spacing; glyphs would overdraw their line box otherwise.
    if font.line_spacing() > control.line_height {
        style.line_height = font.line_spacing();
    }

    style
}

/// Derive the inner alignment block's style from a base style.
///
/// The wrapper stretches to fill the container, shrinks all the way to
/// zero when the container is narrow, and is read-only even when the
/// control itself is editable.
#[must_use]
pub fn derive_inner_block_style(base: &BoxStyle) -> BoxStyle {
    let mut style = base.clone();
    style.flex_grow = 1.0;
    // min-width: 0 is needed for correct shrinking.
    style.min_logical_width = Some(0);
    style.direction = Direction::Ltr;
    style.user_modify = UserModify::ReadOnly;
    style
}
