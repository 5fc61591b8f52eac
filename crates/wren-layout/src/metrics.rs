//! Preferred-width and control-height computation.
//!
//! The control's preferred content width is a character-count heuristic:
//! wide enough for the declared number of average-width characters, with a
//! correction for the font's widest glyph, plus the trailing control's
//! extent when the declared size is meant to include decorations.

use wren_box::{BoxTree, Px};
use wren_style::{FontMetrics, StyleSet};

/// The character-count factor used when the widget declares no size.
pub const DEFAULT_SIZE_FACTOR: i32 = 20;

/// The control's preferred content logical width.
///
/// `char_width` is the average advance width of the control's font;
/// `declared_size` is the widget's declared character count, if any; zero
/// and negative declarations fall back to [`DEFAULT_SIZE_FACTOR`];
/// `include_decoration` adds the spin button's border-and-padding extent
/// and its style-declared width — declared, because preferred widths are
/// computed before the spin button has ever been laid out.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn preferred_content_logical_width(
    tree: &BoxTree,
    styles: &StyleSet,
    font: &dyn FontMetrics,
    char_width: f32,
    declared_size: Option<i32>,
    include_decoration: bool,
) -> Px {
    let factor = declared_size
        .filter(|&size| size > 0)
        .unwrap_or(DEFAULT_SIZE_FACTOR);
    let mut result = (char_width * factor as f32).ceil();

    // Text inputs get some extra room beyond the naive factor product so a
    // run of wide glyphs still fits its declared character count.
    let max_char_width = font.max_char_width();
    if max_char_width > 0.0 {
        result += max_char_width - char_width;
    }

    if include_decoration
        && let Some(spin_button) = tree.spin_button()
    {
        let metrics = tree.node(spin_button).metrics;
        result += metrics.border_and_padding_logical_width() as f32;
        result += styles.style(spin_button).logical_width.unwrap_or(0) as f32;
    }

    result.ceil() as Px
}

/// The control's logical height for a line height and a non-content
/// (border plus padding) extent.
#[must_use]
pub const fn control_logical_height(line_height: Px, non_content_height: Px) -> Px {
    line_height + non_content_height
}
