//! Font metrics consumed by layout.
//!
//! [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)

use wren_box::Px;

/// Metrics of the control's primary font.
///
/// Font shaping and metric computation are outside this engine; layout only
/// consumes the handful of aggregates it needs through this trait.
pub trait FontMetrics {
    /// The average advance width of a glyph, in logical pixels.
    ///
    /// Used as the per-character contribution to the control's preferred
    /// content width.
    fn average_char_width(&self) -> f32;

    /// The widest glyph advance in the font, in logical pixels.
    ///
    /// Zero or negative means "unknown"; the preferred-width computation
    /// then skips its wide-glyph correction.
    fn max_char_width(&self) -> f32;

    /// The font's natural line spacing (ascent + descent + line gap), in
    /// logical pixels.
    ///
    /// [§ 10.8.1 Leading and half-leading](https://www.w3.org/TR/CSS2/visudet.html#leading)
    fn line_spacing(&self) -> Px;
}

/// Fixed font metrics.
///
/// Used when no font backend is attached, and in tests: the values are
/// supplied up front instead of being measured from glyph tables.
#[derive(Debug, Clone, Copy)]
pub struct FixedFontMetrics {
    /// Average glyph advance width.
    pub average_char_width: f32,
    /// Widest glyph advance width.
    pub max_char_width: f32,
    /// Natural line spacing.
    pub line_spacing: Px,
}

impl FontMetrics for FixedFontMetrics {
    fn average_char_width(&self) -> f32 {
        self.average_char_width
    }

    fn max_char_width(&self) -> f32 {
        self.max_char_width
    }

    fn line_spacing(&self) -> Px {
        self.line_spacing
    }
}
