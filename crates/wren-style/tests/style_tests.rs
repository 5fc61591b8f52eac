//! Integration tests for style values, overrides, and derived styles.

use wren_box::BoxId;
use wren_style::{
    BoxStyle, Direction, FixedFontMetrics, LayoutOverrides, LogicalHeight, Overflow, StyleSet,
    TextTruncation, UserModify, WhiteSpace, derive_inner_block_style, derive_inner_text_style,
    text_should_be_truncated,
};

fn metrics(line_spacing: i32) -> FixedFontMetrics {
    FixedFontMetrics {
        average_char_width: 8.0,
        max_char_width: 12.0,
        line_spacing,
    }
}

#[test]
fn style_set_falls_back_to_initial_values() {
    let styles = StyleSet::new();
    let style = styles.style(BoxId(7));
    assert_eq!(style, &BoxStyle::INITIAL);
    assert!(style.logical_height.is_auto());
}

#[test]
fn inner_text_style_forces_single_line_clipping() {
    let base = BoxStyle::INITIAL;
    let control = BoxStyle::INITIAL;
    let style = derive_inner_text_style(&base, &control, &metrics(10), true, None);

    assert_eq!(style.white_space, WhiteSpace::Pre);
    assert_eq!(style.overflow_x, Overflow::Hidden);
    assert_eq!(style.overflow_y, Overflow::Hidden);
    assert_eq!(style.text_truncation, TextTruncation::Clip);
    assert!(style.logical_height.is_auto());
}

#[test]
fn inner_text_style_applies_the_negotiated_height() {
    let base = BoxStyle::INITIAL;
    let control = BoxStyle::INITIAL;
    let style = derive_inner_text_style(&base, &control, &metrics(10), true, Some(24));
    assert_eq!(style.logical_height, LogicalHeight::Fixed(24));
}

#[test]
fn inner_text_style_truncates_only_when_blurred() {
    let base = BoxStyle::INITIAL;
    let control = BoxStyle {
        text_truncation: TextTruncation::Ellipsis,
        ..BoxStyle::INITIAL
    };

    assert!(text_should_be_truncated(&control, false));
    assert!(!text_should_be_truncated(&control, true));

    let blurred = derive_inner_text_style(&base, &control, &metrics(10), false, None);
    assert_eq!(blurred.text_truncation, TextTruncation::Ellipsis);

    let focused = derive_inner_text_style(&base, &control, &metrics(10), true, None);
    assert_eq!(focused.text_truncation, TextTruncation::Clip);
}

#[test]
fn inner_text_line_height_is_floored_at_font_spacing() {
    let base = BoxStyle {
        line_height: 18,
        ..BoxStyle::INITIAL
    };
    let control = BoxStyle {
        line_height: 20,
        ..BoxStyle::INITIAL
    };

    // Font spacing below the control's line height: inherited value wins.
    let style = derive_inner_text_style(&base, &control, &metrics(16), true, None);
    assert_eq!(style.line_height, 18);

    // Font spacing above the control's line height: the font wins.
    let style = derive_inner_text_style(&base, &control, &metrics(26), true, None);
    assert_eq!(style.line_height, 26);
}

#[test]
fn inner_block_style_stretches_and_is_read_only() {
    let base = BoxStyle {
        direction: Direction::Rtl,
        ..BoxStyle::INITIAL
    };
    let style = derive_inner_block_style(&base);
    assert!((style.flex_grow - 1.0).abs() < f32::EPSILON);
    assert_eq!(style.min_logical_width, Some(0));
    assert_eq!(style.direction, Direction::Ltr);
    assert_eq!(style.user_modify, UserModify::ReadOnly);
}

#[test]
fn overrides_round_trip_heights_and_widths() {
    let id = BoxId(3);
    let mut overrides = LayoutOverrides::new();
    assert!(overrides.is_empty());
    assert_eq!(overrides.logical_height(id), None);

    overrides.set_logical_height(id, 40);
    overrides.set_logical_width(id, 120);
    assert_eq!(overrides.logical_height(id), Some(40));
    assert_eq!(overrides.logical_width(id), Some(120));

    // Taking the height keeps the width override alive.
    assert_eq!(overrides.take_logical_height(id), Some(40));
    assert_eq!(overrides.logical_height(id), None);
    assert_eq!(overrides.logical_width(id), Some(120));
    assert!(!overrides.is_empty());

    assert!(overrides.clear(id));
    assert!(overrides.is_empty());
    assert!(!overrides.clear(id));
}

#[test]
fn taking_the_last_override_empties_the_table() {
    let id = BoxId(0);
    let mut overrides = LayoutOverrides::new();
    overrides.set_logical_height(id, 10);
    assert_eq!(overrides.take_logical_height(id), Some(10));
    assert!(overrides.is_empty());
    assert_eq!(overrides.take_logical_height(id), None);
}
