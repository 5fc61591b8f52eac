//! Integration tests for the indicator state machine, the style-change
//! hook, control clipping, trailing-control placement, and preferred
//! metrics.

use wren_box::{BoxInit, BoxRole, BoxTree, EdgeSizes, Point, Rect, WidgetTreeBuilder};
use wren_layout::{
    IndicatorConditions, IndicatorState, LayoutConstraints, LayoutContext, LayoutEffect,
    SimpleBlockLayout, SingleLineLayout, StyleDifference, control_clip_rect,
    control_logical_height, has_control_clip, layout_widget, preferred_content_logical_width,
};
use wren_style::{BoxStyle, Direction, FixedFontMetrics, StyleSet, TextTruncation};

fn all_conditions() -> IndicatorConditions {
    IndicatorConditions {
        is_password_field: true,
        frame_active: true,
        is_focused: true,
        caps_lock_on: true,
    }
}

/// Build and lay out a decorated widget; returns the tree, styles, and
/// widget state.
fn decorated(direction: Direction) -> (BoxTree, StyleSet, SingleLineLayout) {
    let mut builder = WidgetTreeBuilder::new();
    builder
        .set(
            BoxRole::Control,
            BoxInit {
                padding: EdgeSizes::uniform(2),
                border: EdgeSizes::uniform(1),
            },
        )
        .expect("fresh role");
    builder
        .set(BoxRole::Container, BoxInit::default())
        .expect("fresh role");
    builder
        .set(BoxRole::InnerBlock, BoxInit::default())
        .expect("fresh role");
    builder
        .set(BoxRole::InnerText, BoxInit::default())
        .expect("fresh role");
    builder
        .set(BoxRole::SpinButton, BoxInit::default())
        .expect("fresh role");
    let mut tree = builder.finish().expect("valid tree");

    let mut styles = StyleSet::new();
    styles.set(
        tree.container().expect("decorated"),
        BoxStyle {
            direction,
            ..BoxStyle::INITIAL
        },
    );
    styles.set(
        tree.spin_button().expect("decorated"),
        BoxStyle {
            logical_width: Some(16),
            ..BoxStyle::INITIAL
        },
    );

    let mut engine = SimpleBlockLayout::new();
    engine.set_content_height(tree.inner_text(), 24);
    let mut widget = SingleLineLayout::new();
    let mut cx = LayoutContext {
        tree: &mut tree,
        styles: &styles,
        constraints: LayoutConstraints {
            available_logical_width: 100,
            available_logical_height: 30,
            line_height: 30,
        },
    };
    let _ = layout_widget(&mut widget, &mut cx, &mut engine);
    (tree, styles, widget)
}

fn undecorated() -> (BoxTree, StyleSet, SingleLineLayout) {
    let mut builder = WidgetTreeBuilder::new();
    builder
        .set(BoxRole::Control, BoxInit::default())
        .expect("fresh role");
    builder
        .set(BoxRole::InnerText, BoxInit::default())
        .expect("fresh role");
    let mut tree = builder.finish().expect("valid tree");

    let styles = StyleSet::new();
    let mut engine = SimpleBlockLayout::new();
    engine.set_content_height(tree.inner_text(), 30);
    let mut widget = SingleLineLayout::new();
    let mut cx = LayoutContext {
        tree: &mut tree,
        styles: &styles,
        constraints: LayoutConstraints {
            available_logical_width: 100,
            available_logical_height: 40,
            line_height: 40,
        },
    };
    let _ = layout_widget(&mut widget, &mut cx, &mut engine);
    (tree, styles, widget)
}

// ---------------------------------------------------------------------------
// Caps-lock indicator
// ---------------------------------------------------------------------------

#[test]
fn indicator_shows_only_when_all_four_conditions_hold() {
    let (tree, _styles, mut widget) = undecorated();
    assert_eq!(widget.indicator_state(), IndicatorState::Hidden);

    let effect = widget.caps_lock_state_may_have_changed(&tree, Some(all_conditions()));
    assert_eq!(widget.indicator_state(), IndicatorState::Shown);
    assert_eq!(effect, Some(LayoutEffect::Repaint(tree.control())));
}

#[test]
fn flipping_any_single_condition_hides_the_indicator() {
    let flips: [fn(&mut IndicatorConditions); 4] = [
        |c| c.is_password_field = false,
        |c| c.frame_active = false,
        |c| c.is_focused = false,
        |c| c.caps_lock_on = false,
    ];

    for flip in flips {
        let (tree, _styles, mut widget) = undecorated();
        let _ = widget.caps_lock_state_may_have_changed(&tree, Some(all_conditions()));
        assert_eq!(widget.indicator_state(), IndicatorState::Shown);

        let mut conditions = all_conditions();
        flip(&mut conditions);
        let effect = widget.caps_lock_state_may_have_changed(&tree, Some(conditions));
        assert_eq!(widget.indicator_state(), IndicatorState::Hidden);
        // Exactly one repaint for the transition...
        assert_eq!(effect, Some(LayoutEffect::Repaint(tree.control())));
        // ...and none for staying hidden.
        let again = widget.caps_lock_state_may_have_changed(&tree, Some(conditions));
        assert_eq!(again, None);
    }
}

#[test]
fn missing_document_or_view_forces_hidden() {
    let (tree, _styles, mut widget) = undecorated();
    let _ = widget.caps_lock_state_may_have_changed(&tree, Some(all_conditions()));
    assert_eq!(widget.indicator_state(), IndicatorState::Shown);

    let effect = widget.caps_lock_state_may_have_changed(&tree, None);
    assert_eq!(widget.indicator_state(), IndicatorState::Hidden);
    assert_eq!(effect, Some(LayoutEffect::Repaint(tree.control())));
}

#[test]
fn unchanged_indicator_state_requests_no_repaint() {
    let (tree, _styles, mut widget) = undecorated();
    assert_eq!(
        widget.caps_lock_state_may_have_changed(&tree, Some(all_conditions())),
        Some(LayoutEffect::Repaint(tree.control()))
    );
    assert_eq!(
        widget.caps_lock_state_may_have_changed(&tree, Some(all_conditions())),
        None
    );
}

// ---------------------------------------------------------------------------
// Style-change hook
// ---------------------------------------------------------------------------

#[test]
fn style_change_clears_negotiated_state() {
    let (mut tree, styles, mut widget) = decorated(Direction::Ltr);
    let container = tree.container().expect("decorated");
    // The reconciliation pinned the container; a style change must scrub
    // that out along with the desired height.
    assert!(widget.overrides().logical_height(container).is_some());

    let _ = widget.style_did_change(&mut tree, &styles, StyleDifference::Layout, false);

    assert_eq!(widget.desired_inner_text_height(), None);
    assert!(widget.overrides().logical_height(container).is_none());
    // A layout-affecting change re-marks the text box's containing chain.
    assert!(tree.node(tree.inner_text()).needs_layout);
    assert!(tree.node(container).needs_layout);
    assert!(tree.node(tree.control()).needs_layout);
    // The widget manages its own control clip.
    assert!(!tree.node(tree.control()).overflow_clip);
}

#[test]
fn repaint_only_style_change_does_not_mark_layout() {
    let (mut tree, styles, mut widget) = decorated(Direction::Ltr);
    let _ = widget.style_did_change(&mut tree, &styles, StyleDifference::Repaint, false);
    assert!(!tree.node(tree.inner_text()).needs_layout);
}

#[test]
fn style_change_updates_placeholder_truncation() {
    let mut builder = WidgetTreeBuilder::new();
    builder
        .set(BoxRole::Control, BoxInit::default())
        .expect("fresh role");
    builder
        .set(BoxRole::InnerText, BoxInit::default())
        .expect("fresh role");
    builder
        .set(BoxRole::Placeholder, BoxInit::default())
        .expect("fresh role");
    let mut tree = builder.finish().expect("valid tree");

    let mut styles = StyleSet::new();
    styles.set(
        tree.control(),
        BoxStyle {
            text_truncation: TextTruncation::Ellipsis,
            ..BoxStyle::INITIAL
        },
    );

    let mut widget = SingleLineLayout::new();

    // Blurred: the declared ellipsis applies.
    let effects = widget.style_did_change(&mut tree, &styles, StyleDifference::Repaint, false);
    assert!(effects.contains(&LayoutEffect::SetPlaceholderTruncation(
        TextTruncation::Ellipsis
    )));

    // Focused: the caret must stay visible, so the text clips instead.
    let effects = widget.style_did_change(&mut tree, &styles, StyleDifference::Repaint, true);
    assert!(effects.contains(&LayoutEffect::SetPlaceholderTruncation(
        TextTruncation::Clip
    )));
}

#[test]
fn style_change_without_placeholder_emits_no_truncation_effect() {
    let (mut tree, styles, mut widget) = undecorated();
    let effects = widget.style_did_change(&mut tree, &styles, StyleDifference::Repaint, false);
    assert!(effects.is_empty());
}

// ---------------------------------------------------------------------------
// Control clip
// ---------------------------------------------------------------------------

#[test]
fn only_decorated_controls_clip() {
    let (tree, _styles, _widget) = undecorated();
    assert!(!has_control_clip(&tree));

    let (tree, _styles, _widget) = decorated(Direction::Ltr);
    assert!(has_control_clip(&tree));
}

#[test]
fn clip_rect_unions_content_box_and_container_frame() {
    let (tree, _styles, _widget) = decorated(Direction::Ltr);
    // Content box (3,3,100,30); the container frame matches it exactly
    // after reconciliation.
    assert_eq!(
        control_clip_rect(&tree, Point::ZERO),
        Rect::new(3, 3, 100, 30)
    );
    assert_eq!(
        control_clip_rect(&tree, Point::new(10, 20)),
        Rect::new(13, 23, 100, 30)
    );
}

// ---------------------------------------------------------------------------
// Trailing-control placement
// ---------------------------------------------------------------------------

#[test]
fn spin_button_sits_at_the_trailing_edge_ignoring_inline_padding() {
    let (tree, _styles, _widget) = decorated(Direction::Ltr);
    let spin_button = tree.spin_button().expect("decorated");
    let frame = tree.node(spin_button).metrics.frame;

    // Container width 100 − spin width 16 + control padding-right 2.
    assert_eq!(frame.x, 86);
    // Pulled up past the container by the control's padding-top.
    assert_eq!(frame.y, -2);
    // Control frame height 36 minus the block-axis borders.
    assert_eq!(frame.height, 34);
    assert_eq!(frame.width, 16);
}

#[test]
fn right_to_left_spin_button_sits_at_the_leading_edge() {
    let (tree, _styles, _widget) = decorated(Direction::Rtl);
    let spin_button = tree.spin_button().expect("decorated");
    let frame = tree.node(spin_button).metrics.frame;
    assert_eq!(frame.x, -2);
    assert_eq!(frame.y, -2);
}

// ---------------------------------------------------------------------------
// Preferred metrics
// ---------------------------------------------------------------------------

#[test]
fn preferred_width_defaults_to_twenty_characters() {
    let (tree, styles, _widget) = undecorated();
    let font = FixedFontMetrics {
        average_char_width: 8.0,
        max_char_width: 12.0,
        line_spacing: 16,
    };
    // ceil(8 × 20) = 160, plus the wide-glyph correction 12 − 8 = 4.
    assert_eq!(
        preferred_content_logical_width(&tree, &styles, &font, 8.0, None, false),
        164
    );
    // A declared size wins; zero falls back to the default factor.
    assert_eq!(
        preferred_content_logical_width(&tree, &styles, &font, 8.0, Some(5), false),
        44
    );
    assert_eq!(
        preferred_content_logical_width(&tree, &styles, &font, 8.0, Some(0), false),
        164
    );
}

#[test]
fn preferred_width_without_max_char_width_skips_the_correction() {
    let (tree, styles, _widget) = undecorated();
    let font = FixedFontMetrics {
        average_char_width: 8.0,
        max_char_width: 0.0,
        line_spacing: 16,
    };
    assert_eq!(
        preferred_content_logical_width(&tree, &styles, &font, 8.0, None, false),
        160
    );
}

#[test]
fn preferred_width_can_include_the_decoration_extent() {
    let (tree, styles, _widget) = decorated(Direction::Ltr);
    let font = FixedFontMetrics {
        average_char_width: 8.0,
        max_char_width: 12.0,
        line_spacing: 16,
    };
    // 164 as above, plus the spin button's declared width (16). The spin
    // button carries no border or padding in this fixture.
    assert_eq!(
        preferred_content_logical_width(&tree, &styles, &font, 8.0, None, true),
        180
    );
}

#[test]
fn control_height_is_line_height_plus_non_content_height() {
    assert_eq!(control_logical_height(20, 10), 30);
    assert_eq!(control_logical_height(16, 0), 16);
}
