//! Integration tests for placeholder overlay sizing and positioning.

use wren_box::{BoxInit, BoxRole, BoxTree, EdgeSizes, Rect, WidgetTreeBuilder};
use wren_layout::{
    LayoutConstraints, LayoutContext, LayoutEffect, LayoutOutcome, SimpleBlockLayout,
    SingleLineLayout, layout_widget,
};
use wren_style::StyleSet;

struct Harness {
    tree: BoxTree,
    styles: StyleSet,
    engine: SimpleBlockLayout,
    widget: SingleLineLayout,
    constraints: LayoutConstraints,
}

impl Harness {
    fn layout(&mut self) -> LayoutOutcome {
        let mut cx = LayoutContext {
            tree: &mut self.tree,
            styles: &self.styles,
            constraints: self.constraints,
        };
        layout_widget(&mut self.widget, &mut cx, &mut self.engine)
    }
}

/// Undecorated widget with a placeholder; the placeholder carries its own
/// padding so the declared-size subtraction is visible.
fn undecorated_with_placeholder(text_content_height: i32) -> Harness {
    let mut builder = WidgetTreeBuilder::new();
    builder
        .set(BoxRole::Control, BoxInit::default())
        .expect("fresh role");
    builder
        .set(BoxRole::InnerText, BoxInit::default())
        .expect("fresh role");
    builder
        .set(
            BoxRole::Placeholder,
            BoxInit {
                padding: EdgeSizes::uniform(2),
                border: EdgeSizes::ZERO,
            },
        )
        .expect("fresh role");
    let tree = builder.finish().expect("valid tree");

    let mut engine = SimpleBlockLayout::new();
    engine.set_content_height(tree.inner_text(), text_content_height);

    Harness {
        tree,
        styles: StyleSet::new(),
        engine,
        widget: SingleLineLayout::new(),
        constraints: LayoutConstraints {
            available_logical_width: 100,
            available_logical_height: 40,
            line_height: 40,
        },
    }
}

/// Fully decorated widget with a placeholder nested two frames away from
/// the control.
fn decorated_with_placeholder() -> Harness {
    let mut builder = WidgetTreeBuilder::new();
    builder
        .set(
            BoxRole::Control,
            BoxInit {
                padding: EdgeSizes::uniform(5),
                border: EdgeSizes::ZERO,
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
        .set(BoxRole::Placeholder, BoxInit::default())
        .expect("fresh role");
    let tree = builder.finish().expect("valid tree");

    let mut engine = SimpleBlockLayout::new();
    engine.set_content_height(tree.inner_text(), 20);

    Harness {
        tree,
        styles: StyleSet::new(),
        engine,
        widget: SingleLineLayout::new(),
        constraints: LayoutConstraints {
            available_logical_width: 100,
            available_logical_height: 30,
            line_height: 30,
        },
    }
}

#[test]
fn placeholder_mirrors_the_inner_text_frame() {
    let mut harness = undecorated_with_placeholder(30);
    let _ = harness.layout();

    let placeholder = harness.tree.placeholder().expect("placeholder");
    let inner_text = harness.tree.inner_text();
    let text_frame = harness.tree.node(inner_text).metrics.frame;
    let placeholder_frame = harness.tree.node(placeholder).metrics.frame;

    // Short text centers at y = 5; the overlay follows it exactly.
    assert_eq!(text_frame, Rect::new(0, 5, 100, 30));
    assert_eq!(placeholder_frame, text_frame);

    // The declared size is the text frame minus the placeholder's own
    // border and padding, recorded as a border-box override of equal frame.
    assert_eq!(
        harness.widget.overrides().logical_width(placeholder),
        Some(100)
    );
    assert_eq!(
        harness.widget.overrides().logical_height(placeholder),
        Some(30)
    );
}

#[test]
fn first_placeholder_layout_requests_its_own_repaint() {
    let mut harness = undecorated_with_placeholder(30);
    let outcome = harness.layout();

    let placeholder = harness.tree.placeholder().expect("placeholder");
    assert!(
        outcome
            .effects
            .contains(&LayoutEffect::Repaint(placeholder)),
        "first layout must request a repaint, effects: {:?}",
        outcome.effects
    );
}

#[test]
fn placeholder_relayout_recomputes_the_control_overflow() {
    let mut harness = undecorated_with_placeholder(30);
    let outcome = harness.layout();

    // No control border: the client bottom is the frame bottom.
    assert!(
        outcome.effects.contains(&LayoutEffect::RecomputeOverflow {
            client_logical_bottom: 40
        }),
        "placeholder layout must extend the overflow, effects: {:?}",
        outcome.effects
    );
}

#[test]
fn stable_placeholder_produces_no_effects() {
    let mut harness = undecorated_with_placeholder(30);
    let _ = harness.layout();
    let second = harness.layout();
    assert!(
        second.effects.is_empty(),
        "unchanged placeholder must stay quiet, effects: {:?}",
        second.effects
    );
}

#[test]
fn placeholder_position_accumulates_every_intermediate_frame() {
    let mut harness = decorated_with_placeholder();
    let _ = harness.layout();

    let placeholder = harness.tree.placeholder().expect("placeholder");
    let frame = harness.tree.node(placeholder).metrics.frame;

    // Inner text at (0,0) in the inner block, inner block at (0,0) in the
    // container, container at the control's content origin (5,5): the
    // control-relative overlay position is the sum.
    assert_eq!(frame.x, 5);
    assert_eq!(frame.y, 5);

    let inner_text = harness.tree.inner_text();
    assert_eq!(
        frame.size(),
        harness.tree.node(inner_text).metrics.frame.size()
    );
}

#[test]
fn grown_inner_text_resizes_the_placeholder_and_reports_effects() {
    let mut harness = undecorated_with_placeholder(30);
    let _ = harness.layout();

    // The text grows a line: the overlay must follow and report overflow
    // again, but not a first-layout repaint.
    harness
        .engine
        .set_content_height(harness.tree.inner_text(), 36);
    let outcome = harness.layout();

    let placeholder = harness.tree.placeholder().expect("placeholder");
    assert_eq!(harness.tree.node(placeholder).metrics.frame.height, 36);
    assert!(
        outcome.effects.contains(&LayoutEffect::RecomputeOverflow {
            client_logical_bottom: 40
        }),
        "resize must recompute overflow, effects: {:?}",
        outcome.effects
    );
    assert!(
        !outcome
            .effects
            .contains(&LayoutEffect::Repaint(placeholder)),
        "repaint is only requested on first layout, effects: {:?}",
        outcome.effects
    );
}
