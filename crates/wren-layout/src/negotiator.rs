//! Constrained height negotiation for the single-line text control.
//!
//! The widget's inner boxes size themselves to their content, but the
//! control's own height is decided by the cascade. The two meet here: the
//! negotiation measures the inner boxes' intrinsic heights, clamps the text
//! box when it overflows the control, reconciles the decoration container
//! against the control's content box, and re-runs the block layout at most
//! once to apply what it changed. Centering and trailing-control placement
//! run after the geometry has settled.
//!
//! The pass sequence is strict — reset, measure, clamp, reconcile, center —
//! and the negotiation is the only writer of the override table while a
//! pass is running.

use wren_box::{BoxTree, Px};
use wren_style::{LayoutOverrides, StyleSet};

use crate::block::BlockLayout;
use crate::effects::LayoutOutcome;
use crate::indicator::IndicatorState;
use crate::policy::{LayoutContext, LayoutPolicy};

/// Layout state of one single-line text control.
///
/// Holds everything that must survive between layout requests: the active
/// clamped inner-text height, the override table the negotiation writes,
/// and the caps-lock indicator flag.
#[derive(Debug, Default)]
pub struct SingleLineLayout {
    desired_inner_text_height: Option<Px>,
    overrides: LayoutOverrides,
    indicator: IndicatorState,
}

impl SingleLineLayout {
    /// A fresh widget with no negotiated state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The clamped inner-text height from the most recent negotiation, if
    /// one is active. `None` means unconstrained. Cleared on style change.
    #[must_use]
    pub const fn desired_inner_text_height(&self) -> Option<Px> {
        self.desired_inner_text_height
    }

    /// The override table of negotiated fixed sizes.
    #[must_use]
    pub const fn overrides(&self) -> &LayoutOverrides {
        &self.overrides
    }

    /// The caps-lock indicator state.
    #[must_use]
    pub const fn indicator_state(&self) -> IndicatorState {
        self.indicator
    }

    pub(crate) fn indicator_state_mut(&mut self) -> &mut IndicatorState {
        &mut self.indicator
    }

    pub(crate) fn set_desired_inner_text_height(&mut self, value: Option<Px>) {
        self.desired_inner_text_height = value;
    }

    pub(crate) fn overrides_mut(&mut self) -> &mut LayoutOverrides {
        &mut self.overrides
    }

    /// Run one layout request: negotiate heights, center, place the
    /// trailing control, then size the placeholder overlay.
    ///
    /// Idempotent for unchanged constraints: repeating the request yields
    /// identical geometry.
    pub fn layout(
        &mut self,
        cx: &mut LayoutContext<'_>,
        engine: &mut dyn BlockLayout,
    ) -> LayoutOutcome {
        let mut effects = Vec::new();

        // STEP 1: Pre-pass reset.
        //
        // A height injected by an earlier negotiation must not bias the
        // intrinsic measurement below. Stale inner-box overrides are
        // dropped and the chain up to (not including) the control is
        // re-marked so the measurement pass recomputes it.
        self.reset_overridden_heights(cx.tree);

        // STEP 2: Intrinsic pass, override application disabled.
        engine.layout_block(cx, None, false);
        let mut passes = 1;

        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[NEGOTIATE] intrinsic inner-text height={}",
            cx.tree.node(cx.tree.inner_text()).metrics.frame.height
        );

        let control = cx.tree.control();
        let logical_height_limit = compute_logical_height_limit(cx.tree);

        // STEP 3/4: Clamp the text box when its intrinsic height overflows
        // the limit. The desired height is recorded even when it happens to
        // equal the measurement; only the retry is conditional.
        let desired_logical_height = cx.constraints.line_height;
        let inner_text = cx.tree.inner_text();
        let inner_text_height = cx.tree.node(inner_text).metrics.frame.height;
        if inner_text_height > logical_height_limit {
            if desired_logical_height != inner_text_height {
                cx.tree.mark_needs_layout(control);
            }

            self.desired_inner_text_height = Some(desired_logical_height);

            self.overrides
                .set_logical_height(inner_text, desired_logical_height);
            cx.tree.mark_needs_layout(inner_text);
            if let Some(inner_block) = cx.tree.inner_block() {
                self.overrides
                    .set_logical_height(inner_block, desired_logical_height);
                cx.tree.mark_needs_layout(inner_block);
            }
        }

        // STEP 5: Container reconciliation. The container might be taller
        // than the limit because of decoration, or shorter than the content
        // box; either way it ends this step with a pinned height so later
        // passes cannot oscillate.
        if let Some(container) = cx.tree.container() {
            engine.layout_if_needed(cx, Some(&self.overrides), container);
            let container_height = cx.tree.node(container).metrics.frame.height;
            let content_height = cx.tree.node(control).metrics.content_logical_height();
            if container_height > logical_height_limit {
                self.overrides
                    .set_logical_height(container, logical_height_limit);
                cx.tree.mark_needs_layout(control);
            } else if container_height < content_height {
                self.overrides.set_logical_height(container, content_height);
                cx.tree.mark_needs_layout(control);
            } else {
                self.overrides.set_logical_height(container, container_height);
            }
        }

        // STEP 6: Single retry, overrides applied. The reset in STEP 1 must
        // not run again here: the values just written have to survive this
        // pass.
        if cx.tree.node(control).needs_layout {
            engine.layout_block(cx, Some(&self.overrides), true);
            passes = 2;
        }

        // STEP 7: Center in the block progression direction.
        center_vertically(cx.tree);

        // STEP 8: Trailing-control placement.
        place_spin_button(cx.tree, cx.styles);

        // The placeholder overlay sizes itself from the settled geometry.
        self.layout_placeholder(cx.tree, &mut effects);

        LayoutOutcome { passes, effects }
    }

    /// STEP 1 of [`Self::layout`]: drop inner-box height overrides left by
    /// a prior pass and re-mark the affected chain.
    fn reset_overridden_heights(&mut self, tree: &mut BoxTree) {
        let control = tree.control();
        let inner_text = tree.inner_text();
        if self.overrides.take_logical_height(inner_text).is_some() {
            tree.mark_needs_layout_between(inner_text, control);
        }
        if let Some(inner_block) = tree.inner_block()
            && self.overrides.take_logical_height(inner_block).is_some()
        {
            tree.mark_needs_layout_between(inner_block, control);
        }
    }
}

/// The height a child must not exceed before clamping kicks in.
///
/// Decorated controls measure against the control's content box; the
/// undecorated variant deliberately lets the text box eat into the
/// control's padding and border, so the limit is the whole frame.
#[must_use]
pub fn compute_logical_height_limit(tree: &BoxTree) -> Px {
    let control = tree.node(tree.control());
    if tree.container().is_some() {
        control.metrics.content_logical_height()
    } else {
        control.metrics.frame.height
    }
}

/// STEP 7: center the child block in the block progression direction.
///
/// Two deliberately distinct paths. Without a container, the inner text is
/// re-centered on *any* height difference; with one, the container only
/// moves when it is taller than the content box. Both paths split the
/// difference with truncating division and hand the odd pixel to the top
/// offset.
fn center_vertically(tree: &mut BoxTree) {
    let control = tree.control();
    let content_height = tree.node(control).metrics.content_logical_height();

    if let Some(container) = tree.container() {
        let container_height = tree.node(container).metrics.frame.height;
        if container_height > content_height {
            let diff = container_height - content_height;
            tree.node_mut(container).metrics.frame.y -= diff / 2 + diff % 2;
        }
    } else {
        let inner_text = tree.inner_text();
        let inner_text_height = tree.node(inner_text).metrics.frame.height;
        if inner_text_height != content_height {
            let diff = inner_text_height - content_height;
            tree.node_mut(inner_text).metrics.frame.y -= diff / 2 + diff % 2;
        }
    }
}

/// STEP 8: pin the spin button to the container's trailing edge.
///
/// The button ignores the control's inline padding on its edge — it sits
/// flush with the decoration — and spans the control's height between the
/// block-axis borders. Positions are relative to the container's frame
/// origin, so the block-start offset deliberately goes negative by the
/// control's padding.
fn place_spin_button(tree: &mut BoxTree, styles: &StyleSet) {
    let Some(spin_button) = tree.spin_button() else {
        return;
    };
    let Some(container) = tree.container() else {
        return;
    };

    let control_metrics = tree.node(tree.control()).metrics;
    let parent_width = tree.node(container).metrics.frame.width;
    let spin_width = tree.node(spin_button).metrics.frame.width;
    let leading = !styles.style(container).direction.is_ltr();

    let node = tree.node_mut(spin_button);
    node.metrics.frame.x = if leading {
        -control_metrics.padding.left
    } else {
        parent_width - spin_width + control_metrics.padding.right
    };
    node.metrics.frame.y = -control_metrics.padding.top;
    node.metrics.frame.height =
        control_metrics.frame.height - control_metrics.border.top - control_metrics.border.bottom;
}

impl LayoutPolicy for SingleLineLayout {
    fn layout(
        &mut self,
        cx: &mut LayoutContext<'_>,
        engine: &mut dyn BlockLayout,
    ) -> LayoutOutcome {
        Self::layout(self, cx, engine)
    }
}
