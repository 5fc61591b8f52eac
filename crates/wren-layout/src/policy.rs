//! The layout entry seam between the generic tree walker and the widget.
//!
//! The walker knows how to drive a layout request over a box tree; it knows
//! nothing about text controls. Widget-specific behavior — here, the
//! single-line height negotiation — plugs in through [`LayoutPolicy`].

use wren_box::{BoxTree, Px};
use wren_style::StyleSet;

use crate::block::BlockLayout;
use crate::effects::LayoutOutcome;

/// Ephemeral per-pass inputs to a layout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConstraints {
    /// The control's available content-box inline extent.
    pub available_logical_width: Px,

    /// The control's available content-box block extent.
    pub available_logical_height: Px,

    /// The style-declared line height. This doubles as the widget's declared
    /// text-block logical height: when the inner text overflows its limit,
    /// it is clamped to one line at this height.
    pub line_height: Px,
}

/// Everything a layout pass reads and writes: the box tree, the computed
/// styles, and the per-pass constraints.
///
/// Layout is single-threaded and synchronous; the context borrows the tree
/// mutably for the duration of one request and is the only writer.
#[derive(Debug)]
pub struct LayoutContext<'a> {
    /// The widget's box tree.
    pub tree: &'a mut BoxTree,
    /// Computed styles per box. Never mutated by layout.
    pub styles: &'a StyleSet,
    /// Per-pass constraints.
    pub constraints: LayoutConstraints,
}

/// Widget-specific layout behavior, invoked by the generic walker.
pub trait LayoutPolicy {
    /// Run one layout request over the widget subtree.
    fn layout(
        &mut self,
        cx: &mut LayoutContext<'_>,
        engine: &mut dyn BlockLayout,
    ) -> LayoutOutcome;
}

/// Drive one layout request through a policy.
///
/// The walker owns the subtree root's dirty-flag bookkeeping: whatever the
/// policy left marked on the control is cleared once the request completes,
/// so a finished request never reports itself as still dirty.
pub fn layout_widget(
    policy: &mut dyn LayoutPolicy,
    cx: &mut LayoutContext<'_>,
    engine: &mut dyn BlockLayout,
) -> LayoutOutcome {
    let outcome = policy.layout(cx, engine);
    let control = cx.tree.control();
    cx.tree.node_mut(control).needs_layout = false;
    outcome
}
