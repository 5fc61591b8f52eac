//! Control clipping for decorated widgets.
//!
//! A text field with decorations clips its contents: the text must not
//! paint over the chrome. The clip covers the control's content box
//! together with the container's frame, since the container may legally
//! poke out of the content box after reconciliation.

use wren_box::{BoxTree, Point, Rect};

/// Whether the control clips its contents. True iff the widget is
/// decorated.
#[must_use]
pub fn has_control_clip(tree: &BoxTree) -> bool {
    tree.container().is_some()
}

/// The control's clip rectangle, translated by `additional_offset`.
///
/// The rectangle is the union of the control's content box and the
/// container's frame, both relative to the control's frame origin.
///
/// # Panics
///
/// Panics in debug builds when the widget has no container; querying the
/// clip of an undecorated control is a programmer error.
#[must_use]
pub fn control_clip_rect(tree: &BoxTree, additional_offset: Point) -> Rect {
    debug_assert!(
        has_control_clip(tree),
        "control clip queried without a decoration container"
    );
    let mut clip = tree.node(tree.control()).metrics.content_box();
    if let Some(container) = tree.container() {
        clip = clip.union(&tree.node(container).metrics.frame);
    }
    clip.translated(additional_offset)
}
