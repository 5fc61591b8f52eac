//! The generic block-layout collaborator.
//!
//! The height negotiation does not lay boxes out itself; it drives an
//! underlying block-layout algorithm through [`BlockLayout`] and reconciles
//! the heights that come back. The contract the negotiation depends on is
//! narrow: the algorithm must support being invoked twice in direct
//! succession with only override-table mutations between the calls.
//!
//! [`SimpleBlockLayout`] is a minimal implementation of that contract for a
//! single-line widget subtree — enough to exercise the negotiation in tests
//! and the demo CLI without a full formatting engine behind it.

use std::collections::HashMap;

#[cfg(feature = "layout-trace")]
use std::cell::Cell;

use wren_box::{BoxId, BoxRole, BoxTree, Px, Rect};
use wren_style::{LayoutOverrides, StyleSet};

use crate::policy::LayoutContext;

#[cfg(feature = "layout-trace")]
thread_local! {
    static LAYOUT_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// The generic block-layout algorithm the negotiation delegates to.
pub trait BlockLayout {
    /// Lay out the whole widget subtree from the control down.
    ///
    /// `overrides` is the table of negotiated fixed sizes to apply, or
    /// `None` for an intrinsic measurement pass that must ignore every
    /// override. `force` relays children even when their dirty flags are
    /// clear.
    ///
    /// Every box the pass lays out has its dirty flag cleared and its
    /// first-layout marker set. Placeholder boxes are overlay content and
    /// are not part of normal flow; the algorithm must skip them.
    fn layout_block(
        &mut self,
        cx: &mut LayoutContext<'_>,
        overrides: Option<&LayoutOverrides>,
        force: bool,
    );

    /// Lay out `root`'s subtree, but only if `root` or one of its
    /// descendants is marked as needing layout.
    ///
    /// `root`'s frame inline extent must already be assigned by an earlier
    /// full pass; its block extent is recomputed.
    fn layout_if_needed(
        &mut self,
        cx: &mut LayoutContext<'_>,
        overrides: Option<&LayoutOverrides>,
        root: BoxId,
    );
}

/// A minimal single-line block-layout engine.
///
/// Children are laid out along the inline axis in document order, starting
/// at the parent's content origin. Boxes with no declared or injected size
/// share the remaining inline space; auto heights come from content — a
/// measured content height for leaves, the tallest in-flow child otherwise.
/// Centering is not this engine's job: every child sits at its parent's
/// content top until the negotiation adjusts it.
///
/// Leaf content heights (what a text measurer would produce) are supplied
/// up front via [`Self::set_content_height`].
#[derive(Debug, Default)]
pub struct SimpleBlockLayout {
    content_heights: HashMap<BoxId, Px>,
    full_passes: usize,
}

impl SimpleBlockLayout {
    /// An engine with no measured content; every leaf gets height zero
    /// until measurements are supplied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the measured content height for a leaf box.
    pub fn set_content_height(&mut self, id: BoxId, height: Px) {
        let _ = self.content_heights.insert(id, height);
    }

    /// How many full layout passes have run since construction.
    #[must_use]
    pub const fn full_passes(&self) -> usize {
        self.full_passes
    }

    /// The effective logical width for `id`: injected override first, then
    /// the declared style width.
    fn effective_logical_width(
        styles: &StyleSet,
        overrides: Option<&LayoutOverrides>,
        id: BoxId,
    ) -> Option<Px> {
        overrides
            .and_then(|table| table.logical_width(id))
            .or(styles.style(id).logical_width)
    }

    /// The effective logical height for `id`: injected override first, then
    /// the declared style height.
    fn effective_logical_height(
        styles: &StyleSet,
        overrides: Option<&LayoutOverrides>,
        id: BoxId,
    ) -> Option<Px> {
        overrides
            .and_then(|table| table.logical_height(id))
            .or(styles.style(id).logical_height.fixed())
    }

    /// In-flow children of `id`: document order, placeholders excluded.
    fn in_flow_children(tree: &BoxTree, id: BoxId) -> Vec<BoxId> {
        tree.children(id)
            .iter()
            .copied()
            .filter(|&child| tree.node(child).role() != BoxRole::Placeholder)
            .collect()
    }

    /// Place `id`'s in-flow children along the inline axis and lay each of
    /// their subtrees out. `id`'s own frame inline extent must already be
    /// assigned.
    fn place_children(
        &self,
        tree: &mut BoxTree,
        styles: &StyleSet,
        overrides: Option<&LayoutOverrides>,
        id: BoxId,
    ) {
        let content = tree.node(id).metrics.content_box();
        let children = Self::in_flow_children(tree, id);
        if children.is_empty() {
            return;
        }

        // Fixed-size children keep their size; the rest share what is left.
        let mut widths = Vec::with_capacity(children.len());
        let mut fixed_total = 0;
        let mut auto_count = 0;
        for &child in &children {
            let width = Self::effective_logical_width(styles, overrides, child);
            if let Some(width) = width {
                fixed_total += width;
            } else {
                auto_count += 1;
            }
            widths.push(width);
        }
        let remaining = (content.width - fixed_total).max(0);
        let auto_share = if auto_count > 0 {
            remaining / auto_count
        } else {
            0
        };
        let mut auto_remainder = if auto_count > 0 {
            remaining % auto_count
        } else {
            0
        };

        let mut inline_cursor = content.x;
        for (&child, width) in children.iter().zip(widths) {
            let mut resolved = width.unwrap_or_else(|| {
                let share = auto_share + auto_remainder;
                auto_remainder = 0;
                share
            });
            if let Some(min) = styles.style(child).min_logical_width {
                resolved = resolved.max(min);
            }

            let node = tree.node_mut(child);
            node.metrics.frame.x = inline_cursor;
            node.metrics.frame.y = content.y;
            node.metrics.frame.width = resolved;
            inline_cursor += resolved;

            self.layout_subtree(tree, styles, overrides, child);
        }
    }

    /// Lay out `id`'s subtree and compute its frame block extent. The frame
    /// inline extent must already be assigned.
    fn layout_subtree(
        &self,
        tree: &mut BoxTree,
        styles: &StyleSet,
        overrides: Option<&LayoutOverrides>,
        id: BoxId,
    ) {
        #[cfg(feature = "layout-trace")]
        let _depth = {
            let depth = LAYOUT_DEPTH.with(|d| {
                let current = d.get();
                d.set(current + 1);
                current
            });
            eprintln!(
                "[BLOCK] depth={depth} box={} width={}",
                tree.node(id).role(),
                tree.node(id).metrics.frame.width,
            );
            // Guard struct decrements the depth counter on all return paths.
            struct DepthGuard;
            impl Drop for DepthGuard {
                fn drop(&mut self) {
                    LAYOUT_DEPTH.with(|d| d.set(d.get() - 1));
                }
            }
            DepthGuard
        };

        self.place_children(tree, styles, overrides, id);

        let height = Self::effective_logical_height(styles, overrides, id).unwrap_or_else(|| {
            let in_flow = Self::in_flow_children(tree, id);
            let edges = tree.node(id).metrics.border_and_padding_logical_height();
            if in_flow.is_empty() {
                self.content_heights.get(&id).copied().unwrap_or(0) + edges
            } else {
                let tallest = in_flow
                    .iter()
                    .map(|&child| tree.node(child).metrics.frame.height)
                    .max()
                    .unwrap_or(0);
                tallest + edges
            }
        });

        let node = tree.node_mut(id);
        node.metrics.frame.height = height;
        node.needs_layout = false;
        node.ever_had_layout = true;
    }
}

impl BlockLayout for SimpleBlockLayout {
    fn layout_block(
        &mut self,
        cx: &mut LayoutContext<'_>,
        overrides: Option<&LayoutOverrides>,
        force: bool,
    ) {
        // This engine has no partial-relayout fast path: every full pass
        // relays the whole subtree, so `force` changes nothing here.
        let _ = force;
        self.full_passes += 1;

        let control = cx.tree.control();
        let node = cx.tree.node_mut(control);
        let frame_width =
            cx.constraints.available_logical_width + node.metrics.border_and_padding_logical_width();
        let frame_height = cx.constraints.available_logical_height
            + node.metrics.border_and_padding_logical_height();
        node.metrics.frame = Rect::new(0, 0, frame_width, frame_height);
        node.needs_layout = false;
        node.ever_had_layout = true;

        self.place_children(cx.tree, cx.styles, overrides, control);
    }

    fn layout_if_needed(
        &mut self,
        cx: &mut LayoutContext<'_>,
        overrides: Option<&LayoutOverrides>,
        root: BoxId,
    ) {
        if !cx.tree.subtree_needs_layout(root) {
            return;
        }
        self.layout_subtree(cx.tree, cx.styles, overrides, root);
    }
}
