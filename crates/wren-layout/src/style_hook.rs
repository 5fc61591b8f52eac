//! Style-change hook.
//!
//! The negotiation injects fixed sizes for the widget's inner boxes. When
//! the control's style changes, those injected values are stale: left in
//! place they would feed a spurious layout hint into the next
//! cascade-driven pass. The hook scrubs them out, re-marks the text box
//! when the change affects layout, and refreshes the placeholder's
//! presentation.

use wren_box::BoxTree;
use wren_style::{StyleSet, TextTruncation, text_should_be_truncated};

use crate::effects::LayoutEffect;
use crate::negotiator::SingleLineLayout;

/// How much a style change invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleDifference {
    /// Visual-only change; geometry is unaffected.
    Repaint,
    /// The change affects layout.
    Layout,
}

impl SingleLineLayout {
    /// React to a change of the control's style.
    ///
    /// In order: drop the active clamped inner-text height, clear the
    /// container's and inner block's injected width and height overrides,
    /// re-mark the inner text's containing chain when the change affects
    /// layout, recompute the placeholder's truncation mode, and clear the
    /// control's overflow-clip flag (the widget manages its own control
    /// clip).
    pub fn style_did_change(
        &mut self,
        tree: &mut BoxTree,
        styles: &StyleSet,
        diff: StyleDifference,
        focused: bool,
    ) -> Vec<LayoutEffect> {
        self.set_desired_inner_text_height(None);

        // We may have injected widths and heights during layout. Reset them
        // now to avoid getting a spurious layout hint out of the old values.
        if let Some(inner_block) = tree.inner_block() {
            let _ = self.overrides_mut().clear(inner_block);
        }
        if let Some(container) = tree.container() {
            let _ = self.overrides_mut().clear(container);
        }

        if diff == StyleDifference::Layout {
            tree.mark_containing_chain(tree.inner_text());
        }

        let mut effects = Vec::new();
        if tree.placeholder().is_some() {
            let truncation = if text_should_be_truncated(styles.style(tree.control()), focused) {
                TextTruncation::Ellipsis
            } else {
                TextTruncation::Clip
            };
            effects.push(LayoutEffect::SetPlaceholderTruncation(truncation));
        }

        let control = tree.control();
        tree.node_mut(control).overflow_clip = false;

        effects
    }
}
