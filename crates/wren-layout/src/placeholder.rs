//! Placeholder overlay sizing and positioning.
//!
//! The placeholder is not part of normal flow: it lays out after the
//! negotiation has settled the text box's geometry, mirrors that geometry,
//! and overlays it. Because it hangs directly off the control while the
//! text box may be nested two frames deeper, its position is accumulated
//! through every intermediate coordinate frame.

use wren_box::{BoxTree, Point};

use crate::effects::LayoutEffect;
use crate::negotiator::SingleLineLayout;

impl SingleLineLayout {
    /// Size and position the placeholder overlay from the settled inner
    /// text geometry. No-op when the widget has no placeholder.
    ///
    /// Runs after the height negotiation; the inner text box's frame must
    /// be final.
    pub(crate) fn layout_placeholder(
        &mut self,
        tree: &mut BoxTree,
        effects: &mut Vec<LayoutEffect>,
    ) {
        let Some(placeholder) = tree.placeholder() else {
            return;
        };
        let inner_text = tree.inner_text();
        let inner_text_size = tree.node(inner_text).metrics.frame.size();

        // The placeholder's declared size is the text box's frame minus its
        // own border-and-padding extent, so the two frames end up equal. A
        // placeholder shrunk below zero is a logic error the caller must
        // prevent upstream.
        let placeholder_metrics = tree.node(placeholder).metrics;
        let declared_width =
            inner_text_size.width - placeholder_metrics.border_and_padding_logical_width();
        let declared_height =
            inner_text_size.height - placeholder_metrics.border_and_padding_logical_height();
        debug_assert!(
            declared_width >= 0 && declared_height >= 0,
            "placeholder declared size shrunk below zero"
        );

        // Writing the declared size marks the box dirty only when the value
        // actually changed, exactly like a style mutation would.
        if self.overrides().logical_width(placeholder) != Some(inner_text_size.width) {
            self.overrides_mut()
                .set_logical_width(placeholder, inner_text_size.width);
            tree.mark_needs_layout(placeholder);
        }
        if self.overrides().logical_height(placeholder) != Some(inner_text_size.height) {
            self.overrides_mut()
                .set_logical_height(placeholder, inner_text_size.height);
            tree.mark_needs_layout(placeholder);
        }

        let needed_layout = tree.node(placeholder).needs_layout;
        let had_layout = tree.node(placeholder).ever_had_layout;
        if needed_layout {
            let node = tree.node_mut(placeholder);
            node.metrics.frame.width = inner_text_size.width;
            node.metrics.frame.height = inner_text_size.height;
            node.needs_layout = false;
            node.ever_had_layout = true;
        }

        // Track the text box through every intermediate frame: the
        // placeholder is a control child, the text box may be nested in the
        // inner block and the container.
        let mut text_offset = tree.node(inner_text).metrics.frame.origin();
        if let Some(inner_block) = tree.inner_block() {
            let origin = tree.node(inner_block).metrics.frame.origin();
            text_offset = Point::new(text_offset.x + origin.x, text_offset.y + origin.y);
        }
        if let Some(container) = tree.container() {
            let origin = tree.node(container).metrics.frame.origin();
            text_offset = Point::new(text_offset.x + origin.x, text_offset.y + origin.y);
        }
        let node = tree.node_mut(placeholder);
        node.metrics.frame.x = text_offset.x;
        node.metrics.frame.y = text_offset.y;

        // First-layout boxes are skipped by the ambient repaint scheduling,
        // so a placeholder that just laid out for the first time requests
        // its own repaint.
        if !had_layout && needed_layout {
            effects.push(LayoutEffect::Repaint(placeholder));
        }

        // The placeholder lays out after the control's other children and
        // can extend the visible overflow bounds.
        if needed_layout {
            let control = tree.control();
            effects.push(LayoutEffect::RecomputeOverflow {
                client_logical_bottom: tree.node(control).metrics.client_logical_bottom(),
            });
        }
    }
}
