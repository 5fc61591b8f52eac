//! Pending side effects surfaced by layout.
//!
//! Repaints and overflow recomputation are ambient services of a full
//! rendering engine. Instead of reaching into a rendering surface from deep
//! inside a layout pass, every entry point here *returns* the effects it
//! would have triggered; the caller applies them after the pass. Layout
//! stays a pure tree transformation and is testable without a surface.

use serde::Serialize;
use wren_box::{BoxId, Px};
use wren_style::TextTruncation;

/// One deferred side effect of a layout or style-change pass.
///
/// Effects carry no ordering guarantee relative to each other; all of them
/// are fire-and-forget from layout's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayoutEffect {
    /// Schedule a repaint of the given box.
    Repaint(BoxId),

    /// Recompute the control's accumulated overflow region, starting from
    /// the bottom of its client content area. Needed when a box lays out
    /// after its siblings and can extend the visible overflow bounds.
    RecomputeOverflow {
        /// Block position of the control's client bottom, relative to the
        /// control's frame origin.
        client_logical_bottom: Px,
    },

    /// Update the placeholder's text-truncation mode.
    SetPlaceholderTruncation(TextTruncation),
}

/// The result of one layout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutOutcome {
    /// How many full block-layout passes ran: 1, or 2 when the negotiation
    /// changed a child height and scheduled its single retry.
    pub passes: u8,

    /// Deferred side effects, to be applied by the caller.
    pub effects: Vec<LayoutEffect>,
}
