//! Layout core for composite single-line text controls.
//!
//! # Scope
//!
//! This crate implements the widget-specific layout behavior of a
//! single-line text control — an outer control box wrapping an optional
//! decoration container, an optional alignment block, the editable inner
//! text box, and optional spin-button and placeholder boxes:
//!
//! - **Height negotiation** ([`negotiator`]) — the constrained layout pass:
//!   reset, intrinsic measurement, inner-text clamping, container
//!   reconciliation, a single bounded retry, vertical centering, and
//!   trailing-control placement.
//! - **Placeholder sizing** ([`placeholder`]) — post-stabilization overlay
//!   sizing that tracks the text box through every coordinate frame.
//! - **Hit-test translation** ([`hit_test`]) — retargeting chrome hits at
//!   the inner text box and re-expressing the point in its frame.
//! - **Scroll proxying** ([`scroll`]) — delegation to the inner text box's
//!   scrollable layer with block-scroll fallback.
//! - **Caps-lock indicator** ([`indicator`]) — a two-state flag recomputed
//!   from four observed conditions, repainting on transitions.
//! - **Style-change hook** ([`style_hook`]) — scrubbing negotiated
//!   overrides so they cannot leak into the next cascade-driven pass.
//! - **Control clip** ([`clip`]) and **preferred metrics** ([`metrics`]).
//!
//! # Collaborators
//!
//! The host engine plugs in through traits: [`BlockLayout`] (the generic
//! block formatting algorithm), [`HitTester`] (the generic hit-testing
//! primitive), and [`ScrollSurface`] (a box's scrollable layer). Minimal
//! implementations of the first two ship here for tests and the demo CLI.
//! Repaint scheduling and overflow recomputation are not called into at
//! all: layout returns them as [`LayoutEffect`]s for the caller to apply.
//!
//! # Concurrency
//!
//! Single-threaded, synchronous, cooperative. The only re-entrancy is the
//! negotiation's own second pass, capped at one retry. The negotiation is
//! the sole writer of the override table during a pass; correctness rests
//! on strict sequencing, not locking.

/// The generic block-layout collaborator and a minimal implementation.
pub mod block;
/// Control clipping for decorated widgets.
pub mod clip;
/// Pending side effects surfaced by layout.
pub mod effects;
/// Caps-lock indicator state.
pub mod indicator;
/// Preferred-width and control-height computation.
pub mod metrics;
/// The constrained height negotiation.
pub mod negotiator;
/// Placeholder overlay sizing.
pub mod placeholder;
/// The layout entry seam: constraints, context, policy, walker.
pub mod policy;
/// Scroll proxying with block-scroll fallback.
pub mod scroll;
/// The style-change hook.
pub mod style_hook;

// Re-exports for convenience
pub use block::{BlockLayout, SimpleBlockLayout};
pub use clip::{control_clip_rect, has_control_clip};
pub use effects::{LayoutEffect, LayoutOutcome};
pub use hit_test::{GeometricHitTester, HitTester, TextControlHit, node_at_point};
pub use indicator::{IndicatorConditions, IndicatorState};
pub use metrics::{DEFAULT_SIZE_FACTOR, control_logical_height, preferred_content_logical_width};
pub use negotiator::{SingleLineLayout, compute_logical_height_limit};
pub use policy::{LayoutConstraints, LayoutContext, LayoutPolicy, layout_widget};
pub use scroll::{
    ScrollDirection, ScrollGranularity, ScrollLogicalDirection, ScrollProxy, ScrollSurface,
    logical_to_physical,
};
pub use style_hook::StyleDifference;
