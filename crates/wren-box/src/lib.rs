//! Box tree and geometry types for the wren text-control layout engine.
//!
//! # Scope
//!
//! This crate provides:
//! - **Geometry** ([`geometry`]) — integer logical-pixel points, rectangles,
//!   edge sizes, and per-box used metrics with frame/content-box accessors
//!   per the [CSS Box Model](https://www.w3.org/TR/css-box-3/).
//! - **Box tree** ([`tree`]) — an arena-allocated tree of the composite
//!   widget's boxes (control, container, inner block, inner text, spin
//!   button, placeholder), addressed by copyable [`BoxId`]s, with the
//!   structural invariants of the widget validated at construction.
//!
//! Layout algorithms live in `wren-layout`; styles live in `wren-style`.
//! This crate is pure data plus accessors and has no opinion on either.

/// Logical-pixel geometry primitives and per-box metrics.
pub mod geometry;
/// The composite widget's box tree and its builder.
pub mod tree;

// Re-exports for convenience
pub use geometry::{BoxMetrics, EdgeSizes, Point, Px, Rect, Size};
pub use tree::{BoxId, BoxInit, BoxNode, BoxRole, BoxTree, TreeError, WidgetTreeBuilder};
