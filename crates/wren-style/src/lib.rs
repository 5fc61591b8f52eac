//! Style descriptors for the wren text-control layout engine.
//!
//! # Scope
//!
//! This crate provides the style-side inputs of layout:
//! - **Value types** ([`values`]) — logical height, overflow, truncation,
//!   white space, user-modify.
//! - **Writing modes** ([`writing_mode`]) — writing mode and inline
//!   direction per [CSS Writing Modes Level 4](https://www.w3.org/TR/css-writing-modes-4/).
//! - **Computed style** ([`computed`]) — the per-box [`BoxStyle`] slice
//!   layout consumes, and the [`StyleSet`] map over a widget tree.
//! - **Layout overrides** ([`overrides`]) — the explicit side table of
//!   negotiated fixed sizes, kept out of the shared style records.
//! - **Derived styles** ([`derived`]) — the fixed adjustments that produce
//!   the shadow boxes' styles from the control's style.
//! - **Font metrics** ([`font`]) — the aggregate metrics layout needs from
//!   the font backend.
//!
//! Cascade resolution, font shaping, and attribute storage are out of
//! scope: a [`BoxStyle`] arrives here already computed.

/// The computed per-box style descriptor and the style map.
pub mod computed;
/// Derived styles for the widget's shadow boxes.
pub mod derived;
/// Font metric aggregates consumed by layout.
pub mod font;
/// The explicit layout-override side table.
pub mod overrides;
/// Style value types.
pub mod values;
/// Writing mode and inline direction.
pub mod writing_mode;

// Re-exports for convenience
pub use computed::{BoxStyle, StyleSet};
pub use derived::{derive_inner_block_style, derive_inner_text_style, text_should_be_truncated};
pub use font::{FixedFontMetrics, FontMetrics};
pub use overrides::{LayoutOverrides, OverrideEntry};
pub use values::{
    DEFAULT_LINE_HEIGHT_PX, LogicalHeight, Overflow, TextTruncation, UserModify, WhiteSpace,
};
pub use writing_mode::{Direction, WritingMode};
