//! Scroll proxying for the composite widget.
//!
//! The control itself is not the thing that scrolls — the inner text box's
//! scrollable layer is. Every scroll read and command is forwarded there
//! when that layer is realized; when the text box has no layer (or no text
//! box geometry exists yet in the host), the control's own generic
//! block-scroll behavior answers instead. The proxy never dereferences an
//! absent surface.

use strum_macros::{Display, EnumString};
use wren_box::{Point, Px};
use wren_style::WritingMode;

/// A physical scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ScrollDirection {
    /// Toward the top edge.
    Up,
    /// Toward the bottom edge.
    Down,
    /// Toward the left edge.
    Left,
    /// Toward the right edge.
    Right,
}

/// A writing-mode-relative scroll direction.
///
/// [§ 6 Abstract Box Terminology](https://www.w3.org/TR/css-writing-modes-4/#abstract-box)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ScrollLogicalDirection {
    /// Against the block progression direction.
    BlockBackward,
    /// Along the block progression direction.
    BlockForward,
    /// Against the inline progression direction.
    InlineBackward,
    /// Along the inline progression direction.
    InlineForward,
}

/// How far one unit of a scroll command travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ScrollGranularity {
    /// One line.
    Line,
    /// One page (the visible extent).
    Page,
    /// The whole document.
    Document,
    /// One pixel.
    Pixel,
}

/// Translate a writing-mode-relative scroll direction to a physical one.
///
/// Uses only the writing mode's horizontal and block-flip flags, exactly
/// like the block axis mapping in
/// [§ 6](https://www.w3.org/TR/css-writing-modes-4/#logical-to-physical):
/// in horizontal-tb the block axis is vertical; in the vertical modes it is
/// horizontal, flipped for vertical-rl. The inline axis of the vertical
/// modes always maps top-to-bottom.
#[must_use]
pub fn logical_to_physical(
    direction: ScrollLogicalDirection,
    mode: WritingMode,
) -> ScrollDirection {
    match direction {
        ScrollLogicalDirection::BlockBackward => {
            if mode.is_horizontal() {
                ScrollDirection::Up
            } else if mode.is_flipped_blocks() {
                ScrollDirection::Right
            } else {
                ScrollDirection::Left
            }
        }
        ScrollLogicalDirection::BlockForward => {
            if mode.is_horizontal() {
                ScrollDirection::Down
            } else if mode.is_flipped_blocks() {
                ScrollDirection::Left
            } else {
                ScrollDirection::Right
            }
        }
        ScrollLogicalDirection::InlineBackward => {
            if mode.is_horizontal() {
                ScrollDirection::Left
            } else {
                ScrollDirection::Up
            }
        }
        ScrollLogicalDirection::InlineForward => {
            if mode.is_horizontal() {
                ScrollDirection::Right
            } else {
                ScrollDirection::Down
            }
        }
    }
}

/// A scrollable surface: the inner text box's layer, or the control's
/// generic block-scroll behavior standing in for it.
pub trait ScrollSurface {
    /// Current horizontal scroll offset.
    fn scroll_left(&self) -> Px;

    /// Current vertical scroll offset.
    fn scroll_top(&self) -> Px;

    /// Set the horizontal scroll offset.
    fn set_scroll_left(&mut self, offset: Px);

    /// Set the vertical scroll offset.
    fn set_scroll_top(&mut self, offset: Px);

    /// Total scrollable inline extent.
    fn scroll_width(&self) -> Px;

    /// Total scrollable block extent.
    fn scroll_height(&self) -> Px;

    /// Perform a directional scroll. Returns whether the surface consumed
    /// it.
    fn scroll(
        &mut self,
        direction: ScrollDirection,
        granularity: ScrollGranularity,
        multiplier: f32,
    ) -> bool;

    /// Keep scrolling toward `position` during a drag selection.
    fn autoscroll(&mut self, position: Point);
}

/// Routes scroll operations to the inner text surface, falling back to the
/// control's block scrolling when the surface is absent or unrealized.
///
/// Borrowed per interaction: construct one around the surfaces that exist
/// right now, use it, drop it.
pub struct ScrollProxy<'a> {
    inner_text_surface: Option<&'a mut dyn ScrollSurface>,
    block_fallback: &'a mut dyn ScrollSurface,
    writing_mode: WritingMode,
}

impl<'a> ScrollProxy<'a> {
    /// Build a proxy. `inner_text_surface` is `None` when the inner text
    /// box has no realized scrollable layer; `writing_mode` is the
    /// control's, used to translate logical scroll directions.
    pub fn new(
        inner_text_surface: Option<&'a mut dyn ScrollSurface>,
        block_fallback: &'a mut dyn ScrollSurface,
        writing_mode: WritingMode,
    ) -> Self {
        Self {
            inner_text_surface,
            block_fallback,
            writing_mode,
        }
    }

    fn target(&self) -> &dyn ScrollSurface {
        match &self.inner_text_surface {
            Some(surface) => &**surface,
            None => &*self.block_fallback,
        }
    }

    fn target_mut(&mut self) -> &mut dyn ScrollSurface {
        match &mut self.inner_text_surface {
            Some(surface) => &mut **surface,
            None => &mut *self.block_fallback,
        }
    }

    /// Current horizontal scroll offset.
    #[must_use]
    pub fn scroll_left(&self) -> Px {
        self.target().scroll_left()
    }

    /// Current vertical scroll offset.
    #[must_use]
    pub fn scroll_top(&self) -> Px {
        self.target().scroll_top()
    }

    /// Set the horizontal scroll offset.
    pub fn set_scroll_left(&mut self, offset: Px) {
        self.target_mut().set_scroll_left(offset);
    }

    /// Set the vertical scroll offset.
    pub fn set_scroll_top(&mut self, offset: Px) {
        self.target_mut().set_scroll_top(offset);
    }

    /// Total scrollable inline extent.
    #[must_use]
    pub fn scroll_width(&self) -> Px {
        self.target().scroll_width()
    }

    /// Total scrollable block extent.
    #[must_use]
    pub fn scroll_height(&self) -> Px {
        self.target().scroll_height()
    }

    /// Perform a linear scroll. Returns whether the target consumed it.
    pub fn scroll(
        &mut self,
        direction: ScrollDirection,
        granularity: ScrollGranularity,
        multiplier: f32,
    ) -> bool {
        self.target_mut().scroll(direction, granularity, multiplier)
    }

    /// Perform a writing-mode-relative scroll. The direction is translated
    /// to a physical one before delegation.
    pub fn logical_scroll(
        &mut self,
        direction: ScrollLogicalDirection,
        granularity: ScrollGranularity,
        multiplier: f32,
    ) -> bool {
        let physical = logical_to_physical(direction, self.writing_mode);
        self.scroll(physical, granularity, multiplier)
    }

    /// Forward a drag-selection autoscroll to the inner text surface.
    ///
    /// There is no block fallback for autoscroll: without a realized text
    /// surface this is a no-op.
    pub fn autoscroll(&mut self, position: Point) {
        if let Some(surface) = &mut self.inner_text_surface {
            surface.autoscroll(position);
        }
    }
}
