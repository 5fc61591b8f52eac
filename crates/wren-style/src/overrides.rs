//! Transient layout overrides injected by the height negotiation.
//!
//! The negotiation clamps and pins box heights by *overriding* their
//! declared style for subsequent passes. Rather than writing those values
//! back into shared style records (and having to scrub them out again
//! before every measurement), the injected values live in this explicit
//! side table, passed alongside the styles to whichever pass is allowed to
//! see them. The intrinsic measurement pass simply is not given the table.

use std::collections::HashMap;

use serde::Serialize;
use wren_box::{BoxId, Px};

/// Injected width/height for one box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverrideEntry {
    /// Injected fixed logical height (border box).
    pub logical_height: Option<Px>,
    /// Injected fixed logical width (border box).
    pub logical_width: Option<Px>,
}

impl OverrideEntry {
    const fn is_empty(self) -> bool {
        self.logical_height.is_none() && self.logical_width.is_none()
    }
}

/// Per-box layout overrides, written only by the height negotiation during
/// a layout pass and cleared by the style-change hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOverrides {
    entries: HashMap<BoxId, OverrideEntry>,
}

impl LayoutOverrides {
    /// An empty override table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The injected logical height for `id`, if any.
    #[must_use]
    pub fn logical_height(&self, id: BoxId) -> Option<Px> {
        self.entries.get(&id).and_then(|entry| entry.logical_height)
    }

    /// The injected logical width for `id`, if any.
    #[must_use]
    pub fn logical_width(&self, id: BoxId) -> Option<Px> {
        self.entries.get(&id).and_then(|entry| entry.logical_width)
    }

    /// Inject a fixed logical height for `id`.
    pub fn set_logical_height(&mut self, id: BoxId, value: Px) {
        self.entries.entry(id).or_default().logical_height = Some(value);
    }

    /// Inject a fixed logical width for `id`.
    pub fn set_logical_width(&mut self, id: BoxId, value: Px) {
        self.entries.entry(id).or_default().logical_width = Some(value);
    }

    /// Remove and return the injected logical height for `id`, keeping any
    /// width override in place.
    pub fn take_logical_height(&mut self, id: BoxId) -> Option<Px> {
        let entry = self.entries.get_mut(&id)?;
        let taken = entry.logical_height.take();
        if entry.is_empty() {
            let _ = self.entries.remove(&id);
        }
        taken
    }

    /// Remove every override for `id`. Returns whether anything was
    /// removed.
    pub fn clear(&mut self, id: BoxId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Whether no box has an active override.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
