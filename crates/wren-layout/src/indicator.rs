//! Caps-lock indicator state.
//!
//! Password fields show a caps-lock warning glyph while the user could be
//! typing shouty characters into a box that won't echo them. Drawing the
//! glyph is the theme's business; this module only decides whether it
//! should be visible and asks for a repaint when the answer changes.

use strum_macros::Display;
use wren_box::BoxTree;

use crate::effects::LayoutEffect;
use crate::negotiator::SingleLineLayout;

/// Whether the caps-lock indicator is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum IndicatorState {
    /// Not drawn.
    #[default]
    Hidden,
    /// Drawn over the control's content area.
    Shown,
}

/// The observed inputs of the indicator guard.
///
/// All four are sampled fresh on every invocation; none of them is cached
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorConditions {
    /// The widget is a password-type field.
    pub is_password_field: bool,
    /// The owning view is focused and active.
    pub frame_active: bool,
    /// The document's focused element is this control.
    pub is_focused: bool,
    /// The platform caps-lock key is currently down.
    pub caps_lock_on: bool,
}

impl IndicatorConditions {
    const fn all_hold(self) -> bool {
        self.is_password_field && self.frame_active && self.is_focused && self.caps_lock_on
    }
}

impl SingleLineLayout {
    /// Recompute the indicator state.
    ///
    /// The indicator is shown iff all four conditions hold simultaneously;
    /// `None` (no owning document or view) forces `Hidden`. On a state
    /// change a repaint of the control is requested — and nothing else.
    pub fn caps_lock_state_may_have_changed(
        &mut self,
        tree: &BoxTree,
        conditions: Option<IndicatorConditions>,
    ) -> Option<LayoutEffect> {
        let shown = conditions.is_some_and(IndicatorConditions::all_hold);
        let next = if shown {
            IndicatorState::Shown
        } else {
            IndicatorState::Hidden
        };

        let state = self.indicator_state_mut();
        if *state == next {
            return None;
        }
        *state = next;
        Some(LayoutEffect::Repaint(tree.control()))
    }
}
