//! Keeps a value-scroll gesture from also scrolling the surrounding UI.

use bevy::prelude::*;

use super::host::{InteractionSpace, ScrollableField, UiScrollAxis};
use super::state::EditingSession;

/// Whether the general UI may use a handler's scroll input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputClaim {
    /// Nothing claimed; forward the gesture.
    Forward,
    /// A value scroll owns the gesture.
    Claimed,
}

/// Per-handler suppression flag.
///
/// Armed in the frame a delta is applied, consumed at the start of the next
/// frame. Never survives an edit session boundary.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollSuppression {
    armed: bool,
    suppressing: bool,
}

impl ScrollSuppression {
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Turns last frame's arm into this frame's suppression.
    ///
    /// `still_valid` is false when the session ended or moved to another space.
    pub fn consume(&mut self, still_valid: bool) -> bool {
        self.suppressing = self.armed && still_valid;
        self.armed = false;
        self.suppressing
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_suppressing(&self) -> bool {
        self.suppressing
    }

    /// The claim the general UI should honor this frame.
    pub fn claim(&self) -> InputClaim {
        if self.armed || self.suppressing {
            InputClaim::Claimed
        } else {
            InputClaim::Forward
        }
    }

    pub fn claims(&self) -> bool {
        self.claim() == InputClaim::Claimed
    }
}

/// Consumes last frame's flags and zeroes the UI axis of handlers still claimed.
pub(super) fn consume_scroll_suppression(
    session: Res<EditingSession>,
    fields: Query<Option<&InteractionSpace>, With<ScrollableField>>,
    mut handlers: Query<(
        &mut ScrollSuppression,
        &mut UiScrollAxis,
        Option<&InteractionSpace>,
    )>,
) {
    let field_space = session
        .active_field()
        .and_then(|field| fields.get(field).ok())
        .map(|space| space.copied().unwrap_or_default());

    for (mut suppression, mut ui_axis, handler_space) in &mut handlers {
        let still_valid = field_space == Some(handler_space.copied().unwrap_or_default());
        if suppression.consume(still_valid) {
            ui_axis.0 = Vec2::ZERO;
        }
    }
}

/// Resets every handler's flag.
pub(super) fn clear_all(handlers: &mut Query<&mut ScrollSuppression>) {
    for mut suppression in handlers.iter_mut() {
        suppression.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_then_consume_suppresses_once() {
        let mut flag = ScrollSuppression::default();
        assert_eq!(flag.claim(), InputClaim::Forward);

        flag.arm();
        assert!(flag.claims());

        assert!(flag.consume(true));
        assert!(flag.is_suppressing());
        assert!(!flag.is_armed());

        // Nothing re-armed it, so the next frame forwards again.
        assert!(!flag.consume(true));
        assert_eq!(flag.claim(), InputClaim::Forward);
    }

    #[test]
    fn invalid_context_drops_the_arm() {
        let mut flag = ScrollSuppression::default();
        flag.arm();
        assert!(!flag.consume(false));
        assert!(!flag.claims());
    }

    #[test]
    fn clear_resets_everything() {
        let mut flag = ScrollSuppression::default();
        flag.arm();
        flag.consume(true);
        flag.arm();
        flag.clear();
        assert_eq!(flag, ScrollSuppression::default());
    }
}
