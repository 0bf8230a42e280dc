//! Picks the one handler allowed to scroll a field this frame.
//!
//! With two VR controllers, or a desktop pointer split over two handlers,
//! every handler sees the same session. Only the one tied to the UI press
//! that started the edit may apply a delta.

use bevy::ecs::observer::On;
use bevy::prelude::*;

use super::host::{InteractionHandler, Side};

/// Handler side that owns presses made by a pointer with no laser.
///
/// A fixed convention, not derived from input: it only has to make the
/// winner unique.
pub const PRIMARY_POINTER_SIDE: Side = Side::Right;

/// What pressed the last UI element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchSource {
    /// A handed interaction laser.
    Laser(Entity),
    /// A pointer that has no laser, like the desktop mouse.
    Pointer,
}

/// The most recent UI press source.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LastTouchSource(pub Option<TouchSource>);

/// A UI element received a press.
#[derive(Event, Clone, Copy, Debug)]
pub struct UiPressed {
    pub source: TouchSource,
}

/// Whether `handler` may apply a delta given the last touch source.
pub fn is_authoritative(handler: &InteractionHandler, last: Option<TouchSource>) -> bool {
    match last {
        Some(TouchSource::Laser(laser)) => handler.laser == Some(laser),
        Some(TouchSource::Pointer) => handler.side == PRIMARY_POINTER_SIDE,
        None => false,
    }
}

pub(super) fn record_touch_source(pressed: On<UiPressed>, mut last: ResMut<LastTouchSource>) {
    last.0 = Some(pressed.source);
}
