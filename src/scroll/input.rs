//! Per-frame input sampling: wheel or controller axis, plus modifier keys.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use super::host::InteractionHandler;

/// Axis values within this distance of zero count as no input.
pub const AXIS_EPSILON: f32 = 1e-5;

/// Pixel-unit wheel deltas are divided by this to get notches.
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Where scroll input comes from.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Desktop: mouse wheel.
    #[default]
    Screen,
    /// VR: each handler's thumbstick or touchpad.
    Spatial,
}

/// Modifier keys held this frame. Left and right keys count the same.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

impl ModifierState {
    pub fn from_keys(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            shift: keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
            control: keys.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]),
            alt: keys.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]),
        }
    }
}

/// Converts one wheel reading to notches.
pub fn wheel_notches(unit: MouseScrollUnit, y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => y,
        MouseScrollUnit::Pixel => y / PIXELS_PER_LINE,
    }
}

/// Sums this frame's vertical wheel movement in notches.
pub fn wheel_lines<'a>(events: impl IntoIterator<Item = &'a MouseWheel>) -> f32 {
    events
        .into_iter()
        .map(|event| wheel_notches(event.unit, event.y))
        .sum()
}

pub fn is_negligible(axis: f32) -> bool {
    axis.abs() <= AXIS_EPSILON
}

/// The raw scroll value for `handler`, or `None` when there is no input.
pub fn sample_axis(mode: InputMode, wheel: f32, handler: &InteractionHandler) -> Option<f32> {
    let axis = match mode {
        InputMode::Screen => wheel,
        InputMode::Spatial => handler.axis.y,
    };
    (!is_negligible(axis)).then_some(axis)
}
