//! Components and events the host app provides.
//!
//! The plugin never spawns any of these. The host marks its field editors
//! and interaction handlers with them and triggers the lifecycle events.

use bevy::prelude::*;

use super::numeric::{EulerAxis, FieldValue};
use super::suppress::ScrollSuppression;

/// A field editor whose value can be scrolled.
///
/// `value` is the bound value. Mutating it is the write-back path, so hosts
/// that mirror the value elsewhere should watch `Changed<ScrollableField>`
/// or observe [`FieldScrolled`].
#[derive(Component, Clone, Debug)]
pub struct ScrollableField {
    /// Current value of the edited member.
    pub value: FieldValue,
}

impl ScrollableField {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// The three per-axis text editors of a quaternion field.
#[derive(Component, Clone, Copy, Debug)]
pub struct EulerAxisEditors {
    pub x: Entity,
    pub y: Entity,
    pub z: Entity,
}

impl EulerAxisEditors {
    /// Editor entity for one axis.
    pub fn editor(&self, axis: EulerAxis) -> Entity {
        match axis {
            EulerAxis::X => self.x,
            EulerAxis::Y => self.y,
            EulerAxis::Z => self.z,
        }
    }

    /// Which axis editor currently holds text focus, if any.
    pub fn focused_axis(&self, focus: Option<Entity>) -> Option<EulerAxis> {
        let focus = focus?;
        EulerAxis::ALL
            .into_iter()
            .find(|axis| self.editor(*axis) == focus)
    }
}

/// Which space an element lives in. Missing means `World`.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionSpace {
    #[default]
    World,
    Userspace,
}

/// Hand a handler belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// One pointing device: a VR controller, or one of the desktop pointer's handlers.
#[derive(Component, Clone, Debug)]
#[require(ScrollSuppression, UiScrollAxis)]
pub struct InteractionHandler {
    pub side: Side,
    /// Interaction laser owned by this handler, if it has one.
    pub laser: Option<Entity>,
    /// Raw thumbstick/touch axis for this frame.
    pub axis: Vec2,
}

impl InteractionHandler {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            laser: None,
            axis: Vec2::ZERO,
        }
    }

    pub fn with_laser(mut self, laser: Entity) -> Self {
        self.laser = Some(laser);
        self
    }
}

/// Axis forwarded to the general UI for scrolling and dragging.
///
/// The host copies the handler's axis here before [`ScrollFieldSet::Suppress`]
/// and reads it after; the plugin zeroes it while a value scroll claims the gesture.
///
/// [`ScrollFieldSet::Suppress`]: super::plugin::ScrollFieldSet::Suppress
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct UiScrollAxis(pub Vec2);

/// A field editor started text editing.
#[derive(Event, Clone, Copy, Debug)]
pub struct EditBegin {
    pub field: Entity,
}

/// A field editor finished text editing.
#[derive(Event, Clone, Copy, Debug)]
pub struct EditEnd {
    pub field: Entity,
}

/// Emitted after a scroll changed a field's value.
#[derive(Event, Clone, Debug)]
pub struct FieldScrolled {
    /// The field entity.
    pub field: Entity,
    /// Value before the scroll.
    pub previous: FieldValue,
    /// Value written back.
    pub value: FieldValue,
    /// Signed delta that was applied.
    pub delta: f64,
}
