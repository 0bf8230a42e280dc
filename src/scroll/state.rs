//! The single field currently being edited.

use bevy::math::DVec3;
use bevy::prelude::*;

use super::numeric::{EulerAxis, FieldValue, NumericKind, euler_degrees};

/// Tracks which field has text editing, and the Euler state of quaternion fields.
///
/// At most one field is active at a time. Starting an edit on another field
/// replaces the session wholesale.
#[derive(Resource, Default, Debug)]
pub struct EditingSession {
    active: Option<ActiveEdit>,
}

#[derive(Clone, Debug)]
struct ActiveEdit {
    field: Entity,
    /// `None` for values that cannot be scrolled.
    kind: Option<NumericKind>,
    /// Working Euler triple in degrees. Once filled it is the source of truth
    /// until the session ends.
    euler: Option<DVec3>,
    focused_axis: Option<EulerAxis>,
}

impl EditingSession {
    /// Starts a session for `field`, discarding any previous one.
    pub fn begin(&mut self, field: Entity, value: &FieldValue) {
        self.active = Some(ActiveEdit {
            field,
            kind: value.kind(),
            euler: None,
            focused_axis: None,
        });
    }

    /// Ends the session if `field` is the active one. Returns whether it was.
    pub fn end(&mut self, field: Entity) -> bool {
        if self.is_active(field) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Drops the session whatever field it was for.
    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active_field(&self) -> Option<Entity> {
        self.active.as_ref().map(|edit| edit.field)
    }

    pub fn is_active(&self, field: Entity) -> bool {
        self.active_field() == Some(field)
    }

    pub fn kind(&self) -> Option<NumericKind> {
        self.active.as_ref().and_then(|edit| edit.kind)
    }

    /// Axis whose sub-editor had text focus at the last sync.
    pub fn focused_axis(&self) -> Option<EulerAxis> {
        self.active.as_ref().and_then(|edit| edit.focused_axis)
    }

    /// Records the focused axis. Ignored unless a quaternion field is active.
    pub fn set_focused_axis(&mut self, axis: Option<EulerAxis>) {
        if let Some(edit) = self.active.as_mut() {
            edit.focused_axis = match edit.kind {
                Some(NumericKind::QuaternionEuler) => axis,
                _ => None,
            };
        }
    }

    pub fn cached_euler(&self) -> Option<DVec3> {
        self.active.as_ref().and_then(|edit| edit.euler)
    }

    /// The working Euler triple, derived from `value` on first use.
    pub fn current_euler(&mut self, value: &FieldValue) -> Option<DVec3> {
        let edit = self.active.as_mut()?;
        if edit.euler.is_none() {
            edit.euler = value.rotation().map(euler_degrees);
        }
        edit.euler
    }

    /// Replaces the working Euler triple after an accepted change.
    pub fn store_euler(&mut self, euler: DVec3) {
        if let Some(edit) = self.active.as_mut() {
            edit.euler = Some(euler);
        }
    }
}
