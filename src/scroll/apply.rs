//! Applies a delta to the edited value and builds the refreshed text.

use bevy::math::DVec3;

use super::numeric::{EulerAxis, FieldValue, format_angle, rotation_from_euler};
use crate::error::ScrollError;

/// Result of a successful scroll step.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollOutcome {
    /// Value to write back through the field.
    pub value: FieldValue,
    /// Updated Euler triple, for quaternion fields.
    pub euler: Option<DVec3>,
    /// Signed delta that was applied, in the value's units or degrees.
    pub delta: f64,
    /// Text for the editor that has focus.
    pub text: String,
}

/// Adds `delta` to a primitive and formats it canonically.
pub fn apply_to_primitive(value: FieldValue, delta: f64) -> Result<ScrollOutcome, ScrollError> {
    let value = value.offset(delta)?;
    Ok(ScrollOutcome {
        value,
        euler: None,
        delta,
        text: value.to_string(),
    })
}

/// Adds `delta` to one axis of `euler` and rebuilds the rotation.
///
/// A non-finite rebuild is rejected so nothing downstream sees a corrupt
/// orientation.
pub fn apply_to_rotation(
    value: FieldValue,
    euler: DVec3,
    axis: EulerAxis,
    delta: f64,
) -> Result<ScrollOutcome, ScrollError> {
    if value.rotation().is_none() {
        return Err(ScrollError::Unsupported(value.type_name()));
    }

    let euler = axis.offset(euler, delta);
    let rotation = rotation_from_euler(euler);
    if !rotation.is_finite() {
        return Err(ScrollError::DegenerateRotation(euler));
    }

    Ok(ScrollOutcome {
        value: value.with_rotation(rotation),
        euler: Some(euler),
        delta,
        text: format_angle(axis.component(euler)),
    })
}
