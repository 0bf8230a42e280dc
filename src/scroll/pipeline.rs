//! One scroll step for the active field, independent of the ECS.

use bevy::prelude::Entity;

use super::apply::{ScrollOutcome, apply_to_primitive, apply_to_rotation};
use super::config::ScrollConfig;
use super::delta::compute_delta;
use super::input::{InputMode, ModifierState, is_negligible};
use super::numeric::{FieldValue, NumericKind};
use super::state::EditingSession;
use crate::error::ScrollError;

/// Everything the authoritative handler saw this frame.
#[derive(Clone, Copy, Debug)]
pub struct ScrollRequest {
    pub field: Entity,
    pub value: FieldValue,
    pub axis: f32,
    pub mode: InputMode,
    pub modifiers: ModifierState,
}

/// Computes and applies one frame of scrolling to the session's field.
///
/// `Ok(None)` means there was nothing to do, including a primitive that is
/// already pinned at its type's bound. On success the session's Euler
/// cache already holds the new triple; the caller writes `value` back and
/// refreshes the text.
pub fn scroll_field(
    session: &mut EditingSession,
    request: &ScrollRequest,
    config: &ScrollConfig,
) -> Result<Option<ScrollOutcome>, ScrollError> {
    if is_negligible(request.axis) {
        return Ok(None);
    }
    if !session.is_active(request.field) {
        return Err(ScrollError::SessionEnded(request.field));
    }
    let Some(kind) = session.kind() else {
        return Err(ScrollError::Unsupported(request.value.type_name()));
    };

    let (euler, current) = match kind {
        NumericKind::QuaternionEuler => {
            let axis = session.focused_axis().ok_or(ScrollError::NoAxisFocus)?;
            let euler = session
                .current_euler(&request.value)
                .ok_or(ScrollError::Unsupported(request.value.type_name()))?;
            (Some((euler, axis)), axis.component(euler))
        }
        NumericKind::Integer | NumericKind::FloatingPoint => {
            let current = request
                .value
                .as_f64()
                .ok_or(ScrollError::Unsupported(request.value.type_name()))?;
            (None, current)
        }
    };

    let delta = compute_delta(
        request.axis,
        request.mode,
        kind,
        request.modifiers,
        current,
        config,
    );
    if delta == 0.0 {
        return Ok(None);
    }

    let outcome = match euler {
        Some((euler, axis)) => apply_to_rotation(request.value, euler, axis, delta)?,
        None => apply_to_primitive(request.value, delta)?,
    };
    if outcome.euler.is_none() && outcome.value == request.value {
        return Ok(None);
    }

    if !session.is_active(request.field) {
        return Err(ScrollError::SessionEnded(request.field));
    }
    if let Some(euler) = outcome.euler {
        session.store_euler(euler);
    }
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::{DQuat, DVec3};
    use bevy::prelude::World;

    use crate::scroll::numeric::{EulerAxis, rotation_from_euler};

    fn field() -> Entity {
        World::new().spawn_empty().id()
    }

    fn request(field: Entity, value: FieldValue, axis: f32, mode: InputMode) -> ScrollRequest {
        ScrollRequest {
            field,
            value,
            axis,
            mode,
            modifiers: ModifierState::default(),
        }
    }

    #[test]
    fn integer_example_scenario() {
        let field = field();
        let mut session = EditingSession::default();
        session.begin(field, &FieldValue::I32(5));
        let config = ScrollConfig {
            desktop_speed: 1.0,
            integer_multiplier: 0.75,
            ..Default::default()
        };

        let outcome = scroll_field(
            &mut session,
            &request(field, FieldValue::I32(5), 1.0, InputMode::Screen),
            &config,
        )
        .unwrap()
        .unwrap();

        assert_eq!(outcome.value, FieldValue::I32(6));
        assert_eq!(outcome.text, "6");
    }

    #[test]
    fn quaternion_example_scenario() {
        let field = field();
        let value = FieldValue::DQuat(rotation_from_euler(DVec3::new(10.0, 0.0, 0.0)));
        let mut session = EditingSession::default();
        session.begin(field, &value);
        session.set_focused_axis(Some(EulerAxis::X));
        let config = ScrollConfig {
            vr_speed: 0.1,
            quaternion_multiplier: 10.0,
            ..Default::default()
        };

        let outcome = scroll_field(
            &mut session,
            &request(field, value, -1.0, InputMode::Spatial),
            &config,
        )
        .unwrap()
        .unwrap();

        let euler = session.cached_euler().unwrap();
        assert!((euler - DVec3::new(9.0, 0.0, 0.0)).abs().max_element() < 1e-6);
        assert_eq!(outcome.euler, Some(euler));
        assert_eq!(outcome.text, "9");
    }

    #[test]
    fn saturated_integer_reports_nothing_to_do() {
        let field = field();
        let mut session = EditingSession::default();
        session.begin(field, &FieldValue::U8(0));

        let result = scroll_field(
            &mut session,
            &request(field, FieldValue::U8(0), -1.0, InputMode::Screen),
            &ScrollConfig::default(),
        );

        assert_eq!(result, Ok(None));
    }

    #[test]
    fn fine_snap_keeps_moving_f32_values() {
        let field = field();
        let mut value = FieldValue::F32(12.3);
        let mut session = EditingSession::default();
        session.begin(field, &value);
        let snap_slow = ModifierState {
            alt: true,
            control: true,
            shift: false,
        };

        for expected in [12.2, 12.1, 12.0] {
            let outcome = scroll_field(
                &mut session,
                &ScrollRequest {
                    modifiers: snap_slow,
                    ..request(field, value, -1.0, InputMode::Screen)
                },
                &ScrollConfig::default(),
            )
            .unwrap()
            .unwrap();
            value = outcome.value;

            let current = value.as_f64().unwrap();
            assert!((current - expected).abs() < 1e-5, "expected {expected}, got {current}");
        }
    }

    #[test]
    fn snap_reads_focused_euler_component() {
        let field = field();
        let value = FieldValue::DQuat(rotation_from_euler(DVec3::new(10.0, 22.0, 0.0)));
        let mut session = EditingSession::default();
        session.begin(field, &value);
        session.set_focused_axis(Some(EulerAxis::Y));
        let snap = ModifierState {
            alt: true,
            ..Default::default()
        };
        let config = ScrollConfig {
            snap_increment: 5.0,
            ..Default::default()
        };

        let outcome = scroll_field(
            &mut session,
            &ScrollRequest {
                modifiers: snap,
                ..request(field, value, 1.0, InputMode::Screen)
            },
            &config,
        )
        .unwrap()
        .unwrap();

        // 22 snaps up to 25 on Y; the 10 on X is left alone.
        let euler = session.cached_euler().unwrap();
        assert!((euler - DVec3::new(10.0, 25.0, 0.0)).abs().max_element() < 1e-6);
        assert_eq!(outcome.text, "25");
    }

    #[test]
    fn zero_axis_changes_nothing() {
        let field = field();
        let value = FieldValue::Quat(bevy::math::Quat::IDENTITY);
        let mut session = EditingSession::default();
        session.begin(field, &value);
        session.set_focused_axis(Some(EulerAxis::Y));

        let result = scroll_field(
            &mut session,
            &request(field, value, 0.0, InputMode::Spatial),
            &ScrollConfig::default(),
        );

        assert_eq!(result, Ok(None));
        assert_eq!(session.cached_euler(), None);
    }

    #[test]
    fn quaternion_without_axis_focus_is_a_no_op() {
        let field = field();
        let value = FieldValue::DQuat(DQuat::IDENTITY);
        let mut session = EditingSession::default();
        session.begin(field, &value);

        let result = scroll_field(
            &mut session,
            &request(field, value, 1.0, InputMode::Screen),
            &ScrollConfig::default(),
        );

        assert_eq!(result, Err(ScrollError::NoAxisFocus));
        assert_eq!(session.cached_euler(), None);
    }

    #[test]
    fn inactive_field_is_rejected() {
        let mut world = World::new();
        let active = world.spawn_empty().id();
        let stale = world.spawn_empty().id();
        let mut session = EditingSession::default();
        session.begin(active, &FieldValue::F32(0.0));

        let result = scroll_field(
            &mut session,
            &request(stale, FieldValue::F32(0.0), 1.0, InputMode::Screen),
            &ScrollConfig::default(),
        );

        assert_eq!(result, Err(ScrollError::SessionEnded(stale)));
    }

    #[test]
    fn degenerate_rotation_keeps_cache() {
        let field = field();
        let value = FieldValue::DQuat(DQuat::IDENTITY);
        let mut session = EditingSession::default();
        session.begin(field, &value);
        session.set_focused_axis(Some(EulerAxis::X));
        session.store_euler(DVec3::new(f64::INFINITY, 0.0, 0.0));

        let result = scroll_field(
            &mut session,
            &request(field, value, 1.0, InputMode::Screen),
            &ScrollConfig::default(),
        );

        assert!(matches!(result, Err(ScrollError::DegenerateRotation(_))));
        assert_eq!(
            session.cached_euler(),
            Some(DVec3::new(f64::INFINITY, 0.0, 0.0))
        );
    }

    #[test]
    fn consecutive_steps_build_on_the_cache() {
        let field = field();
        let mut value = FieldValue::Quat(bevy::math::Quat::IDENTITY);
        let mut session = EditingSession::default();
        session.begin(field, &value);
        session.set_focused_axis(Some(EulerAxis::Z));
        let config = ScrollConfig::default();

        for _ in 0..3 {
            let outcome = scroll_field(
                &mut session,
                &request(field, value, 1.0, InputMode::Screen),
                &config,
            )
            .unwrap()
            .unwrap();
            value = outcome.value;
        }

        // Desktop speed 1 times quaternion multiplier 10, three times.
        assert_eq!(session.cached_euler(), Some(DVec3::new(0.0, 0.0, 30.0)));
    }
}
