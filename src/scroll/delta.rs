//! Turns a raw axis reading into the signed increment for this frame.
//!
//! The pipeline is:
//! 1. scale by the desktop or VR speed,
//! 2. apply the per-kind factor (integers also round away from zero),
//! 3. apply the modifier policy: snap to a grid while Alt is held,
//!    otherwise speed up with Shift or slow down with Control.

use super::config::ScrollConfig;
use super::input::{InputMode, ModifierState};
use super::numeric::NumericKind;

/// Quotients this close to a whole number count as on the snap grid.
pub const GRID_TOLERANCE: f64 = 1e-6;

/// Distance from the nearest grid line below which a quotient is on the grid.
///
/// Grows with the quotient so `f32` fields, which sit up to one `f32` ulp off
/// any decimal grid line, still count as on the grid.
pub fn grid_tolerance(quotient: f64) -> f64 {
    GRID_TOLERANCE.max(f64::from(f32::EPSILON) * quotient.abs())
}

/// `ceil` for positive values, `floor` for negative ones.
pub fn round_away_from_zero(value: f32) -> f32 {
    if value > 0.0 {
        value.ceil()
    } else {
        value.floor()
    }
}

/// Speed scaling followed by the per-kind factor.
pub fn scaled_delta(axis: f32, mode: InputMode, kind: NumericKind, config: &ScrollConfig) -> f32 {
    let speed = match mode {
        InputMode::Screen => config.desktop_speed,
        InputMode::Spatial => config.vr_speed,
    };
    let base = axis * speed;

    match kind {
        NumericKind::Integer => round_away_from_zero(base * config.integer_multiplier),
        NumericKind::QuaternionEuler => base * config.quaternion_multiplier,
        NumericKind::FloatingPoint => base,
    }
}

/// Grid size for this frame. Shift wins when Shift and Control are both held.
pub fn snap_increment(config: &ScrollConfig, modifiers: ModifierState) -> f64 {
    if modifiers.shift {
        config.snap_increment * f64::from(config.fast_multiplier)
    } else if modifiers.control {
        config.snap_increment / f64::from(config.slow_divisor)
    } else {
        config.snap_increment
    }
}

/// Delta that moves `current` to the next grid line in `direction`.
///
/// Off-grid values land on the nearest line in the scroll direction. On-grid
/// values move one whole increment.
pub fn snap_delta(current: f64, direction: f64, increment: f64) -> f64 {
    let quotient = current / increment;
    let nearest = quotient.round();

    let target = if (quotient - nearest).abs() <= grid_tolerance(quotient) {
        (nearest + direction.signum()) * increment
    } else if direction > 0.0 {
        quotient.ceil() * increment
    } else {
        quotient.floor() * increment
    };
    target - current
}

/// Shift multiplies, Control divides, Shift wins.
fn apply_multiplier(delta: f32, config: &ScrollConfig, modifiers: ModifierState) -> f32 {
    if modifiers.shift {
        delta * config.fast_multiplier
    } else if modifiers.control {
        delta / config.slow_divisor
    } else {
        delta
    }
}

/// Final signed delta for one frame.
///
/// `current` is the scalar being edited: the primitive value, or the focused
/// Euler component of a quaternion. Only the snap branch reads it. A zero
/// scaled delta stays zero, even in snap mode.
pub fn compute_delta(
    axis: f32,
    mode: InputMode,
    kind: NumericKind,
    modifiers: ModifierState,
    current: f64,
    config: &ScrollConfig,
) -> f64 {
    let scaled = scaled_delta(axis, mode, kind, config);
    if scaled == 0.0 {
        return 0.0;
    }

    if modifiers.alt {
        snap_delta(current, f64::from(scaled), snap_increment(config, modifiers))
    } else {
        f64::from(apply_multiplier(scaled, config, modifiers))
    }
}
