//! User settings for value scrolling.

use bevy::prelude::*;

use crate::error::ScrollError;

/// Scroll speeds and modifier policy, read fresh every frame.
///
/// Installed with `init_resource`, so a host can insert its own values
/// before adding the plugin.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Master switch.
    pub enabled: bool,

    // Speeds
    /// Units per wheel notch in screen mode.
    pub desktop_speed: f32,
    /// Units per full axis deflection per frame in spatial mode.
    pub vr_speed: f32,

    // Per-kind scaling
    /// Extra scale for integer fields, applied before rounding.
    pub integer_multiplier: f32,
    /// Extra scale for Euler angle fields (degrees).
    pub quaternion_multiplier: f32,

    // Modifiers
    /// Grid size used while Alt is held.
    pub snap_increment: f64,
    /// Applied while Shift is held.
    pub fast_multiplier: f32,
    /// Applied while Control is held.
    pub slow_divisor: f32,

    /// Emit per-frame diagnostics through `debug!`.
    pub debug_logging: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            enabled: true,

            desktop_speed: 1.0,
            vr_speed: 0.1,

            integer_multiplier: 1.0,
            quaternion_multiplier: 10.0,

            snap_increment: 1.0,
            fast_multiplier: 10.0,
            slow_divisor: 10.0,

            debug_logging: false,
        }
    }
}

impl ScrollConfig {
    /// Checks that every factor can be used without producing NaN or a zero grid.
    pub fn validate(&self) -> Result<(), ScrollError> {
        let speeds = [
            self.desktop_speed,
            self.vr_speed,
            self.integer_multiplier,
            self.quaternion_multiplier,
        ];
        if speeds.iter().any(|speed| !(speed.is_finite() && *speed >= 0.0)) {
            return Err(ScrollError::InvalidConfig("speeds must be finite and non-negative"));
        }
        if !(self.snap_increment.is_finite() && self.snap_increment > 0.0) {
            return Err(ScrollError::InvalidConfig("snap increment must be positive"));
        }
        if !(self.fast_multiplier.is_finite() && self.fast_multiplier > 0.0) {
            return Err(ScrollError::InvalidConfig("fast multiplier must be positive"));
        }
        if !(self.slow_divisor.is_finite() && self.slow_divisor > 0.0) {
            return Err(ScrollError::InvalidConfig("slow divisor must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ScrollConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_snap_increment() {
        let config = ScrollConfig {
            snap_increment: 0.0,
            ..default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScrollError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_zero_slow_divisor() {
        let config = ScrollConfig {
            slow_divisor: 0.0,
            ..default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_nan_speed() {
        let config = ScrollConfig {
            vr_speed: f32::NAN,
            ..default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_speed() {
        // A negative speed would flip the scroll direction.
        let config = ScrollConfig {
            desktop_speed: -1.0,
            ..default()
        };
        assert!(config.validate().is_err());
    }
}
