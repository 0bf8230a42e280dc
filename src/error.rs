//! Errors raised inside the scroll pipeline.
//!
//! None of these reach the user. The frame system treats every error as
//! "no change this frame" and only reports it when debug logging is on.

use bevy::math::DVec3;
use bevy::prelude::Entity;
use thiserror::Error;

/// Reasons a scroll step did not change the edited value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrollError {
    /// A `ScrollConfig` field is out of its usable range.
    #[error("invalid scroll config: {0}")]
    InvalidConfig(&'static str),

    /// The value type has no add/subtract.
    #[error("{0} values cannot be scrolled")]
    Unsupported(&'static str),

    /// Rebuilding the quaternion from Euler angles produced NaN.
    #[error("euler angles {0:?} produced a degenerate rotation")]
    DegenerateRotation(DVec3),

    /// A quaternion field is being edited but none of its axis editors has text focus.
    #[error("no euler axis editor has text focus")]
    NoAxisFocus,

    /// The field stopped being edited before the write.
    #[error("field {0} is no longer being edited")]
    SessionEnded(Entity),
}
