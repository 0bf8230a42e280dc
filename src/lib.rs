//! Scroll-to-adjust for numeric text fields in Bevy.
//!
//! Built for editors where typing is slow, like VR: scroll while a number or
//! an Euler angle is being edited and the value follows.

pub mod error;
pub mod scroll;

// Re-export the main plugin for convenience
pub use error::ScrollError;
pub use scroll::{ScrollConfig, ScrollFieldsPlugin};
