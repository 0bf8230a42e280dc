//! Value scrolling for numeric text fields.
//!
//! While a field editor has text focus, the mouse wheel (desktop) or a
//! controller's thumbstick (VR) nudges its value. Modifier keys speed it up
//! (Shift), slow it down (Control) or snap it to a grid (Alt).

pub mod ambient;
pub mod apply;
pub mod arbiter;
pub mod config;
pub mod delta;
pub mod host;
pub mod input;
pub mod numeric;
pub mod pipeline;
pub mod plugin;
pub mod state;
pub mod suppress;

pub use ambient::HoverScrollPlugin;
pub use arbiter::{LastTouchSource, PRIMARY_POINTER_SIDE, TouchSource, UiPressed};
pub use config::ScrollConfig;
pub use host::{
    EditBegin, EditEnd, EulerAxisEditors, FieldScrolled, InteractionHandler, InteractionSpace,
    ScrollableField, Side, UiScrollAxis,
};
pub use input::{InputMode, ModifierState};
pub use numeric::{EulerAxis, FieldValue, NumericKind};
pub use plugin::{ScrollFieldSet, ScrollFieldsPlugin};
pub use state::EditingSession;
pub use suppress::{InputClaim, ScrollSuppression};
