//! Numeric kinds and the closed set of values a scrollable field can hold.
//!
//! Every value type a field editor can bind to is a [`FieldValue`] variant,
//! so kind resolution, arithmetic and formatting are a single `match` away.

use bevy::math::{DQuat, DVec3, EulerRot, Quat};
use core::any::TypeId;
use core::fmt;

use crate::error::ScrollError;

/// How a field's value reacts to scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Whole numbers; every scroll tick moves at least one unit.
    Integer,
    /// `f32`/`f64`; the delta is applied as is.
    FloatingPoint,
    /// A rotation edited as three Euler angles, one text field per axis.
    QuaternionEuler,
}

impl NumericKind {
    /// Resolves the kind of a declared value type.
    ///
    /// Returns `None` for types that are not scrollable.
    pub fn of<T: 'static>() -> Option<Self> {
        let id = TypeId::of::<T>();
        let integers = [
            TypeId::of::<i8>(),
            TypeId::of::<i16>(),
            TypeId::of::<i32>(),
            TypeId::of::<i64>(),
            TypeId::of::<u8>(),
            TypeId::of::<u16>(),
            TypeId::of::<u32>(),
            TypeId::of::<u64>(),
        ];

        if integers.contains(&id) {
            Some(Self::Integer)
        } else if id == TypeId::of::<f32>() || id == TypeId::of::<f64>() {
            Some(Self::FloatingPoint)
        } else if id == TypeId::of::<Quat>() || id == TypeId::of::<DQuat>() {
            Some(Self::QuaternionEuler)
        } else {
            None
        }
    }
}

/// One component of an Euler triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EulerAxis {
    X,
    Y,
    Z,
}

impl EulerAxis {
    /// All axes, in sub-editor order.
    pub const ALL: [EulerAxis; 3] = [EulerAxis::X, EulerAxis::Y, EulerAxis::Z];

    /// Reads this axis out of an Euler triple.
    pub fn component(self, euler: DVec3) -> f64 {
        match self {
            EulerAxis::X => euler.x,
            EulerAxis::Y => euler.y,
            EulerAxis::Z => euler.z,
        }
    }

    /// Returns `euler` with `delta` added to this axis only.
    pub fn offset(self, euler: DVec3, delta: f64) -> DVec3 {
        let mut out = euler;
        match self {
            EulerAxis::X => out.x += delta,
            EulerAxis::Y => out.y += delta,
            EulerAxis::Z => out.z += delta,
        }
        out
    }
}

/// Value bound to a field editor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    /// Editable as text but has no arithmetic.
    Bool(bool),
    Quat(Quat),
    DQuat(DQuat),
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    Quat => Quat,
    DQuat => DQuat,
);

/// Moves an integer by `|delta|` rounded away from zero, saturating at the type bounds.
macro_rules! offset_integer {
    ($value:expr, $ty:ty, $delta:expr) => {{
        // Float-to-int `as` saturates, so huge deltas pin to the bound.
        let step = $delta.abs().ceil() as $ty;
        if $delta < 0.0 {
            $value.saturating_sub(step)
        } else {
            $value.saturating_add(step)
        }
    }};
}

impl FieldValue {
    /// Classifies the value. `None` means scrolling has no effect on it.
    pub fn kind(&self) -> Option<NumericKind> {
        match self {
            FieldValue::I8(_)
            | FieldValue::I16(_)
            | FieldValue::I32(_)
            | FieldValue::I64(_)
            | FieldValue::U8(_)
            | FieldValue::U16(_)
            | FieldValue::U32(_)
            | FieldValue::U64(_) => Some(NumericKind::Integer),
            FieldValue::F32(_) | FieldValue::F64(_) => Some(NumericKind::FloatingPoint),
            FieldValue::Quat(_) | FieldValue::DQuat(_) => Some(NumericKind::QuaternionEuler),
            FieldValue::Bool(_) => None,
        }
    }

    /// Name of the underlying Rust type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::I8(_) => "i8",
            FieldValue::I16(_) => "i16",
            FieldValue::I32(_) => "i32",
            FieldValue::I64(_) => "i64",
            FieldValue::U8(_) => "u8",
            FieldValue::U16(_) => "u16",
            FieldValue::U32(_) => "u32",
            FieldValue::U64(_) => "u64",
            FieldValue::F32(_) => "f32",
            FieldValue::F64(_) => "f64",
            FieldValue::Bool(_) => "bool",
            FieldValue::Quat(_) => "Quat",
            FieldValue::DQuat(_) => "DQuat",
        }
    }

    /// The scalar value of a primitive, widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            FieldValue::I8(v) => Some(f64::from(v)),
            FieldValue::I16(v) => Some(f64::from(v)),
            FieldValue::I32(v) => Some(f64::from(v)),
            FieldValue::I64(v) => Some(v as f64),
            FieldValue::U8(v) => Some(f64::from(v)),
            FieldValue::U16(v) => Some(f64::from(v)),
            FieldValue::U32(v) => Some(f64::from(v)),
            FieldValue::U64(v) => Some(v as f64),
            FieldValue::F32(v) => Some(f64::from(v)),
            FieldValue::F64(v) => Some(v),
            FieldValue::Bool(_) | FieldValue::Quat(_) | FieldValue::DQuat(_) => None,
        }
    }

    /// Adds `delta` to a primitive value.
    ///
    /// A negative delta subtracts its absolute value, which keeps unsigned
    /// types from ever seeing a negative operand. Integer steps round away
    /// from zero.
    pub fn offset(self, delta: f64) -> Result<FieldValue, ScrollError> {
        let value = match self {
            FieldValue::I8(v) => FieldValue::I8(offset_integer!(v, i8, delta)),
            FieldValue::I16(v) => FieldValue::I16(offset_integer!(v, i16, delta)),
            FieldValue::I32(v) => FieldValue::I32(offset_integer!(v, i32, delta)),
            FieldValue::I64(v) => FieldValue::I64(offset_integer!(v, i64, delta)),
            FieldValue::U8(v) => FieldValue::U8(offset_integer!(v, u8, delta)),
            FieldValue::U16(v) => FieldValue::U16(offset_integer!(v, u16, delta)),
            FieldValue::U32(v) => FieldValue::U32(offset_integer!(v, u32, delta)),
            FieldValue::U64(v) => FieldValue::U64(offset_integer!(v, u64, delta)),
            FieldValue::F32(v) => {
                let step = delta.abs() as f32;
                FieldValue::F32(if delta < 0.0 { v - step } else { v + step })
            }
            FieldValue::F64(v) => {
                let step = delta.abs();
                FieldValue::F64(if delta < 0.0 { v - step } else { v + step })
            }
            other => return Err(ScrollError::Unsupported(other.type_name())),
        };
        Ok(value)
    }

    /// The rotation held by a quaternion value, widened to `f64`.
    pub fn rotation(&self) -> Option<DQuat> {
        match *self {
            FieldValue::Quat(q) => Some(DQuat::from_xyzw(
                f64::from(q.x),
                f64::from(q.y),
                f64::from(q.z),
                f64::from(q.w),
            )),
            FieldValue::DQuat(q) => Some(q),
            _ => None,
        }
    }

    /// Replaces the rotation, narrowing to the field's own precision.
    ///
    /// Non-quaternion values are returned unchanged.
    pub fn with_rotation(self, rotation: DQuat) -> FieldValue {
        match self {
            FieldValue::Quat(_) => FieldValue::Quat(Quat::from_xyzw(
                rotation.x as f32,
                rotation.y as f32,
                rotation.z as f32,
                rotation.w as f32,
            )),
            FieldValue::DQuat(_) => FieldValue::DQuat(rotation),
            other => other,
        }
    }
}

/// Canonical text for the value, as a field editor shows it.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::I8(v) => write!(f, "{v}"),
            FieldValue::I16(v) => write!(f, "{v}"),
            FieldValue::I32(v) => write!(f, "{v}"),
            FieldValue::I64(v) => write!(f, "{v}"),
            FieldValue::U8(v) => write!(f, "{v}"),
            FieldValue::U16(v) => write!(f, "{v}"),
            FieldValue::U32(v) => write!(f, "{v}"),
            FieldValue::U64(v) => write!(f, "{v}"),
            FieldValue::F32(v) => write!(f, "{v}"),
            FieldValue::F64(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Quat(v) => write!(f, "{v}"),
            FieldValue::DQuat(v) => write!(f, "{v}"),
        }
    }
}

/// Euler angles in degrees, `(pitch, yaw, roll)` applied yaw first.
pub fn euler_degrees(rotation: DQuat) -> DVec3 {
    let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
    DVec3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees())
}

/// Inverse of [`euler_degrees`].
pub fn rotation_from_euler(euler: DVec3) -> DQuat {
    DQuat::from_euler(
        EulerRot::YXZ,
        euler.y.to_radians(),
        euler.x.to_radians(),
        euler.z.to_radians(),
    )
}

/// Formats one Euler component with up to three decimals and a `.` separator.
pub fn format_angle(degrees: f64) -> String {
    let fixed = format!("{degrees:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
