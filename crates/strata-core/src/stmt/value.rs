use super::Type;
use crate::Geometry;

use chrono::NaiveDateTime;
use uuid::Uuid;

/// A dynamically typed value read from, or written to, a store row.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit floating point
    F64(f64),

    /// A shape value
    Geometry(Geometry),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// Date and time without a time zone
    Timestamp(NaiveDateTime),

    /// Globally unique identifier
    Uuid(Uuid),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn is_geometry(&self) -> bool {
        matches!(self, Self::Geometry(_))
    }

    /// Returns the type of the value, or `None` for null.
    pub fn ty(&self) -> Option<Type> {
        Some(match self {
            Self::Bool(_) => Type::Bool,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::Geometry(_) => Type::Geometry,
            Self::String(_) => Type::String,
            Self::Timestamp(_) => Type::Timestamp,
            Self::Uuid(_) => Type::Uuid,
            Self::Null => return None,
        })
    }

    /// Name of the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self.ty() {
            Some(ty) => ty.name(),
            None => "null",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_geometry(&self) -> Option<&Geometry> {
        match self {
            Self::Geometry(v) => Some(v),
            _ => None,
        }
    }

    /// Widens any integer value to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    /// Widens any numeric value to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(v.into()),
            Self::F64(v) => Some(v),
            _ => self.as_i64().map(|v| v as f64),
        }
    }

    /// Takes the value out, leaving null in its place.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<&bool> for Value {
    fn from(src: &bool) -> Self {
        Self::Bool(*src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Geometry> for Value {
    fn from(src: Geometry) -> Self {
        Self::Geometry(src)
    }
}

impl From<&Geometry> for Value {
    fn from(src: &Geometry) -> Self {
        Self::Geometry(src.clone())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match Type::Bool.cast(value)? {
            Value::Bool(v) => Ok(v),
            value => Err(crate::Error::type_conversion(value, Type::Bool)),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match Type::String.cast(value)? {
            Value::String(v) => Ok(v),
            value => Err(crate::Error::type_conversion(value, Type::String)),
        }
    }
}

impl TryFrom<Value> for Geometry {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Geometry(v) => Ok(v),
            value => Err(crate::Error::type_conversion(value, Type::Geometry)),
        }
    }
}
