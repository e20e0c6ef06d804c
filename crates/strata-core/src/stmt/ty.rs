use super::Value;
use crate::{Error, Result};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Formats accepted when converting text to a timestamp.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// The type of a record attribute or of a physical column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// String type
    String,

    /// Date and time without a time zone
    Timestamp,

    /// Globally unique identifier
    Uuid,

    /// A shape
    Geometry,
}

impl Type {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
            Self::Timestamp => "Timestamp",
            Self::Uuid => "Uuid",
            Self::Geometry => "Geometry",
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_geometry(&self) -> bool {
        matches!(self, Self::Geometry)
    }

    /// Returns `true` if `value` is null or already of this type.
    pub fn is_instance(&self, value: &Value) -> bool {
        value.ty().map(|ty| ty == *self).unwrap_or(true)
    }

    /// Converts `value` to this type.
    ///
    /// Null converts to null. Numeric conversions are range checked and a
    /// float only converts to an integer when it has no fractional part.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if self.is_instance(&value) {
            return Ok(value);
        }

        let cast = match self {
            Self::Bool => cast_bool(&value),
            Self::I16 => cast_integer(&value).and_then(|v| i16::try_from(v).ok().map(Value::I16)),
            Self::I32 => cast_integer(&value).and_then(|v| i32::try_from(v).ok().map(Value::I32)),
            Self::I64 => cast_integer(&value).map(Value::I64),
            Self::F32 => cast_float(&value).map(|v| Value::F32(v as f32)),
            Self::F64 => cast_float(&value).map(Value::F64),
            Self::String => cast_string(&value),
            Self::Timestamp => value.as_str().and_then(parse_timestamp).map(Value::Timestamp),
            Self::Uuid => value
                .as_str()
                .and_then(|s| s.trim().trim_matches(['{', '}']).parse().ok())
                .map(Value::Uuid),
            Self::Geometry => None,
        };

        cast.ok_or_else(|| Error::type_conversion(value, *self))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn cast_bool(value: &Value) -> Option<Value> {
    if let Some(v) = value.as_i64() {
        return Some(Value::Bool(v != 0));
    }

    let s = value.as_str()?.trim();

    if s.eq_ignore_ascii_case("true") || s == "1" {
        Some(Value::Bool(true))
    } else if s.eq_ignore_ascii_case("false") || s == "0" {
        Some(Value::Bool(false))
    } else {
        None
    }
}

fn cast_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(v) => Some(i64::from(*v)),
        Value::F32(v) => integral(f64::from(*v)),
        Value::F64(v) => integral(*v),
        Value::String(s) => {
            let s = s.trim();
            s.parse().ok().or_else(|| s.parse().ok().and_then(integral))
        }
        _ => value.as_i64(),
    }
}

fn integral(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

fn cast_float(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        _ => value.as_f64(),
    }
}

fn cast_string(value: &Value) -> Option<Value> {
    let s = match value {
        Value::Bool(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::Timestamp(v) => v.format("%Y-%m-%d %H:%M:%S").to_string(),
        Value::Uuid(v) => v.to_string(),
        _ => return None,
    };
    Some(Value::String(s))
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}
