use serde_json::Value as JsonValue;
use strata_core::{
    bail,
    geometry::Geometry,
    stmt::{Type, Value as CoreValue},
    Error, Result,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A column value as held in a table document.
#[derive(Debug)]
pub(crate) struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this JSON driver value into the core value.
    pub(crate) fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Reads a document value stored in a column of type `ty`.
    pub(crate) fn from_json(json: &JsonValue, ty: Type) -> Result<Self> {
        let value = match json {
            JsonValue::Null => CoreValue::Null,
            JsonValue::Bool(v) => CoreValue::Bool(*v),
            JsonValue::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(v), _) => CoreValue::I64(v),
                (None, Some(v)) => CoreValue::F64(v),
                _ => bail!("number {n} is out of range"),
            },
            JsonValue::String(s) => CoreValue::String(s.clone()),
            JsonValue::Object(_) if ty.is_geometry() => {
                let geometry: Geometry =
                    serde_json::from_value(json.clone()).map_err(Error::driver_operation_failed)?;
                CoreValue::Geometry(geometry)
            }
            json => bail!("cannot read {json} as {ty}"),
        };

        Ok(Value(ty.cast(value)?))
    }

    pub(crate) fn to_json(&self) -> Result<JsonValue> {
        Ok(match &self.0 {
            CoreValue::Null => JsonValue::Null,
            CoreValue::Bool(v) => JsonValue::Bool(*v),
            CoreValue::I16(v) => JsonValue::from(*v),
            CoreValue::I32(v) => JsonValue::from(*v),
            CoreValue::I64(v) => JsonValue::from(*v),
            CoreValue::F32(v) => float(f64::from(*v))?,
            CoreValue::F64(v) => float(*v)?,
            CoreValue::String(v) => JsonValue::String(v.clone()),
            CoreValue::Timestamp(v) => JsonValue::String(v.format(TIMESTAMP_FORMAT).to_string()),
            CoreValue::Uuid(v) => JsonValue::String(v.to_string()),
            CoreValue::Geometry(v) => {
                serde_json::to_value(v).map_err(Error::driver_operation_failed)?
            }
        })
    }
}

fn float(v: f64) -> Result<JsonValue> {
    match serde_json::Number::from_f64(v) {
        Some(n) => Ok(JsonValue::Number(n)),
        None => bail!("{v} cannot be stored"),
    }
}
