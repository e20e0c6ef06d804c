use super::Primitive;
use crate::Result;

use chrono::NaiveDateTime;
use strata_core::stmt::{Type, Value};

impl Primitive for NaiveDateTime {
    const TYPE: Type = Type::Timestamp;

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}
