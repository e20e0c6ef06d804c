use super::{Type, Value};
use crate::Error;

use chrono::NaiveDateTime;
use uuid::Uuid;

macro_rules! impl_scalar_conversions {
    ($scalar:ty, $name:ident) => {
        impl From<$scalar> for Value {
            fn from(value: $scalar) -> Self {
                Self::$name(value)
            }
        }

        impl From<&$scalar> for Value {
            fn from(value: &$scalar) -> Self {
                Self::$name(*value)
            }
        }

        impl TryFrom<Value> for $scalar {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match Type::$name.cast(value)? {
                    Value::$name(value) => Ok(value),
                    value => Err(Error::type_conversion(value, Type::$name)),
                }
            }
        }
    };
}

impl_scalar_conversions!(NaiveDateTime, Timestamp);
impl_scalar_conversions!(Uuid, Uuid);
