use crate::Result;

use strata_core::{
    stmt::{Type, Value},
    Geometry,
};
use uuid::Uuid;

/// A type that can be stored in a single column.
pub trait Primitive: Sized {
    const TYPE: Type;

    /// `true` for `Option<T>`; a null column then loads as `None`.
    const NULLABLE: bool = false;

    /// Converts a column value, coercing it to `Self` when the store holds a
    /// different type.
    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $name:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$name;

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
    Geometry => Geometry,
    Uuid => Uuid,
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => Ok(Some(T::load(value)?)),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}
