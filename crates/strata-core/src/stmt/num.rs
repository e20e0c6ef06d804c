use super::{Type, Value};
use crate::Error;

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match Type::$variant.cast(value)? {
                        Value::$variant(v) => Ok(v),
                        value => Err(Error::type_conversion(value, Type::$variant)),
                    }
                }
            }
        )*
    };
}

impl_num! {
    I16(i16) {
        is_i16
    }
    I32(i32) {
        is_i32
    }
    I64(i64) {
        is_i64
    }
    F32(f32) {
        is_f32
    }
    F64(f64) {
        is_f64
    }
}

impl Type {
    pub fn is_integer(&self) -> bool {
        self.is_i16() || self.is_i32() || self.is_i64()
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_f32() || self.is_f64()
    }
}
