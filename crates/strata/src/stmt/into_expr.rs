use super::{Expr, Path, Primitive};

use chrono::NaiveDateTime;
use strata_core::{
    stmt::{self, Value},
    Geometry,
};
use uuid::Uuid;

/// Conversion into a typed expression.
pub trait IntoExpr<T: ?Sized> {
    fn into_expr(self) -> Expr<T>;
}

impl<T: ?Sized> IntoExpr<T> for Expr<T> {
    fn into_expr(self) -> Expr<T> {
        self
    }
}

impl<T: ?Sized> IntoExpr<T> for &Expr<T> {
    fn into_expr(self) -> Expr<T> {
        self.clone()
    }
}

impl<T: ?Sized> IntoExpr<T> for Path<T> {
    fn into_expr(self) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::from(self))
    }
}

impl<T: ?Sized> IntoExpr<T> for &Path<T> {
    fn into_expr(self) -> Expr<T> {
        self.clone().into_expr()
    }
}

macro_rules! impl_into_expr_for_primitive {
    ( $( $ty:ty ),* ) => {
        $(
            impl IntoExpr<$ty> for $ty {
                fn into_expr(self) -> Expr<$ty> {
                    Expr::from_value(self.to_value())
                }
            }

            impl IntoExpr<$ty> for &$ty {
                fn into_expr(self) -> Expr<$ty> {
                    Expr::from_value(self.to_value())
                }
            }

            impl IntoExpr<Option<$ty>> for $ty {
                fn into_expr(self) -> Expr<Option<$ty>> {
                    Expr::from_value(self.to_value())
                }
            }

            impl IntoExpr<Option<$ty>> for Option<$ty> {
                fn into_expr(self) -> Expr<Option<$ty>> {
                    Expr::from_value(self.to_value())
                }
            }
        )*
    };
}

impl_into_expr_for_primitive!(
    bool,
    i16,
    i32,
    i64,
    f32,
    f64,
    String,
    Geometry,
    NaiveDateTime,
    Uuid
);

impl IntoExpr<String> for &str {
    fn into_expr(self) -> Expr<String> {
        Expr::from_value(Value::from(self))
    }
}

impl IntoExpr<Option<String>> for &str {
    fn into_expr(self) -> Expr<Option<String>> {
        Expr::from_value(Value::from(self))
    }
}
