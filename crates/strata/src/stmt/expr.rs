use super::{IntoExpr, Primitive};

use std::{marker::PhantomData, ops::Not};
use strata_core::stmt;

/// A typed expression over the attributes of a record.
#[derive(Debug)]
pub struct Expr<T: ?Sized> {
    /// The un-typed expression
    pub(crate) untyped: stmt::Expr,

    /// `T` is the type of the expression
    pub(crate) _p: PhantomData<T>,
}

/// A constant.
pub fn lit<T: Primitive>(value: T) -> Expr<T> {
    Expr::from_value(value.to_value())
}

/// A value captured from the surrounding code under `name`. It compiles to
/// a constant like [`lit`], but keeps its name for diagnostics.
pub fn captured<T: Primitive>(name: &str, value: &T) -> Expr<T> {
    Expr::from_untyped(stmt::Expr::captured(name, value.to_value()))
}

impl<T: ?Sized> Expr<T> {
    /// Create an expression from the given value.
    pub(crate) fn from_value(value: stmt::Value) -> Self {
        Self {
            untyped: stmt::Expr::Value(value),
            _p: PhantomData,
        }
    }

    pub fn from_untyped(untyped: impl Into<stmt::Expr>) -> Self {
        Self {
            untyped: untyped.into(),
            _p: PhantomData,
        }
    }

    pub fn untyped(&self) -> &stmt::Expr {
        &self.untyped
    }

    /// Converts the expression to `U` before comparing it.
    pub fn cast<U: Primitive>(self) -> Expr<U> {
        Expr::from_untyped(stmt::Expr::cast(self.untyped, U::TYPE))
    }

    pub fn eq(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::eq(self.untyped, rhs.into_expr().untyped))
    }

    pub fn ne(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ne(self.untyped, rhs.into_expr().untyped))
    }

    pub fn gt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::gt(self.untyped, rhs.into_expr().untyped))
    }

    pub fn ge(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ge(self.untyped, rhs.into_expr().untyped))
    }

    pub fn lt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::lt(self.untyped, rhs.into_expr().untyped))
    }

    pub fn le(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::le(self.untyped, rhs.into_expr().untyped))
    }

    /// Arithmetic is representable but no store accepts it in a predicate.
    #[doc(hidden)]
    pub fn add(self, rhs: impl IntoExpr<T>) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::add(self.untyped, rhs.into_expr().untyped))
    }

    #[doc(hidden)]
    pub fn sub(self, rhs: impl IntoExpr<T>) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::sub(self.untyped, rhs.into_expr().untyped))
    }
}

impl Expr<bool> {
    pub fn and(self, rhs: impl IntoExpr<bool>) -> Self {
        Self::from_untyped(stmt::Expr::and(self.untyped, rhs.into_expr().untyped))
    }

    pub fn and_all<E>(exprs: impl IntoIterator<Item = E>) -> Self
    where
        E: IntoExpr<bool>,
    {
        Self::from_untyped(
            exprs
                .into_iter()
                .map(|expr| expr.into_expr().untyped)
                .fold(stmt::Expr::from(true), stmt::Expr::and),
        )
    }

    pub fn or(self, rhs: impl IntoExpr<bool>) -> Self {
        Self::from_untyped(stmt::Expr::or(self.untyped, rhs.into_expr().untyped))
    }

    pub fn or_any<E>(exprs: impl IntoIterator<Item = E>) -> Self
    where
        E: IntoExpr<bool>,
    {
        Self::from_untyped(stmt::Expr::or_from_vec(
            exprs.into_iter().map(|expr| expr.into_expr().untyped).collect(),
        ))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        !self
    }
}

impl Not for Expr<bool> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_untyped(stmt::Expr::not(self.untyped))
    }
}

impl<T: ?Sized> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Self {
            untyped: self.untyped.clone(),
            _p: PhantomData,
        }
    }
}

impl<T: ?Sized> From<Expr<T>> for stmt::Expr {
    fn from(value: Expr<T>) -> Self {
        value.untyped
    }
}
