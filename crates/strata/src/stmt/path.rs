use super::{Expr, IntoExpr, Primitive};

use std::{fmt, marker::PhantomData};
use strata_core::stmt::{self, OrderByExpr};

/// A typed reference to one attribute of a record.
///
/// Paths are handed out by the generated `fields()` accessor and are the
/// starting point of every filter and sort key.
pub struct Path<T: ?Sized> {
    pub(super) untyped: stmt::ExprField,
    _p: PhantomData<T>,
}

impl<T: ?Sized> Path<T> {
    pub fn from_attribute(attribute: impl Into<String>) -> Self {
        Self {
            untyped: stmt::ExprField {
                attribute: attribute.into(),
            },
            _p: PhantomData,
        }
    }

    /// Name of the attribute on the record.
    pub fn attribute(&self) -> &str {
        &self.untyped.attribute
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

    /// Builds an `IN` list. Filters reject it, so it is not part of the
    /// documented surface.
    #[doc(hidden)]
    pub fn in_list<I>(self, items: impl IntoIterator<Item = I>) -> Expr<bool>
    where
        I: IntoExpr<T>,
    {
        Expr::from_untyped(stmt::Expr::in_list(
            self.untyped,
            items.into_iter().map(|item| item.into_expr().untyped).collect(),
        ))
    }

    /// Converts the attribute to `U` before comparing it.
    pub fn cast<U: Primitive>(self) -> Expr<U> {
        Expr::from_untyped(stmt::Expr::cast(self.untyped, U::TYPE))
    }

    pub fn asc(self) -> OrderByExpr {
        OrderByExpr::asc(self.untyped)
    }

    pub fn desc(self) -> OrderByExpr {
        OrderByExpr::desc(self.untyped)
    }
}

impl<T> Path<Option<T>> {
    pub fn is_none(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::eq(self.untyped, stmt::Expr::null()))
    }

    pub fn is_some(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ne(self.untyped, stmt::Expr::null()))
    }
}

macro_rules! impl_text_methods {
    ($ty:ty) => {
        impl Path<$ty> {
            /// Matches values containing `pattern`.
            pub fn contains(self, pattern: impl IntoExpr<String>) -> Expr<bool> {
                Expr::from_untyped(stmt::Expr::contains(
                    self.untyped,
                    pattern.into_expr().untyped,
                ))
            }

            pub fn starts_with(self, prefix: impl IntoExpr<String>) -> Expr<bool> {
                Expr::from_untyped(stmt::Expr::starts_with(
                    self.untyped,
                    prefix.into_expr().untyped,
                ))
            }

            pub fn ends_with(self, suffix: impl IntoExpr<String>) -> Expr<bool> {
                Expr::from_untyped(stmt::Expr::ends_with(
                    self.untyped,
                    suffix.into_expr().untyped,
                ))
            }
        }
    };
}

impl_text_methods!(String);
impl_text_methods!(Option<String>);

impl<T: ?Sized> Clone for Path<T> {
    fn clone(&self) -> Self {
        Self {
            untyped: self.untyped.clone(),
            _p: PhantomData,
        }
    }
}

impl<T: ?Sized> From<Path<T>> for stmt::Expr {
    fn from(value: Path<T>) -> Self {
        value.untyped.into()
    }
}

impl<T: ?Sized> From<Path<T>> for OrderByExpr {
    fn from(value: Path<T>) -> Self {
        value.asc()
    }
}

impl<T: ?Sized> fmt::Debug for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.untyped.attribute).finish()
    }
}
