use super::{Expr, Type};

/// Converts an expression to another type.
///
/// Predicates are compiled as if the cast were not there; the store coerces
/// compared operands itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    /// The expression to cast.
    pub expr: Box<Expr>,

    /// The target type.
    pub ty: Type,
}

impl Expr {
    pub fn cast(expr: impl Into<Self>, ty: Type) -> Self {
        ExprCast {
            expr: Box::new(expr.into()),
            ty,
        }
        .into()
    }

    /// Strips any number of casts from the expression.
    pub fn uncast(&self) -> &Self {
        let mut expr = self;
        while let Self::Cast(cast) = expr {
            expr = &cast.expr;
        }
        expr
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Self::Cast(value)
    }
}
