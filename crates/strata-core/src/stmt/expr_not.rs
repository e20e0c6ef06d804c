use super::{Expr, Value};

/// Logical negation of a predicate. A row for which the operand is unknown
/// stays unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNot {
    pub expr: Box<Expr>,
}

impl Expr {
    /// Negates `expr`. Boolean constants are folded and a double negation
    /// collapses to its operand.
    pub fn not(expr: impl Into<Self>) -> Self {
        match expr.into() {
            Self::Value(Value::Bool(value)) => Self::from(!value),
            Self::Not(ExprNot { expr }) => *expr,
            expr => ExprNot {
                expr: Box::new(expr),
            }
            .into(),
        }
    }

    pub fn is_not(&self) -> bool {
        matches!(self, Self::Not(_))
    }
}

impl From<ExprNot> for Expr {
    fn from(value: ExprNot) -> Self {
        Self::Not(value)
    }
}
