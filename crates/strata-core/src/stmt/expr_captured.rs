use super::{Expr, Value};

/// Member access on a value captured from outside the query, such as a
/// local variable or a field of another record.
///
/// Unlike [`ExprField`](super::ExprField) it never refers to a column; it is
/// rendered as the constant it held when the expression was built.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCaptured {
    /// Name of the captured member, kept for diagnostics.
    pub name: String,

    /// The captured value.
    pub value: Value,
}

impl Expr {
    pub fn captured(name: impl Into<String>, value: impl Into<Value>) -> Self {
        ExprCaptured {
            name: name.into(),
            value: value.into(),
        }
        .into()
    }
}

impl From<ExprCaptured> for Expr {
    fn from(value: ExprCaptured) -> Self {
        Self::Captured(value)
    }
}
