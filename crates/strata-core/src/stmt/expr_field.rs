use super::Expr;

/// Member access on the queried record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprField {
    /// Name of the record attribute.
    pub attribute: String,
}

impl Expr {
    pub fn field(attribute: impl Into<String>) -> Self {
        ExprField {
            attribute: attribute.into(),
        }
        .into()
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
