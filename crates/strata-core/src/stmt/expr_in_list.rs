use super::Expr;

/// Tests whether an expression's value appears in a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    /// The expression to search for.
    pub expr: Box<Expr>,

    /// The candidate values.
    pub list: Vec<Expr>,
}

impl Expr {
    pub fn in_list(expr: impl Into<Self>, list: Vec<Expr>) -> Self {
        ExprInList {
            expr: Box::new(expr.into()),
            list,
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}
