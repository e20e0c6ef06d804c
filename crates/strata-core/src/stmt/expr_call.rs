use super::Expr;

/// A method call on a receiver expression, e.g. `name.starts_with("A")`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    /// The method name.
    pub method: String,

    /// The expression the method is called on.
    pub receiver: Box<Expr>,

    /// Method arguments.
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn call(receiver: impl Into<Self>, method: impl Into<String>, args: Vec<Expr>) -> Self {
        ExprCall {
            method: method.into(),
            receiver: Box::new(receiver.into()),
            args,
        }
        .into()
    }

    pub fn contains(receiver: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Expr::call(receiver, "contains", vec![pattern.into()])
    }

    pub fn starts_with(receiver: impl Into<Self>, prefix: impl Into<Self>) -> Self {
        Expr::call(receiver, "starts_with", vec![prefix.into()])
    }

    pub fn ends_with(receiver: impl Into<Self>, suffix: impl Into<Self>) -> Self {
        Expr::call(receiver, "ends_with", vec![suffix.into()])
    }
}

impl From<ExprCall> for Expr {
    fn from(value: ExprCall) -> Self {
        Self::Call(value)
    }
}
