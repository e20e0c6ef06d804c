use super::*;

/// A boolean or scalar expression over the attributes of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Method call on a receiver expression
    Call(ExprCall),

    /// A member of a value captured from outside the query
    Captured(ExprCaptured),

    /// Cast an expression to a different type
    Cast(ExprCast),

    /// References an attribute of the queried record
    Field(ExprField),

    /// In list
    InList(ExprInList),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of expressions
    Or(ExprOr),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is the `true` boolean expression
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(true)))
    }

    /// Returns `true` if the expression is the `false` boolean expression
    pub fn is_false(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(false)))
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(..))
    }

    pub fn is_captured(&self) -> bool {
        matches!(self, Self::Captured(..))
    }

    /// Returns true if the expression is a binary operation
    pub fn is_binary_op(&self) -> bool {
        matches!(self, Self::BinaryOp(..))
    }

    /// Returns a short name for the kind of node, used when reporting
    /// expressions that cannot be compiled.
    pub fn node_name(&self) -> String {
        match self {
            Self::And(_) => "AND".to_string(),
            Self::BinaryOp(e) => format!("operator '{}'", e.op),
            Self::Call(e) => format!("method '{}'", e.method),
            Self::Captured(e) => format!("captured value '{}'", e.name),
            Self::Cast(e) => format!("cast to {}", e.ty),
            Self::Field(e) => format!("field '{}'", e.attribute),
            Self::InList(_) => "IN list".to_string(),
            Self::Not(_) => "NOT".to_string(),
            Self::Or(_) => "OR".to_string(),
            Self::Value(v) => format!("constant of type {}", v.type_name()),
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Value(Value::Null))
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::Value(Value::default())
    }
}

macro_rules! impl_from_constant {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_constant!(
    bool,
    i16,
    i32,
    i64,
    f32,
    f64,
    String,
    &String,
    &str,
    chrono::NaiveDateTime,
    uuid::Uuid,
    crate::Geometry
);

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
