use super::Expr;

/// Disjunction of predicates, flattened like [`ExprAnd`](super::ExprAnd).
#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// `lhs OR rhs`. A `false` operand is dropped and a `true` operand makes
    /// the whole disjunction `true`.
    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let lhs = lhs.into();
        let rhs = rhs.into();

        if lhs.is_true() || rhs.is_true() {
            return true.into();
        }

        if lhs.is_false() {
            return rhs;
        }

        if rhs.is_false() {
            return lhs;
        }

        let mut operands = disjuncts(lhs);
        operands.extend(disjuncts(rhs));
        ExprOr { operands }.into()
    }

    /// Disjunction of `operands` as given; an empty list is `false`.
    pub fn or_from_vec(mut operands: Vec<Self>) -> Self {
        match operands.len() {
            0 => false.into(),
            1 => operands.remove(0),
            _ => ExprOr { operands }.into(),
        }
    }
}

fn disjuncts(expr: Expr) -> Vec<Expr> {
    match expr {
        Expr::Or(or) => or.operands,
        expr => vec![expr],
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
