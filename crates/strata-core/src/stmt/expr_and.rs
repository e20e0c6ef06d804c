use super::Expr;

/// Conjunction of predicates. Nested conjunctions are flattened, so the
/// operands are never themselves `And`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// `lhs AND rhs`. A `true` operand is dropped and a `false` operand
    /// makes the whole conjunction `false`.
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let lhs = lhs.into();
        let rhs = rhs.into();

        if lhs.is_false() || rhs.is_false() {
            return false.into();
        }

        if lhs.is_true() {
            return rhs;
        }

        if rhs.is_true() {
            return lhs;
        }

        let mut operands = conjuncts(lhs);
        operands.extend(conjuncts(rhs));
        ExprAnd { operands }.into()
    }

    /// Conjunction of `operands` as given; an empty list is `true`.
    pub fn and_from_vec(mut operands: Vec<Self>) -> Self {
        match operands.len() {
            0 => true.into(),
            1 => operands.remove(0),
            _ => ExprAnd { operands }.into(),
        }
    }
}

fn conjuncts(expr: Expr) -> Vec<Expr> {
    match expr {
        Expr::And(and) => and.operands,
        expr => vec![expr],
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
