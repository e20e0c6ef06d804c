use super::{Direction, Expr};

/// One key of an ordering: the expression to sort by and its direction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    /// The expression
    pub expr: Expr,

    /// Ascending or descending
    pub order: Direction,
}

impl OrderByExpr {
    pub fn asc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            order: Direction::Asc,
        }
    }

    pub fn desc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            order: Direction::Desc,
        }
    }

    /// Flips the direction by which the query is ordered.
    pub fn reverse(&mut self) {
        self.order = match self.order {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

impl From<Expr> for OrderByExpr {
    fn from(expr: Expr) -> Self {
        Self::asc(expr)
    }
}
