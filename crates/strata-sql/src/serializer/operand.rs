use super::{value, Formatter, ToSql};

use strata_core::{stmt::Expr, Error, Result};

/// A rendered comparison operand.
///
/// Null has no textual form of its own; comparisons against it are
/// rewritten into `IS NULL` tests.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Operand {
    Null,
    Sql(String),
}

impl Operand {
    pub(super) fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Formatter<'_> {
    /// Renders a scalar expression without writing it.
    pub(super) fn operand(&mut self, expr: &Expr) -> Result<Operand> {
        match expr {
            Expr::Field(field) => Ok(Operand::Sql(
                self.serializer.column_name(field)?.to_string(),
            )),
            Expr::Captured(captured) => value::literal(&captured.value),
            Expr::Value(value) => value::literal(value),
            Expr::Cast(cast) => self.operand(&cast.expr),
            expr => Err(Error::unsupported_expression(expr.node_name())),
        }
    }
}

impl ToSql for Operand {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            Operand::Null => fmt!(f, "NULL"),
            Operand::Sql(sql) => fmt!(f, sql),
        }
        Ok(())
    }
}
