use super::{pattern::Pattern, Delimited, Formatter, Operand, ToSql};

use strata_core::{
    stmt::{BinaryOp, Expr, ExprBinaryOp, Value},
    Error, Result,
};

/// An expression in a position that must evaluate to true or false.
pub(super) struct Predicate<'a>(pub(super) &'a Expr);

/// A relational comparison between two scalar operands.
struct Comparison<'a>(&'a ExprBinaryOp);

impl ToSql for Predicate<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self.0 {
            Expr::And(expr) if expr.operands.is_empty() => fmt!(f, "(1 = 1)"),
            Expr::And(expr) => {
                let operands = expr.operands.iter().map(Predicate);
                fmt!(f, "(" Delimited(operands, " AND ") ")");
            }
            Expr::Or(expr) if expr.operands.is_empty() => fmt!(f, "(1 = 0)"),
            Expr::Or(expr) => {
                let operands = expr.operands.iter().map(Predicate);
                fmt!(f, "(" Delimited(operands, " OR ") ")");
            }
            Expr::BinaryOp(expr) => fmt!(f, Comparison(expr)),
            Expr::Call(expr) => fmt!(f, Pattern(expr)),
            Expr::Cast(expr) => fmt!(f, Predicate(&expr.expr)),
            Expr::Not(expr) => fmt!(f, "NOT (" Predicate(&expr.expr) ")"),
            Expr::Value(Value::Bool(true)) => fmt!(f, "(1 = 1)"),
            Expr::Value(Value::Bool(false)) => fmt!(f, "(1 = 0)"),
            expr => {
                return Err(Error::unsupported_expression(format!(
                    "{} as a predicate",
                    expr.node_name()
                )))
            }
        }

        Ok(())
    }
}

impl ToSql for Comparison<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let expr = self.0;

        if !expr.op.is_comparison() {
            return Err(Error::unsupported_expression(format!(
                "operator '{}'",
                expr.op
            )));
        }

        let lhs = f.operand(&expr.lhs)?;
        let rhs = f.operand(&expr.rhs)?;

        // A constant or captured value on the left is written on the right,
        // with the operator mirrored so the comparison keeps its meaning.
        let flipped = matches!(*expr.lhs, Expr::Value(_) | Expr::Captured(_));

        match expr.op {
            BinaryOp::Eq | BinaryOp::Ne => {
                let is_null = if expr.op.is_eq() {
                    " IS NULL"
                } else {
                    " IS NOT NULL"
                };

                match (lhs, rhs) {
                    (lhs, Operand::Null) => fmt!(f, "(" lhs is_null ")"),
                    (Operand::Null, rhs) => fmt!(f, "(" rhs is_null ")"),
                    (lhs, rhs) => fmt!(f, "(" lhs " " expr.op " " rhs ")"),
                }
            }
            op => {
                if lhs.is_null() || rhs.is_null() {
                    return Err(Error::unsupported_expression(format!(
                        "comparison '{op}' with null"
                    )));
                }

                if flipped {
                    fmt!(f, "(" rhs " " op.mirror() " " lhs ")");
                } else {
                    fmt!(f, "(" lhs " " op " " rhs ")");
                }
            }
        }

        Ok(())
    }
}

impl ToSql for BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(&self.to_string());
        Ok(())
    }
}
