use super::{lexer::Op, parser::Node};

use std::cmp::Ordering;
use strata_core::{
    bail,
    stmt::{Type, Value},
    Result,
};

/// Evaluates `node` against a row with SQL's three-valued logic. `None`
/// stands for unknown.
pub(crate) fn eval(node: &Node, row: &[Value]) -> Result<Option<bool>> {
    Ok(match node {
        Node::And(lhs, rhs) => match (eval(lhs, row)?, eval(rhs, row)?) {
            (Some(false), _) | (_, Some(false)) => Some(false),
            (Some(true), Some(true)) => Some(true),
            _ => None,
        },
        Node::Or(lhs, rhs) => match (eval(lhs, row)?, eval(rhs, row)?) {
            (Some(true), _) | (_, Some(true)) => Some(true),
            (Some(false), Some(false)) => Some(false),
            _ => None,
        },
        Node::Not(expr) => eval(expr, row)?.map(|b| !b),
        Node::IsNull { expr, negated } => Some(scalar(expr, row)?.is_null() != *negated),
        Node::Compare(lhs, op, rhs) => {
            let lhs = scalar(lhs, row)?;
            let rhs = scalar(rhs, row)?;

            compare(&lhs, &rhs)?.map(|ordering| match op {
                Op::Eq => ordering.is_eq(),
                Op::Ne => ordering.is_ne(),
                Op::Lt => ordering.is_lt(),
                Op::Le => ordering.is_le(),
                Op::Gt => ordering.is_gt(),
                Op::Ge => ordering.is_ge(),
            })
        }
        Node::Like {
            expr,
            pattern,
            negated,
        } => {
            let value = text(scalar(expr, row)?)?;
            let pattern = text(scalar(pattern, row)?)?;

            match (value, pattern) {
                (Some(value), Some(pattern)) => Some(like(&value, &pattern) != *negated),
                _ => None,
            }
        }
        Node::Column(_) | Node::Literal(_) => truth(scalar(node, row)?)?,
    })
}

fn scalar(node: &Node, row: &[Value]) -> Result<Value> {
    match node {
        Node::Column(index) => Ok(row[*index].clone()),
        Node::Literal(value) => Ok(value.clone()),
        node => Ok(match eval(node, row)? {
            Some(b) => Value::Bool(b),
            None => Value::Null,
        }),
    }
}

fn truth(value: Value) -> Result<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b)),
        value => match value.as_f64() {
            Some(v) => Ok(Some(v != 0.0)),
            None => bail!("{} is not a condition", value.type_name()),
        },
    }
}

fn text(value: Value) -> Result<Option<String>> {
    match Type::String.cast(value)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Orders two values, converting one side when the types differ. `None` when
/// either side is null.
pub(crate) fn compare(lhs: &Value, rhs: &Value) -> Result<Option<Ordering>> {
    if lhs.is_null() || rhs.is_null() {
        return Ok(None);
    }

    Ok(match (lhs, rhs) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        (Value::Uuid(a), Value::Uuid(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Geometry(_), _) | (_, Value::Geometry(_)) => {
            bail!("geometries cannot be compared")
        }
        (Value::Timestamp(_) | Value::Uuid(_), Value::String(_)) => {
            let ty = lhs.ty().unwrap_or(Type::String);
            return compare(lhs, &ty.cast(rhs.clone())?);
        }
        (Value::String(_), Value::Timestamp(_) | Value::Uuid(_)) => {
            let ty = rhs.ty().unwrap_or(Type::String);
            return compare(&ty.cast(lhs.clone())?, rhs);
        }
        _ => {
            let a = number(lhs)?;
            let b = number(rhs)?;
            a.partial_cmp(&b)
        }
    })
}

fn number(value: &Value) -> Result<f64> {
    match value {
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => match s.trim().parse() {
            Ok(v) => Ok(v),
            Err(_) => bail!("cannot compare '{s}' with a number"),
        },
        value => match value.as_f64() {
            Some(v) => Ok(v),
            None => bail!("cannot compare {} with a number", value.type_name()),
        },
    }
}

/// Matches `value` against a LIKE pattern: `%` matches any run of
/// characters and `_` exactly one.
pub(crate) fn like(value: &str, pattern: &str) -> bool {
    let value: Vec<char> = value.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    // matches[j]: pattern[..i] matches value[..j]
    let mut matches = vec![false; value.len() + 1];
    matches[0] = true;

    for p in &pattern {
        let mut next = vec![false; value.len() + 1];

        match p {
            '%' => {
                let mut seen = false;
                for j in 0..=value.len() {
                    seen |= matches[j];
                    next[j] = seen;
                }
            }
            p => {
                for j in 1..=value.len() {
                    next[j] = matches[j - 1] && (*p == '_' || *p == value[j - 1]);
                }
            }
        }

        matches = next;
    }

    matches[value.len()]
}
