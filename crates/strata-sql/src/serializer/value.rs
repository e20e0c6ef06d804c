use super::Operand;

use strata_core::{stmt::Value, Error, Result};

/// Renders a constant.
pub(super) fn literal(value: &Value) -> Result<Operand> {
    use Value::*;

    let sql = match value {
        Null => return Ok(Operand::Null),
        Bool(true) => "1".to_string(),
        Bool(false) => "0".to_string(),
        I16(v) => v.to_string(),
        I32(v) => v.to_string(),
        I64(v) => v.to_string(),
        F32(v) => v.to_string(),
        F64(v) => v.to_string(),
        String(v) => quote(v),
        Timestamp(v) => format!("TIMESTAMP '{}'", v.format("%Y-%m-%d %H:%M:%S")),
        Uuid(v) => format!("'{{{}}}'", v.to_string().to_uppercase()),
        Geometry(_) => {
            return Err(Error::unsupported_expression(
                "constant of type Geometry in a predicate",
            ))
        }
    };

    Ok(Operand::Sql(sql))
}

/// Quotes text as a string literal, doubling embedded quotes.
fn quote(s: &str) -> String {
    let mut ret = String::with_capacity(s.len() + 2);
    ret.push('\'');
    for c in s.chars() {
        if c == '\'' {
            ret.push('\'');
        }
        ret.push(c);
    }
    ret.push('\'');
    ret
}
