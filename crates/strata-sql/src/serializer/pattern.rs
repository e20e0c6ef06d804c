use super::{Formatter, Operand, ToSql};

use strata_core::{stmt::ExprCall, Error, Result};

/// Where the wildcard goes in a `LIKE` pattern.
#[derive(Debug, Clone, Copy)]
enum Wildcard {
    Leading,
    Trailing,
    Both,
}

/// A string-matching method call rendered as `LIKE`.
pub(super) struct Pattern<'a>(pub(super) &'a ExprCall);

impl ToSql for Pattern<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let call = self.0;

        let wildcard = match call.method.as_str() {
            "contains" => Wildcard::Both,
            "starts_with" => Wildcard::Trailing,
            "ends_with" => Wildcard::Leading,
            _ => return Err(Error::unsupported_expression(format!("method '{}'", call.method))),
        };

        let [arg] = &call.args[..] else {
            return Err(Error::unsupported_expression(format!(
                "method '{}' with {} arguments",
                call.method,
                call.args.len()
            )));
        };

        let receiver = f.operand(&call.receiver)?;

        let Operand::Sql(pattern) = f.operand(arg)? else {
            return Err(Error::unsupported_expression(format!(
                "method '{}' with a null argument",
                call.method
            )));
        };

        let pattern = apply(pattern, wildcard);
        fmt!(f, "(" receiver " LIKE " pattern ")");
        Ok(())
    }
}

/// Replaces the quote that opens and/or closes a string literal with one
/// followed or preceded by `%`. Operands that are not string literals are
/// left as they are.
fn apply(mut pattern: String, wildcard: Wildcard) -> String {
    let leading = matches!(wildcard, Wildcard::Leading | Wildcard::Both);
    let trailing = matches!(wildcard, Wildcard::Trailing | Wildcard::Both);

    if trailing && pattern.ends_with('\'') {
        pattern.pop();
        pattern.push_str("%'");
    }

    if leading && pattern.starts_with('\'') {
        pattern.replace_range(..1, "'%");
    }

    pattern
}
