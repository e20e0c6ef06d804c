use crate::predicate::compare;

use std::cmp::Ordering;
use strata_core::{bail, err, schema::TableSchema, stmt::Value, Result};

/// Sort keys parsed from an `ORDER BY` postfix clause.
#[derive(Debug, Clone, Default)]
pub(crate) struct OrderBy {
    keys: Vec<(usize, bool)>,
}

impl OrderBy {
    /// Parses `ORDER BY a, b DESC`. Keys are column names, each optionally
    /// followed by `ASC` or `DESC`.
    pub(crate) fn parse(postfix: &str, schema: &TableSchema) -> Result<OrderBy> {
        let postfix = postfix.trim();

        let Some(keys) = strip_prefix_ignore_case(postfix, "ORDER BY") else {
            bail!("unsupported postfix clause `{postfix}`");
        };

        let keys = keys
            .split(',')
            .map(|key| {
                let mut words = key.split_whitespace();
                let (Some(column), direction, None) = (words.next(), words.next(), words.next())
                else {
                    bail!("invalid sort key `{}` in `{postfix}`", key.trim());
                };

                let descending = match direction {
                    None => false,
                    Some(d) if d.eq_ignore_ascii_case("ASC") => false,
                    Some(d) if d.eq_ignore_ascii_case("DESC") => true,
                    Some(d) => bail!("invalid sort direction `{d}` in `{postfix}`"),
                };

                let position = schema
                    .position(column)
                    .ok_or_else(|| err!("'{}' was not found in '{}'", column, schema.name))?;

                Ok((position, descending))
            })
            .collect::<Result<_>>()?;

        Ok(OrderBy { keys })
    }

    /// Orders two rows. Nulls sort before every other value; values that
    /// cannot be compared count as equal.
    pub(crate) fn cmp(&self, a: &[Value], b: &[Value]) -> Ordering {
        for &(position, descending) in &self.keys {
            let ordering = match (&a[position], &b[position]) {
                (Value::Null, Value::Null) => Ordering::Equal,
                (Value::Null, _) => Ordering::Less,
                (_, Value::Null) => Ordering::Greater,
                (a, b) => compare(a, b).ok().flatten().unwrap_or(Ordering::Equal),
            };

            let ordering = if descending {
                ordering.reverse()
            } else {
                ordering
            };

            if ordering.is_ne() {
                return ordering;
            }
        }

        Ordering::Equal
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }

    let rest = &s[prefix.len()..];
    rest.starts_with(char::is_whitespace).then_some(rest)
}
