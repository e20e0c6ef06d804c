#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Delimited;

mod operand;
use operand::Operand;

// Fragment serializers
mod expr;
mod pattern;
mod value;

use strata_core::{
    schema::Mapping,
    stmt::{Expr, ExprField},
    Error, Result,
};

/// Compiles typed expressions into the store's predicate language.
///
/// Attribute references are resolved to physical column names through the
/// mapping of the queried table.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Mapping against which expressions are resolved
    mapping: &'a Mapping,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the predicate text
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(mapping: &'a Mapping) -> Serializer<'a> {
        Serializer { mapping }
    }

    /// Compiles a boolean expression into a parenthesized predicate.
    pub fn filter(&self, expr: &Expr) -> Result<String> {
        let mut ret = String::new();

        let mut f = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        expr::Predicate(expr).to_sql(&mut f)?;

        tracing::debug!(table = self.mapping.table(), predicate = %ret, "compiled filter");
        Ok(ret)
    }

    /// Compiles an ordering key. Only attribute references are accepted; the
    /// result is the bare column name.
    pub fn sort_key(&self, expr: &Expr) -> Result<String> {
        match expr.uncast() {
            Expr::Field(field) => Ok(self.column_name(field)?.to_string()),
            expr => Err(Error::unsupported_expression(format!(
                "sorting by {}",
                expr.node_name()
            ))),
        }
    }

    fn column_name(&self, field: &ExprField) -> Result<&'a str> {
        match self.mapping.by_attribute(&field.attribute) {
            Some(mapped) => Ok(&mapped.column.name),
            None => Err(Error::schema_mismatch(format!(
                "'{}' is not mapped to a column of '{}'",
                field.attribute,
                self.mapping.table()
            ))),
        }
    }
}
