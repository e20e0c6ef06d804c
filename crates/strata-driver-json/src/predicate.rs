//! The predicate language rows are filtered with: the text produced by the
//! expression compiler, or written by hand.

mod eval;
pub(crate) use eval::compare;

mod lexer;

mod parser;
use parser::{Node, Parser};

use strata_core::{err, schema::TableSchema, stmt::Value, Result};

#[derive(Debug, Clone)]
pub(crate) struct Predicate {
    root: Node,
}

impl Predicate {
    pub(crate) fn parse(src: &str, schema: &TableSchema) -> Result<Predicate> {
        let tokens = lexer::tokenize(src)?;
        let root = Parser::new(tokens, schema)
            .parse()
            .map_err(|e| e.context(err!("invalid predicate `{src}`")))?;

        Ok(Predicate { root })
    }

    /// Returns `true` only when the predicate holds; unknown counts as a
    /// miss.
    pub(crate) fn matches(&self, row: &[Value]) -> Result<bool> {
        Ok(eval::eval(&self.root, row)? == Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{schema::Field, stmt::Type};

    fn schema() -> TableSchema {
        TableSchema::new(
            "airport_pt",
            vec![
                Field::identifier("OBJECTID"),
                Field::new("name_e", Type::String),
                Field::new("class", Type::I32),
                Field::new("opened", Type::Timestamp),
            ],
        )
    }

    fn row(name: Option<&str>, class: Option<i32>) -> Vec<Value> {
        vec![
            Value::I64(1),
            Value::from(name),
            Value::from(class),
            Type::Timestamp
                .cast(Value::from("1999-04-01 00:00:00"))
                .unwrap(),
        ]
    }

    fn matches(src: &str, row: &[Value]) -> bool {
        Predicate::parse(src, &schema()).unwrap().matches(row).unwrap()
    }

    #[test]
    fn comparisons_and_connectives() {
        let row = row(Some("Iqaluit"), Some(3));

        assert!(matches("(class > 2)", &row));
        assert!(matches("((class > 2) AND (name_e = 'Iqaluit'))", &row));
        assert!(matches("((class < 2) OR (NAME_E LIKE 'I%'))", &row));
        assert!(matches("NOT ((class < 2))", &row));
        assert!(!matches("(name_e NOT LIKE '%lu%')", &row));
        assert!(matches("(opened < TIMESTAMP '2000-01-01 00:00:00')", &row));
        assert!(matches("(1 = 1)", &row));
        assert!(!matches("(1 = 0)", &row));
    }

    #[test]
    fn null_is_unknown() {
        let row = row(None, None);

        assert!(!matches("(class > 2)", &row));
        assert!(!matches("NOT (class > 2)", &row));
        assert!(matches("(class IS NULL)", &row));
        assert!(!matches("(name_e IS NOT NULL)", &row));
        assert!(matches("((class > 2) OR (1 = 1))", &row));
    }

    #[test]
    fn unknown_column() {
        let err = Predicate::parse("(elevation > 1)", &schema()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid predicate `(elevation > 1)`: 'elevation' was not found in 'airport_pt'"
        );
    }

    #[test]
    fn trailing_tokens() {
        assert!(Predicate::parse("(class > 1) class", &schema()).is_err());
    }
}
