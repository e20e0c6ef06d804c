use super::lexer::{Op, Token};

use strata_core::{
    bail, err,
    schema::TableSchema,
    stmt::{Type, Value},
    Result,
};

/// A parsed predicate with column references resolved to field positions.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Column(usize),
    Literal(Value),
    Compare(Box<Node>, Op, Box<Node>),
    IsNull { expr: Box<Node>, negated: bool },
    Like { expr: Box<Node>, pattern: Box<Node>, negated: bool },
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
    Not(Box<Node>),
}

pub(crate) struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    schema: &'a TableSchema,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: Vec<Token>, schema: &'a TableSchema) -> Self {
        Parser {
            tokens,
            pos: 0,
            schema,
        }
    }

    pub(crate) fn parse(mut self) -> Result<Node> {
        let node = self.or()?;

        match self.peek() {
            None => Ok(node),
            Some(token) => bail!("unexpected {token:?} after the end of the predicate"),
        }
    }

    fn or(&mut self) -> Result<Node> {
        let mut lhs = self.and()?;
        while self.eat_keyword("OR") {
            lhs = Node::Or(Box::new(lhs), Box::new(self.and()?));
        }
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Node> {
        let mut lhs = self.not()?;
        while self.eat_keyword("AND") {
            lhs = Node::And(Box::new(lhs), Box::new(self.not()?));
        }
        Ok(lhs)
    }

    fn not(&mut self) -> Result<Node> {
        if self.eat_keyword("NOT") {
            return Ok(Node::Not(Box::new(self.not()?)));
        }
        self.comparison()
    }

    fn comparison(&mut self) -> Result<Node> {
        let lhs = self.operand()?;

        if let Some(Token::Op(op)) = self.peek() {
            let op = *op;
            self.pos += 1;
            let rhs = self.operand()?;
            return Ok(Node::Compare(Box::new(lhs), op, Box::new(rhs)));
        }

        if self.eat_keyword("IS") {
            let negated = self.eat_keyword("NOT");
            self.expect_keyword("NULL")?;
            return Ok(Node::IsNull {
                expr: Box::new(lhs),
                negated,
            });
        }

        let negated = self.peek_keyword("NOT") && self.peek_keyword_at(1, "LIKE");
        if negated {
            self.pos += 1;
        }

        if self.eat_keyword("LIKE") {
            let pattern = self.operand()?;
            return Ok(Node::Like {
                expr: Box::new(lhs),
                pattern: Box::new(pattern),
                negated,
            });
        }

        Ok(lhs)
    }

    fn operand(&mut self) -> Result<Node> {
        let Some(token) = self.next() else {
            bail!("predicate ended where a value was expected");
        };

        match token {
            Token::LParen => {
                let node = self.or()?;
                match self.next() {
                    Some(Token::RParen) => Ok(node),
                    other => bail!("expected ')' but found {other:?}"),
                }
            }
            Token::Number(value) => Ok(Node::Literal(value)),
            Token::Str(s) => Ok(Node::Literal(Value::String(s))),
            Token::Ident(ident) => self.ident(ident),
            token => bail!("unexpected {token:?} where a value was expected"),
        }
    }

    fn ident(&mut self, ident: String) -> Result<Node> {
        if ident.eq_ignore_ascii_case("NULL") {
            return Ok(Node::Literal(Value::Null));
        }

        if ident.eq_ignore_ascii_case("TRUE") {
            return Ok(Node::Literal(Value::Bool(true)));
        }

        if ident.eq_ignore_ascii_case("FALSE") {
            return Ok(Node::Literal(Value::Bool(false)));
        }

        if ident.eq_ignore_ascii_case("TIMESTAMP") {
            return match self.next() {
                Some(Token::Str(s)) => Ok(Node::Literal(Type::Timestamp.cast(Value::String(s))?)),
                other => bail!("expected a quoted timestamp but found {other:?}"),
            };
        }

        self.schema
            .position(&ident)
            .map(Node::Column)
            .ok_or_else(|| err!("'{}' was not found in '{}'", ident, self.schema.name))
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        self.peek_keyword_at(0, keyword)
    }

    fn peek_keyword_at(&self, offset: usize, keyword: &str) -> bool {
        matches!(
            self.tokens.get(self.pos + offset),
            Some(Token::Ident(ident)) if ident.eq_ignore_ascii_case(keyword)
        )
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let found = self.peek_keyword(keyword);
        if found {
            self.pos += 1;
        }
        found
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            bail!("expected {keyword} but found {:?}", self.peek())
        }
    }
}
