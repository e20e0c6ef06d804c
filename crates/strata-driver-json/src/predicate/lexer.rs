use strata_core::{bail, stmt::Value, Result};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// A column name or keyword; keywords are recognized by the parser.
    Ident(String),
    Number(Value),
    Str(String),
    Op(Op),
    LParen,
    RParen,
    Comma,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

pub(crate) fn tokenize(src: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = vec![];
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];

        match ch {
            c if c.is_whitespace() => pos += 1,
            '(' => {
                tokens.push(Token::LParen);
                pos += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                pos += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                pos += 1;
            }
            '\'' => {
                let (s, next) = string(&chars, pos)?;
                tokens.push(Token::Str(s));
                pos = next;
            }
            '=' => {
                tokens.push(Token::Op(Op::Eq));
                pos += 1;
            }
            '<' | '>' | '!' => {
                let next = chars.get(pos + 1).copied();
                let (op, len) = match (ch, next) {
                    ('<', Some('>')) => (Op::Ne, 2),
                    ('<', Some('=')) => (Op::Le, 2),
                    ('<', _) => (Op::Lt, 1),
                    ('>', Some('=')) => (Op::Ge, 2),
                    ('>', _) => (Op::Gt, 1),
                    ('!', Some('=')) => (Op::Ne, 2),
                    _ => bail!("unexpected character '{ch}' at offset {pos}"),
                };
                tokens.push(Token::Op(op));
                pos += len;
            }
            c if c.is_ascii_digit()
                || (matches!(c, '-' | '.')
                    && chars.get(pos + 1).is_some_and(|n| n.is_ascii_digit())) =>
            {
                let (number, next) = number(&chars, pos)?;
                tokens.push(Token::Number(number));
                pos = next;
            }
            c if c.is_alphabetic() || c == '_' => {
                let start = pos;
                while pos < chars.len()
                    && (chars[pos].is_alphanumeric() || matches!(chars[pos], '_' | '.'))
                {
                    pos += 1;
                }
                tokens.push(Token::Ident(chars[start..pos].iter().collect()));
            }
            _ => bail!("unexpected character '{ch}' at offset {pos}"),
        }
    }

    Ok(tokens)
}

/// Reads a quoted literal starting at `start`; a doubled quote stands for
/// one quote character.
fn string(chars: &[char], start: usize) -> Result<(String, usize)> {
    let mut ret = String::new();
    let mut pos = start + 1;

    loop {
        match chars.get(pos) {
            Some('\'') if chars.get(pos + 1) == Some(&'\'') => {
                ret.push('\'');
                pos += 2;
            }
            Some('\'') => return Ok((ret, pos + 1)),
            Some(c) => {
                ret.push(*c);
                pos += 1;
            }
            None => bail!("unterminated string starting at offset {start}"),
        }
    }
}

fn number(chars: &[char], start: usize) -> Result<(Value, usize)> {
    let mut pos = start + 1;
    while pos < chars.len() && (chars[pos].is_ascii_digit() || matches!(chars[pos], '.' | 'e' | 'E'))
    {
        pos += 1;
    }

    let text: String = chars[start..pos].iter().collect();

    if let Ok(v) = text.parse::<i64>() {
        return Ok((Value::I64(v), pos));
    }

    match text.parse::<f64>() {
        Ok(v) => Ok((Value::F64(v), pos)),
        Err(_) => bail!("invalid number '{text}' at offset {start}"),
    }
}
