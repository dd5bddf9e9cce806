use log::debug;

use crate::ast::{Constant, Operator};
use crate::error::EvalError;

/// Minimal lexical unit of an expression, in left-to-right scan order.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
    /// An alphabetic name. Whether it names a registered function is decided
    /// at evaluation; whether it is followed by '(' is decided by the parser.
    Function(String),
    Constant(Constant),
}

/// Scans an expression string into tokens.
///
/// Recognizes decimal literals (one optional point, a leading `.5` reads as
/// `0.5`), the `+ - * / ^` operators, parentheses, `π`/`pi`, and alphabetic
/// function names. The display glyphs `×` and `÷` emitted by the button grid
/// are accepted directly, and grouping commas between digits are skipped so
/// a committed result such as `1,000,000` can be edited further.
///
/// Any other character fails the whole scan; tokenization never partially
/// succeeds.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '(' {
            tokens.push(Token::LeftParen);
            i += 1;
            continue;
        }
        if c == ')' {
            tokens.push(Token::RightParen);
            i += 1;
            continue;
        }

        // Display glyphs for multiply and divide.
        if c == '×' {
            tokens.push(Token::Operator(Operator::Multiply));
            i += 1;
            continue;
        }
        if c == '÷' {
            tokens.push(Token::Operator(Operator::Divide));
            i += 1;
            continue;
        }

        if let Ok(operator) = Operator::try_from(c) {
            tokens.push(Token::Operator(operator));
            i += 1;
            continue;
        }

        if c == 'π' {
            tokens.push(Token::Constant(Constant::Pi));
            i += 1;
            continue;
        }

        // Names: [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            if word == "pi" {
                tokens.push(Token::Constant(Constant::Pi));
            } else {
                tokens.push(Token::Function(word));
            }
            continue;
        }

        // Decimal literal: digits with at most one point. A second point
        // starts a new literal, which the parser then rejects as two
        // adjacent operands.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut seen_point = false;
            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !seen_point {
                    seen_point = true;
                    i += 1;
                } else if d == ','
                    && i > start
                    && chars[i - 1].is_ascii_digit()
                    && i + 1 < chars.len()
                    && chars[i + 1].is_ascii_digit()
                {
                    // grouping comma inside a re-edited committed result
                    i += 1;
                } else {
                    break;
                }
            }
            let literal: String = chars[start..i].iter().filter(|&&d| d != ',').collect();
            let value: f64 = literal
                .parse()
                .map_err(|_| EvalError::Syntax(format!("invalid number literal '{literal}'")))?;
            tokens.push(Token::Number(value));
            continue;
        }

        return Err(EvalError::InvalidCharacter(c));
    }

    debug!("tokenized {input:?} into {} tokens", tokens.len());
    Ok(tokens)
}
