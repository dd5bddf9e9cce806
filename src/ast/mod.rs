use std::f64::consts;

mod evaluator;
mod lexer;
mod parser;

pub use evaluator::{Evaluator, Function};
pub use lexer::{tokenize, Token};
pub use parser::Parser;

use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Number(f64),
    Constant(Constant),
    Negation(Box<ASTNode>),
    BinaryOperation {
        left: Box<ASTNode>,
        operator: Operator,
        right: Box<ASTNode>,
    },
    FunctionCall {
        name: String,
        argument: Box<ASTNode>,
    },
}

/// Named constants are kept symbolic in the tree and resolved during the
/// evaluation walk, not at tokenization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
}

impl Constant {
    pub fn value(&self) -> f64 {
        match self {
            Constant::Pi => consts::PI,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Constant::Pi => "π",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        let value = match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                left / right
            }
            Operator::Power => left.powf(right),
        };

        if value.is_nan() {
            Err(EvalError::Domain(format!(
                "'{}' is undefined for operands {left} and {right}",
                self.symbol()
            )))
        } else if value.is_infinite() {
            Err(EvalError::Overflow)
        } else {
            Ok(value)
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EvalError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '^' => Ok(Operator::Power),
            _ => Err(EvalError::InvalidCharacter(value)),
        }
    }
}
