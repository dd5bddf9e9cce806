use log::debug;

use crate::ast::{tokenize, ASTNode, Operator, Token};
use crate::error::EvalError;

/// Recursive-descent parser over the token list.
///
/// Binding, tightest first: parentheses and function arguments, `^`
/// (right-associative), unary minus, `* /` (left-associative), `+ -`
/// (left-associative). Operands combine only through explicit operator
/// tokens; adjacency such as `2(3+4)` is a syntax failure.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn parse_expression(input: &str) -> Result<ASTNode, EvalError> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(EvalError::Syntax("empty expression".to_string()));
        }

        let mut parser = Parser {
            tokens,
            position: 0,
        };
        let node = parser.build_additive_expression()?;
        if let Some(token) = parser.peek() {
            return Err(EvalError::Syntax(format!(
                "unexpected token {token:?} after expression"
            )));
        }

        debug!("parsed {input:?}: {node:?}");
        Ok(node)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn build_additive_expression(&mut self) -> Result<ASTNode, EvalError> {
        let mut node = self.build_multiplicative_expression()?;

        while let Some(Token::Operator(op @ (Operator::Add | Operator::Subtract))) = self.peek() {
            let operator = *op;
            self.position += 1;
            let right = self.build_multiplicative_expression()?;
            node = ASTNode::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn build_multiplicative_expression(&mut self) -> Result<ASTNode, EvalError> {
        let mut node = self.build_unary_expression()?;

        while let Some(Token::Operator(op @ (Operator::Multiply | Operator::Divide))) = self.peek()
        {
            let operator = *op;
            self.position += 1;
            let right = self.build_unary_expression()?;
            node = ASTNode::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn build_unary_expression(&mut self) -> Result<ASTNode, EvalError> {
        if let Some(Token::Operator(Operator::Subtract)) = self.peek() {
            self.position += 1;
            let operand = self.build_unary_expression()?;
            return Ok(ASTNode::Negation(Box::new(operand)));
        }

        self.build_power_expression()
    }

    fn build_power_expression(&mut self) -> Result<ASTNode, EvalError> {
        let base = self.build_primary_expression()?;

        if let Some(Token::Operator(Operator::Power)) = self.peek() {
            self.position += 1;
            // Right-associative, and the exponent may carry a unary minus
            // so the key sequence `^` `-` `3` does not dead-end.
            let exponent = self.build_unary_expression()?;
            return Ok(ASTNode::BinaryOperation {
                left: Box::new(base),
                operator: Operator::Power,
                right: Box::new(exponent),
            });
        }

        Ok(base)
    }

    fn build_primary_expression(&mut self) -> Result<ASTNode, EvalError> {
        let Some(token) = self.advance() else {
            return Err(EvalError::Syntax("unexpected end of expression".to_string()));
        };

        match token {
            Token::Number(value) => Ok(ASTNode::Number(value)),
            Token::Constant(constant) => Ok(ASTNode::Constant(constant)),
            Token::LeftParen => {
                let inner = self.build_additive_expression()?;
                self.expect_closing_paren()?;
                Ok(inner)
            }
            Token::Function(name) => {
                if !matches!(self.advance(), Some(Token::LeftParen)) {
                    return Err(EvalError::Syntax(format!(
                        "function '{name}' must be followed by '('"
                    )));
                }
                let argument = self.build_additive_expression()?;
                self.expect_closing_paren()?;
                Ok(ASTNode::FunctionCall {
                    name,
                    argument: Box::new(argument),
                })
            }
            Token::RightParen => Err(EvalError::Syntax("unexpected ')'".to_string())),
            Token::Operator(operator) => Err(EvalError::Syntax(format!(
                "operator '{}' is missing an operand",
                operator.symbol()
            ))),
        }
    }

    /// A group left unterminated while the user is still typing is
    /// implicitly closed at end-of-input so the live preview can show a
    /// best-effort partial value.
    fn expect_closing_paren(&mut self) -> Result<(), EvalError> {
        match self.peek() {
            Some(Token::RightParen) => {
                self.position += 1;
                Ok(())
            }
            None => {
                debug!("implicitly closing unterminated group at end of input");
                Ok(())
            }
            Some(token) => Err(EvalError::Syntax(format!(
                "expected ')', found {token:?}"
            ))),
        }
    }
}
