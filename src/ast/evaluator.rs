use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::ast::{ASTNode, Parser};
use crate::error::EvalError;

pub type Function = Arc<dyn Fn(f64) -> Result<f64, EvalError> + Send + Sync>;

/// Tree-walking evaluator with a registered single-argument function table.
///
/// The registry is filled once, before evaluation, and only read during the
/// walk; `evaluate` takes `&self` and touches no other state, so a built
/// evaluator can be shared across threads freely.
pub struct Evaluator {
    pub(crate) functions: HashMap<String, Function>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Registers a function under its surface-grammar name.
    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64) -> Result<f64, EvalError> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    /// Parse an expression string and evaluate the resulting tree.
    pub fn evaluate_expression(&self, expression: &str) -> Result<f64, EvalError> {
        let ast = Parser::parse_expression(expression)?;
        self.evaluate(&ast)
    }

    /// Evaluates an `ASTNode`. Pure and side-effect-free; the tree is only
    /// read and every numeric failure maps to a typed `EvalError`.
    pub fn evaluate(&self, ast: &ASTNode) -> Result<f64, EvalError> {
        match ast {
            ASTNode::Number(value) => {
                // A literal too large for f64 parses as infinity.
                if value.is_finite() {
                    Ok(*value)
                } else {
                    Err(EvalError::Overflow)
                }
            }

            ASTNode::Constant(constant) => Ok(constant.value()),

            ASTNode::Negation(inner) => Ok(-self.evaluate(inner)?),

            ASTNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_value = self.evaluate(left)?;
                let right_value = self.evaluate(right)?;
                operator.apply(left_value, right_value)
            }

            ASTNode::FunctionCall { name, argument } => {
                let function = self
                    .functions
                    .get(name)
                    .ok_or_else(|| EvalError::Syntax(format!("unknown function '{name}'")))?;

                let argument_value = self.evaluate(argument)?;
                let result = function(argument_value)?;
                debug!("{name}({argument_value}) = {result}");

                if result.is_nan() {
                    Err(EvalError::Domain(format!(
                        "{name} is undefined for argument {argument_value}"
                    )))
                } else if result.is_infinite() {
                    Err(EvalError::Overflow)
                } else {
                    Ok(result)
                }
            }
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Constant, Operator};
    use crate::functions::register_functions;

    fn setup_evaluator() -> Evaluator {
        let mut evaluator = Evaluator::new();
        register_functions(&mut evaluator);
        evaluator
    }

    #[test]
    fn test_simple_binary_expressions() {
        let evaluator = setup_evaluator();

        assert_eq!(evaluator.evaluate_expression("2+3").unwrap(), 5.0);
        assert_eq!(evaluator.evaluate_expression("2-3").unwrap(), -1.0);
        assert_eq!(evaluator.evaluate_expression("2*3").unwrap(), 6.0);
        assert_eq!(evaluator.evaluate_expression("3/2").unwrap(), 1.5);
    }

    #[test]
    fn test_precedence_and_grouping() {
        let evaluator = setup_evaluator();

        assert_eq!(evaluator.evaluate_expression("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluator.evaluate_expression("(2+3)*4").unwrap(), 20.0);
        assert_eq!(
            evaluator.evaluate_expression("(10+20)*3/(4-1)+5").unwrap(),
            35.0
        );
    }

    #[test]
    fn test_right_associative_power() {
        let evaluator = setup_evaluator();

        assert_eq!(evaluator.evaluate_expression("2^3^2").unwrap(), 512.0);
        assert_eq!(evaluator.evaluate_expression("(2^3)^2").unwrap(), 64.0);
        assert_eq!(evaluator.evaluate_expression("2^-3").unwrap(), 0.125);
    }

    #[test]
    fn test_unary_minus() {
        let evaluator = setup_evaluator();

        assert_eq!(evaluator.evaluate_expression("-5").unwrap(), -5.0);
        assert_eq!(evaluator.evaluate_expression("--5").unwrap(), 5.0);
        assert_eq!(evaluator.evaluate_expression("2*-3").unwrap(), -6.0);
        // Power binds tighter than unary minus.
        assert_eq!(evaluator.evaluate_expression("-2^2").unwrap(), -4.0);
    }

    #[test]
    fn test_division_by_zero() {
        let evaluator = setup_evaluator();

        assert_eq!(
            evaluator.evaluate_expression("1/0"),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            evaluator.evaluate_expression("5/(2-2)"),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_constant_pi() {
        let evaluator = setup_evaluator();

        assert_eq!(
            evaluator.evaluate_expression("pi").unwrap(),
            std::f64::consts::PI
        );
        assert_eq!(
            evaluator.evaluate_expression("2*π").unwrap(),
            2.0 * std::f64::consts::PI
        );
    }

    #[test]
    fn test_function_calls() {
        let evaluator = setup_evaluator();

        assert_eq!(evaluator.evaluate_expression("sin(0)").unwrap(), 0.0);
        assert_eq!(evaluator.evaluate_expression("cos(0)").unwrap(), 1.0);
        assert_eq!(evaluator.evaluate_expression("sqrt(144)").unwrap(), 12.0);
        assert_eq!(evaluator.evaluate_expression("log10(100)").unwrap(), 2.0);
    }

    #[test]
    fn test_nested_function_calls() {
        let evaluator = setup_evaluator();

        assert_eq!(
            evaluator.evaluate_expression("sqrt(sqrt(16))").unwrap(),
            2.0
        );
        assert_eq!(
            evaluator.evaluate_expression("cos(sin(0))").unwrap(),
            1.0
        );
    }

    #[test]
    fn test_unknown_function() {
        let evaluator = setup_evaluator();

        assert_eq!(
            evaluator.evaluate_expression("sinh(1)"),
            Err(EvalError::Syntax("unknown function 'sinh'".to_string()))
        );
    }

    #[test]
    fn test_domain_failures() {
        let evaluator = setup_evaluator();

        assert!(matches!(
            evaluator.evaluate_expression("sqrt(-1)"),
            Err(EvalError::Domain(_))
        ));
        assert!(matches!(
            evaluator.evaluate_expression("log(0-5)"),
            Err(EvalError::Domain(_))
        ));
    }

    #[test]
    fn test_overflow() {
        let evaluator = setup_evaluator();

        assert_eq!(
            evaluator.evaluate_expression("10^400"),
            Err(EvalError::Overflow)
        );
        assert_eq!(
            evaluator.evaluate_expression("-10^400"),
            Err(EvalError::Overflow)
        );
    }

    #[test]
    fn test_oversized_literal_overflows() {
        let evaluator = setup_evaluator();
        let literal = "9".repeat(400);

        assert_eq!(
            evaluator.evaluate_expression(&literal),
            Err(EvalError::Overflow)
        );
    }

    #[test]
    fn test_direct_ast_evaluation() {
        let evaluator = setup_evaluator();
        let ast = ASTNode::BinaryOperation {
            left: Box::new(ASTNode::Number(6.0)),
            operator: Operator::Multiply,
            right: Box::new(ASTNode::Constant(Constant::Pi)),
        };

        assert_eq!(evaluator.evaluate(&ast).unwrap(), 6.0 * std::f64::consts::PI);
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        // No state is retained between calls.
        let evaluator = setup_evaluator();
        let first = evaluator.evaluate_expression("sqrt(2)^2").unwrap();
        let second = evaluator.evaluate_expression("sqrt(2)^2").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unregistered_evaluator_rejects_functions() {
        let evaluator = Evaluator::new();
        assert!(evaluator.evaluate_expression("sin(0)").is_err());
        // Plain arithmetic needs no registry.
        assert_eq!(evaluator.evaluate_expression("2+2").unwrap(), 4.0);
    }
}
