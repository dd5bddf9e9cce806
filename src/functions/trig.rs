use crate::ast::Evaluator;
use crate::error::EvalError;

/// Trigonometric functions. Arguments are radians.
pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sin", sine);
    evaluator.register_function("cos", cosine);
    evaluator.register_function("tan", tangent);
}

pub fn sine(x: f64) -> Result<f64, EvalError> {
    Ok(x.sin())
}

pub fn cosine(x: f64) -> Result<f64, EvalError> {
    Ok(x.cos())
}

pub fn tangent(x: f64) -> Result<f64, EvalError> {
    Ok(x.tan())
}
