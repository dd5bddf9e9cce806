use thiserror::Error;

/// Failure taxonomy for the evaluation pipeline. Every variant is
/// recoverable: the pipeline never panics past its own boundary, and the
/// string entry point collapses all of them to one sentinel value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("invalid character '{0}' in expression")]
    InvalidCharacter(char),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("domain error: {0}")]
    Domain(String),

    #[error("result out of representable range")]
    Overflow,
}
