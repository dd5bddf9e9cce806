//! Expression evaluation core for the Lumina calculator.
//!
//! A hand-written tokenizer, precedence parser, tree-walking evaluator and
//! display formatter behind one string-in/string-out entry point,
//! [`evaluate_expression`]. Every call is a pure function of its input:
//! no caches, no shared state, safe to invoke concurrently. Failures never
//! escape as panics — they collapse to the [`ERROR_RESULT`] sentinel, with
//! the typed [`EvalError`] kind available through [`evaluate`].

pub mod ast;
pub mod error;
pub mod format;
pub mod functions;
pub mod history;
pub mod session;

use ast::{Evaluator, Parser};
use functions::register_functions;
use log::debug;

pub use error::EvalError;
pub use format::format_value;
pub use history::{History, HistoryItem};
pub use session::Session;

/// Literal returned for any tokenize/parse/evaluate failure. Live-preview
/// callers ignore it and keep showing the last good result; commit callers
/// refuse to act on it.
pub const ERROR_RESULT: &str = "Error";

/// Typed pipeline: parse the expression and evaluate it against the fixed
/// scientific function set, preserving the failure kind.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let ast = Parser::parse_expression(expression)?;

    let mut evaluator = Evaluator::new();
    register_functions(&mut evaluator);
    evaluator.evaluate(&ast)
}

/// The contract the presentation layer depends on: empty or whitespace-only
/// input maps to an empty string ("nothing to preview"), any failure
/// collapses to [`ERROR_RESULT`], and a successful value is rendered through
/// the display formatter.
pub fn evaluate_expression(expression: &str) -> String {
    if expression.trim().is_empty() {
        return String::new();
    }

    match evaluate(expression) {
        Ok(value) => format_value(value),
        Err(error) => {
            debug!("rejected {expression:?}: {error}");
            ERROR_RESULT.to_string()
        }
    }
}
