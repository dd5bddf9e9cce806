pub mod algebra;
pub mod trig;

use crate::ast::Evaluator;

/// Registers the calculator's fixed scientific function set.
pub fn register_functions(evaluator: &mut Evaluator) {
    trig::register(evaluator);
    algebra::register(evaluator);
}
