use crate::ast::Evaluator;
use crate::error::EvalError;

/// Logarithms and roots.
///
/// Surface names follow the button grid, not mathematical convention:
/// the LOG key inserts `log10(` (base 10) and the LN key inserts `log(`
/// (natural log).
pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("log", natural_log);
    evaluator.register_function("log10", base_10_log);
    evaluator.register_function("sqrt", square_root);
}

pub fn natural_log(x: f64) -> Result<f64, EvalError> {
    if x <= 0.0 {
        return Err(EvalError::Domain(format!("log is undefined for {x}")));
    }
    Ok(x.ln())
}

pub fn base_10_log(x: f64) -> Result<f64, EvalError> {
    if x <= 0.0 {
        return Err(EvalError::Domain(format!("log10 is undefined for {x}")));
    }
    Ok(x.log10())
}

pub fn square_root(x: f64) -> Result<f64, EvalError> {
    if x < 0.0 {
        return Err(EvalError::Domain(format!("sqrt is undefined for {x}")));
    }
    Ok(x.sqrt())
}
