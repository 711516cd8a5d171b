use crate::interpreter::{evaluator::core::EvalResult, value::Outcome};

/// Computes the absolute value of a fraction.
///
/// Exactness is untouched: an exact operand yields an exact result, an
/// approximate operand keeps its digit guarantee.
///
/// # Parameters
/// - `args`: Exactly one evaluated argument (arity is checked by the table).
///
/// # Returns
/// The operand with its sign stripped.
pub fn abs(args: &[Outcome]) -> EvalResult<Outcome> {
    let operand = &args[0];
    Ok(operand.with_value(operand.value().abs()))
}
