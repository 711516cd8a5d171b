use crate::{error::EvalError,
            interpreter::{cancel::CancelToken,
                          evaluator::{approx::nth_root,
                                      core::{Context, EvalResult}},
                          value::{Outcome, min_digits}}};

/// Computes the square root of a nonnegative fraction.
///
/// When both the numerator and the denominator are perfect squares the root
/// is itself a fraction and is returned exactly; `sqrt(4)` is the exact `2`
/// and `sqrt(1/4)` the exact `1/2`. Any other operand takes the Newton
/// path and comes back approximated to the policy's digit count.
///
/// A negative operand is rejected outright.
///
/// # Parameters
/// - `context`: Evaluation context, consulted for the precision policy.
/// - `args`: Exactly one evaluated argument (arity is checked by the table).
/// - `column`: Byte column of the call, for error reporting.
/// - `cancel`: Cooperative cancellation flag, polled during approximation.
///
/// # Returns
/// The exact or approximated square root.
///
/// # Errors
/// - `SqrtOfNegative` for a negative operand.
/// - `Cancelled` when the token is tripped during approximation.
pub fn sqrt(context: &Context,
            args: &[Outcome],
            column: usize,
            cancel: &CancelToken)
            -> EvalResult<Outcome> {
    let operand = &args[0];
    let value = operand.value();

    if value.is_negative() {
        return Err(EvalError::SqrtOfNegative { column });
    }

    if let Some(root) = value.sqrt_exact() {
        return Ok(operand.with_value(root));
    }

    let policy_digits = context.precision().digits();
    let root = nth_root(value, 2, policy_digits, cancel)?;
    let digits = min_digits(operand.digits(), Some(policy_digits)).unwrap_or(policy_digits);
    Ok(Outcome::approximate(root, digits))
}
