use num::BigInt;

use crate::{error::EvalError,
            interpreter::{cancel::CancelToken, evaluator::core::EvalResult},
            rational::Rational};

/// Extra decimal places kept during iteration.
///
/// Rounding each iterate to `digits + GUARD_DIGITS` places keeps the
/// numerators and denominators from growing quadratically per step, while
/// leaving enough slack that the final rounding to `digits` places is still
/// correct.
const GUARD_DIGITS: u32 = 5;

/// Approximates the `index`-th root of a nonnegative fraction.
///
/// Runs Newton's method over exact fractions:
///
/// ```text
///     x ← ((index - 1)·x + a / x^(index - 1)) / index
/// ```
///
/// with every iterate rounded to `digits + 5` decimal places. Iteration
/// stops once successive iterates agree within `10^-(digits + 2)`; the
/// result is then rounded to `digits` places, so it matches the true root in
/// the first `digits` decimal places.
///
/// The cancellation token is polled once per iteration. A radicand so small
/// that its root rounds to zero at the working precision yields zero, which
/// is correct to the requested number of decimal places.
///
/// # Parameters
/// - `radicand`: The value to take the root of. Must not be negative; sign
///   handling belongs to the caller.
/// - `index`: The root index, at least 1.
/// - `digits`: Number of correct decimal places in the result.
/// - `cancel`: Cooperative cancellation flag.
///
/// # Returns
/// The approximated root, rounded to `digits` decimal places.
///
/// # Errors
/// `EvalError::Cancelled` when the token is tripped mid-iteration. No
/// partial value is ever returned.
pub(crate) fn nth_root(radicand: &Rational,
                       index: u32,
                       digits: u32,
                       cancel: &CancelToken)
                       -> EvalResult<Rational> {
    if radicand.is_zero() {
        return Ok(Rational::zero());
    }

    let working = digits + GUARD_DIGITS;
    let tolerance = Rational::recip_pow10(digits + 2);

    // For radicands below one the root lies in (radicand, 1), so starting at
    // one keeps the first division well-behaved. Otherwise the radicand
    // itself bounds the root from above and Newton descends monotonically.
    let one = Rational::one();
    let mut current = if *radicand >= one {
        radicand.clone()
    } else {
        one
    };

    loop {
        if cancel.is_cancelled() {
            return Err(EvalError::Cancelled);
        }

        let Some(step) = newton_step(radicand, &current, index) else {
            // The iterate collapsed below the working resolution; the root
            // is zero to every digit we promise.
            return Ok(Rational::zero());
        };
        let next = step.round_to_digits(working);
        if next.is_zero() {
            return Ok(Rational::zero());
        }
        if (&next - &current).abs() <= tolerance {
            return Ok(next.round_to_digits(digits));
        }
        current = next;
    }
}

/// One Newton update: `((index - 1)·x + a / x^(index - 1)) / index`.
///
/// Returns `None` when `x` is zero, which the caller treats as convergence
/// to zero.
fn newton_step(radicand: &Rational, x: &Rational, index: u32) -> Option<Rational> {
    let power = x.checked_pow(&BigInt::from(index - 1))?;
    let quotient = radicand.checked_div(&power)?;
    let weighted = &(&Rational::from(i64::from(index) - 1) * x) + &quotient;
    weighted.checked_div(&Rational::from(i64::from(index)))
}
