use crate::interpreter::{evaluator::core::EvalResult,
                         value::{Outcome, min_digits}};

/// Computes the minimum or maximum of one or more fractions.
///
/// Comparison is exact. The operation is selected by the `name` parameter,
/// which must be `"min"` or `"max"`.
///
/// The winning value is returned, but exactness is joined across all
/// arguments: if any argument was approximate, comparing against it may
/// have been decided by approximated digits, so the result carries the
/// smallest digit guarantee among the arguments.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: One or more evaluated arguments (arity is checked by the
///   table).
///
/// # Returns
/// The smallest or largest argument value.
///
/// # Example
/// ```
/// use exacta::{interpreter::{evaluator::function::min_max::min_max, value::Outcome},
///              rational::Rational};
///
/// let args = [Outcome::exact(Rational::from(3)), Outcome::exact(Rational::from(7))];
/// let smallest = min_max("min", &args).unwrap();
/// assert_eq!(smallest, Outcome::exact(Rational::from(3)));
/// ```
pub fn min_max(name: &str, args: &[Outcome]) -> EvalResult<Outcome> {
    let mut best = &args[0];
    for candidate in &args[1..] {
        let wins = if name == "min" {
            candidate.value() < best.value()
        } else {
            candidate.value() > best.value()
        };
        if wins {
            best = candidate;
        }
    }

    let mut digits = None;
    for argument in args {
        digits = min_digits(digits, argument.digits());
    }

    match digits {
        None => Ok(Outcome::exact(best.value().clone())),
        Some(digits) => Ok(Outcome::approximate(best.value().clone(), digits)),
    }
}
