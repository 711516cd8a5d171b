use num::ToPrimitive;

use crate::{ast::BinaryOperator,
            error::EvalError,
            interpreter::{cancel::CancelToken,
                          evaluator::{approx::nth_root,
                                      core::{Context, EvalResult}},
                          value::{Outcome, min_digits}},
            rational::Rational};

impl Context {
    /// Evaluates a binary operation on two already-evaluated operands.
    ///
    /// `+`, `-`, and `*` are exact on fractions and cannot fail. `/` and `%`
    /// report `DivisionByZero` at the operator's column when the right-hand
    /// side is zero. `^` dispatches to [`Context::eval_pow`].
    ///
    /// Exactness follows the operands: the result is exact only when both
    /// operands are, and otherwise carries the smaller digit guarantee of
    /// the two.
    ///
    /// # Parameters
    /// - `op`: The operator to apply.
    /// - `left`, `right`: Evaluated operands.
    /// - `column`: Byte column of the operator, for error reporting.
    /// - `cancel`: Cooperative cancellation flag, consulted by the
    ///   approximated power path.
    ///
    /// # Returns
    /// The outcome of `left op right`.
    pub(crate) fn eval_binary(&self,
                              op: BinaryOperator,
                              left: &Outcome,
                              right: &Outcome,
                              column: usize,
                              cancel: &CancelToken)
                              -> EvalResult<Outcome> {
        match op {
            BinaryOperator::Add => {
                Ok(Outcome::join(left, right, left.value() + right.value()))
            },
            BinaryOperator::Sub => {
                Ok(Outcome::join(left, right, left.value() - right.value()))
            },
            BinaryOperator::Mul => {
                Ok(Outcome::join(left, right, left.value() * right.value()))
            },
            BinaryOperator::Div => {
                let quotient = left.value()
                                   .checked_div(right.value())
                                   .ok_or(EvalError::DivisionByZero { column })?;
                Ok(Outcome::join(left, right, quotient))
            },
            BinaryOperator::Mod => {
                let remainder = left.value()
                                    .checked_rem(right.value())
                                    .ok_or(EvalError::DivisionByZero { column })?;
                Ok(Outcome::join(left, right, remainder))
            },
            BinaryOperator::Pow => self.eval_pow(left, right, column, cancel),
        }
    }

    /// Evaluates an exponentiation operation.
    ///
    /// An integer-valued exponent stays on the exact path: the power is
    /// computed by repeated exact multiplication, with negative exponents
    /// inverting the base. A fractional exponent `p/q` takes the
    /// approximated path: the exact power `base^p` first, then a Newton
    /// `q`-th root to the policy's digit count.
    ///
    /// A negative base is allowed for odd root indices (the sign is carried
    /// out of the root) and rejected for even ones.
    ///
    /// # Parameters
    /// - `base`, `exponent`: Evaluated operands.
    /// - `column`: Byte column of the `^`, for error reporting.
    /// - `cancel`: Cooperative cancellation flag, polled while the root
    ///   iteration runs.
    ///
    /// # Returns
    /// `Outcome::Exact` for integer exponents, `Outcome::Approximate`
    /// otherwise.
    ///
    /// # Errors
    /// - `ZeroPowerZero` for `0 ^ 0`.
    /// - `DivisionByZero` for `0 ^ negative`.
    /// - `EvenRootOfNegative` for a negative base under an even root index.
    /// - `ExponentTooLarge` when the root index does not fit in a machine
    ///   word.
    /// - `Cancelled` when the token is tripped during approximation.
    fn eval_pow(&self,
                base: &Outcome,
                exponent: &Outcome,
                column: usize,
                cancel: &CancelToken)
                -> EvalResult<Outcome> {
        let base_value = base.value();
        let exponent_value = exponent.value();

        if base_value.is_zero() {
            if exponent_value.is_zero() {
                return Err(EvalError::ZeroPowerZero { column });
            }
            if exponent_value.is_negative() {
                return Err(EvalError::DivisionByZero { column });
            }
            // 0 ^ positive is zero whether or not the exponent is integral.
            if exponent_value.is_integer() {
                return Ok(Outcome::join(base, exponent, Rational::zero()));
            }
            return Ok(self.approximate_from(base, exponent, Rational::zero()));
        }

        if exponent_value.is_integer() {
            let power = base_value.checked_pow(exponent_value.numer())
                                  .ok_or(EvalError::DivisionByZero { column })?;
            return Ok(Outcome::join(base, exponent, power));
        }

        // base ^ (p/q): exact base^p first, then the q-th root.
        let index = exponent_value.denom()
                                  .to_u32()
                                  .ok_or(EvalError::ExponentTooLarge { column })?;
        let powered = base_value.checked_pow(exponent_value.numer())
                                .ok_or(EvalError::DivisionByZero { column })?;

        if powered.is_negative() && index % 2 == 0 {
            return Err(EvalError::EvenRootOfNegative { column });
        }

        let digits = self.precision().digits();
        let magnitude = nth_root(&powered.abs(), index, digits, cancel)?;
        let value = if powered.is_negative() {
            -&magnitude
        } else {
            magnitude
        };
        Ok(self.approximate_from(base, exponent, value))
    }

    /// Wraps a freshly approximated value, folding in any digit guarantees
    /// the operands already carried.
    fn approximate_from(&self, left: &Outcome, right: &Outcome, value: Rational) -> Outcome {
        let digits = min_digits(min_digits(left.digits(), right.digits()),
                                Some(self.precision().digits()))
                     .unwrap_or(self.precision().digits());
        Outcome::approximate(value, digits)
    }
}
