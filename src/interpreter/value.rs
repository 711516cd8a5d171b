use crate::rational::Rational;

/// The result of evaluating an expression.
///
/// Every value the engine produces is an exact [`Rational`]; what varies is
/// what the value is known to mean:
///
/// - `Exact` — the value equals the mathematical result, with no loss.
/// - `Approximate` — the mathematical result is irrational; the carried
///   value agrees with it to (at least) `digits` decimal digits.
///
/// Approximation is a taint: once any subexpression is `Approximate`, every
/// enclosing result is too, carrying the smallest digit guarantee involved.
/// The evaluator never reports an approximate quantity as exact.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A mathematically exact result.
    Exact(Rational),
    /// A precision-bounded approximation of an irrational result.
    Approximate {
        /// The approximating rational.
        value:  Rational,
        /// The number of decimal digits guaranteed correct.
        digits: u32,
    },
}

impl Outcome {
    /// Wraps a value as exact.
    #[must_use]
    pub const fn exact(value: Rational) -> Self {
        Self::Exact(value)
    }

    /// Wraps a value as an approximation good to `digits` decimal digits.
    #[must_use]
    pub const fn approximate(value: Rational, digits: u32) -> Self {
        Self::Approximate { value, digits }
    }

    /// The carried rational value, exact or not.
    #[must_use]
    pub const fn value(&self) -> &Rational {
        match self {
            Self::Exact(value) | Self::Approximate { value, .. } => value,
        }
    }

    /// Consumes the outcome and returns the carried value.
    #[must_use]
    pub fn into_value(self) -> Rational {
        match self {
            Self::Exact(value) | Self::Approximate { value, .. } => value,
        }
    }

    /// The digit guarantee: `None` for exact results.
    #[must_use]
    pub const fn digits(&self) -> Option<u32> {
        match self {
            Self::Exact(_) => None,
            Self::Approximate { digits, .. } => Some(*digits),
        }
    }

    /// Returns `true` for exact results.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// Replaces the carried value while keeping the exact/approximate tag
    /// and digit guarantee. Used by operations (negation, `abs`) that cannot
    /// lose precision.
    #[must_use]
    pub fn with_value(&self, value: Rational) -> Self {
        match self {
            Self::Exact(_) => Self::Exact(value),
            Self::Approximate { digits, .. } => Self::Approximate { value, digits: *digits },
        }
    }

    /// Combines the taint of two operands around a freshly computed value.
    ///
    /// The result is exact only when both operands are; otherwise it is
    /// approximate with the smaller of the operands' digit guarantees.
    ///
    /// # Example
    /// ```
    /// use exacta::{interpreter::value::Outcome, rational::Rational};
    ///
    /// let exact = Outcome::exact(Rational::from(3));
    /// let rough = Outcome::approximate(Rational::from(2), 20);
    ///
    /// let joined = Outcome::join(&exact, &rough, Rational::from(5));
    /// assert_eq!(joined.digits(), Some(20));
    /// ```
    #[must_use]
    pub fn join(left: &Self, right: &Self, value: Rational) -> Self {
        match min_digits(left.digits(), right.digits()) {
            Some(digits) => Self::Approximate { value, digits },
            None => Self::Exact(value),
        }
    }
}

/// The smaller of two digit guarantees, where `None` means exact (no bound).
pub(crate) const fn min_digits(left: Option<u32>, right: Option<u32>) -> Option<u32> {
    match (left, right) {
        (Some(a), Some(b)) => Some(if a < b { a } else { b }),
        (Some(a), None) | (None, Some(a)) => Some(a),
        (None, None) => None,
    }
}
