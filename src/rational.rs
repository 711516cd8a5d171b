use std::{fmt,
          ops::{Add, Mul, Neg, Rem, Sub}};

use num::{BigInt, BigRational, One, Signed, Zero, integer::Roots, pow::Pow};

/// An exact rational number with an arbitrary-precision numerator and
/// denominator.
///
/// `Rational` is the only numeric type in the engine. Every value is kept in
/// lowest terms with a strictly positive denominator, zero is canonical
/// (`0/1`), and all arithmetic is exact — there is no floating point anywhere
/// in the crate. Operations take their operands by reference and return new
/// values.
///
/// Comparison is exact cross-multiplication; two `Rational`s are equal if and
/// only if they represent the same number.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational {
    inner: BigRational,
}

impl Rational {
    /// Builds a rational from a numerator and denominator, reducing it to
    /// lowest terms.
    ///
    /// # Parameters
    /// - `numer`: The numerator.
    /// - `denom`: The denominator.
    ///
    /// # Returns
    /// - `Some(Rational)`: The reduced fraction.
    /// - `None`: If `denom` is zero.
    ///
    /// # Example
    /// ```
    /// use exacta::rational::Rational;
    /// use num::BigInt;
    ///
    /// let half = Rational::new(BigInt::from(4), BigInt::from(8)).unwrap();
    /// assert_eq!(half.to_fraction_string(), "1/2");
    ///
    /// assert!(Rational::new(BigInt::from(1), BigInt::from(0)).is_none());
    /// ```
    #[must_use]
    pub fn new(numer: BigInt, denom: BigInt) -> Option<Self> {
        if denom.is_zero() {
            return None;
        }
        Some(Self { inner: BigRational::new(numer, denom) })
    }

    /// The canonical zero, `0/1`.
    #[must_use]
    pub fn zero() -> Self {
        Self { inner: BigRational::zero() }
    }

    /// The constant one, `1/1`.
    #[must_use]
    pub fn one() -> Self {
        Self { inner: BigRational::one() }
    }

    /// The fraction `1 / 10^digits`, used as a convergence tolerance.
    pub(crate) fn recip_pow10(digits: u32) -> Self {
        Self { inner: BigRational::new(BigInt::one(), pow10(digits)) }
    }

    /// Parses a decimal literal into an exact fraction.
    ///
    /// Accepted forms are `D+` and `D+.D*`, with an optional leading `-`.
    /// The text is converted without rounding: `"123.45"` becomes
    /// `12345/100`, which reduces to `2469/20`.
    ///
    /// # Parameters
    /// - `text`: The literal to parse.
    ///
    /// # Returns
    /// - `Some(Rational)`: The exact value of the literal.
    /// - `None`: If the text is not a well-formed decimal literal.
    ///
    /// # Example
    /// ```
    /// use exacta::rational::Rational;
    ///
    /// let r = Rational::from_decimal_str("123.45").unwrap();
    /// assert_eq!(r.to_fraction_string(), "2469/20");
    ///
    /// assert!(Rational::from_decimal_str("1.2.3").is_none());
    /// assert!(Rational::from_decimal_str("").is_none());
    /// ```
    #[must_use]
    pub fn from_decimal_str(text: &str) -> Option<Self> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };

        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let scaled: BigInt = format!("{int_part}{frac_part}").parse().ok()?;
        let scale = pow10(u32::try_from(frac_part.len()).ok()?);
        let magnitude = BigRational::new(scaled, scale);

        Some(Self { inner: if negative { -magnitude } else { magnitude } })
    }

    /// Parses a `numerator/denominator` pair (or a bare integer) produced by
    /// [`Rational::to_fraction_string`].
    ///
    /// This is the lossless round-trip format intended for persistence;
    /// decimal text cannot represent values like `1/3` exactly, fraction text
    /// can.
    ///
    /// # Returns
    /// - `Some(Rational)`: The parsed value, reduced.
    /// - `None`: On malformed text or a zero denominator.
    ///
    /// # Example
    /// ```
    /// use exacta::rational::Rational;
    ///
    /// let third = Rational::from_fraction_str("1/3").unwrap();
    /// assert_eq!(Rational::from_fraction_str(&third.to_fraction_string()), Some(third));
    /// ```
    #[must_use]
    pub fn from_fraction_str(text: &str) -> Option<Self> {
        match text.split_once('/') {
            Some((n, d)) => Self::new(n.trim().parse().ok()?, d.trim().parse().ok()?),
            None => Some(Self::from(text.trim().parse::<BigInt>().ok()?)),
        }
    }

    /// Renders the value as `numerator/denominator`, always including the
    /// denominator. The output round-trips through
    /// [`Rational::from_fraction_str`] losslessly.
    #[must_use]
    pub fn to_fraction_string(&self) -> String {
        format!("{}/{}", self.inner.numer(), self.inner.denom())
    }

    /// The numerator of the reduced fraction. Carries the sign.
    #[must_use]
    pub fn numer(&self) -> &BigInt {
        self.inner.numer()
    }

    /// The denominator of the reduced fraction. Always positive.
    #[must_use]
    pub fn denom(&self) -> &BigInt {
        self.inner.denom()
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.inner.is_negative()
    }

    /// Returns `true` if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.inner.is_integer()
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self { inner: self.inner.abs() }
    }

    /// Exact division.
    ///
    /// # Returns
    /// - `Some(Rational)`: The exact quotient.
    /// - `None`: If `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        Some(Self { inner: &self.inner / &divisor.inner })
    }

    /// Exact remainder, with the sign of the dividend.
    ///
    /// # Returns
    /// - `Some(Rational)`: The exact remainder.
    /// - `None`: If `divisor` is zero.
    #[must_use]
    pub fn checked_rem(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        Some(Self { inner: &self.inner % &divisor.inner })
    }

    /// Raises the value to an integer power, exactly.
    ///
    /// Negative exponents invert: `r^-n = (1/r)^n`.
    ///
    /// # Returns
    /// - `Some(Rational)`: The exact power.
    /// - `None`: If the base is zero and the exponent is not positive (both
    ///   `0^0` and `0^-n` are undefined; callers report which one occurred).
    ///
    /// # Example
    /// ```
    /// use exacta::rational::Rational;
    /// use num::BigInt;
    ///
    /// let two = Rational::from(2);
    /// let r = two.checked_pow(&BigInt::from(-3)).unwrap();
    /// assert_eq!(r.to_fraction_string(), "1/8");
    /// ```
    #[must_use]
    pub fn checked_pow(&self, exponent: &BigInt) -> Option<Self> {
        if self.is_zero() && !exponent.is_positive() {
            return None;
        }
        Some(Self { inner: Pow::pow(self.inner.clone(), exponent) })
    }

    /// Returns the exact square root if the value is a perfect square — that
    /// is, if the numerator and the denominator are both perfect squares.
    ///
    /// # Returns
    /// - `Some(Rational)`: The exact nonnegative root.
    /// - `None`: If the value is negative or not a perfect square.
    ///
    /// # Example
    /// ```
    /// use exacta::rational::Rational;
    ///
    /// let r = Rational::from_decimal_str("2.25").unwrap();
    /// assert_eq!(r.sqrt_exact(), Rational::from_decimal_str("1.5"));
    ///
    /// assert!(Rational::from(2).sqrt_exact().is_none());
    /// ```
    #[must_use]
    pub fn sqrt_exact(&self) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        let numer_root = self.numer().sqrt();
        if &numer_root * &numer_root != *self.numer() {
            return None;
        }
        let denom_root = self.denom().sqrt();
        if &denom_root * &denom_root != *self.denom() {
            return None;
        }
        Some(Self { inner: BigRational::new(numer_root, denom_root) })
    }

    /// Rounds to the nearest multiple of `10^-digits`, halves away from zero.
    ///
    /// The result is again a `Rational` (with denominator dividing
    /// `10^digits`). The approximation loop uses this to keep intermediate
    /// fractions from growing without bound.
    #[must_use]
    pub fn round_to_digits(&self, digits: u32) -> Self {
        let scale = pow10(digits);
        let total = self.numer().abs() * &scale;
        let (mut quotient, remainder) = num::Integer::div_rem(&total, self.denom());
        if &remainder * 2 >= *self.denom() {
            quotient += BigInt::one();
        }
        if self.is_negative() {
            quotient = -quotient;
        }
        Self { inner: BigRational::new(quotient, scale) }
    }

    /// Renders the value as a decimal string with at most `max_digits`
    /// fractional digits.
    ///
    /// If the decimal expansion terminates within the budget, the exact
    /// expansion is returned (without trailing zeros) and the flag is `true`.
    /// Otherwise the expansion is rounded half-away-from-zero at `max_digits`
    /// digits and the flag is `false`.
    ///
    /// # Parameters
    /// - `max_digits`: Fractional digit budget.
    ///
    /// # Returns
    /// `(text, exact)` — the rendering and whether it is exact.
    ///
    /// # Example
    /// ```
    /// use exacta::rational::Rational;
    /// use num::BigInt;
    ///
    /// let half = Rational::new(BigInt::from(1), BigInt::from(2)).unwrap();
    /// assert_eq!(half.to_decimal(5), ("0.5".to_string(), true));
    ///
    /// let two_thirds = Rational::new(BigInt::from(2), BigInt::from(3)).unwrap();
    /// assert_eq!(two_thirds.to_decimal(5), ("0.66667".to_string(), false));
    /// ```
    #[must_use]
    pub fn to_decimal(&self, max_digits: u32) -> (String, bool) {
        let scale = pow10(max_digits);
        let total = self.numer().abs() * &scale;
        let (mut quotient, remainder) = num::Integer::div_rem(&total, self.denom());
        let exact = remainder.is_zero();
        if !exact && &remainder * 2 >= *self.denom() {
            quotient += BigInt::one();
        }

        let (int_part, frac_part) = num::Integer::div_rem(&quotient, &scale);
        let mut frac_text = if max_digits == 0 {
            String::new()
        } else {
            format!("{frac_part:0>width$}", width = max_digits as usize)
        };
        if exact {
            while frac_text.ends_with('0') {
                frac_text.pop();
            }
        }

        // A value that rounds to zero is printed without a sign.
        let sign = if self.is_negative() && !quotient.is_zero() { "-" } else { "" };
        let text = if frac_text.is_empty() {
            format!("{sign}{int_part}")
        } else {
            format!("{sign}{int_part}.{frac_text}")
        };
        (text, exact)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self { inner: BigRational::from_integer(BigInt::from(value)) }
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self { inner: BigRational::from_integer(value) }
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        Rational { inner: &self.inner + &rhs.inner }
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        Rational { inner: &self.inner - &rhs.inner }
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        Rational { inner: &self.inner * &rhs.inner }
    }
}

impl Rem for &Rational {
    type Output = Rational;

    fn rem(self, rhs: Self) -> Rational {
        Rational { inner: &self.inner % &rhs.inner }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational { inner: -self.inner.clone() }
    }
}

impl fmt::Display for Rational {
    /// Formats as a plain integer when the denominator is one, otherwise as
    /// `numerator/denominator`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

/// `10^digits` as a `BigInt`.
pub(crate) fn pow10(digits: u32) -> BigInt {
    BigInt::from(10).pow(digits)
}
