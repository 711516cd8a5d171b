use exacta::rational::Rational;
use num::BigInt;

fn fraction(text: &str) -> Rational {
    Rational::from_fraction_str(text).unwrap_or_else(|| panic!("bad fraction literal '{text}'"))
}

#[test]
fn construction_reduces_and_normalizes() {
    let reduced = Rational::new(BigInt::from(4), BigInt::from(8)).unwrap();
    assert_eq!(reduced, fraction("1/2"));

    // The sign lives on the numerator.
    let negative = Rational::new(BigInt::from(3), BigInt::from(-6)).unwrap();
    assert_eq!(negative, fraction("-1/2"));
    assert!(negative.is_negative());

    assert!(Rational::new(BigInt::from(1), BigInt::from(0)).is_none());
}

#[test]
fn decimal_literals_parse_exactly() {
    assert_eq!(Rational::from_decimal_str("123.45"), Some(fraction("2469/20")));
    assert_eq!(Rational::from_decimal_str("42"), Some(fraction("42/1")));
    assert_eq!(Rational::from_decimal_str("-0.5"), Some(fraction("-1/2")));
    assert_eq!(Rational::from_decimal_str("0.1"), Some(fraction("1/10")));

    assert_eq!(Rational::from_decimal_str(""), None);
    assert_eq!(Rational::from_decimal_str("1.2.3"), None);
    assert_eq!(Rational::from_decimal_str("1e3"), None);
    assert_eq!(Rational::from_decimal_str(".5"), None);
}

#[test]
fn fraction_text_round_trips() {
    for text in ["1/3", "-7/2", "0/1", "1000000000000000000000/7"] {
        let value = fraction(text);
        assert_eq!(Rational::from_fraction_str(&value.to_fraction_string()),
                   Some(value));
    }
}

#[test]
fn arithmetic_is_exact() {
    let tenth = fraction("1/10");
    let fifth = fraction("1/5");
    assert_eq!(&tenth + &fifth, fraction("3/10"));
    assert_eq!(&tenth - &fifth, fraction("-1/10"));
    assert_eq!(&tenth * &fifth, fraction("1/50"));
    assert_eq!(-&tenth, fraction("-1/10"));
}

#[test]
fn checked_division() {
    let one = Rational::one();
    assert_eq!(one.checked_div(&fraction("2/3")), Some(fraction("3/2")));
    assert_eq!(one.checked_div(&Rational::zero()), None);

    assert_eq!(fraction("10/1").checked_rem(&fraction("4/1")), Some(fraction("2/1")));
    assert_eq!(fraction("10/1").checked_rem(&Rational::zero()), None);
}

#[test]
fn checked_pow() {
    let two_thirds = fraction("2/3");
    assert_eq!(two_thirds.checked_pow(&BigInt::from(2)), Some(fraction("4/9")));
    assert_eq!(two_thirds.checked_pow(&BigInt::from(-1)), Some(fraction("3/2")));
    assert_eq!(two_thirds.checked_pow(&BigInt::from(0)), Some(Rational::one()));

    // Zero cannot be inverted.
    assert_eq!(Rational::zero().checked_pow(&BigInt::from(0)), None);
    assert_eq!(Rational::zero().checked_pow(&BigInt::from(-2)), None);
    assert_eq!(Rational::zero().checked_pow(&BigInt::from(3)), Some(Rational::zero()));
}

#[test]
fn exact_square_roots() {
    assert_eq!(fraction("4/1").sqrt_exact(), Some(fraction("2/1")));
    assert_eq!(fraction("9/16").sqrt_exact(), Some(fraction("3/4")));
    assert_eq!(Rational::zero().sqrt_exact(), Some(Rational::zero()));

    assert_eq!(fraction("2/1").sqrt_exact(), None);
    assert_eq!(fraction("4/3").sqrt_exact(), None);
}

#[test]
fn rounding_to_digits() {
    assert_eq!(fraction("2/3").round_to_digits(2), fraction("67/100"));
    assert_eq!(fraction("-2/3").round_to_digits(2), fraction("-67/100"));
    assert_eq!(fraction("1/2").round_to_digits(3), fraction("1/2"));
}

#[test]
fn decimal_rendering() {
    assert_eq!(fraction("1/2").to_decimal(5), ("0.5".to_string(), true));
    assert_eq!(fraction("2/3").to_decimal(5), ("0.66667".to_string(), false));
    assert_eq!(fraction("-1/3").to_decimal(4), ("-0.3333".to_string(), false));
    assert_eq!(fraction("5/1").to_decimal(5), ("5".to_string(), true));

    // Ties round away from zero.
    assert_eq!(fraction("1/4").to_decimal(1), ("0.3".to_string(), false));
    assert_eq!(fraction("-1/4").to_decimal(1), ("-0.3".to_string(), false));

    // A magnitude below the budget rounds to zero, unsigned.
    assert_eq!(fraction("-1/100000").to_decimal(2), ("0.00".to_string(), false));
}

#[test]
fn ordering_and_predicates() {
    assert!(fraction("1/3") < fraction("1/2"));
    assert!(fraction("-1/2") < Rational::zero());

    assert!(fraction("4/2").is_integer());
    assert!(!fraction("1/2").is_integer());
    assert!(Rational::zero().is_zero());
    assert_eq!(fraction("-3/4").abs(), fraction("3/4"));
}
