use exacta::{error::CalcError,
             evaluate_line,
             interpreter::{cancel::CancelToken,
                           evaluator::{core::{Context, MAX_PRECISION_DIGITS, PrecisionPolicy},
                                       function::core::BUILTIN_FUNCTIONS},
                           value::Outcome},
             rational::Rational};

fn eval(context: &mut Context, line: &str) -> Result<Outcome, CalcError> {
    evaluate_line(line, context, &CancelToken::new())
}

fn eval_one(line: &str) -> Outcome {
    eval(&mut Context::new(), line).unwrap_or_else(|e| panic!("'{line}' failed: {e}"))
}

fn fraction(text: &str) -> Rational {
    Rational::from_fraction_str(text).unwrap_or_else(|| panic!("bad fraction literal '{text}'"))
}

fn assert_exact(line: &str, expected: &str) {
    let outcome = eval_one(line);
    assert!(outcome.is_exact(), "'{line}' produced an approximate result");
    assert_eq!(outcome.value(), &fraction(expected), "'{line}'");
}

fn assert_failure(line: &str) {
    let mut context = Context::new();
    assert!(eval(&mut context, line).is_err(),
            "'{line}' succeeded but was expected to fail");
}

#[test]
fn division_yields_reduced_fractions() {
    assert_exact("4 / 8", "1/2");
    assert_exact("10 / 4", "5/2");
    assert_exact("1 / 3", "1/3");
}

#[test]
fn decimal_literals_are_exact() {
    assert_exact("0.1 + 0.2", "3/10");
    assert_exact("123.45", "2469/20");
    assert_exact("1 / 3 + 1 / 6", "1/2");
}

#[test]
fn basic_arithmetic() {
    assert_exact("1 + 2", "3/1");
    assert_exact("8 - 5", "3/1");
    assert_exact("7 * 9", "63/1");
    assert_exact("10 % 4", "2/1");
    assert_exact("-3 + 3", "0/1");
}

#[test]
fn operator_precedence() {
    assert_exact("2 + 3 * 4", "14/1");
    assert_exact("(2 + 3) * 4", "20/1");
    assert_exact("2 * 9 % 4", "2/1");
    assert_exact("2 + 10 % 3", "3/1");
}

#[test]
fn exponentiation_is_right_associative() {
    assert_exact("2 ^ 3 ^ 2", "512/1");
    assert_exact("(2 ^ 3) ^ 2", "64/1");
}

#[test]
fn unary_minus_binds_tighter_than_exponent() {
    assert_exact("-2 ^ 2", "4/1");
    assert_exact("-(2 ^ 2)", "-4/1");
    assert_exact("--5", "5/1");
}

#[test]
fn integer_exponents_stay_exact() {
    assert_exact("2 ^ 10", "1024/1");
    assert_exact("2 ^ -2", "1/4");
    assert_exact("(2 / 3) ^ 2", "4/9");
    assert_exact("5 ^ 0", "1/1");
}

#[test]
fn exponent_edge_cases() {
    assert_failure("0 ^ 0");
    assert_failure("0 ^ -1");

    let outcome = eval_one("0 ^ 0.5");
    assert!(!outcome.is_exact());
    assert!(outcome.value().is_zero());
}

#[test]
fn fractional_exponents_approximate() {
    let outcome = eval_one("2 ^ 0.5");
    assert!(!outcome.is_exact());
    assert_eq!(outcome.digits(), Some(20));

    let squared = outcome.value() * outcome.value();
    let error = (&squared - &fraction("2/1")).abs();
    assert!(error <= fraction("1/1000000000000000000"),
            "2^0.5 off by {error}");
}

#[test]
fn odd_roots_of_negative_bases() {
    let outcome = eval_one("(0 - 8) ^ (1 / 3)");
    assert!(!outcome.is_exact());
    assert!(outcome.value().is_negative());

    let error = (outcome.value() - &fraction("-2/1")).abs();
    assert!(error <= fraction("1/1000000000000000000"),
            "cube root of -8 off by {error}");

    assert_failure("(0 - 4) ^ (1 / 2)");
}

#[test]
fn assignment_stores_and_recalls() {
    let mut context = Context::new();
    eval(&mut context, "$x = 3").unwrap();
    let outcome = eval(&mut context, "$x + 1").unwrap();
    assert_eq!(outcome.value(), &fraction("4/1"));

    // Last write wins.
    eval(&mut context, "$x = 10 / 4").unwrap();
    assert_eq!(context.get_variable("$x"), Some(&fraction("5/2")));

    // Reassigning the same value changes nothing.
    eval(&mut context, "$x = 10 / 4").unwrap();
    assert_eq!(context.get_variable("$x"), Some(&fraction("5/2")));
}

#[test]
fn assignment_returns_the_stored_value() {
    let mut context = Context::new();
    let outcome = eval(&mut context, "$y = 2 + 2").unwrap();
    assert_eq!(outcome.value(), &fraction("4/1"));
}

#[test]
fn self_reference_uses_the_previous_value() {
    let mut context = Context::new();
    eval(&mut context, "$n = 1").unwrap();
    eval(&mut context, "$n = $n + 1").unwrap();
    assert_eq!(context.get_variable("$n"), Some(&fraction("2/1")));
}

#[test]
fn failed_lines_leave_the_session_untouched() {
    let mut context = Context::new();
    eval(&mut context, "$x = 1").unwrap();

    assert!(eval(&mut context, "$x = 5 / 0").is_err());
    assert_eq!(context.get_variable("$x"), Some(&fraction("1/1")));

    assert!(eval(&mut context, "$x = $missing + 1").is_err());
    assert_eq!(context.get_variable("$x"), Some(&fraction("1/1")));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("5 / 0");
    assert_failure("1 % 0");
    assert_failure("1 / (2 - 2)");
}

#[test]
fn undefined_variables_are_an_error() {
    assert_failure("$missing + 1");
}

#[test]
fn sqrt_of_perfect_squares_is_exact() {
    assert_exact("sqrt(4)", "2/1");
    assert_exact("sqrt(9 / 16)", "3/4");
    assert_exact("sqrt(0)", "0/1");
}

#[test]
fn sqrt_of_two_is_approximate() {
    let outcome = eval_one("sqrt(2)");
    assert!(!outcome.is_exact());
    assert_eq!(outcome.digits(), Some(20));

    let squared = outcome.value() * outcome.value();
    let error = (&squared - &fraction("2/1")).abs();
    assert!(error <= fraction("1/1000000000000000000"),
            "sqrt(2) off by {error}");
}

#[test]
fn sqrt_of_negative_is_an_error() {
    assert_failure("sqrt(0 - 1)");
    assert_failure("sqrt(-4)");
}

#[test]
fn approximation_taints_enclosing_results() {
    let outcome = eval_one("sqrt(2) * sqrt(2)");
    assert!(!outcome.is_exact());
    assert_eq!(outcome.digits(), Some(20));

    let outcome = eval_one("1 + sqrt(4)");
    assert!(outcome.is_exact());
    assert_eq!(outcome.value(), &fraction("3/1"));
}

#[test]
fn precision_policy_controls_digit_count() {
    let mut context = Context::with_precision(PrecisionPolicy::new(5));
    let outcome = eval(&mut context, "sqrt(2)").unwrap();
    assert_eq!(outcome.digits(), Some(5));

    let squared = outcome.value() * outcome.value();
    let error = (&squared - &fraction("2/1")).abs();
    assert!(error <= fraction("1/1000"), "sqrt(2) at 5 digits off by {error}");
}

#[test]
fn abs_min_max() {
    assert_exact("abs(-3)", "3/1");
    assert_exact("abs(3)", "3/1");
    assert_exact("min(3, 1, 2)", "1/1");
    assert_exact("max(3, 1, 2)", "3/1");
    assert_exact("min(5)", "5/1");

    let outcome = eval_one("max(1, sqrt(2))");
    assert!(!outcome.is_exact());
}

#[test]
fn function_call_errors() {
    assert_failure("nope(1)");
    assert_failure("min()");
    assert_failure("sqrt(1, 2)");
    assert_failure("sqrt");
}

#[test]
fn parse_errors() {
    assert_failure("");
    assert_failure("   ");
    assert_failure("1 +");
    assert_failure("(1 + 2");
    assert_failure("1 2");
    assert_failure("@");
    assert_failure("1..2");
}

#[test]
fn assignment_only_at_the_top_level() {
    assert_failure("$x = $y = 1");
    assert_failure("1 + $x = 2");
}

#[test]
fn error_columns_point_at_the_problem() {
    let err = eval(&mut Context::new(), "1 + $nope").unwrap_err();
    assert_eq!(err.column(), Some(4));

    let err = eval(&mut Context::new(), "10 / 0").unwrap_err();
    assert_eq!(err.column(), Some(3));
}

#[test]
fn a_tripped_token_cancels_before_any_work() {
    let cancel = CancelToken::new();
    cancel.cancel();

    let mut context = Context::new();
    let err = evaluate_line("$x = 1 + 1", &mut context, &cancel).unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(context.get_variable("$x"), None);

    // The approximation path reports cancellation too, never a partial value.
    let err = evaluate_line("sqrt(2)", &mut context, &cancel).unwrap_err();
    assert!(err.is_cancelled());
}

#[test]
fn tripping_the_token_mid_approximation_stops_the_evaluation() {
    let cancel = CancelToken::new();
    let trip = cancel.clone();
    let tripper = std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(50));
        trip.cancel();
    });

    // At the maximum precision every Newton iteration carries six-figure
    // digit counts, so the root cannot converge before the token trips.
    let mut context = Context::with_precision(PrecisionPolicy::new(MAX_PRECISION_DIGITS));
    let result = evaluate_line("2 ^ (1 / 3)", &mut context, &cancel);
    tripper.join().unwrap();

    match result {
        Err(err) => assert!(err.is_cancelled()),
        Ok(_) => panic!("a {MAX_PRECISION_DIGITS}-digit cube root outran the cancellation"),
    }
}

#[test]
fn precision_requests_beyond_the_maximum_are_clamped() {
    assert_eq!(PrecisionPolicy::new(u32::MAX).digits(), MAX_PRECISION_DIGITS);
    assert_eq!(PrecisionPolicy::new(MAX_PRECISION_DIGITS).digits(),
               MAX_PRECISION_DIGITS);
    assert_eq!(PrecisionPolicy::new(20).digits(), 20);
}

#[test]
fn every_listed_builtin_dispatches() {
    let mut context = Context::new();

    for name in BUILTIN_FUNCTIONS {
        let outcome = eval(&mut context, &format!("{name}(4)"));
        assert!(outcome.is_ok(), "builtin '{name}' failed to dispatch");
    }
}

#[test]
fn session_state_round_trips_through_fractions() {
    let mut original = Context::new();
    eval(&mut original, "$a = 1 / 3").unwrap();
    eval(&mut original, "$b = 0.25").unwrap();

    let mut restored = Context::new();
    for (name, value) in original.variables() {
        let text = value.to_fraction_string();
        restored.set_variable(name.to_string(), Rational::from_fraction_str(&text).unwrap());
    }

    assert_eq!(restored.get_variable("$a"), Some(&fraction("1/3")));
    assert_eq!(restored.get_variable("$b"), Some(&fraction("1/4")));
}
