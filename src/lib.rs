//! # exacta
//!
//! exacta is an exact interactive calculator core written in Rust.
//! It parses and evaluates arithmetic over arbitrary-precision fractions, so
//! `0.1 + 0.2` is exactly `3/10` and `4/8` is exactly `1/2`. Results that
//! mathematics cannot express as a fraction, like `sqrt(2)`, come back as
//! decimal approximations carrying an explicit digit guarantee.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::CalcError,
            interpreter::{cancel::CancelToken,
                          evaluator::core::Context,
                          lexer,
                          parser::core::parse_line,
                          value::Outcome}};

/// Defines the structure of parsed input.
///
/// This module declares the `Expr` and `Line` enums that represent the
/// syntactic structure of one input line as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and line types for all language constructs.
/// - Attaches byte columns to AST nodes for error reporting.
/// - Keeps the node set closed so evaluation can match exhaustively.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating a line. It standardizes error reporting and carries detailed
/// information about failures, including byte columns for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte columns and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of line evaluation.
///
/// This module ties together lexing, parsing, evaluation, outcome
/// representation, and cancellation to provide a complete runtime for
/// interactive arithmetic. It exposes the pieces behind the crate's
/// [`evaluate_line`] entry point.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and outcome
///   types.
/// - Provides the evaluation context that holds session state.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Exact arbitrary-precision fractions.
///
/// This module provides the `Rational` number type every computation runs
/// on: construction from decimal literals, exact arithmetic, rounding, and
/// both decimal and lossless fraction rendering.
///
/// # Responsibilities
/// - Wraps `num`'s big rationals behind the operations the calculator needs.
/// - Keeps every value reduced, with the sign on the numerator.
/// - Renders values as decimal text with an exactness flag.
pub mod rational;

/// Evaluates one line of input against a session context.
///
/// This is the crate's single entry point: the line is tokenized, parsed as
/// an assignment or expression, and evaluated. A successful assignment
/// stores its value in `context`; any failure leaves `context` untouched, so
/// a session survives arbitrary bad input.
///
/// # Parameters
/// - `line`: One line of user input, without a trailing newline.
/// - `context`: Session state carried across lines.
/// - `cancel`: Cooperative cancellation flag; trip it from another thread to
///   stop a long-running evaluation.
///
/// # Errors
/// Returns a [`CalcError`] describing the first lexical, syntactic, or
/// evaluation failure, or `Cancelled` when the token was tripped.
///
/// # Examples
/// ```
/// use exacta::{evaluate_line,
///              interpreter::{cancel::CancelToken, evaluator::core::Context}};
///
/// let mut context = Context::new();
/// let cancel = CancelToken::new();
///
/// let sum = evaluate_line("$x = 1/2 + 1/4", &mut context, &cancel).unwrap();
/// assert_eq!(sum.value().to_fraction_string(), "3/4");
///
/// // The assignment persisted.
/// let product = evaluate_line("$x * 4", &mut context, &cancel).unwrap();
/// assert_eq!(product.value().to_fraction_string(), "3/1");
/// ```
pub fn evaluate_line(line: &str,
                     context: &mut Context,
                     cancel: &CancelToken)
                     -> Result<Outcome, CalcError> {
    let tokens = lexer::tokenize(line)?;
    let parsed = parse_line(&tokens, line.len())?;
    Ok(context.eval_line(&parsed, cancel)?)
}
