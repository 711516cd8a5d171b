/// Core evaluation logic for lines and expressions.
///
/// Contains the evaluation context, the precision policy, and the main
/// dispatch over AST nodes.
pub mod core;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations: exact arithmetic for
/// `+`, `-`, `*`, `/`, and `%`, and both the exact and the approximated
/// paths of `^`.
pub mod binary;

/// Iterative root approximation.
///
/// Newton's method over exact fractions, used for non-integer exponents and
/// inexact square roots.
pub mod approx;

/// Builtin function evaluation.
///
/// The builtin lookup table and the individual function implementations.
pub mod function;
