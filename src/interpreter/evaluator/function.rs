/// Builtin lookup and dispatch.
///
/// Holds the builtin table, arity checking, and the entry point called by
/// the evaluator for every function call.
pub mod core;

/// Square roots, exact when possible.
pub mod sqrt;

/// Absolute value.
pub mod abs;

/// Minimum and maximum over one or more arguments.
pub mod min_max;
