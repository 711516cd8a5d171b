/// Top-level line parsing.
///
/// Parses a whole input line as either an assignment (`$name = expression`)
/// or a bare expression, and rejects any tokens left over afterwards.
pub mod core;

/// Binary operator parsing.
///
/// One parsing function per precedence level, from loosest (`+` and `-`) to
/// tightest (`^`), each delegating to the next-tighter level for its operands.
pub mod binary;

/// Unary operator parsing.
///
/// Handles the prefix minus, which may be stacked.
pub mod unary;

/// Primary expression parsing.
///
/// Parses atomic expressions: numeric literals, variable references,
/// parenthesized groupings, and function calls.
pub mod primary;

/// Utility functions for the parser.
///
/// Provides helpers shared between grammar levels, such as parsing
/// comma-separated argument lists.
pub mod utils;
