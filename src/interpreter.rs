/// The cancel module provides cooperative cancellation of evaluations.
///
/// A `CancelToken` is a cheap, cloneable flag that a driving thread can set
/// to ask a running evaluation to stop. The evaluator polls the token at
/// the start of every expression node and inside iterative approximation
/// loops, so a long-running computation stops promptly without being torn
/// down mid-step.
///
/// # Responsibilities
/// - Defines the `CancelToken` shared flag.
/// - Guarantees that observing a cancellation never leaves the evaluation
///   context half-updated.
pub mod cancel;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and assignments,
/// performs exact rational arithmetic, manages variable state, and produces
/// results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, builtin functions, and assignment.
/// - Tracks whether each result is exact or a decimal approximation.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source lines for further parsing.
///
/// The lexer (tokenizer) reads the raw input text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, variables, operators, and delimiters. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and byte
///   column.
/// - Handles numeric literals, `$`-prefixed variables, and function names.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of a single input line.
/// This enables the evaluator to execute user input.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, assignments).
/// - Validates correct grammar and syntax, reporting errors with byte
///   columns.
/// - Supports arithmetic, function calls, and top-level assignment.
pub mod parser;
/// The value module defines the outcome type for evaluation.
///
/// Every evaluation produces a rational number together with a record of
/// whether that number is the exact mathematical result or a decimal
/// approximation with a guaranteed number of correct digits. This module
/// declares that pairing and the rules for combining it across operations.
///
/// # Responsibilities
/// - Defines the `Outcome` enum and its exact and approximate variants.
/// - Implements the taint rules that propagate approximation through
///   arithmetic.
pub mod value;
