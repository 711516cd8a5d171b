/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// input line. Parse errors include unrecognized characters, malformed
/// numeric literals, grammar violations, and misplaced assignments.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// line: undefined variables and functions, division by zero, domain faults
/// such as the square root of a negative number, and cooperative
/// cancellation.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any failure produced by [`crate::evaluate_line`].
///
/// Errors are always returned as values; a malformed or failing line never
/// panics and never leaves the evaluation context half-updated.
#[derive(Debug)]
pub enum CalcError {
    /// The line could not be tokenized or parsed.
    Parse(ParseError),
    /// The line parsed, but evaluating it failed (or was cancelled).
    Eval(EvalError),
}

impl CalcError {
    /// The byte column the error points at, when the failure has a location.
    ///
    /// Cancellation and whole-line conditions (such as empty input) carry no
    /// position.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => e.column(),
            Self::Eval(e) => e.column(),
        }
    }

    /// Returns `true` if the failure is a cooperative cancellation rather
    /// than a fault in the input.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Eval(EvalError::Cancelled))
    }
}

impl From<ParseError> for CalcError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for CalcError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
