/// Represents all errors that can occur while evaluating a parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Tried to read a variable that has never been assigned.
    UnknownVariable {
        /// The name of the variable, including its `$` sigil.
        name:   String,
        /// The byte column of the reference.
        column: usize,
    },
    /// Called a function that is not in the builtin table.
    UnknownFunction {
        /// The name of the function.
        name:   String,
        /// The byte column of the call.
        column: usize,
    },
    /// Attempted division (or remainder) by zero.
    DivisionByZero {
        /// The byte column of the `/` or `%` operator.
        column: usize,
    },
    /// Took the square root of a negative number.
    SqrtOfNegative {
        /// The byte column of the call.
        column: usize,
    },
    /// Raised a negative number to a fractional power with an even root
    /// index, which has no real value.
    EvenRootOfNegative {
        /// The byte column of the `^` operator.
        column: usize,
    },
    /// Evaluated `0^0`, which is undefined here.
    ZeroPowerZero {
        /// The byte column of the `^` operator.
        column: usize,
    },
    /// The root index of a fractional exponent is too large to iterate on.
    ExponentTooLarge {
        /// The byte column of the `^` operator.
        column: usize,
    },
    /// A function was called with an unsupported number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// A description of the accepted argument count.
        expected: &'static str,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The byte column of the call.
        column:   usize,
    },
    /// The cancellation token was tripped while an approximation was
    /// running. No partial result is ever returned.
    Cancelled,
}

impl EvalError {
    /// The byte column the error points at. `Cancelled` has no position.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Self::UnknownVariable { column, .. }
            | Self::UnknownFunction { column, .. }
            | Self::DivisionByZero { column }
            | Self::SqrtOfNegative { column }
            | Self::EvenRootOfNegative { column }
            | Self::ZeroPowerZero { column }
            | Self::ExponentTooLarge { column }
            | Self::ArgumentCountMismatch { column, .. } => Some(*column),
            Self::Cancelled => None,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, column } => {
                write!(f, "Error at column {column}: Unknown variable {name}.")
            },

            Self::UnknownFunction { name, column } => {
                write!(f, "Error at column {column}: Unknown function '{name}'.")
            },

            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Cannot divide by zero.")
            },

            Self::SqrtOfNegative { column } => {
                write!(f, "Error at column {column}: Square root of a negative number.")
            },

            Self::EvenRootOfNegative { column } => {
                write!(f,
                       "Error at column {column}: Even root of a negative number has no real \
                        value.")
            },

            Self::ZeroPowerZero { column } => {
                write!(f, "Error at column {column}: 0^0 is undefined.")
            },

            Self::ExponentTooLarge { column } => {
                write!(f, "Error at column {column}: Exponent denominator is too large.")
            },

            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          column, } => {
                write!(f,
                       "Error at column {column}: '{name}' expects {expected} argument(s), but \
                        {found} were supplied.")
            },

            Self::Cancelled => write!(f, "Evaluation cancelled."),
        }
    }
}

impl std::error::Error for EvalError {}
