/// Represents all errors that can occur while tokenizing or parsing a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input line contained no tokens at all.
    EmptyInput,
    /// Found a character (or character sequence) the tokenizer does not
    /// recognize.
    UnrecognizedCharacter {
        /// The offending text.
        text:   String,
        /// The byte column where the text starts.
        column: usize,
    },
    /// A numeric literal could not be converted to an exact fraction.
    InvalidNumber {
        /// The malformed literal.
        text:   String,
        /// The byte column where the literal starts.
        column: usize,
    },
    /// Found a token that is not valid at this point in the grammar.
    UnexpectedToken {
        /// A description of what was found (and, where helpful, what was
        /// expected instead).
        token:  String,
        /// The byte column of the offending token.
        column: usize,
    },
    /// The line ended while an operand or delimiter was still required.
    UnexpectedEndOfInput {
        /// The byte column just past the end of the line.
        column: usize,
    },
    /// An opening parenthesis was never closed.
    ExpectedClosingParen {
        /// The byte column of the unmatched `(`.
        column: usize,
    },
    /// A complete expression was parsed but tokens remained.
    UnexpectedTrailingTokens {
        /// A description of the first leftover token.
        token:  String,
        /// The byte column of the first leftover token.
        column: usize,
    },
    /// An `=` appeared anywhere other than `$variable = expression` at the
    /// top level. Assignment is a whole-line construct, never a
    /// subexpression.
    NestedAssignment {
        /// The byte column of the misplaced `=`.
        column: usize,
    },
}

impl ParseError {
    /// The byte column the error points at, when it has one.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::UnrecognizedCharacter { column, .. }
            | Self::InvalidNumber { column, .. }
            | Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column }
            | Self::ExpectedClosingParen { column }
            | Self::UnexpectedTrailingTokens { column, .. }
            | Self::NestedAssignment { column } => Some(*column),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Empty input."),

            Self::UnrecognizedCharacter { text, column } => {
                write!(f, "Error at column {column}: Unrecognized character '{text}'.")
            },

            Self::InvalidNumber { text, column } => {
                write!(f, "Error at column {column}: Invalid number '{text}'.")
            },

            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { column } => {
                write!(f, "Error at column {column}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { column } => {
                write!(f,
                       "Error at column {column}: Expected closing parenthesis ')' but none \
                        found.")
            },

            Self::UnexpectedTrailingTokens { token, column } => {
                write!(f,
                       "Error at column {column}: Unexpected {token} after a complete \
                        expression.")
            },

            Self::NestedAssignment { column } => {
                write!(f,
                       "Error at column {column}: Assignment is only valid as a whole line, as \
                        in '$name = expression'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
