use logos::Logos;

use crate::{error::ParseError, rational::Rational};

/// Represents a lexical token in an input line.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Numbers are converted to exact fractions as they are recognized, so no
/// later phase ever re-reads literal text.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `123.45`. The value is exact:
    /// `123.45` is `12345/100` reduced, never a float.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(Rational),
    /// Variable reference tokens such as `$x`. The `$` sigil is kept as part
    /// of the name.
    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Variable(String),
    /// Bare identifiers; function names such as `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,

    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Variable(name) => write!(f, "variable {name}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::Percent => write!(f, "'%'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Equals => write!(f, "'='"),
            Self::Comma => write!(f, "','"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Tokenizes one input line.
///
/// The function is total and side-effect-free: it either produces the full
/// token sequence or reports the first fault. Each token is paired with the
/// byte column where it starts, which every later error message points back
/// at. The parser treats running off the end of the returned vector as the
/// end-of-input sentinel.
///
/// # Parameters
/// - `line`: The raw input line.
///
/// # Returns
/// The token sequence, in input order.
///
/// # Errors
/// - `UnrecognizedCharacter` for text no token pattern matches.
/// - `InvalidNumber` if a numeric literal cannot be converted.
///
/// # Example
/// ```
/// use exacta::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("$x = 1 + 2").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[1], (Token::Equals, 3));
/// ```
pub fn tokenize(line: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let column = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(()) => {
                let text = lexer.slice().to_string();
                // The only fallible callback is the number conversion; any
                // other failure is an unrecognized character.
                if text.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(ParseError::InvalidNumber { text, column });
                }
                return Err(ParseError::UnrecognizedCharacter { text, column });
            },
        }
    }

    Ok(tokens)
}

/// Converts a numeric literal from the current token slice into an exact
/// fraction.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<Rational> {
    Rational::from_decimal_str(lex.slice())
}
