use std::iter::Peekable;

use crate::{ast::{Expr, Line},
            error::ParseError,
            interpreter::{lexer::Token, parser::binary::parse_additive}};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `end`: Byte column just past the last token, for end-of-input errors.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, end)
}

/// Parses one complete input line.
///
/// A line is either an assignment or a bare expression:
/// ```text
///     line := VARIABLE "=" expression
///           | expression
/// ```
/// Assignment is only recognized at the very start of the line; an `=`
/// anywhere else is rejected with `ParseError::NestedAssignment`. After the
/// expression, no tokens may remain.
///
/// # Parameters
/// - `tokens`: The full token stream for the line.
/// - `end`: Byte column just past the last token (the line length works).
///
/// # Returns
/// The parsed [`Line`].
///
/// # Errors
/// - `EmptyInput` when the line holds no tokens at all.
/// - `NestedAssignment` when a stray `=` follows the expression.
/// - `UnexpectedTrailingTokens` when anything else follows the expression.
/// - Any error from expression parsing.
///
/// # Example
/// ```
/// use exacta::{ast::Line, interpreter::{lexer, parser::core::parse_line}};
///
/// let line = "$x = 1 + 2";
/// let tokens = lexer::tokenize(line).unwrap();
/// let parsed = parse_line(&tokens, line.len()).unwrap();
/// assert!(matches!(parsed, Line::Assignment { .. }));
/// ```
pub fn parse_line(tokens: &[(Token, usize)], end: usize) -> ParseResult<Line> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // `$name = …` binds the whole rest of the line.
    if let [(Token::Variable(name), column), (Token::Equals, _), rest @ ..] = tokens {
        let mut rest_tokens = rest.iter().peekable();
        let value = parse_expression(&mut rest_tokens, end)?;
        expect_consumed(&mut rest_tokens)?;

        return Ok(Line::Assignment { name: name.clone(),
                                     value,
                                     column: *column });
    }

    let mut all_tokens = tokens.iter().peekable();
    let expr = parse_expression(&mut all_tokens, end)?;
    expect_consumed(&mut all_tokens)?;

    Ok(Line::Expression(expr))
}

/// Checks that the expression consumed the whole token stream.
///
/// A leftover `=` gets its own error so `1 + $x = 2` explains itself;
/// anything else reports the first unconsumed token.
fn expect_consumed<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        None => Ok(()),
        Some((Token::Equals, column)) => Err(ParseError::NestedAssignment { column: *column }),
        Some((tok, column)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  tok.to_string(),
                                                       column: *column, })
        },
    }
}
