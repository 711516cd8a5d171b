use std::iter::Peekable;

use crate::{ast::Expr,
            interpreter::{lexer::Token,
                          parser::{core::ParseResult, primary::parse_primary}}};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation).
///
/// Unary operators are right-associative, so an input like `--x` is parsed as
/// `-(-x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `end`: Byte column just past the last token.
///
/// # Returns
/// An [`Expr::UnaryMinus`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, column)) = tokens.peek() {
        let column = *column;
        tokens.next();
        let operand = parse_unary(tokens, end)?;
        Ok(Expr::UnaryMinus { operand: Box::new(operand),
                              column })
    } else {
        parse_primary(tokens, end)
    }
}
