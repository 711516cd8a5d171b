use std::iter::Peekable;

use crate::{ast::Expr,
            error::ParseError,
            interpreter::{lexer::Token,
                          parser::{core::{ParseResult, parse_expression},
                                   utils::parse_comma_separated}}};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - variable references (`$name`)
/// - function calls (`name(args)`)
/// - parenthesized expressions
///
/// This function does not handle unary operators. It dispatches to
/// specialized parsing functions depending on the leading token.
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | VARIABLE
///              | function_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `end`: Byte column just past the last token.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { column: end })?;

    match peeked {
        (Token::Number(value), column) => {
            let expr = Expr::Literal { value:  value.clone(),
                                       column: *column, };
            tokens.next();
            Ok(expr)
        },
        (Token::Variable(name), column) => {
            let expr = Expr::Variable { name:   name.clone(),
                                        column: *column, };
            tokens.next();
            Ok(expr)
        },
        (Token::Identifier(_), _) => parse_function_call(tokens, end),
        (Token::LParen, _) => parse_grouping(tokens, end),
        (tok, column) => Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                           column: *column, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen` at the column of the
/// unmatched `(`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `end`: Byte column just past the last token.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, column)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { column: end });
    };
    let expr = parse_expression(tokens, end)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { column: *column }),
    }
}

/// Parses a function call.
///
/// Expected form: `name(arg1, arg2, ..., argN)`
///
/// The function consumes the name, requires an opening `(`, and parses the
/// comma-separated argument list up to the closing `)`. A bare name without
/// parentheses is rejected; variable references use the `$` sigil instead.
///
/// Grammar: `function_call := IDENTIFIER "(" (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `end`: Byte column just past the last token.
///
/// # Returns
/// An [`Expr::FunctionCall`] node. Arity is checked during evaluation, not
/// here.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is not followed by `(`,
/// - an argument fails to parse,
/// - the closing `)` is missing.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, column) = match tokens.next() {
        Some((Token::Identifier(n), column)) => (n.clone(), *column),
        Some((tok, column)) => {
            return Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                     column: *column, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { column: end });
        },
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen, end)?;
            Ok(Expr::FunctionCall { name,
                                    arguments,
                                    column })
        },
        _ => {
            Err(ParseError::UnexpectedToken { token: format!("'{name}' (a function call needs parentheses)"),
                                              column })
        },
    }
}
