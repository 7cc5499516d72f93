use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{parse_expression, ParseResult, MAX_DEPTH},
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (numeric negation) and `NOT` (logical
/// not). Unary operators are right-associative, so `NOT -x` is parsed as
/// `NOT (-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "NOT") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if depth > MAX_DEPTH {
        return Err(ParseError::ExpressionTooDeep);
    }

    match tokens.peek() {
        Some(Token::Minus) => {
            tokens.next();
            let expr = parse_unary(tokens, depth + 1)?;
            Ok(Expr::Unary { op:   UnaryOperator::Negate,
                             expr: Box::new(expr), })
        },
        Some(Token::Not) => {
            tokens.next();
            let expr = parse_unary(tokens, depth + 1)?;
            Ok(Expr::Unary { op:   UnaryOperator::Not,
                             expr: Box::new(expr), })
        },
        _ => parse_primary(tokens, depth),
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - numeric and string literals
/// - variable references, merging consecutive identifiers into one
///   multi-word name
/// - parenthesized sub-expressions
/// - list literals
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let peeked = match tokens.peek() {
        Some(token) => *token,
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    match peeked {
        Token::Number(n) => {
            tokens.next();
            Ok(Expr::Number(*n))
        },
        Token::String(s) => {
            tokens.next();
            Ok(Expr::String(s.clone()))
        },
        Token::Identifier(_) => parse_variable(tokens),
        Token::LParen => {
            tokens.next();
            let expr = parse_expression(tokens, depth + 1)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        Token::LBracket => parse_list(tokens, depth),
        Token::Eof => Err(ParseError::UnexpectedEndOfInput),
        token => Err(ParseError::UnexpectedToken { token: token.to_string() }),
    }
}

/// Parses a variable reference, merging multi-word names.
///
/// Consecutive identifier tokens with no operator between them form a single
/// variable name with the parts joined by one space, so free-text names like
/// `Discharge Coefficient` resolve as one variable.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// An [`Expr::Variable`] carrying the merged name.
fn parse_variable<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut name = String::new();

    while matches!(tokens.peek(), Some(Token::Identifier(_))) {
        if let Some(Token::Identifier(word)) = tokens.next() {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(word);
        }
    }

    if name.is_empty() {
        return Err(ParseError::UnexpectedEndOfInput);
    }

    Ok(Expr::Variable(name))
}

/// Parses a list literal of the form `[expr1, expr2, ..., exprN]`.
///
/// Elements are full ternary-level expressions separated by commas. An empty
/// list is permitted; a trailing comma is not.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[`.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::List`] node containing the parsed elements.
///
/// # Errors
/// Returns a `ParseError` if an element fails to parse or the closing `]` is
/// missing.
fn parse_list<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let items =
        parse_comma_separated(tokens, |t| parse_expression(t, depth + 1), &Token::RBracket)?;
    Ok(Expr::List(items))
}
