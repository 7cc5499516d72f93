use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, requiring it to equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
///
/// # Errors
/// - `UnexpectedEndOfInput` when the stream ends instead.
/// - `UnexpectedToken` when a different token is found.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token == expected => Ok(()),
        Some(Token::Eof) | None => Err(ParseError::UnexpectedEndOfInput),
        Some(token) => Err(ParseError::UnexpectedToken { token: token.to_string() }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// Repeatedly calls `parse_item` to parse one element, expecting either a
/// comma to continue the list or the closing token to end it. An immediately
/// encountered closing token produces an empty list. A comma directly before
/// the closing token is rejected by the element parser, so trailing commas
/// are not permitted.
///
/// Grammar (simplified): `list := (item ("," item)*)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `]`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();

    if tokens.peek().copied() == Some(closing) {
        tokens.next();

        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some(Token::Comma) => {
                tokens.next();
            },
            Some(token) if *token == closing => {
                tokens.next();
                break;
            },
            Some(Token::Eof) | None => return Err(ParseError::UnexpectedEndOfInput),
            Some(token) => {
                return Err(ParseError::UnexpectedToken { token: token.to_string() });
            },
        }
    }

    Ok(items)
}
