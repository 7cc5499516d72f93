use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `OR` / `||`.
/// Precedence is lower than AND.
///
/// Grammar: `logical_or := logical_and (("OR" | "||") logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_logical_and(tokens, depth)?;

    while next_operator(tokens, |op| matches!(op, BinaryOperator::Or)).is_some() {
        tokens.next();
        let right = parse_logical_and(tokens, depth)?;
        left = Expr::Binary { left:  Box::new(left),
                              op:    BinaryOperator::Or,
                              right: Box::new(right), };
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `AND` / `&&`.
/// Precedence is between OR and equality.
///
/// Grammar: `logical_and := equality (("AND" | "&&") equality)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::And`.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_equality(tokens, depth)?;

    while next_operator(tokens, |op| matches!(op, BinaryOperator::And)).is_some() {
        tokens.next();
        let right = parse_equality(tokens, depth)?;
        left = Expr::Binary { left:  Box::new(left),
                              op:    BinaryOperator::And,
                              right: Box::new(right), };
    }

    Ok(left)
}

/// Parses equality expressions.
///
/// Handles left-associative chains of `==`, `!=`, `===` and `!==`.
///
/// Grammar: `equality := relational (("==" | "!=" | "===" | "!==") relational)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree with equality nodes.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_relational(tokens, depth)?;

    while let Some(op) = next_operator(tokens, is_equality_op) {
        tokens.next();
        let right = parse_relational(tokens, depth)?;
        left = Expr::Binary { left:  Box::new(left),
                              op,
                              right: Box::new(right), };
    }

    Ok(left)
}

/// Parses relational and membership expressions.
///
/// Handles left-to-right chains of `>`, `>=`, `<`, `<=`, `IN` and `NOT IN`.
///
/// Grammar: `relational := additive ((">" | ">=" | "<" | "<=" | "IN" | "NOT IN") additive)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree with relational or membership nodes.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_additive(tokens, depth)?;

    while let Some(op) = next_operator(tokens, is_relational_op) {
        tokens.next();
        let right = parse_additive(tokens, depth)?;
        left = Expr::Binary { left:  Box::new(left),
                              op,
                              right: Box::new(right), };
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;

    while let Some(op) =
        next_operator(tokens,
                      |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub))
    {
        tokens.next();
        let right = parse_multiplicative(tokens, depth)?;
        left = Expr::Binary { left:  Box::new(left),
                              op,
                              right: Box::new(right), };
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// Grammar: `multiplicative := power (("*" | "/" | "%") power)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_power(tokens, depth)?;

    while let Some(op) =
        next_operator(tokens, |op| {
            matches!(op,
                     BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        })
    {
        tokens.next();
        let right = parse_power(tokens, depth)?;
        left = Expr::Binary { left:  Box::new(left),
                              op,
                              right: Box::new(right), };
    }

    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `**` is right-associative: `a ** b ** c` parses as `a ** (b ** c)`. The
/// right side recurses into this level rather than the level below.
///
/// Grammar: `power := unary ("**" power)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_unary(tokens, depth)?;

    if matches!(tokens.peek(), Some(Token::Power)) {
        tokens.next();
        let right = parse_power(tokens, depth + 1)?;
        return Ok(Expr::Binary { left:  Box::new(left),
                                 op:    BinaryOperator::Pow,
                                 right: Box::new(right), });
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator; both spellings of the logical operators map to the same
/// operator. Returns `None` for all other tokens.
///
/// # Example
/// ```
/// use ruleval::{ast::BinaryOperator, interpreter::lexer::Token,
///               interpreter::parser::binary::token_to_binary_operator};
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LogicalAnd),
///            Some(BinaryOperator::And));
/// assert_eq!(token_to_binary_operator(&Token::Question), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Power => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Equal => Some(BinaryOperator::Equal),
        Token::NotEqual => Some(BinaryOperator::NotEqual),
        Token::StrictEqual => Some(BinaryOperator::StrictEqual),
        Token::StrictNotEqual => Some(BinaryOperator::StrictNotEqual),
        Token::And | Token::LogicalAnd => Some(BinaryOperator::And),
        Token::Or | Token::LogicalOr => Some(BinaryOperator::Or),
        Token::In => Some(BinaryOperator::In),
        Token::NotIn => Some(BinaryOperator::NotIn),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the equality class.
#[must_use]
pub const fn is_equality_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::StrictEqual
             | BinaryOperator::StrictNotEqual)
}

/// Determines whether a binary operator belongs to the relational class,
/// which also contains the membership operators.
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::In
             | BinaryOperator::NotIn)
}

/// Peeks the next token and returns its operator when `accepts` matches.
///
/// Does not consume the token; callers advance the iterator themselves.
fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                        accepts: impl Fn(BinaryOperator) -> bool)
                        -> Option<BinaryOperator>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(token) => match token_to_binary_operator(token) {
            Some(op) if accepts(op) => Some(op),
            _ => None,
        },
        None => None,
    }
}
