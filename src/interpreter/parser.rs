/// Core parsing logic and the public parse entry point.
///
/// Contains the `parse` entry that consumes a full token stream, the
/// ternary-level parser, and the shared result alias and depth limit.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence ladder for all binary operators: logic,
/// equality, relational/membership, additive, multiplicative and power.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, variable references (including the
/// multi-word merge), parenthesized sub-expressions and list literals.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides the token-expectation helper and comma-separated list parsing.
pub mod utils;
