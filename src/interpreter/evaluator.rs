/// Core evaluation logic.
///
/// Contains the evaluator, its expression dispatch, and the four-strategy
/// variable resolution.
pub mod core;

/// Unary operator evaluation.
///
/// Handles logical NOT and numeric negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations: arithmetic, comparisons,
/// equality, short-circuiting logic and membership.
pub mod binary;
