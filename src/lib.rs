//! # ruleval
//!
//! ruleval is a small business-rule expression engine written in Rust.
//! It evaluates arithmetic, comparison, logical, membership (`IN`/`NOT IN`)
//! and ternary expressions over named variables supplied at call time,
//! returning a dynamically-typed result.
//!
//! Rules are authored as free text, e.g.
//! `Type IN ['CG','CO'] ? 12 : (HydroDone + 5)`, and evaluated against a
//! per-call variable bag. Variable names may contain spaces and punctuation
//! (`Discharge Coefficient`, `Q1:Visible/Unobstructed`, `100% PSI`); the
//! lexer and the variable-resolution rules make such names and loosely-typed
//! inputs work predictably.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{lexer::Lexer, parser::core::parse};

/// Defines the structure of parsed rules.
///
/// This module declares the `Expr` enum and the operator enums that
/// represent the syntactic structure of rule text as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all rule constructs.
/// - Defines the binary and unary operator vocabularies.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating a rule. Errors carry the offending token or value text; the
/// pipeline fails fast and propagates the first error to the caller.
///
/// # Responsibilities
/// - Defines error enums for both phases (parse, runtime).
/// - Wraps both in [`RuleError`] for the single entry point.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, parsing, evaluation and the runtime
/// value representation to provide a complete engine for rule evaluation.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Optional preprocessing helpers.
///
/// Pure transforms an embedding application may apply to rule text or the
/// variable bag before evaluation (wrapping free-text names, normalizing
/// numeric strings, collapsing doubled quotes).
pub mod util;

pub use crate::{
    error::{ParseError, RuleError, RuntimeError},
    interpreter::{
        evaluator::core::{Evaluator, Variables},
        value::core::Value,
    },
};

/// Evaluates a rule expression against a variable bag.
///
/// This is the sole entry point of the engine. Each call runs the full
/// pipeline — tokenizing, parsing and tree-walking evaluation — against the
/// supplied bag; nothing is cached or retained between calls, so concurrent
/// calls are independent.
///
/// # Parameters
/// - `expression`: The rule text.
/// - `variables`: The variable bag for this call. Never mutated.
///
/// # Returns
/// The computed [`Value`], or the first error the pipeline produced.
///
/// # Errors
/// Returns a [`RuleError`] wrapping either a parse failure (syntax error,
/// premature end of input, excessive nesting) or a runtime failure (missing
/// variable, failed coercion, invalid membership operand, division by zero).
///
/// # Example
/// ```
/// use ruleval::{evaluate, Value, Variables};
///
/// let mut variables = Variables::new();
/// variables.insert("Type".to_string(), Value::from("CG"));
/// variables.insert("HydroDone".to_string(), Value::from(7.0));
///
/// let result = evaluate("Type IN ['CG', 'CO'] ? 12 : HydroDone + 5", &variables);
/// assert_eq!(result.unwrap(), Value::Number(12.0));
/// ```
pub fn evaluate(expression: &str, variables: &Variables) -> Result<Value, RuleError> {
    let tokens = Lexer::new(expression).tokenize();
    let ast = parse(&tokens)?;

    log::trace!("parsed rule {expression:?} into {ast:?}");

    let result = Evaluator::new(variables).eval(&ast)?;
    Ok(result)
}
