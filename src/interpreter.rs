/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against the caller's variable bag, applies the
/// coercion and variable-resolution rules, short-circuits logical operators
/// and produces a dynamically-typed result. It is the core execution engine
/// of the rule pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variable references through the four lookup strategies.
/// - Reports runtime errors such as division by zero or failed coercions.
pub mod evaluator;
/// The lexer module tokenizes rule text for further parsing.
///
/// The lexer (tokenizer) reads the raw rule text and produces a stream of
/// tokens over an index-addressable character buffer. It resolves the
/// context-sensitive ambiguities of rule text: `%` as modulo versus part of a
/// name, digit-led spans that are really identifiers, and the fused `NOT IN`
/// operator.
///
/// # Responsibilities
/// - Converts the input character buffer into tokens.
/// - Handles numeric and string literals, identifiers, operators, keywords.
/// - Returns `Eof` forever once the input is exhausted.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer through a
/// recursive-descent precedence ladder and constructs the expression tree,
/// merging consecutive identifiers into multi-word variable names along the
/// way.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces grammar, associativity, and a nesting-depth limit.
/// - Rejects trailing tokens after a complete expression.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the dynamically-typed `Value` flowing through
/// evaluation (number, string, boolean, list) together with the coercion
/// rules and the canonical string rendering used by equality and membership.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Implements the `to_number`/`to_bool` coercions.
/// - Provides the display rendering that `==`, `===` and `IN` compare.
pub mod value;
