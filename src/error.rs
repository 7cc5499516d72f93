/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of rule
/// text: unexpected tokens, premature end of input, and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// rule: missing variables, failed coercions, invalid membership operands and
/// division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by the full evaluation pipeline.
///
/// The single `evaluate` entry point lexes, parses and evaluates in one call,
/// so its error type wraps both phases. Every stage fails fast: the first
/// error is propagated to the caller and no partial result exists.
#[derive(Debug)]
pub enum RuleError {
    /// The rule text could not be parsed.
    Parse(ParseError),
    /// The rule parsed but failed during evaluation.
    Runtime(RuntimeError),
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RuleError {}

impl From<ParseError> for RuleError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for RuleError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
