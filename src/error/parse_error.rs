#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that is not valid at the current grammar position, or a
    /// trailing token after a complete expression.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Input ended while a construct (sub-expression, list, parenthesis) was
    /// still open.
    UnexpectedEndOfInput,
    /// Expression nesting exceeded the parser's depth limit.
    ExpressionTooDeep,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => {
                write!(f, "Unexpected end of input.")
            },

            Self::ExpressionTooDeep => {
                write!(f, "Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
