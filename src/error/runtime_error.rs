#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// No variable-resolution strategy found a binding for the name.
    MissingVariable {
        /// The name of the variable as written in the rule.
        name: String,
    },
    /// A value could not be coerced to the kind an operator requires.
    TypeMismatch {
        /// The kind the operator expected (`"Number"` or `"Bool"`).
        expected: &'static str,
        /// Rendering of the value that was actually found.
        found:    String,
    },
    /// The right-hand side of `IN`/`NOT IN` did not evaluate to a list.
    InvalidMembershipOperand,
    /// Attempted `/` or `%` with a divisor that coerces to zero.
    DivisionByZero,
    /// An operator reached evaluation in a position the evaluator does not
    /// handle. Unreachable with a well-formed AST.
    InvalidOperator {
        /// Rendering of the operator.
        op: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingVariable { name } => {
                write!(f, "Missing variable in rule context: {name}.")
            },

            Self::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch. Expected {expected}, got '{found}'.")
            },

            Self::InvalidMembershipOperand => {
                write!(f, "Right-hand side of IN operator must be a list.")
            },

            Self::DivisionByZero => {
                write!(f, "Division by zero is not allowed.")
            },

            Self::InvalidOperator { op } => {
                write!(f, "Invalid operator: {op}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
