/// An abstract syntax tree (AST) node representing a rule expression.
///
/// `Expr` covers every construct of the rule grammar: literals, variable
/// references, list literals, unary and binary operations, and the ternary
/// conditional. Each node owns its children; the tree is finite and acyclic,
/// built exactly once per parse and owned by the caller through its root.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A string literal.
    String(String),
    /// Reference to a variable by name, resolved only at evaluation time.
    Variable(String),
    /// A list literal, used primarily as the right operand of `IN`/`NOT IN`.
    List(Vec<Self>),
    /// A unary operation (`NOT` or numeric negation).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (arithmetic, comparison, logic, membership).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// The ternary conditional `condition ? then : else`.
    Ternary {
        /// The condition expression, coerced to a boolean.
        condition:   Box<Self>,
        /// Expression evaluated when the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated when the condition is false.
        else_branch: Box<Self>,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, equality, logic and
/// membership.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`), compared on string renderings
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Strictly equal to (`===`), also requiring matching value kinds
    StrictEqual,
    /// Strictly not equal to (`!==`)
    StrictNotEqual,
    /// Logical and (`AND`, `&&`)
    And,
    /// Logical or (`OR`, `||`)
    Or,
    /// Membership test (`IN`)
    In,
    /// Negated membership test (`NOT IN`)
    NotIn,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `NOT x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, In, Less, LessEqual, Mod, Mul, NotEqual,
            NotIn, Or, Pow, StrictEqual, StrictNotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            StrictEqual => "===",
            StrictNotEqual => "!==",
            And => "AND",
            Or => "OR",
            In => "IN",
            NotIn => "NOT IN",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "NOT",
        };
        write!(f, "{operator}")
    }
}
