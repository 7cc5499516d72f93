use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation over its operand expressions.
    ///
    /// Logical operators are routed before the operands are evaluated so
    /// they can short-circuit. Membership evaluates both operands and checks
    /// the right-hand list. Everything else evaluates both operands and
    /// dispatches on their values.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    pub(crate) fn eval_binary_op(&self,
                                 op: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr)
                                 -> EvalResult<Value> {
        use BinaryOperator::{And, In, NotIn, Or};

        match op {
            And | Or => self.eval_logic(op, left, right),

            In | NotIn => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                Self::eval_membership(op, &lhs, &rhs)
            },

            _ => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                Self::eval_values(op, &lhs, &rhs)
            },
        }
    }

    /// Evaluates a binary operation between two already-computed values.
    ///
    /// Routes the operation to the arithmetic, equality or relational
    /// handler. Operators with their own expression-level routes (logic,
    /// membership) are rejected defensively; they cannot reach this point
    /// through a well-formed AST.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand value.
    /// - `right`: Right operand value.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use ruleval::{ast::BinaryOperator, Evaluator, Value};
    ///
    /// let left = Value::Number(3.0);
    /// let right = Value::Number(4.0);
    ///
    /// let result = Evaluator::eval_values(BinaryOperator::Add, &left, &right);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_values(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, In, Less, LessEqual, Mod, Mul, NotEqual,
            NotIn, Or, Pow, StrictEqual, StrictNotEqual, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod | Pow => Self::eval_arithmetic(op, left, right),

            Equal | NotEqual => Ok(Self::eval_equality(op, left, right)),

            StrictEqual | StrictNotEqual => Ok(Self::eval_strict_equality(op, left, right)),

            Less | Greater | LessEqual | GreaterEqual => Self::eval_relational(op, left, right),

            And | Or | In | NotIn => Err(RuntimeError::InvalidOperator { op: op.to_string() }),
        }
    }
}
