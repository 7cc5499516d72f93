use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `==` / `!=` between two values.
    ///
    /// Equality compares the string renderings of both operands, so `5` and
    /// `'5'` compare equal. This looseness is load-bearing for existing rule
    /// text and is preserved deliberately.
    ///
    /// # Parameters
    /// - `op`: `Equal` or `NotEqual`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A boolean value.
    pub(crate) fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let equal = left.to_string() == right.to_string();

        Value::Bool(if op == BinaryOperator::Equal {
                        equal
                    } else {
                        !equal
                    })
    }

    /// Evaluates `===` / `!==` between two values.
    ///
    /// Strict equality requires both the value kinds and the string
    /// renderings to match, so `5 === '5'` is false where `5 == '5'` is
    /// true.
    ///
    /// # Parameters
    /// - `op`: `StrictEqual` or `StrictNotEqual`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A boolean value.
    pub(crate) fn eval_strict_equality(op: BinaryOperator,
                                       left: &Value,
                                       right: &Value)
                                       -> Value {
        let equal = left.kind() == right.kind() && left.to_string() == right.to_string();

        Value::Bool(if op == BinaryOperator::StrictEqual {
                        equal
                    } else {
                        !equal
                    })
    }

    /// Evaluates a relational comparison between two values.
    ///
    /// Both operands are coerced to numbers and compared.
    ///
    /// # Parameters
    /// - `op`: `<`, `>`, `<=` or `>=`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    pub(crate) fn eval_relational(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Greater, GreaterEqual, Less, LessEqual};

        let lhs = left.as_number()?;
        let rhs = right.as_number()?;

        let result = match op {
            Less => lhs < rhs,
            Greater => lhs > rhs,
            LessEqual => lhs <= rhs,
            GreaterEqual => lhs >= rhs,
            _ => return Err(RuntimeError::InvalidOperator { op: op.to_string() }),
        };

        Ok(Value::Bool(result))
    }
}
