use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation.
    ///
    /// `NOT` coerces the operand to a boolean and inverts it; unary minus
    /// coerces to a number and negates it.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `expr`: The operand expression.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result.
    pub(crate) fn eval_unary(&self, op: UnaryOperator, expr: &Expr) -> EvalResult<Value> {
        let value = self.eval(expr)?;

        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool()?)),
            UnaryOperator::Negate => Ok(Value::Number(-value.as_number()?)),
        }
    }
}
