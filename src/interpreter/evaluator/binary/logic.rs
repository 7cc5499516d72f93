use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a logical operation with short-circuiting.
    ///
    /// The left operand is coerced to a boolean first. `AND` stops and
    /// returns `false` when the left side is false; `OR` stops and returns
    /// `true` when the left side is true. The right operand is evaluated
    /// only when the result is still undecided, so guarded expressions like
    /// `false AND (1/0)` never raise.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or` (either spelling).
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    pub(crate) fn eval_logic(&self,
                             op: BinaryOperator,
                             left: &Expr,
                             right: &Expr)
                             -> EvalResult<Value> {
        let lhs = self.eval(left)?.as_bool()?;

        match op {
            BinaryOperator::And => {
                if !lhs {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(self.eval(right)?.as_bool()?))
            },
            BinaryOperator::Or => {
                if lhs {
                    return Ok(Value::Bool(true));
                }
                Ok(Value::Bool(self.eval(right)?.as_bool()?))
            },
            _ => Err(RuntimeError::InvalidOperator { op: op.to_string() }),
        }
    }
}
