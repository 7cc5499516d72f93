use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a membership test (`IN` / `NOT IN`).
    ///
    /// The right operand must be a list. Membership compares the left
    /// operand's lowercased string rendering against each element's
    /// lowercased rendering, making the test case-insensitive.
    ///
    /// # Parameters
    /// - `op`: `In` or `NotIn`.
    /// - `left`: The candidate value.
    /// - `right`: The list to search.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Errors
    /// `InvalidMembershipOperand` when the right operand is not a list.
    pub(crate) fn eval_membership(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value)
                                  -> EvalResult<Value> {
        let items = match right {
            Value::List(items) => items,
            _ => return Err(RuntimeError::InvalidMembershipOperand),
        };

        let needle = left.to_string().to_lowercase();
        let found = items.iter()
                         .any(|item| item.to_string().to_lowercase() == needle);

        match op {
            BinaryOperator::In => Ok(Value::Bool(found)),
            BinaryOperator::NotIn => Ok(Value::Bool(!found)),
            _ => Err(RuntimeError::InvalidOperator { op: op.to_string() }),
        }
    }
}
