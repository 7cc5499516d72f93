use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates an arithmetic operation over two values.
    ///
    /// Both operands are coerced to numbers. Division and modulo raise
    /// `DivisionByZero` when the divisor coerces to zero; exponentiation has
    /// no zero check.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator (`+`, `-`, `*`, `/`, `%`, `**`).
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a number.
    pub(crate) fn eval_arithmetic(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        let lhs = left.as_number()?;
        let rhs = right.as_number()?;

        let result = match op {
            Add => lhs + rhs,
            Sub => lhs - rhs,
            Mul => lhs * rhs,
            Div => {
                if rhs == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                lhs / rhs
            },
            Mod => {
                if rhs == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                lhs % rhs
            },
            Pow => lhs.powf(rhs),
            _ => return Err(RuntimeError::InvalidOperator { op: op.to_string() }),
        };

        Ok(Value::Number(result))
    }
}
