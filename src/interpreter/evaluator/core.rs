use std::collections::HashMap;

use crate::{ast::Expr, error::RuntimeError, interpreter::value::core::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The caller-supplied variable bag: a mapping from variable name (exact
/// text, case-sensitive as authored) to a dynamically-typed value.
pub type Variables = HashMap<String, Value>;

/// Walks a parsed expression tree against a variable bag.
///
/// The evaluator holds no state beyond a borrow of the bag, never mutates
/// it, and has no side effects beyond diagnostic logging, so concurrent
/// evaluations are safe as long as each call receives its own expression and
/// bag.
///
/// # Example
/// ```
/// use ruleval::{ast::Expr, Evaluator, Value, Variables};
///
/// let mut variables = Variables::new();
/// variables.insert("HydroDone".to_string(), Value::Number(7.0));
///
/// let evaluator = Evaluator::new(&variables);
/// let result = evaluator.eval(&Expr::Variable("HydroDone".to_string()));
/// assert_eq!(result.unwrap(), Value::Number(7.0));
/// ```
pub struct Evaluator<'a> {
    variables: &'a Variables,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over the given variable bag.
    #[must_use]
    pub const fn new(variables: &'a Variables) -> Self {
        Self { variables }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the expression variant: literals, variable references, lists,
    /// unary and binary operations, and the ternary conditional.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`], or the first `RuntimeError` encountered.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::String(s) => Ok(Value::String(s.clone())),
            Expr::Variable(name) => self.eval_variable(name),
            Expr::List(items) => self.eval_list(items),
            Expr::Unary { op, expr } => self.eval_unary(*op, expr),
            Expr::Binary { left, op, right } => self.eval_binary_op(*op, left, right),
            Expr::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                self.eval_ternary(condition, then_branch, else_branch)
            },
        }
    }

    /// Resolves a variable reference against the bag.
    ///
    /// Resolution strategies, first match wins:
    /// 1. Exact key match.
    /// 2. Case-insensitive key match.
    /// 3. Key whose lowercased text ends with the lowercased name, which
    ///    supports partial and namespaced references.
    /// 4. Match after stripping spaces and `%` from both sides and
    ///    lowercasing, which reconciles variants like `100%PSI` and
    ///    `100% PSI`.
    ///
    /// When a fallback strategy matches more than one key, the first hit is
    /// used and a debug-level diagnostic names the contenders.
    ///
    /// An unbound `true`/`false` (case-insensitive) resolves to the boolean
    /// literal; a binding of that name takes precedence.
    ///
    /// # Errors
    /// `MissingVariable` when no strategy finds a binding.
    pub(crate) fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.variables.get(name) {
            return Ok(value.clone());
        }

        let lowered = name.to_lowercase();

        let hits: Vec<_> = self.variables
                               .iter()
                               .filter(|(key, _)| key.to_lowercase() == lowered)
                               .collect();
        if let Some(value) = pick(name, "case-insensitive", &hits) {
            return Ok(value.clone());
        }

        let hits: Vec<_> = self.variables
                               .iter()
                               .filter(|(key, _)| key.to_lowercase().ends_with(&lowered))
                               .collect();
        if let Some(value) = pick(name, "suffix", &hits) {
            return Ok(value.clone());
        }

        let target = normalize_name(name);
        let hits: Vec<_> = self.variables
                               .iter()
                               .filter(|(key, _)| normalize_name(key) == target)
                               .collect();
        if let Some(value) = pick(name, "normalized", &hits) {
            return Ok(value.clone());
        }

        if name.eq_ignore_ascii_case("true") {
            return Ok(Value::Bool(true));
        }
        if name.eq_ignore_ascii_case("false") {
            return Ok(Value::Bool(false));
        }

        Err(RuntimeError::MissingVariable { name: name.to_string() })
    }

    /// Evaluates a list literal, eagerly and in order.
    pub(crate) fn eval_list(&self, items: &[Expr]) -> EvalResult<Value> {
        let values = items.iter()
                          .map(|item| self.eval(item))
                          .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::List(values))
    }

    /// Evaluates a ternary conditional.
    ///
    /// The condition is coerced to a boolean and exactly one branch is
    /// evaluated; the other branch is never touched, which makes guarded
    /// expressions like `b == 0 ? 0 : a / b` safe.
    pub(crate) fn eval_ternary(&self,
                               condition: &Expr,
                               then_branch: &Expr,
                               else_branch: &Expr)
                               -> EvalResult<Value> {
        if self.eval(condition)?.as_bool()? {
            self.eval(then_branch)
        } else {
            self.eval(else_branch)
        }
    }
}

/// Returns the first hit of a fallback lookup, logging when it was
/// ambiguous.
fn pick<'v>(name: &str, strategy: &str, hits: &[(&'v String, &'v Value)]) -> Option<&'v Value> {
    if hits.len() > 1 {
        log::debug!("variable '{name}' matches {} keys via {strategy} lookup; using '{}'",
                    hits.len(),
                    hits[0].0);
    }
    hits.first().map(|(_, value)| *value)
}

/// Normalizes a variable name for the last-resort lookup strategy: spaces
/// and `%` removed, lowercased.
fn normalize_name(name: &str) -> String {
    name.replace([' ', '%'], "").to_lowercase()
}
