use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value flowing through rule evaluation.
///
/// This enum models all the types a rule can produce or receive through its
/// variable bag. Type is discriminated at each operation site; there is no
/// static typing and no implicit wrapper object.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value.
    String(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison, membership and logical operators, and used as
    /// the condition of ternary expressions.
    Bool(bool),
    /// A list of `Value` elements, used primarily as the right operand of
    /// `IN`/`NOT IN`.
    List(Vec<Self>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl Value {
    /// Names the kind of the value.
    ///
    /// The kind participates in strict equality (`===`), which requires both
    /// operands' kinds to match in addition to their renderings.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::Bool(_) => "Bool",
            Self::List(_) => "List",
        }
    }

    /// Coerces the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Number` directly. Accepts `Value::String`: blank or
    /// whitespace-only text yields `0`, any other text is parsed as a
    /// decimal number.
    ///
    /// # Returns
    /// - `Ok(f64)`: the coerced number.
    /// - `Err(RuntimeError::TypeMismatch)`: for booleans, lists, and
    ///   non-numeric text.
    ///
    /// # Example
    /// ```
    /// use ruleval::Value;
    ///
    /// assert_eq!(Value::Number(5.0).as_number().unwrap(), 5.0);
    /// assert_eq!(Value::from("12.5").as_number().unwrap(), 12.5);
    /// assert_eq!(Value::from("  ").as_number().unwrap(), 0.0);
    /// assert!(Value::from("twelve").as_number().is_err());
    /// ```
    pub fn as_number(&self) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::String(s) => {
                let text = s.trim();
                if text.is_empty() {
                    return Ok(0.0);
                }
                text.parse().map_err(|_| {
                               RuntimeError::TypeMismatch { expected: "Number",
                                                            found:    self.to_string(), }
                           })
            },
            _ => Err(RuntimeError::TypeMismatch { expected: "Number",
                                                  found:    self.to_string(), }),
        }
    }

    /// Coerces the value to a `bool`, or returns an error if not boolean.
    ///
    /// Accepts `Value::Bool` directly. Accepts `Value::Number`: true iff
    /// non-zero. Accepts `Value::String`: `"true"`/`"false"`
    /// case-insensitively, and the empty string as `false`.
    ///
    /// # Returns
    /// - `Ok(bool)`: the coerced boolean.
    /// - `Err(RuntimeError::TypeMismatch)`: for lists and any other text.
    ///
    /// # Example
    /// ```
    /// use ruleval::Value;
    ///
    /// assert!(Value::Number(2.0).as_bool().unwrap());
    /// assert!(Value::from("TRUE").as_bool().unwrap());
    /// assert!(!Value::from("").as_bool().unwrap());
    /// assert!(Value::from("yes").as_bool().is_err());
    /// ```
    pub fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Number(n) => Ok(*n != 0.0),
            Self::String(s) => {
                let lower = s.to_lowercase();
                if lower == "true" {
                    return Ok(true);
                }
                if lower == "false" || lower.is_empty() {
                    return Ok(false);
                }
                Err(RuntimeError::TypeMismatch { expected: "Bool",
                                                 found:    self.to_string(), })
            },
            Self::List(_) => Err(RuntimeError::TypeMismatch { expected: "Bool",
                                                              found:    self.to_string(), }),
        }
    }

    /// Returns `true` if the value is [`Number`](Self::Number).
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`List`](Self::List).
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }
}

/// The canonical string rendering.
///
/// Equality (`==`), strict equality (`===`) and membership (`IN`) compare
/// these renderings, so the format is load-bearing: an integral number
/// renders without a decimal part (`5`, not `5.0`), which is what makes
/// `5 == '5'` hold.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
