use std::collections::HashSet;

use crate::{
    interpreter::{
        evaluator::core::Variables,
        lexer::{Lexer, Token},
    },
    Value,
};

/// Returns `true` when a variable name needs parenthesizing to survive
/// tokenization, i.e. when it contains any character outside alphanumerics
/// and underscores.
///
/// # Example
/// ```
/// use ruleval::util::preprocess::needs_wrapping;
///
/// assert!(needs_wrapping("Discharge Coefficient"));
/// assert!(needs_wrapping("100% PSI"));
/// assert!(!needs_wrapping("HydroDone"));
/// ```
#[must_use]
pub fn needs_wrapping(name: &str) -> bool {
    name.chars().any(|c| !(c.is_alphanumeric() || c == '_'))
}

/// Rewrites free-text variable references into parenthesized tokens.
///
/// The expression is re-tokenized; each identifier token that
/// case-insensitively matches one of `known_names` and needs wrapping is
/// emitted as `(name)`, everything else is emitted back as its surface form.
/// This is a pure string→string transform intended to run before
/// [`evaluate`](crate::evaluate); the core grammar does not depend on it.
///
/// # Parameters
/// - `expression`: The rule text to rewrite.
/// - `known_names`: The variable names available to the rule.
///
/// # Returns
/// The rewritten rule text.
///
/// # Example
/// ```
/// use std::collections::HashSet;
///
/// use ruleval::util::preprocess::wrap_variables;
///
/// let known: HashSet<String> = ["100% PSI".to_string()].into_iter().collect();
/// assert_eq!(wrap_variables("100% PSI ** 2", &known), "(100% PSI)**2");
/// ```
#[must_use]
pub fn wrap_variables(expression: &str, known_names: &HashSet<String>) -> String {
    let mut lexer = Lexer::new(expression);
    let mut output = String::new();
    let mut previous_was_identifier = false;

    loop {
        let token = lexer.next_token();

        match token {
            Token::Identifier(name) => {
                // preserve space between identifier parts
                if previous_was_identifier {
                    output.push(' ');
                }

                let matched = known_names.iter()
                                         .find(|key| key.to_lowercase() == name.to_lowercase());

                match matched {
                    Some(key) if needs_wrapping(key) => {
                        output.push('(');
                        output.push_str(key);
                        output.push(')');
                    },
                    _ => output.push_str(&name),
                }

                previous_was_identifier = true;
                continue;
            },

            Token::And => output.push_str(" AND "),
            Token::Or => output.push_str(" OR "),
            Token::Not => output.push_str(" NOT "),
            Token::In => output.push_str(" IN "),
            Token::NotIn => output.push_str(" NOT IN "),

            Token::Eof => return output,

            other => output.push_str(&other.to_string()),
        }

        previous_was_identifier = false;
    }
}

/// Converts numeric-looking string values in a bag to numbers.
///
/// An optional preprocessing step; the evaluator's own coercions already
/// parse numeric strings on demand.
///
/// # Example
/// ```
/// use ruleval::{util::preprocess::normalize_variables, Value, Variables};
///
/// let mut bag = Variables::new();
/// bag.insert("a".to_string(), Value::from("12"));
/// bag.insert("b".to_string(), Value::from("CG"));
///
/// let normalized = normalize_variables(&bag);
/// assert_eq!(normalized["a"], Value::Number(12.0));
/// assert_eq!(normalized["b"], Value::from("CG"));
/// ```
#[must_use]
pub fn normalize_variables(variables: &Variables) -> Variables {
    variables.iter()
             .map(|(key, value)| {
                 let normalized = match value {
                     Value::String(s) => match s.parse::<f64>() {
                         Ok(number) => Value::Number(number),
                         Err(_) => value.clone(),
                     },
                     _ => value.clone(),
                 };
                 (key.clone(), normalized)
             })
             .collect()
}

/// Collapses doubled single quotes (`''`) into one (`'`).
///
/// Rule text exported from spreadsheet-like sources often escapes quotes by
/// doubling them; this undoes that before parsing.
///
/// # Example
/// ```
/// use ruleval::util::preprocess::normalize_rule_text;
///
/// assert_eq!(normalize_rule_text("Type == ''CG''"), "Type == 'CG'");
/// ```
#[must_use]
pub fn normalize_rule_text(rule: &str) -> String {
    rule.replace("''", "'")
}
