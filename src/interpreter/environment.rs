use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Position, Statement},
    error::{EvalError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::EvalResult,
        parser::statement::parse_statement,
        scanner::{peek, scan_identifier, skip_whitespace},
        value::core::Value,
    },
};

/// Stores the bindings of one interpreter session.
///
/// The environment maps variable names to values and is the only mutable
/// state of the interpreter. It is created once per session, seeded with the
/// constants `pi` and `e`, and changed only by assignment statements.
///
/// ## Usage
///
/// Statements are handed to [`Environment::evaluate`] one at a time. A
/// statement that fails leaves every binding as it was.
///
/// ```
/// use calcula::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// env.evaluate("x = 5").unwrap();
///
/// assert_eq!(env.evaluate("x + 3").unwrap(), Value::Scalar(8.0));
/// assert!(env.evaluate("x = 1 / 0").is_err());
/// assert_eq!(env.evaluate("x").unwrap(), Value::Scalar(5.0));
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    /// Reject `=` on names that are already bound.
    strict:   bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only `pi` and `e`.
    ///
    /// Reassigning a name overwrites its binding.
    #[must_use]
    pub fn new() -> Self {
        let bindings = HashMap::from([("pi".to_string(), Value::Scalar(std::f64::consts::PI)),
                                      ("e".to_string(), Value::Scalar(std::f64::consts::E))]);
        Self { bindings,
               strict: false }
    }

    /// Creates an environment where `=` on an existing name fails with
    /// `Redeclaration`.
    ///
    /// Compound assignments, `++` and `--` still update existing bindings;
    /// they never introduce a name.
    ///
    /// # Example
    /// ```
    /// use calcula::{error::ErrorKind, interpreter::environment::Environment};
    ///
    /// let mut env = Environment::strict();
    /// env.evaluate("x = 1").unwrap();
    /// env.evaluate("x += 1").unwrap();
    ///
    /// assert_eq!(env.evaluate("x = 3").unwrap_err().kind(), ErrorKind::Redeclaration);
    /// assert_eq!(env.evaluate("pi = 3").unwrap_err().kind(), ErrorKind::Redeclaration);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        Self { strict: true,
               ..Self::new() }
    }

    /// Returns `true` if the environment rejects reassignment.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the binding of `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Resolves `name` to a copy of its value.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if `name` is not bound.
    pub fn lookup(&self, name: &str, position: Position) -> EvalResult<Value> {
        self.bindings
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           position })
    }

    /// Binds `name` to the value of `expression`.
    ///
    /// The expression is classified and evaluated exactly like the right-hand
    /// side of `name = expression`. Nothing is bound if it fails.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if `name` is not an identifier.
    /// - `Redeclaration` in a strict environment if `name` is bound.
    /// - Any error from evaluating `expression`.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.assign("v", "[1, 2, 3]").unwrap();
    ///
    /// assert_eq!(env.evaluate("v * 2").unwrap(), Value::from(vec![2.0, 4.0, 6.0]));
    /// assert!(env.assign("2v", "1").is_err());
    /// ```
    pub fn assign(&mut self, name: &str, expression: &str) -> Result<Value, EvalError> {
        let position = Position::at_cursor(1, 0);
        let mut cursor = 0;
        if scan_identifier(name, &mut cursor).is_none() || cursor != name.len() {
            return Err(ParseError::InvalidAssignmentTarget { target: name.to_string(),
                                                             position }.into());
        }

        self.check_redeclaration(name, position)?;
        let value = self.evaluate_expression(expression, position)?;
        self.bindings.insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Evaluates one statement on line 1.
    ///
    /// See [`Environment::evaluate_on_line`].
    pub fn evaluate(&mut self, statement: &str) -> Result<Value, EvalError> {
        self.evaluate_on_line(statement, 1)
    }

    /// Evaluates one statement, reporting positions on `line`.
    ///
    /// Assignments return the value that was bound. Bindings change only
    /// when the whole statement succeeds.
    ///
    /// # Errors
    /// - Any parse error in the statement or its right-hand side.
    /// - `UnknownVariable` for compound assignments, `++` or `--` on an
    ///   unbound name.
    /// - `Redeclaration` for `=` on a bound name in a strict environment.
    /// - Any runtime error from evaluation.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub fn evaluate_on_line(&mut self, statement: &str, line: usize) -> Result<Value, EvalError> {
        match parse_statement(statement, line)? {
            Statement::Expression { text, position } => self.evaluate_expression(&text, position),
            Statement::Assignment { name,
                                    value,
                                    value_position,
                                    position, } => {
                self.check_redeclaration(&name, position)?;
                let value = self.evaluate_expression(&value, value_position)?;
                debug!(%name, %value, "binding");
                self.bindings.insert(name, value.clone());
                Ok(value)
            },
            Statement::CompoundAssignment { name,
                                            op,
                                            value,
                                            value_position,
                                            position, } => {
                let current = self.lookup(&name, position)?;
                let operand = self.evaluate_expression(&value, value_position)?;
                let updated = Self::eval_binary(op, &current, &operand, position)?;
                self.bindings.insert(name, updated.clone());
                Ok(updated)
            },
            Statement::Increment { name, position } => {
                let updated = self.lookup(&name, position)?.incremented();
                self.bindings.insert(name, updated.clone());
                Ok(updated)
            },
            Statement::Decrement { name, position } => {
                let updated = self.lookup(&name, position)?.decremented();
                self.bindings.insert(name, updated.clone());
                Ok(updated)
            },
        }
    }

    /// Replaces every bound name in `text` with the string form of its value.
    ///
    /// Matching is by whole word: a name is only replaced when it is a full
    /// identifier, so `x` does not touch `x2` or `max`, and digits glued to a
    /// name (`2x`) are left alone. Names directly followed by `(` are function
    /// calls and are never replaced. Negative scalars and rationals are
    /// wrapped in parentheses so that the result still parses with the same
    /// meaning.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.evaluate("x = -3").unwrap();
    /// env.evaluate("xs = 4").unwrap();
    ///
    /// assert_eq!(env.substitute_variables("x * xs - sin(x)"), "(-3) * 4 - sin((-3))");
    /// assert_eq!(env.substitute_variables("x2 + y"), "x2 + y");
    /// ```
    #[must_use]
    pub fn substitute_variables(&self, text: &str) -> String {
        let bytes = text.as_bytes();
        let mut output = String::with_capacity(text.len());
        let mut cursor = 0;

        while cursor < bytes.len() {
            let start = cursor;
            if bytes[cursor].is_ascii_digit() || matches!(bytes[cursor], b'.' | b'_') {
                while cursor < bytes.len() && (bytes[cursor].is_ascii_alphanumeric() || matches!(bytes[cursor], b'_' | b'.')) {
                    cursor += 1;
                }
                output.push_str(&text[start..cursor]);
            } else if let Some(name) = scan_identifier(text, &mut cursor) {
                let mut after = cursor;
                skip_whitespace(text, &mut after);
                match self.bindings.get(name) {
                    Some(value) if peek(text, after) != Some(b'(') => {
                        output.push_str(&substitution_text(value));
                    },
                    _ => output.push_str(name),
                }
            } else {
                let character = text[cursor..].chars().next().unwrap_or_default();
                output.push(character);
                cursor += character.len_utf8().max(1);
            }
        }

        output
    }

    fn check_redeclaration(&self, name: &str, position: Position) -> EvalResult<()> {
        if self.strict && self.bindings.contains_key(name) {
            return Err(RuntimeError::Redeclaration { name: name.to_string(),
                                                     position });
        }
        Ok(())
    }
}

fn substitution_text(value: &Value) -> String {
    match value {
        Value::Scalar(s) if s.is_sign_negative() => format!("({s})"),
        Value::Rational(r) => format!("({r})"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn failed_assignment_keeps_old_binding() {
        let mut env = Environment::new();
        env.evaluate("v = [1, 2]").unwrap();

        let err = env.evaluate("v = v + [1, 2, 3]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(env.get("v"), Some(&Value::from(vec![1.0, 2.0])));

        let err = env.evaluate("v /= 0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert_eq!(env.get("v"), Some(&Value::from(vec![1.0, 2.0])));
    }

    #[test]
    fn compound_forms_need_an_existing_binding() {
        let mut env = Environment::new();
        assert_eq!(env.evaluate("n += 1").unwrap_err().kind(), ErrorKind::UnknownVariable);
        assert_eq!(env.evaluate("n++").unwrap_err().kind(), ErrorKind::UnknownVariable);
        assert!(env.get("n").is_none());
    }

    #[test]
    fn compound_forms_update_the_binding() {
        let mut env = Environment::new();
        env.evaluate("n = 10").unwrap();
        env.evaluate("n -= 4").unwrap();
        env.evaluate("n *= 2").unwrap();
        env.evaluate("n %= 5").unwrap();
        env.evaluate("n++").unwrap();
        assert_eq!(env.evaluate("n--").unwrap(), Value::Scalar(2.0));
        assert_eq!(env.get("n"), Some(&Value::Scalar(2.0)));
    }

    #[test]
    fn default_mode_overwrites() {
        let mut env = Environment::new();
        assert!(!env.is_strict());
        env.evaluate("x = 1").unwrap();
        env.evaluate("x = [1]").unwrap();
        assert_eq!(env.get("x"), Some(&Value::from(vec![1.0])));
    }

    #[test]
    fn substitution_of_structured_values() {
        let mut env = Environment::new();
        env.evaluate("v = [1, 2]").unwrap();
        env.evaluate("r = 1/2").unwrap();
        assert_eq!(env.substitute_variables("v + r"), "[1, 2] + (1/2)");
    }

    #[test]
    fn substitution_leaves_unbound_names_and_numbers() {
        let env = Environment::new();
        assert_eq!(env.substitute_variables("2e + e1 + 1.5e"), "2e + e1 + 1.5e");
        assert_eq!(env.substitute_variables("e"), std::f64::consts::E.to_string());
    }

    #[test]
    fn assign_rejects_bad_names() {
        let mut env = Environment::new();
        assert_eq!(env.assign("x y", "1").unwrap_err().kind(), ErrorKind::InvalidAssignmentTarget);
        assert_eq!(env.assign("", "1").unwrap_err().kind(), ErrorKind::InvalidAssignmentTarget);
    }
}
