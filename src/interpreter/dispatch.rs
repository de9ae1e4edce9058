use tracing::debug;

use crate::{
    ast::Position,
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::rpn::evaluate_numeric,
        parser::{
            core::parse_expression_text,
            literal::{
                parse_matrix, parse_rational, parse_vector, search_function_call, search_matrix,
                search_rational, search_vector,
            },
        },
        scanner::{scan_number, skip_whitespace},
        value::core::Value,
    },
};

/// The shape of an expression text, decided before any parser runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// The whole text is `[[...], ...]`.
    Matrix,
    /// The whole text is `[...]`.
    Vector,
    /// The whole text is `a/b` with two number literals.
    Rational,
    /// The whole text is a single `name(...)`.
    FunctionCall,
    /// Anything with an operator, a bracket, a parenthesis or a name.
    Arithmetic,
    /// The whole text is a single number literal.
    Number,
}

/// Classifies an expression text.
///
/// The checks run in a fixed order and the first match wins:
///
/// 1. matrix literal
/// 2. vector literal
/// 3. rational literal
/// 4. function call
/// 5. arithmetic expression
/// 6. bare number
///
/// Text that matches nothing is classified as arithmetic so the expression
/// parser can report what is wrong with it.
///
/// # Example
/// ```
/// use calcula::interpreter::dispatch::{LiteralKind, classify};
///
/// assert_eq!(classify("[[1,2],[3,4]]"), LiteralKind::Matrix);
/// assert_eq!(classify("[1,2,3]"), LiteralKind::Vector);
/// assert_eq!(classify("3/4"), LiteralKind::Rational);
/// assert_eq!(classify("3/4 + 1"), LiteralKind::Arithmetic);
/// assert_eq!(classify(" 42 "), LiteralKind::Number);
/// ```
#[must_use]
pub fn classify(text: &str) -> LiteralKind {
    if search_matrix(text) {
        LiteralKind::Matrix
    } else if search_vector(text) {
        LiteralKind::Vector
    } else if search_rational(text) {
        LiteralKind::Rational
    } else if search_function_call(text) {
        LiteralKind::FunctionCall
    } else if !looks_arithmetic(text) && search_number(text) {
        LiteralKind::Number
    } else {
        LiteralKind::Arithmetic
    }
}

fn looks_arithmetic(text: &str) -> bool {
    text.bytes()
        .any(|b| matches!(b, b'+' | b'-' | b'*' | b'/' | b'%' | b'(' | b')' | b'[' | b']') || b.is_ascii_alphabetic() || b == b'_')
}

fn search_number(text: &str) -> bool {
    let mut cursor = 0;
    skip_whitespace(text, &mut cursor);
    if scan_number(text, &mut cursor, Position::default()).is_err() {
        return false;
    }
    skip_whitespace(text, &mut cursor);
    cursor == text.len()
}

impl Environment {
    /// Classifies `text` and evaluates it with the matching parser.
    ///
    /// Literals go straight to their structural parsers. Everything else is
    /// parsed into a tree. A tree made only of numbers, variables bound to
    /// finite scalars, negation and binary operators has its variables
    /// substituted into the text and is evaluated through the reverse-Polish
    /// path; any other tree is evaluated directly.
    ///
    /// # Parameters
    /// - `text`: The expression, possibly with surrounding whitespace.
    /// - `origin`: Position of the first byte of `text`.
    ///
    /// # Errors
    /// Any parse or runtime error met on the chosen path.
    ///
    /// # Example
    /// ```
    /// use calcula::{
    ///     ast::Position,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let env = Environment::new();
    /// let origin = Position::at_cursor(1, 0);
    ///
    /// assert_eq!(env.evaluate_expression("1/2", origin).unwrap().to_string(), "1/2");
    /// assert_eq!(env.evaluate_expression("1/2 + 1", origin).unwrap(), Value::Scalar(1.5));
    /// ```
    pub fn evaluate_expression(&self, text: &str, origin: Position) -> Result<Value, EvalError> {
        let kind = classify(text);
        debug!(?kind, text, "classified expression");

        let mut start = 0;
        skip_whitespace(text, &mut start);

        match kind {
            LiteralKind::Matrix => parse_matrix(text, start, origin).map(|(value, _)| value),
            LiteralKind::Vector => parse_vector(text, start, origin).map(|(value, _)| value),
            LiteralKind::Rational => parse_rational(text, start, origin).map(|(value, _)| value),
            LiteralKind::Number => Ok(Value::Scalar(scan_number(text, &mut start, origin)?)),
            LiteralKind::FunctionCall | LiteralKind::Arithmetic => self.evaluate_arithmetic(text, origin),
        }
    }

    fn evaluate_arithmetic(&self, text: &str, origin: Position) -> Result<Value, EvalError> {
        let expr = parse_expression_text(text, origin)?;

        if expr.is_numeric() && self.binds_finite_scalars(&expr) {
            let substituted = self.substitute_variables(text);
            debug!(%substituted, "evaluating on the reverse-Polish path");
            return match evaluate_numeric(&substituted, origin) {
                Ok(value) => Ok(Value::Scalar(value)),
                // Columns in the substituted text are off; the tree reports them
                // where the user typed them.
                Err(numeric) => {
                    debug!(%numeric, "re-evaluating the tree for its error position");
                    Err(self.eval(&expr).err().map_or(numeric, EvalError::from))
                },
            };
        }

        debug!("evaluating expression tree");
        Ok(self.eval(&expr)?)
    }

    fn binds_finite_scalars(&self, expr: &crate::ast::Expr) -> bool {
        let mut names = Vec::new();
        expr.collect_variables(&mut names);
        names.iter()
             .all(|name| self.get(name).and_then(Value::as_scalar).is_some_and(f64::is_finite))
    }
}
