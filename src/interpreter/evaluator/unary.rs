use crate::{
    ast::UnaryOperator,
    interpreter::{environment::Environment, value::core::Value},
};

impl Environment {
    /// Evaluates a unary operation on a value.
    ///
    /// `Negate` flips the sign of a scalar, of every element of a vector or
    /// matrix, and of the numerator of a rational. Negation is total, so no
    /// error is possible.
    ///
    /// # Example
    /// ```
    /// use calcula::{
    ///     ast::UnaryOperator,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let v = Environment::eval_unary(UnaryOperator::Negate, &Value::Scalar(5.0));
    /// assert_eq!(v, Value::Scalar(-5.0));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> Value {
        match op {
            UnaryOperator::Negate => value.negated(),
        }
    }
}
