use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        value::{core::Value, matrix::Matrix},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default relative tolerance used for approximate comparisons.
pub const REL_TOLERANCE: f64 = 1e-10;
/// Default absolute tolerance used for approximate comparisons.
pub const ABS_TOLERANCE: f64 = 0.0;

impl Environment {
    /// Evaluates an expression tree and returns the resulting value.
    ///
    /// This is the tree-walking evaluator. Operands of a binary node are
    /// evaluated left to right and combined with
    /// [`Environment::eval_binary`]; the first error aborts the whole
    /// expression.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use calcula::{
    ///     ast::{BinaryOperator, Expr, Position},
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let env = Environment::new();
    /// let pos = Position::default();
    /// let expr = Expr::BinaryOp { left:     Box::new(Expr::VectorLiteral { elements: vec![1.0, 2.0],
    ///                                                                      position: pos, }),
    ///                             op:       BinaryOperator::Mul,
    ///                             right:    Box::new(Expr::Number { value:    3.0,
    ///                                                               position: pos, }),
    ///                             position: pos, };
    ///
    /// assert_eq!(env.eval(&expr).unwrap(), Value::from(vec![3.0, 6.0]));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Scalar(*value)),
            Expr::Variable { name, position } => self.lookup(name, *position),
            Expr::VectorLiteral { elements, .. } => Ok(Value::from(elements.clone())),
            Expr::MatrixLiteral { rows, position } => {
                Matrix::new(rows.clone(), *position).map(Value::Matrix)
            },
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Self::eval_unary(*op, &value))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *position)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 position, } => self.eval_function_call(name, arguments, *position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, Position},
        error::ErrorKind,
    };

    fn num(value: f64) -> Box<Expr> {
        Box::new(Expr::Number { value,
                                position: Position::default() })
    }

    #[test]
    fn variables_resolve_through_the_environment() {
        let env = Environment::new();
        let expr = Expr::Variable { name:     "pi".to_string(),
                                    position: Position::default(), };
        assert_eq!(env.eval(&expr).unwrap(), Value::Scalar(std::f64::consts::PI));
    }

    #[test]
    fn error_in_either_operand_aborts_the_expression() {
        let env = Environment::new();
        let divide = Expr::BinaryOp { left:     num(1.0),
                                      op:       BinaryOperator::Div,
                                      right:    num(0.0),
                                      position: Position::at_cursor(1, 2), };
        let expr = Expr::BinaryOp { left:     num(5.0),
                                    op:       BinaryOperator::Add,
                                    right:    Box::new(divide),
                                    position: Position::default(), };

        let err = env.eval(&expr).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert_eq!(err.position().column, 3);
    }

    #[test]
    fn ragged_matrix_literal_fails_at_construction() {
        let env = Environment::new();
        let expr = Expr::MatrixLiteral { rows:     vec![vec![1.0, 2.0], vec![3.0]],
                                         position: Position::default(), };
        assert_eq!(env.eval(&expr).unwrap_err().kind(), ErrorKind::ShapeMismatch);
    }
}
