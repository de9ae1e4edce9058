use std::rc::Rc;

use crate::{
    interpreter::value::{
        matrix::{Matrix, write_row},
        rational::Rational,
    },
    util::num::is_close,
};

/// Represents a runtime value in the interpreter.
///
/// The four variants form a closed set; every operator and builtin function
/// matches on them exhaustively. Values are immutable: operators build new
/// values instead of changing their operands, and the reference-counted
/// payloads make clones cheap when a binding is read.
#[derive(Debug, Clone)]
pub enum Value {
    /// A single real number.
    Scalar(f64),
    /// A fixed-length sequence of numbers.
    Vector(Rc<Vec<f64>>),
    /// A rectangular grid of numbers.
    Matrix(Matrix),
    /// An unreduced fraction.
    Rational(Rational),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(Rc::new(v))
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl Value {
    /// A short name for the variant, used in error messages.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Scalar(1.0).kind_name(), "scalar");
    /// assert_eq!(Value::from(vec![1.0, 2.0]).kind_name(), "vector");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Vector(_) => "vector",
            Self::Matrix(_) => "matrix",
            Self::Rational(_) => "rational",
        }
    }

    /// Returns the number held by a `Scalar`, or `None` for other variants.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Scalar(2.5).as_scalar(), Some(2.5));
    /// assert_eq!(Value::from(vec![2.5]).as_scalar(), None);
    /// ```
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    /// Applies `f` to every number of a scalar, vector or matrix.
    ///
    /// Rationals are first collapsed to their quotient, so the result of
    /// mapping a rational is a scalar.
    #[must_use]
    pub fn map_elements<F>(&self, f: F) -> Self
        where F: Fn(f64) -> f64
    {
        match self {
            Self::Scalar(s) => Self::Scalar(f(*s)),
            Self::Vector(v) => v.iter().copied().map(f).collect::<Vec<_>>().into(),
            Self::Matrix(m) => Self::Matrix(m.map(f)),
            Self::Rational(r) => Self::Scalar(f(r.to_f64())),
        }
    }

    /// Arithmetic negation. Elementwise for vectors and matrices; negates the
    /// numerator of a rational.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(vec![1.0, -2.0]).negated(), Value::from(vec![-1.0, 2.0]));
    /// ```
    #[must_use]
    pub fn negated(&self) -> Self {
        match self {
            Self::Rational(r) => Self::Rational(r.negated()),
            other => other.map_elements(|x| -x),
        }
    }

    /// Returns `self + 1`. For a rational the denominator is added to the
    /// numerator, keeping the denominator as is.
    #[must_use]
    pub fn incremented(&self) -> Self {
        self.step(1.0)
    }

    /// Returns `self - 1`. See [`Value::incremented`].
    #[must_use]
    pub fn decremented(&self) -> Self {
        self.step(-1.0)
    }

    fn step(&self, delta: f64) -> Self {
        match self {
            Self::Rational(r) => Self::Rational(r.shifted(delta)),
            other => other.map_elements(|x| x + delta),
        }
    }

    /// Compares two values within tolerances.
    ///
    /// Variants must match; vectors and matrices must have the same shape and
    /// every pair of elements must be close. Rationals compare their
    /// quotients.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::value::core::Value;
    ///
    /// let a = Value::Scalar(0.1 + 0.2);
    /// assert!(a.approx_eq(&Value::Scalar(0.3), 0.0, 1e-10));
    /// assert!(!a.approx_eq(&Value::from(vec![0.3]), 0.0, 1e-10));
    /// ```
    #[must_use]
    pub fn approx_eq(&self, other: &Self, abs_tol: f64, rel_tol: f64) -> bool {
        let close = |a: &[f64], b: &[f64]| {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| is_close(*x, *y, abs_tol, rel_tol))
        };

        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => is_close(*a, *b, abs_tol, rel_tol),
            (Self::Vector(a), Self::Vector(b)) => close(a, b),
            (Self::Matrix(a), Self::Matrix(b)) => {
                a.row_count() == b.row_count()
                && a.column_count() == b.column_count()
                && a.rows().iter().zip(b.rows()).all(|(x, y)| close(x, y))
            },
            (Self::Rational(a), Self::Rational(b)) => {
                is_close(a.to_f64(), b.to_f64(), abs_tol, rel_tol)
            },
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Vector(a), Self::Vector(b)) => a == b,
            (Self::Matrix(a), Self::Matrix(b)) => a.rows() == b.rows(),
            (Self::Rational(a), Self::Rational(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Vector(v) => write_row(f, v),
            Self::Matrix(m) => write!(f, "{m}"),
            Self::Rational(r) => write!(f, "{r}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Position;

    fn matrix(rows: &[&[f64]]) -> Value {
        let rows = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::new(rows, Position::default()).unwrap().into()
    }

    #[test]
    fn stringification() {
        assert_eq!(Value::Scalar(8.0).to_string(), "8");
        assert_eq!(Value::Scalar(-0.25).to_string(), "-0.25");
        assert_eq!(Value::from(vec![1.0, 2.5, 3.0]).to_string(), "[1, 2.5, 3]");
        assert_eq!(Value::from(Vec::<f64>::new()).to_string(), "[]");
        assert_eq!(matrix(&[&[1.0, 2.0], &[3.0, 4.0]]).to_string(), "[[1, 2], [3, 4]]");
        assert_eq!(Value::from(Rational::from_scalar(3.0)).to_string(), "3/1");
    }

    #[test]
    fn increment_and_decrement() {
        assert_eq!(Value::Scalar(1.0).incremented(), Value::Scalar(2.0));
        assert_eq!(matrix(&[&[1.0], &[2.0]]).decremented(), matrix(&[&[0.0], &[1.0]]));

        let third = Rational::new(1.0, 3.0, Position::default()).unwrap();
        let incremented = Value::from(third).incremented();
        assert_eq!(incremented.to_string(), "4/3");
    }

    #[test]
    fn negation_keeps_rational_denominator() {
        let r = Value::from(Rational::new(2.0, 5.0, Position::default()).unwrap());
        assert_eq!(r.negated().to_string(), "-2/5");
    }

    #[test]
    fn variants_never_compare_equal() {
        assert_ne!(Value::Scalar(1.0), Value::from(vec![1.0]));
        assert_ne!(Value::Scalar(1.0), Value::from(Rational::from_scalar(1.0)));
    }
}
