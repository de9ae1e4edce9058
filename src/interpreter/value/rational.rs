use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_exact, gcd},
};

/// A fraction `numerator / denominator`.
///
/// The denominator is never zero. Fractions are not reduced after
/// arithmetic, so `2/4` and `1/2` are distinct representations; equality
/// cross-multiplies and treats them as equal.
#[derive(Debug, Clone, Copy)]
pub struct Rational {
    numerator:   f64,
    denominator: f64,
}

impl Rational {
    /// Builds a fraction.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denominator` is zero.
    ///
    /// # Example
    /// ```
    /// use calcula::{ast::Position, interpreter::value::rational::Rational};
    ///
    /// let half = Rational::new(1.0, 2.0, Position::default()).unwrap();
    /// assert_eq!(half.to_f64(), 0.5);
    ///
    /// assert!(Rational::new(1.0, 0.0, Position::default()).is_err());
    /// ```
    pub fn new(numerator: f64, denominator: f64, position: Position) -> EvalResult<Self> {
        if denominator == 0.0 {
            return Err(RuntimeError::DivisionByZero { position });
        }
        Ok(Self { numerator,
                  denominator })
    }

    /// Promotes a scalar to `scalar/1`.
    #[must_use]
    pub const fn from_scalar(value: f64) -> Self {
        Self { numerator:   value,
               denominator: 1.0, }
    }

    /// The numerator.
    #[must_use]
    pub const fn numerator(&self) -> f64 {
        self.numerator
    }

    /// The denominator. Never zero.
    #[must_use]
    pub const fn denominator(&self) -> f64 {
        self.denominator
    }

    /// The quotient as a plain number.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.numerator / self.denominator
    }

    /// Negates the numerator.
    #[must_use]
    pub fn negated(self) -> Self {
        Self { numerator:   -self.numerator,
               denominator: self.denominator, }
    }

    /// Adds `delta` whole units, keeping the denominator: `(n + delta*d)/d`.
    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        Self { numerator:   delta.mul_add(self.denominator, self.numerator),
               denominator: self.denominator, }
    }

    /// Returns the fraction in lowest terms with a positive denominator.
    ///
    /// Only fractions whose parts are exactly representable integers are
    /// divided by their gcd; other fractions only get their sign normalized.
    ///
    /// # Example
    /// ```
    /// use calcula::{ast::Position, interpreter::value::rational::Rational};
    ///
    /// let r = Rational::new(6.0, -8.0, Position::default()).unwrap().reduced();
    /// assert_eq!((r.numerator(), r.denominator()), (-3.0, 4.0));
    ///
    /// let r = Rational::new(1.5, 3.0, Position::default()).unwrap().reduced();
    /// assert_eq!((r.numerator(), r.denominator()), (1.5, 3.0));
    /// ```
    #[must_use]
    pub fn reduced(self) -> Self {
        let (numerator, denominator) = if self.denominator < 0.0 {
            (-self.numerator, -self.denominator)
        } else {
            (self.numerator, self.denominator)
        };

        let (Some(n), Some(d)) = (f64_to_i64_exact(numerator), f64_to_i64_exact(denominator)) else {
            return Self { numerator,
                          denominator };
        };

        let Ok(divisor) = i64::try_from(gcd(n.unsigned_abs(), d.unsigned_abs())) else {
            return Self { numerator,
                          denominator };
        };

        // Both quotients are no larger in magnitude than the exact inputs.
        Self { numerator:   exact_f64(n / divisor),
               denominator: exact_f64(d / divisor), }
    }
}

#[allow(clippy::cast_precision_loss)]
const fn exact_f64(value: i64) -> f64 {
    value as f64
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.numerator * other.denominator == other.numerator * self.denominator
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rational(n: f64, d: f64) -> Rational {
        Rational::new(n, d, Position::default()).unwrap()
    }

    #[test]
    fn equality_cross_multiplies() {
        assert_eq!(rational(1.0, 2.0), rational(2.0, 4.0));
        assert_eq!(rational(-1.0, 2.0), rational(1.0, -2.0));
        assert_ne!(rational(1.0, 2.0), rational(1.0, 3.0));
    }

    #[test]
    fn display_is_unreduced() {
        assert_eq!(rational(2.0, 4.0).to_string(), "2/4");
    }

    #[test]
    fn reduce_keeps_zero_numerator_valid() {
        let r = rational(0.0, 5.0).reduced();
        assert_eq!((r.numerator(), r.denominator()), (0.0, 1.0));
    }
}
