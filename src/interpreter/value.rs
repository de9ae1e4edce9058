/// The runtime value type.
///
/// Defines the `Value` enum with its four variants, stringification,
/// structural equality and the unary helpers shared by the evaluator.
pub mod core;
/// Rectangular matrices.
///
/// Defines the `Matrix` type, which guarantees at construction time that all
/// rows have the same length.
pub mod matrix;
/// Unreduced fractions.
///
/// Defines the `Rational` type, a numerator/denominator pair whose
/// denominator is never zero. Values are only reduced on request.
pub mod rational;
