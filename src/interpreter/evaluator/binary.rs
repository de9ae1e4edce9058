/// Binary operator dispatch.
///
/// Routes an operator and a pair of operand values to the handler for that
/// pair of variants.
pub mod core;
/// Matrix arithmetic.
///
/// Matrix product, elementwise matrix operations and row-wise vector
/// broadcasting.
pub mod matrix;
/// Rational arithmetic.
///
/// Fraction arithmetic by cross-multiplication without reduction.
pub mod rational;
/// Scalar arithmetic.
///
/// Number-by-number operations, including the zero checks for `/` and `%`.
pub mod scalar;
/// Vector arithmetic.
///
/// Elementwise vector operations and scalar broadcasting.
pub mod vector;
