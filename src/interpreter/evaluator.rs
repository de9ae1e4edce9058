/// Binary operator evaluation logic.
///
/// Handles `+ - * / %` for every pairing of value variants, including
/// broadcasting, the matrix product and fraction arithmetic.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree-walking evaluator, the result type shared by every
/// evaluation routine and the default comparison tolerances.
pub mod core;

/// Function evaluation.
///
/// Holds the builtin function table, argument checking and the builtin
/// implementations.
pub mod function;

/// Reverse-Polish evaluation.
///
/// Converts purely numeric token streams to postfix form with the
/// shunting-yard algorithm and evaluates the result with a value stack.
pub mod rpn;
