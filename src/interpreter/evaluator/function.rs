/// Elementwise math builtins and rational helpers.
///
/// Contains `sin`, `cos`, `create_rat` and `reduce`.
pub mod builtin;

/// Builtin table, arity checking and call dispatch.
pub mod core;

/// The `transpose` function implementation.
///
/// Swaps the rows and columns of a matrix.
pub mod transpose;
