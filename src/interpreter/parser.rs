/// Parser entry points.
///
/// Contains the result type shared by the parser and the functions that turn
/// a complete expression text into a tree.
pub mod core;

/// Unary operators and primary expressions.
///
/// Handles negation, numbers, identifiers, function calls, parenthesized
/// groups and bracketed literals.
pub mod unary;

/// Binary operator precedence levels.
///
/// Implements the additive and multiplicative levels of the grammar.
pub mod binary;

/// Helpers shared by the token parser.
pub mod utils;

/// Structural literal parsers.
///
/// Cursor-based parsers for vector, matrix and rational literals, and the
/// trial-parse searches the dispatch layer classifies input with.
pub mod literal;

/// Statement parsing.
///
/// Splits a statement line into assignment target, operator and right-hand
/// side text.
pub mod statement;
