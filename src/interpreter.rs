/// The dispatch module classifies expression text and picks an evaluation
/// path.
///
/// Structural literals (matrices, vectors, rationals) go to their scanners,
/// everything else is parsed into a tree. Purely numeric trees are evaluated
/// through the reverse-Polish evaluator after variable substitution.
pub mod dispatch;
/// The environment module holds the variable bindings of a session.
///
/// It owns the name-to-value table and runs statements: assignments,
/// compound assignments, increments and bare expressions.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, resolves variables, dispatches every
/// binary operator on the runtime kinds of its operands and calls builtin
/// functions. It also carries the reverse-Polish evaluator used for purely
/// numeric expressions.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Applies the shape rules of vector and matrix arithmetic.
/// - Reports runtime errors such as division by zero or shape mismatches.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer reads the raw text and produces a stream of tokens, each
/// corresponding to a number, identifier, operator or delimiter, and ends it
/// with an end-of-input marker.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Reports lexical errors for invalid or oversized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// It holds the precedence-climbing expression parser, the statement
/// recognizer and the structural literal parsers that work directly on text.
///
/// # Responsibilities
/// - Converts tokens into expression trees.
/// - Parses vector, matrix and rational literals with their own scanners.
/// - Validates syntax, reporting errors with location info.
pub mod parser;
/// Cursor-based scanners shared by the literal parsers and the dispatch
/// layer.
pub mod scanner;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum over scalars, vectors, matrices and rationals.
/// - Provides rendering, negation and tolerance comparison of values.
pub mod value;
