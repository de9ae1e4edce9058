//! # calcula
//!
//! calcula is a small interpreter for arithmetic over scalars, vectors,
//! matrices and rationals written in Rust. It classifies each statement,
//! parses it with the matching parser and evaluates `+ - * / %` across every
//! pairing of value kinds with the usual shape rules.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of a statement as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Defines the binary operators and their precedence.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a statement. Every error carries the position it was raised
/// at and maps to a flat `ErrorKind`.
///
/// # Responsibilities
/// - Defines error enums for both phases (parser, evaluator).
/// - Attaches line and column numbers to every message.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of statement execution.
///
/// This module ties together scanning, lexing, parsing, dispatch, evaluation
/// and the value representations to provide a complete runtime for
/// expression evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parsers, evaluators and value
///   types.
/// - Holds the environment that statements are evaluated in.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// # Responsibilities
/// - Convert between `f64` and `i64` without silent data loss.
/// - Provide the tolerance comparison and gcd used by the value model.
pub mod util;

/// Evaluates a single statement in `env`.
///
/// The statement may be an assignment (`x = ...`, `x += ...`, `x++`, ...)
/// or a bare expression. Assignments return the value that was bound.
///
/// # Errors
/// Returns an error if parsing or evaluation fails. The environment is left
/// unchanged in that case.
///
/// # Examples
/// ```
/// use calcula::{
///     error::ErrorKind,
///     interpreter::{environment::Environment, value::core::Value},
///     parse_and_evaluate,
/// };
///
/// let mut env = Environment::new();
///
/// let value = parse_and_evaluate("[1, 2, 3] * 2", &mut env).unwrap();
/// assert_eq!(value, Value::from(vec![2.0, 4.0, 6.0]));
///
/// let err = parse_and_evaluate("undefined_var + 1", &mut env).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnknownVariable);
/// ```
pub fn parse_and_evaluate(statement: &str, env: &mut Environment) -> Result<Value, EvalError> {
    env.evaluate(statement)
}

/// Evaluates a multi-line source, one statement per line.
///
/// Blank lines and lines starting with `//` are skipped. Evaluation stops at
/// the first error, whose position names the offending line.
///
/// # Returns
/// The value of the last statement, or `None` if the source holds no
/// statements.
///
/// # Examples
/// ```
/// use calcula::{interpreter::environment::Environment, run_script};
///
/// let source = "// running total
/// total = 1
///
/// total += 2
/// total * 10";
///
/// let mut env = Environment::new();
/// let last = run_script(source, &mut env).unwrap().unwrap();
/// assert_eq!(last.to_string(), "30");
///
/// let err = run_script("a = 1\nb = a / 0", &mut env).unwrap_err();
/// assert_eq!(err.position().line, 2);
/// ```
pub fn run_script(source: &str, env: &mut Environment) -> Result<Option<Value>, EvalError> {
    let mut result = None;

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        result = Some(env.evaluate_on_line(line, index + 1)?);
    }

    Ok(result)
}
