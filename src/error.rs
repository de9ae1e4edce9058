/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing a
/// statement: malformed literals, unbalanced brackets and unexpected
/// characters. Parse errors are detected before any evaluation happens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: shape and
/// type mismatches between operands, division by zero, and failed name
/// resolution.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::ast::Position;

/// The error returned by every public entry point of the interpreter.
///
/// A statement either fails while being parsed or while being evaluated;
/// both phases keep their own error enum and are joined here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// The statement could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The statement parsed but failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The flat taxonomy of failures, independent of their payload.
///
/// Useful for callers that only care about what went wrong, not where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedNumber,
    MalformedRational,
    UnterminatedBracket,
    UnexpectedCharacter,
    UnexpectedToken,
    UnexpectedEndOfInput,
    ExpectedClosingParen,
    UnexpectedTrailingInput,
    InvalidAssignmentTarget,
    ShapeMismatch,
    IncompatibleTypes,
    DivisionByZero,
    ModuloByZero,
    UnknownVariable,
    UnknownFunction,
    ArityMismatch,
    UnsupportedOperand,
    Redeclaration,
    LiteralTooLarge,
    NestingTooDeep,
}

impl EvalError {
    /// Returns the taxonomy entry of the error.
    ///
    /// ## Example
    /// ```
    /// use calcula::{
    ///     error::{ErrorKind, EvalError, RuntimeError},
    ///     ast::Position,
    /// };
    ///
    /// let err = EvalError::from(RuntimeError::DivisionByZero { position: Position::default() });
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl std::str::FromStr for ErrorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "MalformedNumber" => Self::MalformedNumber,
            "MalformedRational" => Self::MalformedRational,
            "UnterminatedBracket" => Self::UnterminatedBracket,
            "UnexpectedCharacter" => Self::UnexpectedCharacter,
            "UnexpectedToken" => Self::UnexpectedToken,
            "UnexpectedEndOfInput" => Self::UnexpectedEndOfInput,
            "ExpectedClosingParen" => Self::ExpectedClosingParen,
            "UnexpectedTrailingInput" => Self::UnexpectedTrailingInput,
            "InvalidAssignmentTarget" => Self::InvalidAssignmentTarget,
            "ShapeMismatch" => Self::ShapeMismatch,
            "IncompatibleTypes" => Self::IncompatibleTypes,
            "DivisionByZero" => Self::DivisionByZero,
            "ModuloByZero" => Self::ModuloByZero,
            "UnknownVariable" => Self::UnknownVariable,
            "UnknownFunction" => Self::UnknownFunction,
            "ArityMismatch" => Self::ArityMismatch,
            "UnsupportedOperand" => Self::UnsupportedOperand,
            "Redeclaration" => Self::Redeclaration,
            "LiteralTooLarge" => Self::LiteralTooLarge,
            "NestingTooDeep" => Self::NestingTooDeep,
            other => return Err(format!("unknown error kind '{other}'")),
        };
        Ok(kind)
    }
}
