use crate::{
    ast::{BinaryOperator, Position},
    error::ErrorKind,
};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Operand shapes do not fit: vectors of different lengths, ragged matrix
    /// rows or non-conformable matrix products.
    #[error("Error on {position}: Shape mismatch: {details}.")]
    ShapeMismatch {
        /// Details about the shapes involved.
        details:  String,
        /// Where the operation was requested.
        position: Position,
    },
    /// No rule exists for the operator and the pair of operand kinds.
    #[error("Error on {position}: Cannot apply '{op}' to {left} and {right}.")]
    IncompatibleTypes {
        /// The operator.
        op:       BinaryOperator,
        /// Kind of the left operand.
        left:     &'static str,
        /// Kind of the right operand.
        right:    &'static str,
        /// Where the operation was requested.
        position: Position,
    },
    /// Attempted division by zero.
    #[error("Error on {position}: Division by zero.")]
    DivisionByZero {
        /// Where the division was requested.
        position: Position,
    },
    /// Attempted modulo by zero.
    #[error("Error on {position}: Modulo by zero.")]
    ModuloByZero {
        /// Where the modulo was requested.
        position: Position,
    },
    /// Tried to use an undefined variable.
    #[error("Error on {position}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Where it was referenced.
        position: Position,
    },
    /// Called an unknown function.
    #[error("Error on {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Where it was called.
        position: Position,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on {position}: '{name}' expects {expected} argument(s), found {found}.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of parameters the function takes.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// Where it was called.
        position: Position,
    },
    /// A function received an operand kind it does not handle.
    #[error("Error on {position}: '{name}' does not accept a {operand}.")]
    UnsupportedOperand {
        /// The name of the function.
        name:     String,
        /// Kind of the rejected operand.
        operand:  &'static str,
        /// Where it was called.
        position: Position,
    },
    /// Tried to rebind an existing name in strict mode.
    #[error("Error on {position}: '{name}' is already defined.")]
    Redeclaration {
        /// The name of the variable.
        name:     String,
        /// Where the assignment happened.
        position: Position,
    },
}

impl RuntimeError {
    /// Returns the taxonomy entry of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            Self::IncompatibleTypes { .. } => ErrorKind::IncompatibleTypes,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::ModuloByZero { .. } => ErrorKind::ModuloByZero,
            Self::UnknownVariable { .. } => ErrorKind::UnknownVariable,
            Self::UnknownFunction { .. } => ErrorKind::UnknownFunction,
            Self::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            Self::UnsupportedOperand { .. } => ErrorKind::UnsupportedOperand,
            Self::Redeclaration { .. } => ErrorKind::Redeclaration,
        }
    }

    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::ShapeMismatch { position, .. }
            | Self::IncompatibleTypes { position, .. }
            | Self::DivisionByZero { position }
            | Self::ModuloByZero { position }
            | Self::UnknownVariable { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::ArityMismatch { position, .. }
            | Self::UnsupportedOperand { position, .. }
            | Self::Redeclaration { position, .. } => *position,
        }
    }
}
