use crate::{ast::Position, error::ErrorKind};

/// Represents all errors that can occur during scanning or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A number was expected but no digit was found.
    #[error("Error on {position}: Malformed number.")]
    MalformedNumber {
        /// Where the number should have started.
        position: Position,
    },
    /// A rational literal is missing its `/` separator or one of its parts.
    #[error("Error on {position}: Malformed rational, expected '<number> / <number>'.")]
    MalformedRational {
        /// Where the rational literal starts.
        position: Position,
    },
    /// A `[` was never closed.
    #[error("Error on {position}: Unterminated bracket, expected ']'.")]
    UnterminatedBracket {
        /// Position of the opening bracket.
        position: Position,
    },
    /// A character that does not belong to the language.
    #[error("Error on {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  Position,
    },
    /// Found an unexpected token while parsing.
    #[error("Error on {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of the token encountered.
        token:    String,
        /// Where it was found.
        position: Position,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The end of the statement.
        position: Position,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Position of the opening parenthesis.
        position: Position,
    },
    /// Found extra input after a complete expression.
    #[error("Error on {position}: Extra input after expression: {token}.")]
    UnexpectedTrailingInput {
        /// The first extra token.
        token:    String,
        /// Where it was found.
        position: Position,
    },
    /// The left-hand side of an assignment is not a plain identifier.
    #[error("Error on {position}: Cannot assign to '{target}'.")]
    InvalidAssignmentTarget {
        /// The text found on the left of the assignment operator.
        target:   String,
        /// Where it was found.
        position: Position,
    },
    /// A numeric literal was too large to be represented safely.
    #[error("Error on {position}: Literal is too large.")]
    LiteralTooLarge {
        /// Where the literal was found.
        position: Position,
    },
    /// The expression nests brackets, calls or operators too deeply.
    #[error("Error on {position}: Expression is nested too deeply.")]
    NestingTooDeep {
        /// Where the limit was crossed.
        position: Position,
    },
}

impl ParseError {
    /// Returns the taxonomy entry of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            Self::MalformedRational { .. } => ErrorKind::MalformedRational,
            Self::UnterminatedBracket { .. } => ErrorKind::UnterminatedBracket,
            Self::UnexpectedCharacter { .. } => ErrorKind::UnexpectedCharacter,
            Self::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            Self::UnexpectedEndOfInput { .. } => ErrorKind::UnexpectedEndOfInput,
            Self::ExpectedClosingParen { .. } => ErrorKind::ExpectedClosingParen,
            Self::UnexpectedTrailingInput { .. } => ErrorKind::UnexpectedTrailingInput,
            Self::InvalidAssignmentTarget { .. } => ErrorKind::InvalidAssignmentTarget,
            Self::LiteralTooLarge { .. } => ErrorKind::LiteralTooLarge,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::MalformedNumber { position }
            | Self::MalformedRational { position }
            | Self::UnterminatedBracket { position }
            | Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingInput { position, .. }
            | Self::InvalidAssignmentTarget { position, .. }
            | Self::LiteralTooLarge { position }
            | Self::NestingTooDeep { position } => *position,
        }
    }
}
