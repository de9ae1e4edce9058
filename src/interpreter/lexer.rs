use logos::Logos;

use crate::{ast::Position, error::ParseError};

/// Represents a lexical token in an expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Structural literals (`[1, 2]`, `[[1], [2]]`) are tokenized like any other
/// input; the parser reassembles them from brackets, commas and numbers.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `sin`.
    /// They start with a letter.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `++`
    #[token("++")]
    Increment,
    /// `--`
    #[token("--")]
    Decrement,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `%=`
    #[token("%=")]
    ModAssign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// Spaces and tabs.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
    /// Appended by [`tokenize`] after the last token; never produced by the
    /// lexer itself.
    EndOfInput,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the line the tokens belong to, for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// Overflowing literals parse to infinity; [`tokenize`] rejects them.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Increment => write!(f, "++"),
            Self::Decrement => write!(f, "--"),
            Self::PlusAssign => write!(f, "+="),
            Self::MinusAssign => write!(f, "-="),
            Self::MulAssign => write!(f, "*="),
            Self::DivAssign => write!(f, "/="),
            Self::ModAssign => write!(f, "%="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Equals => write!(f, "="),
            Self::Ignored => Ok(()),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Splits `text` into tokens tagged with their source position.
///
/// Positions are computed relative to `origin`, the position of the first
/// byte of `text` in the surrounding statement. The returned list always ends
/// with [`Token::EndOfInput`], positioned just past the last byte.
///
/// # Errors
/// - `UnexpectedCharacter` for input no token matches.
/// - `LiteralTooLarge` for numeric literals that overflow to infinity.
///
/// # Example
/// ```
/// use calcula::{
///     ast::Position,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("x+ 2", Position::at_cursor(1, 4)).unwrap();
///
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), Position { line: 1, column: 5 }));
/// assert_eq!(tokens[2], (Token::Number(2.0), Position { line: 1, column: 8 }));
/// ```
pub fn tokenize(text: &str, origin: Position) -> Result<Vec<(Token, Position)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(text, LexerExtras { line: origin.line });

    while let Some(token) = lexer.next() {
        let position = Position { line:   lexer.extras.line,
                                  column: origin.column + lexer.span().start, };
        match token {
            Ok(Token::Number(n)) if !n.is_finite() => {
                return Err(ParseError::LiteralTooLarge { position });
            },
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(ParseError::UnexpectedCharacter { character,
                                                             position });
            },
        }
    }

    tokens.push((Token::EndOfInput, origin.offset(text.len())));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kinds(text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = tokenize(text, Position::at_cursor(1, 0)).unwrap()
                                                                          .into_iter()
                                                                          .map(|(token, _)| token)
                                                                          .collect();
        assert_eq!(tokens.pop(), Some(Token::EndOfInput));
        tokens
    }

    #[test]
    fn compound_operators_win_over_single_characters() {
        assert_eq!(kinds("x += 1"),
                   vec![Token::Identifier("x".to_string()), Token::PlusAssign, Token::Number(1.0)]);
        assert_eq!(kinds("x--"), vec![Token::Identifier("x".to_string()), Token::Decrement]);
        assert_eq!(kinds("1 - -2"),
                   vec![Token::Number(1.0), Token::Minus, Token::Minus, Token::Number(2.0)]);
    }

    #[test]
    fn numbers_with_and_without_fraction() {
        assert_eq!(kinds("3 .5 2. 1.25"),
                   vec![Token::Number(3.0), Token::Number(0.5), Token::Number(2.0), Token::Number(1.25)]);
    }

    #[test]
    fn end_marker_sits_past_the_last_byte() {
        let tokens = tokenize("1 +", Position::at_cursor(1, 2)).unwrap();
        assert_eq!(tokens.last(), Some(&(Token::EndOfInput, Position { line: 1, column: 6 })));
    }

    #[test]
    fn unknown_character_reports_its_column() {
        let err = tokenize("1 + $", Position::at_cursor(2, 0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedCharacter);
        assert_eq!(err.position(), Position { line: 2, column: 5 });
    }

    #[test]
    fn identifiers_start_with_a_letter() {
        assert_eq!(kinds("rate_2"), vec![Token::Identifier("rate_2".to_string())]);

        let err = tokenize("_rate", Position::at_cursor(1, 0)).unwrap_err();
        assert_eq!(err, ParseError::UnexpectedCharacter { character: '_',
                                                          position:  Position { line: 1, column: 1 }, });
    }

    #[test]
    fn overflowing_literal_is_rejected() {
        let text = "9".repeat(400);
        let err = tokenize(&text, Position::at_cursor(1, 0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LiteralTooLarge);
    }
}
