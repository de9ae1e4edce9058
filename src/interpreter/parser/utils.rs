use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by vector literals, matrix rows and function
/// argument lists. It repeatedly calls `parse_item` to parse one element,
/// expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (`]` or `)`).
/// - `opener`: Position of the opening bracket, reported if the list is
///   never closed.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the input ends before the closing token (`UnterminatedBracket` for `]`,
///   `ExpectedClosingParen` for `)`).
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    opener: Position)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        if matches!(tokens.peek(), Some((Token::EndOfInput, _)) | None) {
            return Err(unclosed(closing, opener));
        }
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((Token::EndOfInput, _)) | None => return Err(unclosed(closing, opener)),
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("expected ',' or '{closing}', found '{tok}'"),
                                                         position: *position, });
            },
        }
    }
    Ok(items)
}

/// The error for a list whose closing token never came.
pub(in crate::interpreter::parser) fn unclosed(closing: &Token, opener: Position) -> ParseError {
    match closing {
        Token::RBracket => ParseError::UnterminatedBracket { position: opener },
        _ => ParseError::ExpectedClosingParen { position: opener },
    }
}

/// Parses a number with an optional leading `-`.
///
/// Used for the elements of bracketed literals, which only hold numbers.
///
/// # Errors
/// Returns `MalformedNumber` at the offending token.
pub(in crate::interpreter::parser) fn parse_signed_number<'a, I>(tokens: &mut Peekable<I>)
                                                                 -> ParseResult<f64>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let negative = matches!(tokens.peek(), Some((Token::Minus, _)));
    if negative {
        tokens.next();
    }

    match tokens.peek() {
        Some((Token::Number(n), _)) => {
            let n = *n;
            tokens.next();
            Ok(if negative { -n } else { n })
        },
        Some((_, position)) => Err(ParseError::MalformedNumber { position: *position }),
        None => Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
    }
}
