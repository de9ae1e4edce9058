use std::iter::Peekable;

use crate::{
    ast::{Expr, Position, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, descend, parse_expression},
            utils::{parse_comma_separated, parse_signed_number},
        },
    },
};

/// Parses a unary expression.
///
/// A leading `-` negates the following factor; several may be stacked.
/// Every call enters one level of nesting, so stacked minus signs and
/// nested parentheses or calls share the same depth limit.
///
/// Grammar:
/// ```text
///     factor := "-" factor
///             | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Number of operands this factor is nested in.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let here = tokens.peek().map_or_else(Position::default, |(_, position)| *position);
    let depth = descend(depth, here)?;

    if let Some((Token::Minus, position)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens, depth)?;
        Ok(Expr::UnaryOp { op:       UnaryOperator::Negate,
                           expr:     Box::new(expr),
                           position: *position, })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
/// - vector literals (`[ ... ]`)
/// - matrix literals (`[[ ... ], ...]`)
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Nesting depth, passed on to grouped expressions and arguments.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let Some((token, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position: Position::default() });
    };
    let position = *position;

    match token {
        Token::Number(value) => Ok(Expr::Number { value: *value,
                                                  position }),
        Token::Identifier(name) => parse_identifier_or_function(tokens, name, position, depth),
        Token::LParen => parse_grouping(tokens, position, depth),
        Token::LBracket => parse_bracket_literal(tokens, position),
        Token::EndOfInput => Err(ParseError::UnexpectedEndOfInput { position }),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 position }),
    }
}

/// Parses a variable reference, or a call if the name is followed by `(`.
///
/// Whether the function exists is not checked here; unknown names are
/// reported by the evaluator.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       name: &str,
                                       position: Position,
                                       depth: usize)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let Some((Token::LParen, paren)) = tokens.peek() else {
        return Ok(Expr::Variable { name: name.to_string(),
                                   position });
    };
    let paren = *paren;
    tokens.next();

    let arguments =
        parse_comma_separated(tokens, |tokens| parse_expression(tokens, depth), &Token::RParen, paren)?;
    Ok(Expr::FunctionCall { name: name.to_string(),
                            arguments,
                            position })
}

/// Parses `( expression )`; `open` is the position of the `(`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: Position, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let expr = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}

/// Parses a vector or matrix literal after its opening `[`.
///
/// A second `[` right after the first selects the matrix grammar; anything
/// else selects the vector grammar. Rows are not checked for equal length
/// here.
fn parse_bracket_literal<'a, I>(tokens: &mut Peekable<I>, open: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some((Token::LBracket, _)) = tokens.peek() {
        let rows = parse_comma_separated(tokens, parse_row, &Token::RBracket, open)?;
        return Ok(Expr::MatrixLiteral { rows,
                                        position: open });
    }

    let elements = parse_comma_separated(tokens, parse_signed_number, &Token::RBracket, open)?;
    Ok(Expr::VectorLiteral { elements,
                             position: open })
}

/// Parses one `[ ... ]` row of a matrix literal.
fn parse_row<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<f64>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.next() {
        Some((Token::LBracket, open)) => {
            parse_comma_separated(tokens, parse_signed_number, &Token::RBracket, *open)
        },
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    format!("expected '[', found '{tok}'"),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
    }
}
