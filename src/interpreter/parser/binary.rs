use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Position},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_HEIGHT, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Nesting depth of the expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_level(tokens, depth, 1, parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `term := factor (("*" | "/" | "%") factor)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_level(tokens, depth, 2, parse_unary)
}

/// Folds operands of one precedence level into a left-leaning tree.
///
/// The tree may not grow taller than [`MAX_HEIGHT`]; the operator that
/// would cross it is reported as `NestingTooDeep`.
fn parse_level<'a, I>(tokens: &mut Peekable<I>,
                      depth: usize,
                      precedence: u8,
                      parse_operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_operand(tokens, depth)?;
    let mut height = left.height();
    if height > MAX_HEIGHT {
        return Err(ParseError::NestingTooDeep { position: left.position() });
    }
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && op.precedence() == precedence
        {
            tokens.next();
            let right = parse_operand(tokens, depth)?;
            height = height.max(right.height()) + 1;
            if height > MAX_HEIGHT {
                return Err(ParseError::NestingTooDeep { position: *position });
            }
            left = Expr::BinaryOp { left:     Box::new(left),
                                    op,
                                    right:    Box::new(right),
                                    position: *position, };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Converts a token to its binary operator.
///
/// Returns `None` for tokens that are not arithmetic operators.
///
/// # Example
/// ```
/// use calcula::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}
