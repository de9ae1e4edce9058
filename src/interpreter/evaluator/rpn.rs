use tracing::trace;

use crate::{
    ast::{BinaryOperator, Position},
    error::{EvalError, ParseError, RuntimeError},
    interpreter::{
        evaluator::binary::scalar::eval_scalar_op,
        lexer::{Token, tokenize},
        parser::binary::token_to_binary_operator,
    },
};

/// One instruction of a reverse-Polish program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RpnItem {
    /// Push a number.
    Number(f64),
    /// Pop one number and push its negation.
    Negate,
    /// Pop two numbers and push the result of the operator.
    Binary(BinaryOperator),
}

/// Entries of the operator stack used while converting.
#[derive(Clone, Copy)]
enum Pending {
    Negate,
    Binary(BinaryOperator),
    Open,
}

impl Pending {
    /// Negation binds tighter than every binary operator.
    const fn precedence(self) -> u8 {
        match self {
            Self::Negate => 3,
            Self::Binary(op) => op.precedence(),
            Self::Open => 0,
        }
    }

    const fn into_item(self) -> Option<RpnItem> {
        match self {
            Self::Negate => Some(RpnItem::Negate),
            Self::Binary(op) => Some(RpnItem::Binary(op)),
            Self::Open => None,
        }
    }
}

/// Converts an infix token stream to reverse-Polish form with the
/// shunting-yard algorithm.
///
/// Only numbers, `+ - * / %`, unary `-` and parentheses are accepted.
/// Operators of equal precedence are resolved strictly left to right: the
/// incoming operator pops every stacked operator whose precedence is greater
/// or equal. A `-` is unary when it starts the input or follows an operator
/// or `(`.
///
/// # Errors
/// - `UnknownVariable` for an identifier left in the input.
/// - `ExpectedClosingParen` for an unclosed `(`.
/// - `UnexpectedToken` for an unmatched `)` or any token outside the
///   numeric subset.
///
/// # Example
/// ```
/// use calcula::{
///     ast::{BinaryOperator, Position},
///     interpreter::{
///         evaluator::rpn::{RpnItem, to_rpn},
///         lexer::tokenize,
///     },
/// };
///
/// let tokens = tokenize("1 - 2 + 3", Position::at_cursor(1, 0)).unwrap();
/// let program: Vec<RpnItem> = to_rpn(&tokens).unwrap().into_iter().map(|(item, _)| item).collect();
///
/// assert_eq!(program,
///            vec![RpnItem::Number(1.0),
///                 RpnItem::Number(2.0),
///                 RpnItem::Binary(BinaryOperator::Sub),
///                 RpnItem::Number(3.0),
///                 RpnItem::Binary(BinaryOperator::Add)]);
/// ```
pub fn to_rpn(tokens: &[(Token, Position)]) -> Result<Vec<(RpnItem, Position)>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<(Pending, Position)> = Vec::new();
    let mut expect_operand = true;

    for (token, position) in tokens {
        let position = *position;
        match token {
            Token::Number(n) => {
                output.push((RpnItem::Number(*n), position));
                expect_operand = false;
            },
            Token::Minus if expect_operand => stack.push((Pending::Negate, position)),
            Token::LParen => {
                stack.push((Pending::Open, position));
                expect_operand = true;
            },
            Token::RParen => {
                loop {
                    match stack.pop() {
                        Some((Pending::Open, _)) => break,
                        Some((pending, at)) => {
                            if let Some(item) = pending.into_item() {
                                output.push((item, at));
                            }
                        },
                        None => {
                            return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                                     position }.into());
                        },
                    }
                }
                expect_operand = false;
            },
            Token::Identifier(name) => {
                return Err(RuntimeError::UnknownVariable { name: name.clone(),
                                                           position }.into());
            },
            Token::EndOfInput => break,
            _ => {
                let Some(op) = token_to_binary_operator(token) else {
                    return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                             position }.into());
                };
                let incoming = Pending::Binary(op);
                while let Some((top, at)) = stack.last().copied()
                      && !matches!(top, Pending::Open)
                      && top.precedence() >= incoming.precedence()
                {
                    stack.pop();
                    if let Some(item) = top.into_item() {
                        output.push((item, at));
                    }
                }
                stack.push((incoming, position));
                expect_operand = true;
            },
        }
    }

    while let Some((pending, at)) = stack.pop() {
        match pending.into_item() {
            Some(item) => output.push((item, at)),
            None => return Err(ParseError::ExpectedClosingParen { position: at }.into()),
        }
    }

    trace!(?output, "reverse-Polish program");
    Ok(output)
}

/// Runs a reverse-Polish program on a value stack.
///
/// # Errors
/// - `DivisionByZero` / `ModuloByZero` from any operator.
/// - `UnexpectedEndOfInput` if an operator finds too few operands, and
///   `UnexpectedTrailingInput` if more than one value is left.
pub fn eval_rpn(program: &[(RpnItem, Position)], end: Position) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(program.len());
    let missing = |position| ParseError::UnexpectedEndOfInput { position };

    for (item, position) in program {
        match item {
            RpnItem::Number(n) => stack.push(*n),
            RpnItem::Negate => {
                let value = stack.pop().ok_or_else(|| missing(end))?;
                stack.push(-value);
            },
            RpnItem::Binary(op) => {
                let right = stack.pop().ok_or_else(|| missing(end))?;
                let left = stack.pop().ok_or_else(|| missing(*position))?;
                stack.push(eval_scalar_op(*op, left, right, *position)?);
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(missing(end).into()),
        [.., extra] => Err(ParseError::UnexpectedTrailingInput { token:    extra.to_string(),
                                                                 position: end, }.into()),
    }
}

/// Evaluates a purely numeric expression through the reverse-Polish path.
///
/// # Example
/// ```
/// use calcula::{ast::Position, interpreter::evaluator::rpn::evaluate_numeric};
///
/// let value = evaluate_numeric("2 * (3 + 4) - -1", Position::at_cursor(1, 0)).unwrap();
/// assert_eq!(value, 15.0);
/// ```
pub fn evaluate_numeric(text: &str, origin: Position) -> Result<f64, EvalError> {
    let tokens = tokenize(text, origin)?;
    let program = to_rpn(&tokens)?;
    eval_rpn(&program, origin.offset(text.len()))
}
