use std::iter::Peekable;

use crate::{
    ast::{Expr, Position},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many operands may nest inside one another through parentheses, call
/// arguments and unary minus.
pub const MAX_DEPTH: usize = 128;
/// Tallest expression tree the parser builds. Long operator chains count
/// towards it as well as nesting.
pub const MAX_HEIGHT: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar:
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/" | "%") factor)*
///     factor     := "-" factor
///                 | number
///                 | identifier
///                 | identifier "(" arguments ")"
///                 | "(" expression ")"
///                 | vector-literal
///                 | matrix-literal
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
/// - `depth`: Number of operands this expression is nested in.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_additive(tokens, depth)
}

/// Enters one more level of nesting.
///
/// # Errors
/// `NestingTooDeep` at `position` once `depth` reaches [`MAX_DEPTH`].
pub(in crate::interpreter::parser) const fn descend(depth: usize,
                                                    position: Position)
                                                    -> ParseResult<usize> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(depth + 1)
}

/// Tokenizes and parses `text` as a single expression.
///
/// The whole text must be consumed; anything left after a complete
/// expression is an error.
///
/// # Parameters
/// - `text`: The expression text.
/// - `origin`: Position of the first byte of `text` in its statement.
///
/// # Errors
/// - Any lexer error.
/// - `UnexpectedTrailingInput` if tokens remain after the expression.
/// - `NestingTooDeep` if the expression nests deeper than [`MAX_DEPTH`] or
///   its tree grows taller than [`MAX_HEIGHT`].
/// - Any other syntax error from the grammar.
///
/// # Example
/// ```
/// use calcula::{
///     ast::{BinaryOperator, Expr, Position},
///     interpreter::parser::core::parse_expression_text,
/// };
///
/// let expr = parse_expression_text("1 + 2 * 3", Position::at_cursor(1, 0)).unwrap();
/// let Expr::BinaryOp { op, .. } = expr else { panic!("expected a binary node") };
/// assert_eq!(op, BinaryOperator::Add);
///
/// assert!(parse_expression_text("1 + 2)", Position::at_cursor(1, 0)).is_err());
/// ```
pub fn parse_expression_text(text: &str, origin: Position) -> ParseResult<Expr> {
    let tokens = tokenize(text, origin)?;
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        Some((Token::EndOfInput, _)) | None => Ok(expr),
        Some((token, position)) => {
            Err(ParseError::UnexpectedTrailingInput { token:    token.to_string(),
                                                      position: *position, })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::UnaryOperator, error::ErrorKind};

    fn parse(text: &str) -> ParseResult<Expr> {
        parse_expression_text(text, Position::at_cursor(1, 0))
    }

    fn render(expr: &Expr) -> String {
        match expr {
            Expr::Number { value, .. } => value.to_string(),
            Expr::Variable { name, .. } => name.clone(),
            Expr::VectorLiteral { elements, .. } => format!("{elements:?}"),
            Expr::MatrixLiteral { rows, .. } => format!("{rows:?}"),
            Expr::UnaryOp { op: UnaryOperator::Negate,
                            expr,
                            .. } => format!("(-{})", render(expr)),
            Expr::BinaryOp { left, op, right, .. } => {
                format!("({} {op} {})", render(left), render(right))
            },
            Expr::FunctionCall { name, arguments, .. } => {
                let args: Vec<String> = arguments.iter().map(render).collect();
                format!("{name}({})", args.join(", "))
            },
        }
    }

    #[test]
    fn precedence_and_left_associativity() {
        assert_eq!(render(&parse("1 + 2 * 3").unwrap()), "(1 + (2 * 3))");
        assert_eq!(render(&parse("8 / 4 / 2").unwrap()), "((8 / 4) / 2)");
        assert_eq!(render(&parse("8 - 4 + 2").unwrap()), "((8 - 4) + 2)");
        assert_eq!(render(&parse("7 % 4 * 2").unwrap()), "((7 % 4) * 2)");
        assert_eq!(render(&parse("(1 + 2) * 3").unwrap()), "((1 + 2) * 3)");
    }

    #[test]
    fn unary_minus_binds_tightest() {
        assert_eq!(render(&parse("-2 * 3").unwrap()), "((-2) * 3)");
        assert_eq!(render(&parse("1 - -x").unwrap()), "(1 - (-x))");
    }

    #[test]
    fn calls_and_literals() {
        assert_eq!(render(&parse("sin(x + 1, [1, -2])").unwrap()), "sin((x + 1), [1.0, -2.0])");
        assert_eq!(render(&parse("[[1, 2], [3, 4]] * 2").unwrap()),
                   "([[1.0, 2.0], [3.0, 4.0]] * 2)");
        assert_eq!(render(&parse("f()").unwrap()), "f()");
    }

    #[test]
    fn trailing_input_is_reported_at_the_extra_token() {
        let err = parse("1 2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedTrailingInput);
        assert_eq!(err.position().column, 3);
    }

    #[test]
    fn structural_errors() {
        assert_eq!(parse("(1 + 2").unwrap_err().kind(), ErrorKind::ExpectedClosingParen);
        assert_eq!(parse("[1, 2").unwrap_err().kind(), ErrorKind::UnterminatedBracket);
        assert_eq!(parse("[1, x]").unwrap_err().kind(), ErrorKind::MalformedNumber);
        assert_eq!(parse("1 +").unwrap_err().kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(parse("").unwrap_err().kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(parse("* 2").unwrap_err().kind(), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn deep_parentheses_are_rejected() {
        let text = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
        assert_eq!(parse(&text).unwrap_err().kind(), ErrorKind::NestingTooDeep);

        let shallow = format!("{}1{}", "(".repeat(50), ")".repeat(50));
        assert_eq!(render(&parse(&shallow).unwrap()), "1");
    }

    #[test]
    fn long_negation_chains_are_rejected() {
        let text = format!("{}1", "- ".repeat(5000));
        let err = parse(&text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NestingTooDeep);
        assert_eq!(err.position().column, 2 * MAX_DEPTH + 1);
    }

    #[test]
    fn nested_calls_are_rejected() {
        let text = format!("{}0{}", "sin(".repeat(1000), ")".repeat(1000));
        assert_eq!(parse(&text).unwrap_err().kind(), ErrorKind::NestingTooDeep);
    }

    #[test]
    fn long_operator_chains_are_bounded() {
        let long = ["1"; 10_000].join(" + ");
        assert_eq!(parse(&long).unwrap_err().kind(), ErrorKind::NestingTooDeep);

        let short = ["1"; 100].join(" + ");
        assert_eq!(parse(&short).unwrap().height(), 100);
    }

    #[test]
    fn positions_point_at_operators() {
        let expr = parse("12 + 3").unwrap();
        assert_eq!(expr.position(), Position { line: 1, column: 4 });
    }
}
