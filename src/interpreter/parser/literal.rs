use crate::{
    ast::Position,
    error::{EvalError, ParseError},
    interpreter::{
        parser::core::ParseResult,
        scanner::{
            consume, find_matching, is_matrix_opener, is_vector_opener, peek, scan_identifier,
            scan_number, scan_signed_number, skip_whitespace,
        },
        value::{core::Value, matrix::Matrix, rational::Rational},
    },
};

/// Scans a vector literal `[a, b, ...]` starting at `cursor`.
///
/// Elements are numbers with an optional leading `-`; nested expressions are
/// not part of the literal grammar. `[]` is the empty vector.
///
/// # Parameters
/// - `text`: The input.
/// - `cursor`: Byte offset of the `[`; advanced past the `]` on success.
/// - `origin`: Position of the first byte of `text`.
///
/// # Errors
/// - `UnterminatedBracket` at the `[` if the input ends before `]`.
/// - `MalformedNumber` for an element that is not a number.
/// - `UnexpectedCharacter` for anything but `,` or `]` after an element.
///
/// # Example
/// ```
/// use calcula::{ast::Position, interpreter::parser::literal::scan_vector};
///
/// let mut cursor = 0;
/// let elements = scan_vector("[1, -2.5, 3] * 2", &mut cursor, Position::at_cursor(1, 0)).unwrap();
///
/// assert_eq!(elements, vec![1.0, -2.5, 3.0]);
/// assert_eq!(cursor, 12);
/// ```
pub fn scan_vector(text: &str, cursor: &mut usize, origin: Position) -> ParseResult<Vec<f64>> {
    let open = *cursor;
    expect_open_bracket(text, cursor, origin)?;

    let mut elements = Vec::new();
    skip_whitespace(text, cursor);
    if consume(text, cursor, b']') {
        return Ok(elements);
    }

    loop {
        skip_whitespace(text, cursor);
        if *cursor >= text.len() {
            return Err(ParseError::UnterminatedBracket { position: origin.offset(open) });
        }
        elements.push(scan_signed_number(text, cursor, origin)?);
        skip_whitespace(text, cursor);

        if !list_continues(text, cursor, open, origin)? {
            return Ok(elements);
        }
    }
}

/// Scans a matrix literal `[[a, b], [c, d], ...]` starting at `cursor`.
///
/// Every row must scan as a vector literal. Row lengths are not compared
/// here; that happens when the [`Matrix`] is built.
///
/// # Errors
/// - `UnterminatedBracket` if the outer `[` is never closed.
/// - `UnexpectedCharacter` where a row should start.
/// - Any error from scanning a row.
///
/// # Example
/// ```
/// use calcula::{ast::Position, interpreter::parser::literal::scan_matrix};
///
/// let mut cursor = 0;
/// let rows = scan_matrix("[[1, 2], [3]]", &mut cursor, Position::at_cursor(1, 0)).unwrap();
///
/// assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0]]);
/// ```
pub fn scan_matrix(text: &str, cursor: &mut usize, origin: Position) -> ParseResult<Vec<Vec<f64>>> {
    let open = *cursor;
    expect_open_bracket(text, cursor, origin)?;

    let mut rows = Vec::new();
    loop {
        skip_whitespace(text, cursor);
        match peek(text, *cursor) {
            None => return Err(ParseError::UnterminatedBracket { position: origin.offset(open) }),
            Some(b'[') => rows.push(scan_vector(text, cursor, origin)?),
            Some(_) => return Err(unexpected_character(text, *cursor, origin)),
        }
        skip_whitespace(text, cursor);

        if !list_continues(text, cursor, open, origin)? {
            return Ok(rows);
        }
    }
}

/// Scans a rational literal `<number> / <number>` starting at `cursor`.
///
/// Both parts are unsigned numbers; whitespace is allowed around the `/`.
///
/// # Errors
/// - `MalformedNumber` if the numerator is missing.
/// - `MalformedRational` if the `/` or the denominator is missing.
///
/// # Example
/// ```
/// use calcula::{ast::Position, interpreter::parser::literal::scan_rational};
///
/// let mut cursor = 0;
/// assert_eq!(scan_rational("3 / 4", &mut cursor, Position::at_cursor(1, 0)).unwrap(), (3.0, 4.0));
///
/// let mut cursor = 0;
/// assert!(scan_rational("3 4", &mut cursor, Position::at_cursor(1, 0)).is_err());
/// ```
pub fn scan_rational(text: &str, cursor: &mut usize, origin: Position) -> ParseResult<(f64, f64)> {
    skip_whitespace(text, cursor);
    let start = *cursor;
    let malformed = ParseError::MalformedRational { position: origin.offset(start) };

    let numerator = scan_number(text, cursor, origin)?;
    skip_whitespace(text, cursor);
    if !consume(text, cursor, b'/') {
        return Err(malformed);
    }
    skip_whitespace(text, cursor);
    let denominator = scan_number(text, cursor, origin).map_err(|_| malformed)?;

    Ok((numerator, denominator))
}

/// Parses a vector literal into a value.
///
/// # Returns
/// The vector and the cursor just past its `]`.
pub fn parse_vector(text: &str, cursor: usize, origin: Position) -> Result<(Value, usize), EvalError> {
    let mut end = cursor;
    let elements = scan_vector(text, &mut end, origin)?;
    Ok((Value::from(elements), end))
}

/// Parses a matrix literal into a value.
///
/// # Errors
/// Besides scanning errors, returns `ShapeMismatch` if the rows differ in
/// length.
///
/// # Example
/// ```
/// use calcula::{ast::Position, interpreter::parser::literal::parse_matrix};
///
/// let origin = Position::at_cursor(1, 0);
/// let (value, end) = parse_matrix("[[1, 2], [3, 4]]", 0, origin).unwrap();
/// assert_eq!(value.to_string(), "[[1, 2], [3, 4]]");
/// assert_eq!(end, 16);
///
/// assert!(parse_matrix("[[1, 2], [3]]", 0, origin).is_err());
/// ```
pub fn parse_matrix(text: &str, cursor: usize, origin: Position) -> Result<(Value, usize), EvalError> {
    let mut end = cursor;
    let rows = scan_matrix(text, &mut end, origin)?;
    let matrix = Matrix::new(rows, origin.offset(cursor))?;
    Ok((Value::Matrix(matrix), end))
}

/// Parses a rational literal into a value.
///
/// # Errors
/// Besides scanning errors, returns `DivisionByZero` for a zero denominator.
pub fn parse_rational(text: &str, cursor: usize, origin: Position) -> Result<(Value, usize), EvalError> {
    let mut end = cursor;
    let (numerator, denominator) = scan_rational(text, &mut end, origin)?;
    let rational = Rational::new(numerator, denominator, origin.offset(cursor))?;
    Ok((Value::Rational(rational), end))
}

/// Returns `true` if the whole of `text` is a vector literal.
///
/// Leading and trailing whitespace is ignored. `[[` never matches, so a
/// matrix literal is never mistaken for a vector.
///
/// # Example
/// ```
/// use calcula::interpreter::parser::literal::search_vector;
///
/// assert!(search_vector(" [1, 2, 3] "));
/// assert!(!search_vector("[[1, 2], [3, 4]]"));
/// assert!(!search_vector("[1, 2] * 2"));
/// ```
#[must_use]
pub fn search_vector(text: &str) -> bool {
    scans_whole(text, |text, cursor| {
        is_vector_opener(text, *cursor) && scan_vector(text, cursor, Position::default()).is_ok()
    })
}

/// Returns `true` if the whole of `text` is a matrix literal.
///
/// # Example
/// ```
/// use calcula::interpreter::parser::literal::search_matrix;
///
/// assert!(search_matrix("[[1, 2], [3, 4]]"));
/// assert!(!search_matrix("[1, 2, 3]"));
/// ```
#[must_use]
pub fn search_matrix(text: &str) -> bool {
    scans_whole(text, |text, cursor| {
        is_matrix_opener(text, *cursor) && scan_matrix(text, cursor, Position::default()).is_ok()
    })
}

/// Returns `true` if the whole of `text` is a rational literal.
///
/// # Example
/// ```
/// use calcula::interpreter::parser::literal::search_rational;
///
/// assert!(search_rational("1/2"));
/// assert!(search_rational("10 / 4"));
/// assert!(!search_rational("1/2 + 1"));
/// ```
#[must_use]
pub fn search_rational(text: &str) -> bool {
    scans_whole(text, |text, cursor| scan_rational(text, cursor, Position::default()).is_ok())
}

/// Returns `true` if the whole of `text` is a single call `name( ... )`.
///
/// Only the outer shape is checked; the arguments are left to the parser.
///
/// # Example
/// ```
/// use calcula::interpreter::parser::literal::search_function_call;
///
/// assert!(search_function_call("sin(x + 1)"));
/// assert!(!search_function_call("sin(x) + 1"));
/// assert!(!search_function_call("x"));
/// ```
#[must_use]
pub fn search_function_call(text: &str) -> bool {
    scans_whole(text, |text, cursor| {
        if scan_identifier(text, cursor).is_none() {
            return false;
        }
        skip_whitespace(text, cursor);
        match find_matching(text, *cursor) {
            Some(close) if peek(text, *cursor) == Some(b'(') => {
                *cursor = close + 1;
                true
            },
            _ => false,
        }
    })
}

/// Runs `scan` from the first non-blank byte and checks that only
/// whitespace follows what it consumed.
fn scans_whole<F>(text: &str, scan: F) -> bool
    where F: FnOnce(&str, &mut usize) -> bool
{
    let mut cursor = 0;
    skip_whitespace(text, &mut cursor);
    if !scan(text, &mut cursor) {
        return false;
    }
    skip_whitespace(text, &mut cursor);
    cursor == text.len()
}

fn expect_open_bracket(text: &str, cursor: &mut usize, origin: Position) -> ParseResult<()> {
    if consume(text, cursor, b'[') {
        return Ok(());
    }
    match peek(text, *cursor) {
        None => Err(ParseError::UnexpectedEndOfInput { position: origin.offset(*cursor) }),
        Some(_) => Err(unexpected_character(text, *cursor, origin)),
    }
}

/// Consumes the separator after a list element. Returns `true` after a `,`
/// and `false` after the closing `]`.
fn list_continues(text: &str, cursor: &mut usize, open: usize, origin: Position) -> ParseResult<bool> {
    match peek(text, *cursor) {
        Some(b',') => {
            *cursor += 1;
            Ok(true)
        },
        Some(b']') => {
            *cursor += 1;
            Ok(false)
        },
        None => Err(ParseError::UnterminatedBracket { position: origin.offset(open) }),
        Some(_) => Err(unexpected_character(text, *cursor, origin)),
    }
}

fn unexpected_character(text: &str, cursor: usize, origin: Position) -> ParseError {
    let character = text[cursor..].chars().next().unwrap_or_default();
    ParseError::UnexpectedCharacter { character,
                                      position: origin.offset(cursor) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const ORIGIN: Position = Position { line: 1, column: 1 };

    fn vector_error(text: &str) -> ParseError {
        let mut cursor = 0;
        scan_vector(text, &mut cursor, ORIGIN).unwrap_err()
    }

    #[test]
    fn empty_vector() {
        let (value, end) = parse_vector("[ ]", 0, ORIGIN).unwrap();
        assert_eq!(value, Value::from(Vec::<f64>::new()));
        assert_eq!(end, 3);
    }

    #[test]
    fn vector_errors() {
        assert_eq!(vector_error("[1, 2").kind(), ErrorKind::UnterminatedBracket);
        assert_eq!(vector_error("[1, 2").position().column, 1);
        assert_eq!(vector_error("[1,").kind(), ErrorKind::UnterminatedBracket);
        assert_eq!(vector_error("[1,,2]").kind(), ErrorKind::MalformedNumber);
        assert_eq!(vector_error("[1; 2]").kind(), ErrorKind::UnexpectedCharacter);
        assert_eq!(vector_error("[a]").kind(), ErrorKind::MalformedNumber);
    }

    #[test]
    fn matrix_errors() {
        let mut cursor = 0;
        let err = scan_matrix("[[1, 2], [3, 4]", &mut cursor, ORIGIN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnterminatedBracket);

        let mut cursor = 0;
        let err = scan_matrix("[[1, 2], 3]", &mut cursor, ORIGIN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedCharacter);

        let err = parse_matrix("[[1, 2], [3]]", 0, ORIGIN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn rational_errors() {
        let mut cursor = 0;
        let err = scan_rational("1 2", &mut cursor, ORIGIN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRational);

        let mut cursor = 0;
        let err = scan_rational("1/", &mut cursor, ORIGIN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRational);

        let err = parse_rational("1/0", 0, ORIGIN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn searches_require_full_consumption() {
        assert!(search_matrix(" [[1], [2]] "));
        assert!(!search_matrix("[[1], [2]] + 1"));
        assert!(search_vector("[]"));
        assert!(!search_vector("[1, 2"));
        assert!(!search_rational("1/2/3"));
        assert!(!search_rational("-1/2"));
        assert!(search_function_call("transpose([[1, 2]])"));
        assert!(!search_function_call("f(1)(2)"));
    }
}
