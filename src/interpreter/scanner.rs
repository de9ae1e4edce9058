use crate::{ast::Position, error::ParseError, interpreter::parser::core::ParseResult};

/// Advances `cursor` past spaces and tabs.
///
/// Does nothing at the end of input.
///
/// # Example
/// ```
/// use calcula::interpreter::scanner::skip_whitespace;
///
/// let mut cursor = 1;
/// skip_whitespace("[  1]", &mut cursor);
/// assert_eq!(cursor, 3);
/// ```
pub fn skip_whitespace(text: &str, cursor: &mut usize) {
    let bytes = text.as_bytes();
    while *cursor < bytes.len() && matches!(bytes[*cursor], b' ' | b'\t') {
        *cursor += 1;
    }
}

/// Returns the byte at `cursor`, or `None` past the end of input.
#[must_use]
pub fn peek(text: &str, cursor: usize) -> Option<u8> {
    text.as_bytes().get(cursor).copied()
}

/// Consumes `expected` if it is the byte at `cursor`.
///
/// Returns `true` and advances the cursor on a match; leaves the cursor
/// untouched otherwise.
pub fn consume(text: &str, cursor: &mut usize, expected: u8) -> bool {
    if peek(text, *cursor) == Some(expected) {
        *cursor += 1;
        true
    } else {
        false
    }
}

/// Scans an unsigned number made of digits and at most one decimal point.
///
/// At least one digit must be consumed. A second decimal point ends the
/// number, leaving the cursor on it.
///
/// # Parameters
/// - `text`: The input.
/// - `cursor`: Byte offset to start at; advanced past the number on success.
/// - `origin`: Position of the first byte of `text`.
///
/// # Errors
/// - `MalformedNumber` if no digit is found.
/// - `LiteralTooLarge` if the number overflows to infinity.
///
/// # Example
/// ```
/// use calcula::{ast::Position, interpreter::scanner::scan_number};
///
/// let mut cursor = 0;
/// assert_eq!(scan_number("12.5.3", &mut cursor, Position::at_cursor(1, 0)).unwrap(), 12.5);
/// assert_eq!(cursor, 4);
///
/// let mut cursor = 0;
/// assert!(scan_number(".", &mut cursor, Position::at_cursor(1, 0)).is_err());
/// ```
pub fn scan_number(text: &str, cursor: &mut usize, origin: Position) -> ParseResult<f64> {
    let start = *cursor;
    let bytes = text.as_bytes();
    let mut end = start;
    let mut seen_digit = false;
    let mut seen_point = false;

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return Err(ParseError::MalformedNumber { position: origin.offset(start) });
    }

    let value: f64 = text[start..end].parse()
                                     .map_err(|_| ParseError::MalformedNumber { position: origin.offset(start) })?;
    if !value.is_finite() {
        return Err(ParseError::LiteralTooLarge { position: origin.offset(start) });
    }

    *cursor = end;
    Ok(value)
}

/// Scans a number with an optional leading `-`.
///
/// Whitespace is allowed between the sign and the digits.
pub fn scan_signed_number(text: &str, cursor: &mut usize, origin: Position) -> ParseResult<f64> {
    let start = *cursor;
    if consume(text, cursor, b'-') {
        skip_whitespace(text, cursor);
        return scan_number(text, cursor, origin).map(|n| -n).inspect_err(|_| *cursor = start);
    }
    scan_number(text, cursor, origin)
}

/// Scans an identifier: a letter or `_` followed by letters, digits and `_`.
///
/// Returns `None` and leaves the cursor untouched when no identifier starts
/// at `cursor`.
///
/// # Example
/// ```
/// use calcula::interpreter::scanner::scan_identifier;
///
/// let mut cursor = 0;
/// assert_eq!(scan_identifier("rate_2 + 1", &mut cursor), Some("rate_2"));
/// assert_eq!(cursor, 6);
///
/// let mut cursor = 0;
/// assert_eq!(scan_identifier("2x", &mut cursor), None);
/// assert_eq!(scan_identifier("_x", &mut cursor), None);
/// ```
pub fn scan_identifier<'a>(text: &'a str, cursor: &mut usize) -> Option<&'a str> {
    let bytes = text.as_bytes();
    let start = *cursor;

    if !bytes.get(start).is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }

    let mut end = start + 1;
    while end < bytes.len() && is_word_byte(bytes[end]) {
        end += 1;
    }

    *cursor = end;
    Some(&text[start..end])
}

/// Returns `true` for bytes that may continue an identifier.
#[must_use]
pub const fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Finds the bracket that closes the one at `open`.
///
/// `open` must index a `(` or `[`. Nested brackets of the same kind are
/// skipped. Returns `None` if the input ends first.
///
/// # Example
/// ```
/// use calcula::interpreter::scanner::find_matching;
///
/// assert_eq!(find_matching("f(g(1), 2) + 3", 1), Some(9));
/// assert_eq!(find_matching("[[1, 2]", 0), None);
/// ```
#[must_use]
pub fn find_matching(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let (opener, closer) = match bytes.get(open)? {
        b'(' => (b'(', b')'),
        b'[' => (b'[', b']'),
        _ => return None,
    };

    let mut depth = 0usize;
    for (index, byte) in bytes.iter().enumerate().skip(open) {
        if *byte == opener {
            depth += 1;
        } else if *byte == closer {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}

/// Returns `true` if a matrix literal opens at `cursor`: a `[` whose next
/// non-blank byte is another `[`.
///
/// # Example
/// ```
/// use calcula::interpreter::scanner::{is_matrix_opener, is_vector_opener};
///
/// assert!(is_matrix_opener("[[1, 2]]", 0));
/// assert!(is_matrix_opener("[ [1, 2]]", 0));
/// assert!(!is_matrix_opener("[1, 2]", 0));
///
/// assert!(is_vector_opener("[1, 2]", 0));
/// assert!(is_vector_opener("[]", 0));
/// assert!(!is_vector_opener("[[1]]", 0));
/// ```
#[must_use]
pub fn is_matrix_opener(text: &str, cursor: usize) -> bool {
    next_after_bracket(text, cursor) == Some(Some(b'['))
}

/// Returns `true` if a vector literal opens at `cursor`: a `[` whose next
/// non-blank byte is anything but `[`.
#[must_use]
pub fn is_vector_opener(text: &str, cursor: usize) -> bool {
    matches!(next_after_bracket(text, cursor), Some(next) if next != Some(b'['))
}

/// `None` if there is no `[` at `cursor`; otherwise the next non-blank byte
/// after it, if any.
fn next_after_bracket(text: &str, cursor: usize) -> Option<Option<u8>> {
    if peek(text, cursor) != Some(b'[') {
        return None;
    }
    let mut lookahead = cursor + 1;
    skip_whitespace(text, &mut lookahead);
    Some(peek(text, lookahead))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const ORIGIN: Position = Position { line: 1, column: 1 };

    #[test]
    fn whitespace_skip_stops_at_end() {
        let mut cursor = 0;
        skip_whitespace("   ", &mut cursor);
        assert_eq!(cursor, 3);
        skip_whitespace("   ", &mut cursor);
        assert_eq!(cursor, 3);
    }

    #[test]
    fn number_error_points_at_start() {
        let mut cursor = 2;
        let err = scan_number("1,x", &mut cursor, ORIGIN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedNumber);
        assert_eq!(err.position().column, 3);
        assert_eq!(cursor, 2);
    }

    #[test]
    fn number_at_end_of_input() {
        let mut cursor = 3;
        assert!(scan_number("1, ", &mut cursor, ORIGIN).is_err());
    }

    #[test]
    fn trailing_point_is_part_of_the_number() {
        let mut cursor = 0;
        assert_eq!(scan_number("3.]", &mut cursor, ORIGIN).unwrap(), 3.0);
        assert_eq!(cursor, 2);
    }

    #[test]
    fn signed_numbers() {
        let mut cursor = 0;
        assert_eq!(scan_signed_number("- 2.5", &mut cursor, ORIGIN).unwrap(), -2.5);

        let mut cursor = 0;
        assert!(scan_signed_number("-x", &mut cursor, ORIGIN).is_err());
        assert_eq!(cursor, 0);
    }

    #[test]
    fn matching_handles_unbalanced_input() {
        assert_eq!(find_matching("((", 0), None);
        assert_eq!(find_matching(")", 0), None);
        assert_eq!(find_matching("", 0), None);
        assert_eq!(find_matching("[[1], [2]]", 0), Some(9));
    }

    #[test]
    fn openers_at_end_of_input() {
        assert!(is_vector_opener("[", 0));
        assert!(!is_matrix_opener("[", 0));
        assert!(!is_vector_opener("", 0));
    }
}
