use crate::{
    ast::{BinaryOperator, Position, Statement},
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        scanner::{scan_identifier, skip_whitespace},
    },
};

/// Compound assignment operators and the arithmetic they stand for.
const COMPOUND_OPERATORS: [(&str, BinaryOperator); 5] = [("+=", BinaryOperator::Add),
                                                         ("-=", BinaryOperator::Sub),
                                                         ("*=", BinaryOperator::Mul),
                                                         ("/=", BinaryOperator::Div),
                                                         ("%=", BinaryOperator::Mod)];

/// Parses one statement line.
///
/// Only the statement shape is recognized here: the target name, the
/// operator and the right-hand side text. Right-hand sides are parsed later,
/// once the dispatch layer has classified them.
///
/// Accepted forms:
/// ```text
///     name = expression
///     name (+= | -= | *= | /= | %=) expression
///     name++
///     name--
///     expression
/// ```
///
/// # Parameters
/// - `text`: The statement, without its line terminator.
/// - `line`: Line number used for positions.
///
/// # Errors
/// Returns `InvalidAssignmentTarget` if an `=` follows something other than
/// a plain name.
///
/// # Example
/// ```
/// use calcula::{
///     ast::{Position, Statement},
///     interpreter::parser::statement::parse_statement,
/// };
///
/// let statement = parse_statement("x = 1 + 2", 1).unwrap();
/// let Statement::Assignment { name, value, value_position, .. } = statement else {
///     panic!("expected an assignment")
/// };
///
/// assert_eq!(name, "x");
/// assert_eq!(value, " 1 + 2");
/// assert_eq!(value_position, Position { line: 1, column: 4 });
/// ```
pub fn parse_statement(text: &str, line: usize) -> ParseResult<Statement> {
    let origin = Position::at_cursor(line, 0);
    let mut cursor = 0;
    skip_whitespace(text, &mut cursor);
    let name_start = cursor;

    if let Some(name) = scan_identifier(text, &mut cursor) {
        let position = origin.offset(name_start);
        skip_whitespace(text, &mut cursor);
        let rest = &text[cursor..];

        match rest.trim_end() {
            "++" => {
                return Ok(Statement::Increment { name: name.to_string(),
                                                 position });
            },
            "--" => {
                return Ok(Statement::Decrement { name: name.to_string(),
                                                 position });
            },
            _ => {},
        }

        if let Some((symbol, op)) = COMPOUND_OPERATORS.iter().find(|(symbol, _)| rest.starts_with(symbol)) {
            let value_start = cursor + symbol.len();
            return Ok(Statement::CompoundAssignment { name: name.to_string(),
                                                      op: *op,
                                                      value: text[value_start..].to_string(),
                                                      value_position: origin.offset(value_start),
                                                      position });
        }

        if rest.starts_with('=') {
            let value_start = cursor + 1;
            return Ok(Statement::Assignment { name: name.to_string(),
                                              value: text[value_start..].to_string(),
                                              value_position: origin.offset(value_start),
                                              position });
        }
    }

    if let Some(equals) = text.find('=') {
        let target = text[..equals].trim_end_matches(['+', '-', '*', '/', '%']).trim();
        return Err(ParseError::InvalidAssignmentTarget { target:   target.to_string(),
                                                         position: origin.offset(name_start), });
    }

    Ok(Statement::Expression { text:     text.to_string(),
                               position: origin, })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn compound_assignment_keeps_the_operator() {
        let statement = parse_statement("total *= [1, 2]", 3).unwrap();
        assert_eq!(statement,
                   Statement::CompoundAssignment { name:           "total".to_string(),
                                                   op:             BinaryOperator::Mul,
                                                   value:          " [1, 2]".to_string(),
                                                   value_position: Position { line: 3, column: 9 },
                                                   position:       Position { line: 3, column: 1 }, });
    }

    #[test]
    fn increment_and_decrement() {
        assert_eq!(parse_statement("  n++ ", 1).unwrap(),
                   Statement::Increment { name:     "n".to_string(),
                                          position: Position { line: 1, column: 3 }, });
        assert_eq!(parse_statement("n--", 1).unwrap(),
                   Statement::Decrement { name:     "n".to_string(),
                                          position: Position { line: 1, column: 1 }, });
    }

    #[test]
    fn expressions_starting_with_a_name() {
        let statement = parse_statement("sin(x) + 1", 1).unwrap();
        assert!(matches!(statement, Statement::Expression { .. }));

        let statement = parse_statement("x - -1", 1).unwrap();
        assert!(matches!(statement, Statement::Expression { .. }));
    }

    #[test]
    fn bad_targets() {
        let err = parse_statement("3 = 4", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAssignmentTarget);

        let err = parse_statement("x + 1 += 2", 1).unwrap_err();
        assert_eq!(err.to_string(), "Error on line 1, column 1: Cannot assign to 'x + 1'.");
    }
}
