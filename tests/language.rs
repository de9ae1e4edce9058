use std::{fs, path::Path, str::FromStr};

use calcula::{
    error::ErrorKind,
    interpreter::{environment::Environment, evaluator::core::REL_TOLERANCE, value::core::Value},
    parse_and_evaluate, run_script,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_transcripts_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        count += check_transcript(entry.path());
    }

    assert!(count > 0, "No transcript lines found in tests/scripts");
}

/// Runs every `statement => expected` line of a transcript in one
/// environment and returns the number of lines checked.
///
/// `expected` is either the rendered value or `!ErrorKind`.
fn check_transcript(path: &Path) -> usize {
    let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    let strict = path.file_name()
                     .and_then(|name| name.to_str())
                     .is_some_and(|name| name.starts_with("strict_"));
    let mut env = if strict { Environment::strict() } else { Environment::new() };
    let mut count = 0;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        let Some((statement, expected)) = trimmed.rsplit_once(" => ") else {
            panic!("{path:?}:{}: missing ' => ' in {trimmed:?}", index + 1);
        };
        count += 1;

        let result = env.evaluate_on_line(statement, index + 1);
        match expected.strip_prefix('!') {
            Some(kind) => {
                let kind = ErrorKind::from_str(kind).unwrap_or_else(|e| panic!("{path:?}:{}: {e}", index + 1));
                match result {
                    Ok(value) => panic!("{path:?}:{}: `{statement}` gave {value}, expected {kind:?}",
                                        index + 1),
                    Err(e) => assert_eq!(e.kind(), kind, "{path:?}:{}: `{statement}` failed with {e}", index + 1),
                }
            },
            None => match result {
                Ok(value) => assert_eq!(value.to_string(), expected, "{path:?}:{}: `{statement}`", index + 1),
                Err(e) => panic!("{path:?}:{}: `{statement}` failed: {e}", index + 1),
            },
        }
    }

    count
}

#[test]
fn assigned_variables_are_visible() {
    let mut env = Environment::new();
    env.assign("x", "5").unwrap();

    assert_eq!(parse_and_evaluate("x + 3", &mut env).unwrap(), Value::Scalar(8.0));
}

#[test]
fn vectors_scale_by_scalars() {
    let mut env = Environment::new();

    assert_eq!(parse_and_evaluate("[1,2,3] * 2", &mut env).unwrap(),
               Value::from(vec![2.0, 4.0, 6.0]));
}

#[test]
fn division_by_zero_is_an_error() {
    let mut env = Environment::new();
    let err = parse_and_evaluate("1/0", &mut env).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert_eq!(err.to_string(), "Error on line 1, column 1: Division by zero.");
}

#[test]
fn sine_of_zero() {
    let mut env = Environment::new();
    let value = parse_and_evaluate("sin(0)", &mut env).unwrap();

    assert!(value.approx_eq(&Value::Scalar(0.0), 1e-12, REL_TOLERANCE));
}

#[test]
fn unknown_identifiers_are_reported_where_they_appear() {
    let mut env = Environment::new();
    let err = parse_and_evaluate("  undefined_var + 1", &mut env).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnknownVariable);
    assert_eq!(err.position().column, 3);
}

#[test]
fn rational_sum_matches_by_cross_multiplication() {
    let mut env = Environment::new();
    env.assign("half", "1/2").unwrap();
    env.assign("third", "1/3").unwrap();

    let sum = parse_and_evaluate("half + third", &mut env).unwrap();
    let expected = parse_and_evaluate("10/12", &mut env).unwrap();
    assert_eq!(sum, expected);
}

#[test]
fn run_script_stops_at_the_first_error() {
    let mut env = Environment::new();
    let source = "a = 1\n\n// comment\nb = a + missing\nc = 3";

    let err = run_script(source, &mut env).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownVariable);
    assert_eq!(err.position().line, 4);
    assert!(env.get("c").is_none());
    assert_eq!(env.get("a"), Some(&Value::Scalar(1.0)));
}

#[test]
fn run_script_of_only_comments_has_no_value() {
    let mut env = Environment::new();
    assert_eq!(run_script("// nothing\n\n   \n", &mut env).unwrap(), None);
}

#[test]
fn error_messages_name_the_line_and_column() {
    let mut env = Environment::new();
    let err = run_script("v = [1, 2]\nv + [1, 2, 3]", &mut env).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    assert_eq!(err.position().line, 2);
    assert_eq!(err.position().column, 3);
}

#[test]
fn deep_nesting_fails_without_losing_the_session() {
    let mut env = Environment::new();
    env.evaluate("x = 2").unwrap();

    let parens = format!("{}x{}", "(".repeat(5000), ")".repeat(5000));
    assert_eq!(parse_and_evaluate(&parens, &mut env).unwrap_err().kind(), ErrorKind::NestingTooDeep);

    let negations = format!("{}x", "- ".repeat(5000));
    assert_eq!(parse_and_evaluate(&negations, &mut env).unwrap_err().kind(), ErrorKind::NestingTooDeep);

    let assigned = format!("y = {}1{}", "(".repeat(5000), ")".repeat(5000));
    assert_eq!(parse_and_evaluate(&assigned, &mut env).unwrap_err().kind(), ErrorKind::NestingTooDeep);
    assert!(env.get("y").is_none());

    assert_eq!(parse_and_evaluate("(((x))) * -(-x)", &mut env).unwrap(), Value::Scalar(4.0));
}

#[test]
fn substituted_variables_keep_their_columns_in_errors() {
    let mut env = Environment::new();
    let err = run_script("big = 123456789\nbig / 0", &mut env).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert_eq!(err.to_string(), "Error on line 2, column 5: Division by zero.");
}
