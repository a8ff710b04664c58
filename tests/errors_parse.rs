//! Parser error tests for the Flit compiler.

mod common;

use common::parse_error;

#[test]
fn exit_without_parens_is_a_parse_error_citing_the_line() {
    let err = parse_error("exit 1;").expect("missing parens should fail to parse");
    assert_eq!(err.line, 1);
    assert!(err.to_string().starts_with("[Parsing Error] Expected"));
}

#[test]
fn unclosed_scope_is_a_parse_error() {
    let err = parse_error("if (1) { print(1);").expect("unclosed scope should fail to parse");
    assert!(err.to_string().contains("Parsing Error"));
}

#[test]
fn missing_statement_mid_stream_is_a_parse_error() {
    let err = parse_error("let x = 1; +").expect("trailing garbage should fail to parse");
    assert!(err.to_string().contains("Parsing Error"));
}

#[test]
fn error_line_is_the_most_recently_consumed_token() {
    // The failing lookahead (`exit 1`) sits on line 2, but nothing on that
    // line is ever consumed before the mismatch is detected, so the
    // reported line is that of the last token actually consumed: the `;`
    // closing the `let` statement on line 1.
    let err = parse_error("let x = 1;\nexit 1;").expect("missing parens should fail to parse");
    assert_eq!(err.line, 1);
}
