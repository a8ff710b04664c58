//! Lexer error tests for the Flit compiler.

mod common;

use common::lex_error;

#[test]
fn unrecognized_character_is_rejected() {
    let err = lex_error("let x = 1 @ 2;").expect("`@` should be unrecognized");
    assert_eq!(err.character, '@');
    assert_eq!(err.line, 1);
}

#[test]
fn unrecognized_character_reports_its_line() {
    let err = lex_error("let x = 1;\nlet y = #;").expect("`#` should be unrecognized");
    assert_eq!(err.character, '#');
    assert_eq!(err.line, 2);
}
