//! Semantic (code-generation) error tests for the Flit compiler.

mod common;

use common::codegen_error;
use flit::codegen::CodegenError;

#[test]
fn duplicate_let_in_the_same_scope_is_rejected() {
    let err = codegen_error("let x = 1; let x = 2;").expect("duplicate let should be rejected");
    assert!(matches!(err, CodegenError::DuplicateLet { ref name, .. } if name == "x"));
    assert!(err.to_string().contains("already used"));
}

#[test]
fn undeclared_identifier_is_rejected() {
    let err = codegen_error("print(y);").expect("undeclared identifier should be rejected");
    assert!(matches!(err, CodegenError::UndeclaredIdentifier { ref name, .. } if name == "y"));
    assert!(err.to_string().contains("Undeclared identifier"));
}

#[test]
fn identifier_out_of_its_scope_is_undeclared() {
    let err = codegen_error("if (1) { let x = 1; } print(x);")
        .expect("identifier used after its scope closed should be rejected");
    assert!(matches!(err, CodegenError::UndeclaredIdentifier { ref name, .. } if name == "x"));
}
