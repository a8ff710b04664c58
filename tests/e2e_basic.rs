//! End-to-end compile-assemble-link-run tests for the Flit compiler.
//!
//! These run the real `nasm`/`ld` toolchain and skip themselves (rather
//! than failing) when either tool isn't on `PATH`.

mod common;

use common::{compile_and_run, tools_available};

#[test]
fn bare_exit_with_zero() {
    if !tools_available() {
        eprintln!("skipping: nasm/ld not available");
        return;
    }
    let (stdout, exit_code) = compile_and_run("exit(0);").unwrap();
    assert_eq!(stdout, "");
    assert_eq!(exit_code, 0);
}

#[test]
fn exit_with_nonzero_code() {
    if !tools_available() {
        eprintln!("skipping: nasm/ld not available");
        return;
    }
    let (stdout, exit_code) = compile_and_run("exit(7);").unwrap();
    assert_eq!(stdout, "");
    assert_eq!(exit_code, 7);
}

#[test]
fn print_a_literal() {
    if !tools_available() {
        eprintln!("skipping: nasm/ld not available");
        return;
    }
    let (stdout, exit_code) = compile_and_run("print(42);").unwrap();
    assert_eq!(stdout, "42\n");
    assert_eq!(exit_code, 0);
}

#[test]
fn variables_and_precedence() {
    if !tools_available() {
        eprintln!("skipping: nasm/ld not available");
        return;
    }
    let (stdout, exit_code) =
        compile_and_run("let x = 3; let y = 4; print(x + y * 2); exit(x);").unwrap();
    assert_eq!(stdout, "11\n");
    assert_eq!(exit_code, 3);
}

#[test]
fn if_else_branch() {
    if !tools_available() {
        eprintln!("skipping: nasm/ld not available");
        return;
    }
    let (stdout, exit_code) =
        compile_and_run("let x = 10; if (x) { print(1); } else { print(0); } exit(0);").unwrap();
    assert_eq!(stdout, "1\n");
    assert_eq!(exit_code, 0);
}

#[test]
fn while_loop_counts_down() {
    if !tools_available() {
        eprintln!("skipping: nasm/ld not available");
        return;
    }
    let (stdout, exit_code) =
        compile_and_run("let n = 3; while (n) { print(n); n = n - 1; } exit(0);").unwrap();
    assert_eq!(stdout, "3\n2\n1\n");
    assert_eq!(exit_code, 0);
}

#[test]
fn reassignment_accumulates() {
    if !tools_available() {
        eprintln!("skipping: nasm/ld not available");
        return;
    }
    let (stdout, exit_code) =
        compile_and_run("let x = 1; x = x + 1; x = x + 1; print(x); exit(0);").unwrap();
    assert_eq!(stdout, "3\n");
    assert_eq!(exit_code, 0);
}

#[test]
fn while_loop_with_nested_scope_sums_into_outer_variable() {
    if !tools_available() {
        eprintln!("skipping: nasm/ld not available");
        return;
    }
    let (stdout, exit_code) = compile_and_run(
        "let i = 0; let total = 0; while (i - 3) { total = total + i; i = i + 1; } print(total); exit(0);",
    )
    .unwrap();
    assert_eq!(stdout, "3\n");
    assert_eq!(exit_code, 0);
}

#[test]
fn empty_program_exits_zero_with_no_output() {
    if !tools_available() {
        eprintln!("skipping: nasm/ld not available");
        return;
    }
    let (stdout, exit_code) = compile_and_run("").unwrap();
    assert_eq!(stdout, "");
    assert_eq!(exit_code, 0);
}
