//! Common test utilities for Flit integration tests.
//!
//! Each test file is compiled as a separate crate, so not all functions are
//! used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use flit::arena::Arena;
use flit::codegen::{CodegenError, Generator};
use flit::driver;
use flit::lexer::{LexError, Lexer};
use flit::parser::{ParseError, Parser};

/// Whether `nasm` and `ld` are both available on this machine. E2E tests
/// skip (rather than fail) when either is missing, since this repository
/// doesn't vendor them.
pub fn tools_available() -> bool {
    let nasm = Command::new("nasm").arg("-version").output();
    let ld = Command::new("ld").arg("--version").output();
    matches!(nasm, Ok(o) if o.status.success()) && matches!(ld, Ok(o) if o.status.success())
}

/// Compiles `source` to a temporary executable, runs it, and returns its
/// captured stdout and exit code. Requires `nasm`/`ld`; callers should guard
/// with [`tools_available`] first.
pub fn compile_and_run(source: &str) -> Result<(String, i32), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let source_path = dir.path().join("prog.fl");
    std::fs::write(&source_path, source).map_err(|e| e.to_string())?;
    let output_path = dir.path().join("prog");

    driver::build(&source_path, &output_path).map_err(|e| e.to_string())?;

    let output = Command::new(&output_path)
        .output()
        .map_err(|e| format!("failed to run compiled program: {e}"))?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let exit_code = output.status.code().unwrap_or(-1);
    Ok((stdout, exit_code))
}

/// The stage at which a compile failed, for tests that only care about the
/// front-end phases and don't need `nasm`/`ld` at all.
#[derive(Debug, PartialEq, Eq)]
pub enum CompileStage {
    Lex,
    Parse,
    Codegen,
}

/// Lexes, parses, and generates `source` without touching the filesystem or
/// any external tool. Returns `Ok(assembly)` on success, or the stage and
/// message of the first failure.
pub fn compile_core(source: &str) -> Result<String, (CompileStage, String)> {
    let arena = Arena::new();
    let tokens = match Lexer::new(source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => return Err((CompileStage::Lex, e.to_string())),
    };
    let program = match Parser::new(&arena, tokens).parse_program() {
        Ok(program) => program,
        Err(e) => return Err((CompileStage::Parse, e.to_string())),
    };
    match Generator::new().generate(&program) {
        Ok(asm) => Ok(asm),
        Err(e) => Err((CompileStage::Codegen, e.to_string())),
    }
}

pub fn lex_error(source: &str) -> Option<LexError> {
    Lexer::new(source).tokenize().err()
}

pub fn parse_error(source: &str) -> Option<ParseError> {
    let arena = Arena::new();
    let tokens = Lexer::new(source).tokenize().ok()?;
    Parser::new(&arena, tokens).parse_program().err()
}

pub fn codegen_error(source: &str) -> Option<CodegenError> {
    let arena = Arena::new();
    let tokens = Lexer::new(source).tokenize().ok()?;
    let program = Parser::new(&arena, tokens).parse_program().ok()?;
    Generator::new().generate(&program).err()
}

pub fn flit_binary() -> &'static str {
    env!("CARGO_BIN_EXE_flit")
}
