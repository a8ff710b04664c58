//! Orchestrates a full compile: read source, lex, parse, generate, write
//! assembly, assemble, link, and (for `run`) execute the result.
//!
//! # Module structure
//!
//! - [`link`] - `nasm`/`ld` subprocess invocation
//! - [`error`] - [`CompileError`] and [`ToolError`]

mod error;
mod link;

pub use error::{CompileError, ToolError};

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;

use crate::arena::Arena;
use crate::codegen::Generator;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Reads, compiles, assembles, and links `source_path` into a fresh
/// executable inside a scratch directory, returning the executable's path
/// and the `TempDir` that owns it (kept alive by the caller for as long as
/// the executable is needed).
fn compile_to_executable(source_path: &Path) -> Result<(tempfile::TempDir, PathBuf), CompileError> {
    let source = fs::read_to_string(source_path).map_err(|source_err| CompileError::FileReadError {
        path: source_path.to_path_buf(),
        source: source_err,
    })?;

    let arena = Arena::new();
    let tokens = Lexer::new(&source).tokenize()?;
    let program = Parser::new(&arena, tokens).parse_program()?;
    let assembly = Generator::new().generate(&program)?;

    let dir = tempfile::tempdir().map_err(CompileError::TempDirCreationError)?;
    let asm_path = dir.path().join("out.asm");
    fs::write(&asm_path, assembly).map_err(|source_err| CompileError::FileReadError {
        path: asm_path.clone(),
        source: source_err,
    })?;

    link::assemble(&asm_path)?;

    let object_path = dir.path().join("out.o");
    let executable_path = dir.path().join("out");
    link::link(&object_path, &executable_path)?;

    Ok((dir, executable_path))
}

/// Compiles `source_path` and copies the resulting executable to
/// `output_path`.
pub fn build(source_path: &Path, output_path: &Path) -> Result<(), CompileError> {
    let (_dir, executable_path) = compile_to_executable(source_path)?;
    fs::copy(&executable_path, output_path).map_err(|source| CompileError::OutputCopyError {
        path: output_path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Compiles and immediately runs `source_path`, returning the exit code the
/// compiled program terminated with (mapping a fatal signal to `128 +
/// signal` on Unix).
pub fn run(source_path: &Path) -> Result<i32, CompileError> {
    let (_dir, executable_path) = compile_to_executable(source_path)?;
    let status = Command::new(&executable_path)
        .status()
        .map_err(CompileError::ExecutableRunError)?;
    Ok(exit_code_with_signal(&status))
}

fn exit_code_with_signal(status: &std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// The default output path for `build` when `-o` is not given: the source
/// file's stem, in the current directory.
pub fn default_output_path(source_path: &Path) -> PathBuf {
    PathBuf::from(source_path.file_stem().unwrap_or_default())
}
