//! Driver-level error type.
//!
//! Wraps the core's own error types plus every failure mode that belongs to
//! file I/O, temp-directory management, and subprocess invocation.

use std::io;
use std::path::PathBuf;

use crate::codegen::CodegenError;
use crate::lexer::LexError;
use crate::parser::ParseError;

/// One subprocess's failure: either it couldn't be spawned at all, or it ran
/// and exited unsuccessfully.
#[derive(Debug)]
pub enum ToolError {
    ExecutionFailed { tool: &'static str, source: io::Error },
    Failed {
        tool: &'static str,
        exit_code: String,
        stdout: String,
        stderr: String,
    },
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolError::ExecutionFailed { tool, source } => {
                write!(f, "Failed to run '{tool}': {source}")
            }
            ToolError::Failed {
                tool,
                exit_code,
                stdout,
                stderr,
            } => {
                write!(
                    f,
                    "'{tool}' failed with exit code {exit_code}\nstdout:\n{stdout}\nstderr:\n{stderr}"
                )
            }
        }
    }
}

#[derive(Debug)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Codegen(CodegenError),
    FileReadError { path: PathBuf, source: io::Error },
    PathNotUtf8 { path: PathBuf, context: &'static str },
    TempDirCreationError(io::Error),
    Assemble(ToolError),
    Link(ToolError),
    OutputCopyError { path: PathBuf, source: io::Error },
    ExecutableRunError(io::Error),
}

impl CompileError {
    pub fn path_not_utf8(path: &std::path::Path, context: &'static str) -> Self {
        CompileError::PathNotUtf8 {
            path: path.to_path_buf(),
            context,
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Lex(e) => write!(f, "{e}"),
            CompileError::Parse(e) => write!(f, "{e}"),
            CompileError::Codegen(e) => write!(f, "{e}"),
            CompileError::FileReadError { path, source } => {
                write!(f, "Failed to read file '{}': {source}", path.display())
            }
            CompileError::PathNotUtf8 { path, context } => {
                write!(f, "{context} path is not valid UTF-8: '{}'", path.display())
            }
            CompileError::TempDirCreationError(source) => {
                write!(f, "Failed to create a temporary build directory: {source}")
            }
            CompileError::Assemble(e) => write!(f, "Assembling failed: {e}"),
            CompileError::Link(e) => write!(f, "Linking failed: {e}"),
            CompileError::OutputCopyError { path, source } => {
                write!(
                    f,
                    "Failed to write output executable to '{}': {source}",
                    path.display()
                )
            }
            CompileError::ExecutableRunError(source) => {
                write!(f, "Failed to run the compiled executable: {source}")
            }
        }
    }
}

impl std::error::Error for CompileError {}

impl From<LexError> for CompileError {
    fn from(e: LexError) -> Self {
        CompileError::Lex(e)
    }
}

impl From<ParseError> for CompileError {
    fn from(e: ParseError) -> Self {
        CompileError::Parse(e)
    }
}

impl From<CodegenError> for CompileError {
    fn from(e: CodegenError) -> Self {
        CompileError::Codegen(e)
    }
}
