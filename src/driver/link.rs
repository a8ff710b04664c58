//! Subprocess invocation: `nasm` then `ld`.

use std::path::Path;
use std::process::{Command, ExitStatus};

#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;

use super::error::{CompileError, ToolError};

fn format_exit_status(status: &ExitStatus) -> String {
    if let Some(code) = status.code() {
        return code.to_string();
    }
    #[cfg(unix)]
    {
        if let Some(signal) = status.signal() {
            return format!("signal {signal}");
        }
    }
    "unknown".to_string()
}

fn run_tool(tool: &'static str, mut command: Command) -> Result<(), ToolError> {
    let output = command
        .output()
        .map_err(|source| ToolError::ExecutionFailed { tool, source })?;
    if !output.status.success() {
        return Err(ToolError::Failed {
            tool,
            exit_code: format_exit_status(&output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(())
}

/// Assembles `asm_path` (expected to be named `out.asm`) into an ELF64
/// object file alongside it, via `nasm -felf64`.
pub(super) fn assemble(asm_path: &Path) -> Result<(), CompileError> {
    let mut command = Command::new("nasm");
    command.arg("-felf64").arg(asm_path);
    run_tool("nasm", command).map_err(CompileError::Assemble)
}

/// Links `object_path` into `output_path` via `ld`.
pub(super) fn link(object_path: &Path, output_path: &Path) -> Result<(), CompileError> {
    let mut command = Command::new("ld");
    command.arg("-o").arg(output_path).arg(object_path);
    run_tool("ld", command).map_err(CompileError::Link)
}
