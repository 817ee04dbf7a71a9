//! Asynchronous invocation of the external toolchain binaries.
//!
//! The rendered token sequence is joined into a single command string and
//! run through `sh -c`, matching how the toolchain is conventionally driven
//! from build scripts. Stdout and stderr are captured in full; the call
//! suspends only the awaiting caller until the process exits. No timeout is
//! enforced and no cancellation is offered: a hung binary blocks the
//! corresponding awaited result indefinitely.

use std::fmt;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use crate::args::CommandLine;
use crate::error::DriverError;

/// The four external binaries this crate drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// `cc65`, the C compiler.
    Compiler,
    /// `ca65`, the macro assembler.
    Assembler,
    /// `ld65`, the linker.
    Linker,
    /// `co65`, the object file converter.
    ObjectConverter,
}

impl Tool {
    /// Conventional binary name, used when no override is configured.
    pub fn binary_name(self) -> &'static str {
        match self {
            Tool::Compiler => "cc65",
            Tool::Assembler => "ca65",
            Tool::Linker => "ld65",
            Tool::ObjectConverter => "co65",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_name())
    }
}

/// Captured output of a successful tool run.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Spawn the binary with the rendered arguments and await its exit.
///
/// Resolves on exit code 0; any other outcome (non-zero exit, killed by
/// signal, binary not found) becomes [`DriverError::Tool`] carrying the
/// captured streams verbatim.
pub(crate) async fn run(
    tool: Tool,
    binary: &str,
    cmd: &CommandLine,
    working_dir: Option<&Path>,
) -> Result<ToolOutput, DriverError> {
    let mut command_string = binary.to_string();
    let rendered = cmd.command_string();
    if !rendered.is_empty() {
        command_string.push(' ');
        command_string.push_str(&rendered);
    }

    tracing::debug!(tool = %tool, command = %command_string, "invoking external tool");

    let mut command = Command::new("sh");
    command
        .arg("-c")
        .arg(&command_string)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(dir) = working_dir {
        command.current_dir(dir);
    }

    let output = command.output().await?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        tracing::debug!(tool = %tool, "external tool completed");
        Ok(ToolOutput {
            status: output.status,
            stdout,
            stderr,
        })
    } else {
        tracing::debug!(tool = %tool, code = ?output.status.code(), "external tool failed");
        Err(DriverError::Tool {
            tool,
            code: output.status.code(),
            stdout,
            stderr,
        })
    }
}
