//! Error types for the driver.

use thiserror::Error;

use crate::invoke::Tool;

/// Errors produced while invoking the external toolchain.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The external binary exited with a non-zero status or was killed.
    ///
    /// A missing binary collapses into the same shape: the shell reports it
    /// as exit code 127 with its own diagnostic on stderr. Interpreting the
    /// captured output is left to the caller.
    #[error("{tool} failed with {}\n{stderr}", exit_code_label(*code))]
    Tool {
        tool: Tool,
        /// Exit code, or `None` when the process was killed by a signal.
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur while loading a [`Toolchain`](crate::Toolchain)
/// description from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO failure when reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unable to determine home directory for default config path")]
    HomeDirMissing,
}

fn exit_code_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (killed by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failure_display_includes_code_and_stderr() {
        let err = DriverError::Tool {
            tool: Tool::Compiler,
            code: Some(1),
            stdout: String::new(),
            stderr: "main.c(3): Error: Syntax error".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("cc65"));
        assert!(rendered.contains("exit code 1"));
        assert!(rendered.contains("Syntax error"));
    }

    #[test]
    fn killed_process_display_mentions_signal() {
        let err = DriverError::Tool {
            tool: Tool::Linker,
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(err.to_string().contains("killed by signal"));
    }
}
