//! Ordered command-line token assembly.

use std::fmt;

/// Ordered sequence of command-line tokens for one tool invocation.
///
/// Option structs push their flags in a fixed declared order and positional
/// arguments go last. The buffer holds plain words; the pairing of a flag
/// with its value is positional, not structural.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a bare flag with no value.
    pub fn flag(&mut self, flag: &str) {
        self.tokens.push(flag.to_string());
    }

    /// Emit a bare flag only when `enabled` is true.
    pub fn flag_if(&mut self, enabled: bool, flag: &str) {
        if enabled {
            self.flag(flag);
        }
    }

    /// Emit a flag followed by its stringified value.
    pub fn value(&mut self, flag: &str, value: impl fmt::Display) {
        self.tokens.push(flag.to_string());
        self.tokens.push(value.to_string());
    }

    /// Emit a flag/value pair when the option is set, nothing otherwise.
    pub fn opt<T: fmt::Display>(&mut self, flag: &str, value: &Option<T>) {
        if let Some(value) = value {
            self.value(flag, value);
        }
    }

    /// Emit one flag/value pair per element, in element order.
    pub fn repeated<T: fmt::Display>(&mut self, flag: &str, values: &[T]) {
        for value in values {
            self.value(flag, value);
        }
    }

    /// Append a positional argument.
    pub fn positional(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Join all tokens with single spaces.
    ///
    /// No quoting or escaping is applied; values containing spaces or shell
    /// metacharacters are the caller's responsibility.
    pub fn command_string(&self) -> String {
        self.tokens.join(" ")
    }
}
