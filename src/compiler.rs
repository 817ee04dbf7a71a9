//! `cc65` compiler options and invocation.

use std::fmt;

use crate::args::CommandLine;
use crate::error::DriverError;
use crate::invoke::ToolOutput;
use crate::target::TargetSystem;
use crate::toolchain::Toolchain;

/// CPU variants accepted by the compiler's `--cpu` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerCpu {
    Mos6502,
    Mos65C02,
}

impl fmt::Display for CompilerCpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompilerCpu::Mos6502 => "6502",
            CompilerCpu::Mos65C02 => "65C02",
        })
    }
}

/// Language standard selected with `--standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CStandard {
    C89,
    C99,
    Cc65,
}

impl fmt::Display for CStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CStandard::C89 => "c89",
            CStandard::C99 => "c99",
            CStandard::Cc65 => "cc65",
        })
    }
}

/// A single letter accepted after `-O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerSetting {
    /// `i`: inline known functions more aggressively.
    Inline,
    /// `r`: enable register variables.
    RegisterVars,
    /// `s`: inline standard functions.
    InlineStdFuncs,
}

impl OptimizerSetting {
    pub(crate) fn letter(self) -> char {
        match self {
            OptimizerSetting::Inline => 'i',
            OptimizerSetting::RegisterVars => 'r',
            OptimizerSetting::InlineStdFuncs => 's',
        }
    }
}

/// The compiler's optimizer switch.
///
/// `Disabled` emits nothing. `Enabled` emits a single token concatenating
/// `-O` with the settings letters, no separators: `-O`, `-Os`, `-Oir`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Optimizer {
    #[default]
    Disabled,
    Enabled { settings: Vec<OptimizerSetting> },
}

impl Optimizer {
    fn render(&self, cmd: &mut CommandLine) {
        if let Optimizer::Enabled { settings } = self {
            let mut token = String::from("-O");
            token.extend(settings.iter().map(|setting| setting.letter()));
            cmd.flag(&token);
        }
    }
}

/// Options for the `cc65` C compiler.
///
/// Unset fields are omitted from the rendered command line; `true` booleans
/// render as bare flags; other scalars render as a flag followed by the
/// stringified value. No validation of combinations is performed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerOptions {
    pub bss_name: Option<String>,
    pub check_stack: bool,
    pub code_name: Option<String>,
    pub codesize: Option<u32>,
    pub cpu: Option<CompilerCpu>,
    pub create_dep: bool,
    pub data_name: Option<String>,
    pub debug: bool,
    pub debug_info: bool,
    /// Preprocessor definitions, each rendered as `-D <value>`.
    pub define: Vec<String>,
    pub forget_inc_paths: bool,
    pub help: bool,
    pub output_file: Option<String>,
    /// Include search paths, each rendered as `-I <dir>`.
    pub include_dirs: Vec<String>,
    pub register_space: Option<u32>,
    pub register_vars: bool,
    pub rodata_name: Option<String>,
    pub signed_chars: bool,
    pub standard: Option<CStandard>,
    pub static_locals: bool,
    pub target: Option<TargetSystem>,
    pub verbose: bool,
    pub version: bool,
    pub writable_strings: bool,
    pub add_source: bool,
    pub optimizer: Optimizer,
}

impl CompilerOptions {
    pub(crate) fn render(&self, filename: &str) -> CommandLine {
        let mut cmd = CommandLine::new();
        cmd.opt("--bss-name", &self.bss_name);
        cmd.flag_if(self.check_stack, "--check-stack");
        cmd.opt("--code-name", &self.code_name);
        cmd.opt("--codesize", &self.codesize);
        cmd.opt("--cpu", &self.cpu);
        cmd.flag_if(self.create_dep, "--create-dep");
        cmd.opt("--data-name", &self.data_name);
        cmd.flag_if(self.debug, "--debug");
        cmd.flag_if(self.debug_info, "--debug-info");
        cmd.flag_if(self.forget_inc_paths, "--forget-inc-paths");
        cmd.flag_if(self.help, "--help");
        cmd.opt("--output-file", &self.output_file);
        cmd.opt("--register-space", &self.register_space);
        cmd.flag_if(self.register_vars, "--register-vars");
        cmd.opt("--rodata-name", &self.rodata_name);
        cmd.flag_if(self.signed_chars, "--signed-chars");
        cmd.opt("--standard", &self.standard);
        cmd.flag_if(self.static_locals, "--static-locals");
        cmd.opt("--target", &self.target);
        cmd.flag_if(self.verbose, "--verbose");
        cmd.flag_if(self.version, "--version");
        cmd.flag_if(self.writable_strings, "--writable-strings");
        cmd.flag_if(self.add_source, "--add-source");
        cmd.repeated("-D", &self.define);
        cmd.repeated("-I", &self.include_dirs);
        self.optimizer.render(&mut cmd);
        cmd.positional(filename);
        cmd
    }
}

/// Run `cc65` on one source file using the default toolchain (binaries
/// resolved on `PATH`).
pub async fn cc65(
    options: &CompilerOptions,
    filename: impl AsRef<str>,
) -> Result<ToolOutput, DriverError> {
    Toolchain::default().compile(options, filename).await
}
