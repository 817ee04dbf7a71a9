//! `co65` object file converter options and invocation.

use std::fmt;

use crate::args::CommandLine;
use crate::error::DriverError;
use crate::invoke::ToolOutput;
use crate::toolchain::Toolchain;

/// o65 model selected with `--o65-model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum O65Model {
    Lunix,
    OsA65,
    Cc65Module,
}

impl fmt::Display for O65Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            O65Model::Lunix => "lunix",
            O65Model::OsA65 => "os/a65",
            O65Model::Cc65Module => "cc65-module",
        })
    }
}

/// Options for the `co65` object file converter.
///
/// All fields are generic: there are no repeated or concatenated flag
/// groups on this tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectToolOptions {
    pub bss_label: Option<String>,
    pub bss_name: Option<String>,
    pub code_label: Option<String>,
    pub code_name: Option<String>,
    pub data_label: Option<String>,
    pub data_name: Option<String>,
    pub debug: bool,
    pub debug_info: bool,
    pub help: bool,
    pub o65_model: Option<O65Model>,
    pub no_output: bool,
    pub output_name: Option<String>,
    pub verbose: bool,
    pub version: bool,
    pub zeropage_label: Option<String>,
    pub zeropage_name: Option<String>,
}

impl ObjectToolOptions {
    pub(crate) fn render(&self, filename: &str) -> CommandLine {
        let mut cmd = CommandLine::new();
        cmd.opt("--bss-label", &self.bss_label);
        cmd.opt("--bss-name", &self.bss_name);
        cmd.opt("--code-label", &self.code_label);
        cmd.opt("--code-name", &self.code_name);
        cmd.opt("--data-label", &self.data_label);
        cmd.opt("--data-name", &self.data_name);
        cmd.flag_if(self.debug, "--debug");
        cmd.flag_if(self.debug_info, "--debug-info");
        cmd.flag_if(self.help, "--help");
        cmd.opt("--o65-model", &self.o65_model);
        cmd.flag_if(self.no_output, "--no-output");
        cmd.opt("--output-name", &self.output_name);
        cmd.flag_if(self.verbose, "--verbose");
        cmd.flag_if(self.version, "--version");
        cmd.opt("--zeropage-label", &self.zeropage_label);
        cmd.opt("--zeropage-name", &self.zeropage_name);
        cmd.positional(filename);
        cmd
    }
}

/// Run `co65` on one object file using the default toolchain.
pub async fn co65(
    options: &ObjectToolOptions,
    filename: impl AsRef<str>,
) -> Result<ToolOutput, DriverError> {
    Toolchain::default().convert(options, filename).await
}
