//! `ca65` assembler options and invocation.

use std::fmt;

use crate::args::CommandLine;
use crate::error::DriverError;
use crate::invoke::ToolOutput;
use crate::target::TargetSystem;
use crate::toolchain::Toolchain;

/// CPU variants accepted by the assembler's `--cpu` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerCpu {
    Mos6502,
    Mos65SC02,
    Mos65C02,
    Mos65816,
    Sunplus,
    Sweet16,
    HuC6280,
}

impl fmt::Display for AssemblerCpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssemblerCpu::Mos6502 => "6502",
            AssemblerCpu::Mos65SC02 => "65SC02",
            AssemblerCpu::Mos65C02 => "65C02",
            AssemblerCpu::Mos65816 => "65816",
            AssemblerCpu::Sunplus => "sunplus",
            AssemblerCpu::Sweet16 => "sweet16",
            AssemblerCpu::HuC6280 => "HuC6280",
        })
    }
}

/// Memory model selected with `--memory-model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryModel {
    Near,
    Far,
    Huge,
}

impl fmt::Display for MemoryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MemoryModel::Near => "near",
            MemoryModel::Far => "far",
            MemoryModel::Huge => "huge",
        })
    }
}

/// Syntax extensions toggled with repeated `--feature` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerFeature {
    AtInIdentifiers,
    CComments,
    DollarInIdentifiers,
    DollarIsPc,
    LabelsWithoutColons,
    LeadingDotInIdentifiers,
    LooseCharTerm,
    LooseStringTerm,
    MissingCharTerm,
    OrgPerSeg,
    PcAssignment,
    UbiquitousIdents,
}

impl AssemblerFeature {
    pub fn as_str(self) -> &'static str {
        match self {
            AssemblerFeature::AtInIdentifiers => "at_in_identifiers",
            AssemblerFeature::CComments => "c_comments",
            AssemblerFeature::DollarInIdentifiers => "dollar_in_identifiers",
            AssemblerFeature::DollarIsPc => "dollar_is_pc",
            AssemblerFeature::LabelsWithoutColons => "labels_without_colons",
            AssemblerFeature::LeadingDotInIdentifiers => "leading_dot_in_identifiers",
            AssemblerFeature::LooseCharTerm => "loose_char_term",
            AssemblerFeature::LooseStringTerm => "loose_string_term",
            AssemblerFeature::MissingCharTerm => "missing_char_term",
            AssemblerFeature::OrgPerSeg => "org_per_seg",
            AssemblerFeature::PcAssignment => "pc_assignment",
            AssemblerFeature::UbiquitousIdents => "ubiquitous_idents",
        }
    }
}

impl fmt::Display for AssemblerFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for the `ca65` macro assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblerOptions {
    pub cpu: Option<AssemblerCpu>,
    /// Syntax extensions, each rendered as `--feature <name>`.
    pub features: Vec<AssemblerFeature>,
    pub forget_inc_paths: bool,
    pub debug_info: bool,
    pub ignore_case: bool,
    pub listing: bool,
    pub list_bytes: Option<u32>,
    pub macpack_dir: Option<String>,
    pub memory_model: Option<MemoryModel>,
    pub output_file: Option<String>,
    pub pagelength: Option<u32>,
    pub smart_mode: bool,
    pub target: Option<TargetSystem>,
    pub verbose: bool,
    /// Symbol definitions, each rendered as `-D <value>`.
    pub define: Vec<String>,
    /// Include search paths, each rendered as `-I <dir>`.
    pub include_dirs: Vec<String>,
    pub auto_import: bool,
    pub version: bool,
    pub warning_level: Option<u32>,
}

impl AssemblerOptions {
    pub(crate) fn render(&self, filename: &str) -> CommandLine {
        let mut cmd = CommandLine::new();
        cmd.opt("--cpu", &self.cpu);
        cmd.flag_if(self.forget_inc_paths, "--forget-inc-paths");
        cmd.flag_if(self.debug_info, "--debug-info");
        cmd.flag_if(self.ignore_case, "--ignore-case");
        cmd.flag_if(self.listing, "--listing");
        cmd.opt("--list-bytes", &self.list_bytes);
        cmd.opt("--macpack-dir", &self.macpack_dir);
        cmd.opt("--memory-model", &self.memory_model);
        cmd.opt("--output-file", &self.output_file);
        cmd.opt("--pagelength", &self.pagelength);
        cmd.flag_if(self.smart_mode, "--smart-mode");
        cmd.opt("--target", &self.target);
        cmd.flag_if(self.verbose, "--verbose");
        cmd.flag_if(self.auto_import, "--auto-import");
        cmd.flag_if(self.version, "--version");
        cmd.opt("--warning-level", &self.warning_level);
        cmd.repeated("-D", &self.define);
        cmd.repeated("-I", &self.include_dirs);
        cmd.repeated("--feature", &self.features);
        cmd.positional(filename);
        cmd
    }
}

/// Run `ca65` on one source file using the default toolchain.
pub async fn ca65(
    options: &AssemblerOptions,
    filename: impl AsRef<str>,
) -> Result<ToolOutput, DriverError> {
    Toolchain::default().assemble(options, filename).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(cmd: &CommandLine) -> Vec<&str> {
        cmd.tokens().iter().map(String::as_str).collect()
    }

    #[test]
    fn default_options_render_only_the_filename() {
        let cmd = AssemblerOptions::default().render("crt0.s");
        assert_eq!(toks(&cmd), ["crt0.s"]);
    }

    #[test]
    fn features_render_as_repeated_feature_flags() {
        let options = AssemblerOptions {
            features: vec![
                AssemblerFeature::CComments,
                AssemblerFeature::LabelsWithoutColons,
            ],
            ..Default::default()
        };
        let cmd = options.render("crt0.s");
        assert_eq!(
            toks(&cmd),
            [
                "--feature",
                "c_comments",
                "--feature",
                "labels_without_colons",
                "crt0.s",
            ]
        );
    }

    #[test]
    fn generic_fields_precede_specialized_lists() {
        let options = AssemblerOptions {
            cpu: Some(AssemblerCpu::Mos65816),
            smart_mode: true,
            memory_model: Some(MemoryModel::Far),
            warning_level: Some(2),
            define: vec!["NDEBUG".to_string()],
            include_dirs: vec!["asminc".to_string()],
            features: vec![AssemblerFeature::DollarIsPc],
            ..Default::default()
        };
        let cmd = options.render("crt0.s");
        assert_eq!(
            toks(&cmd),
            [
                "--cpu",
                "65816",
                "--memory-model",
                "far",
                "--smart-mode",
                "--warning-level",
                "2",
                "-D",
                "NDEBUG",
                "-I",
                "asminc",
                "--feature",
                "dollar_is_pc",
                "crt0.s",
            ]
        );
    }

    #[test]
    fn cpu_wire_spellings() {
        assert_eq!(AssemblerCpu::Mos65SC02.to_string(), "65SC02");
        assert_eq!(AssemblerCpu::HuC6280.to_string(), "HuC6280");
        assert_eq!(AssemblerCpu::Sweet16.to_string(), "sweet16");
    }
}
