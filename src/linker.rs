//! `ld65` linker options and invocation.
//!
//! Unlike the other tools the linker takes zero or more positional object
//! files; inputs can also arrive entirely through the `--obj` and `--lib`
//! lists, in which case no positional token is emitted.

use crate::args::CommandLine;
use crate::error::DriverError;
use crate::invoke::ToolOutput;
use crate::target::LinkerTarget;
use crate::toolchain::Toolchain;

/// Options for the `ld65` linker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkerOptions {
    pub allow_multiple_definition: bool,
    pub start_group: bool,
    pub end_group: bool,
    pub help: bool,
    pub mapfile: Option<String>,
    pub output_name: Option<String>,
    pub target: Option<LinkerTarget>,
    /// Symbols imported unconditionally, each rendered as `--force-import <sym>`.
    pub force_import: Vec<String>,
    pub verbose: bool,
    pub vm: bool,
    pub output_config_file: Option<String>,
    /// Symbol definitions, each rendered as `-D <value>`.
    pub define: Vec<String>,
    /// Library search paths, each rendered as `--lib-path <dir>`.
    pub lib_paths: Vec<String>,
    pub ln: bool,
    pub start_addr: Option<u32>,
    pub version: bool,
    pub cfg_path: Option<String>,
    pub dbgfile: Option<String>,
    pub large_alignment: bool,
    /// Libraries to link, each rendered as `--lib <name>`.
    pub libs: Vec<String>,
    /// Object files to link, each rendered as `--obj <file>`.
    pub objs: Vec<String>,
    /// Object search paths, each rendered as `--obj-path <dir>`.
    pub obj_paths: Vec<String>,
}

impl LinkerOptions {
    pub(crate) fn render<S: AsRef<str>>(&self, filenames: &[S]) -> CommandLine {
        let mut cmd = CommandLine::new();
        cmd.flag_if(self.allow_multiple_definition, "--allow-multiple-definition");
        cmd.flag_if(self.start_group, "--start-group");
        cmd.flag_if(self.end_group, "--end-group");
        cmd.flag_if(self.help, "--help");
        cmd.opt("--mapfile", &self.mapfile);
        cmd.opt("--output-name", &self.output_name);
        cmd.opt("--target", &self.target);
        cmd.flag_if(self.verbose, "--verbose");
        cmd.flag_if(self.vm, "--vm");
        cmd.opt("--output-config-file", &self.output_config_file);
        cmd.flag_if(self.ln, "--ln");
        cmd.opt("--start-addr", &self.start_addr);
        cmd.flag_if(self.version, "--version");
        cmd.opt("--cfg-path", &self.cfg_path);
        cmd.opt("--dbgfile", &self.dbgfile);
        cmd.flag_if(self.large_alignment, "--large-alignment");
        cmd.repeated("-D", &self.define);
        cmd.repeated("--force-import", &self.force_import);
        cmd.repeated("--lib-path", &self.lib_paths);
        cmd.repeated("--lib", &self.libs);
        cmd.repeated("--obj-path", &self.obj_paths);
        cmd.repeated("--obj", &self.objs);
        for filename in filenames {
            cmd.positional(filename.as_ref());
        }
        cmd
    }
}

/// Run `ld65` over the given object files using the default toolchain.
pub async fn ld65<S: AsRef<str>>(
    options: &LinkerOptions,
    filenames: &[S],
) -> Result<ToolOutput, DriverError> {
    Toolchain::default().link(options, filenames).await
}
