//! Toolchain configuration: where the four binaries live and where they run.
//!
//! Defaults resolve each tool by its conventional name on `PATH`. A TOML
//! file can override individual binaries and pin a working directory:
//!
//! ```toml
//! cc65 = "/opt/cc65/bin/cc65"
//! ld65 = "/opt/cc65/bin/ld65"
//! working_dir = "build"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::args::CommandLine;
use crate::assembler::AssemblerOptions;
use crate::compiler::CompilerOptions;
use crate::error::{ConfigError, DriverError};
use crate::invoke::{self, Tool, ToolOutput};
use crate::linker::LinkerOptions;
use crate::object::ObjectToolOptions;

const CONFIG_DIR: &str = ".cc65-driver";
const CONFIG_FILE: &str = "config.toml";

/// Locations of the external binaries plus an optional working directory
/// applied to every invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Toolchain {
    pub cc65: String,
    pub ca65: String,
    pub ld65: String,
    pub co65: String,
    /// Directory the tools run in; inherited from the caller when unset.
    pub working_dir: Option<PathBuf>,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            cc65: Tool::Compiler.binary_name().to_string(),
            ca65: Tool::Assembler.binary_name().to_string(),
            ld65: Tool::Linker.binary_name().to_string(),
            co65: Tool::ObjectConverter.binary_name().to_string(),
            working_dir: None,
        }
    }
}

impl Toolchain {
    /// Load a toolchain description from the given TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        toml::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Returns the default configuration path
    /// (`$HOME/.cc65-driver/config.toml`).
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = home_dir().ok_or(ConfigError::HomeDirMissing)?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the toolchain for the current working directory, preferring a
    /// project-local file over the global one and falling back to the
    /// defaults when neither exists.
    pub fn load_scoped() -> Result<Self, ConfigError> {
        if let Some(path) = project_config_path() {
            return Self::from_file(path);
        }
        let global = Self::default_path()?;
        if global.exists() {
            Self::from_file(global)
        } else {
            Ok(Self::default())
        }
    }

    fn binary(&self, tool: Tool) -> &str {
        match tool {
            Tool::Compiler => &self.cc65,
            Tool::Assembler => &self.ca65,
            Tool::Linker => &self.ld65,
            Tool::ObjectConverter => &self.co65,
        }
    }

    /// Compile one C source file with `cc65`.
    pub async fn compile(
        &self,
        options: &CompilerOptions,
        filename: impl AsRef<str>,
    ) -> Result<ToolOutput, DriverError> {
        self.run(Tool::Compiler, options.render(filename.as_ref()))
            .await
    }

    /// Assemble one source file with `ca65`.
    pub async fn assemble(
        &self,
        options: &AssemblerOptions,
        filename: impl AsRef<str>,
    ) -> Result<ToolOutput, DriverError> {
        self.run(Tool::Assembler, options.render(filename.as_ref()))
            .await
    }

    /// Link zero or more object files with `ld65`.
    pub async fn link<S: AsRef<str>>(
        &self,
        options: &LinkerOptions,
        filenames: &[S],
    ) -> Result<ToolOutput, DriverError> {
        self.run(Tool::Linker, options.render(filenames)).await
    }

    /// Convert one object file with `co65`.
    pub async fn convert(
        &self,
        options: &ObjectToolOptions,
        filename: impl AsRef<str>,
    ) -> Result<ToolOutput, DriverError> {
        self.run(Tool::ObjectConverter, options.render(filename.as_ref()))
            .await
    }

    async fn run(&self, tool: Tool, cmd: CommandLine) -> Result<ToolOutput, DriverError> {
        invoke::run(tool, self.binary(tool), &cmd, self.working_dir.as_deref()).await
    }
}

fn project_config_path() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    for ancestor in cwd.ancestors() {
        let candidate = ancestor.join(CONFIG_DIR).join(CONFIG_FILE);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{Optimizer, OptimizerSetting};

    #[test]
    fn default_resolves_conventional_binary_names() {
        let toolchain = Toolchain::default();
        assert_eq!(toolchain.cc65, "cc65");
        assert_eq!(toolchain.ca65, "ca65");
        assert_eq!(toolchain.ld65, "ld65");
        assert_eq!(toolchain.co65, "co65");
        assert!(toolchain.working_dir.is_none());
    }

    #[test]
    fn toml_overrides_apply_per_field() {
        let toolchain: Toolchain = toml::from_str(
            r#"
            cc65 = "/opt/cc65/bin/cc65"
            working_dir = "build"
            "#,
        )
        .unwrap();
        assert_eq!(toolchain.cc65, "/opt/cc65/bin/cc65");
        assert_eq!(toolchain.ca65, "ca65");
        assert_eq!(toolchain.working_dir, Some(PathBuf::from("build")));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "ld65 = \"/usr/local/bin/ld65\"\n").unwrap();

        let toolchain = Toolchain::from_file(&path).unwrap();
        assert_eq!(toolchain.ld65, "/usr/local/bin/ld65");
        assert_eq!(toolchain.cc65, "cc65");
    }

    #[test]
    fn from_file_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "cc65 = [not toml").unwrap();

        let res = Toolchain::from_file(&path);
        assert!(matches!(res, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn default_path_respects_home() {
        let home = env::var("HOME").expect("HOME must be set for this test");
        let expected = PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE);
        assert_eq!(Toolchain::default_path().unwrap(), expected);
    }

    #[tokio::test]
    async fn compile_runs_the_configured_binary() {
        let toolchain = Toolchain {
            cc65: "echo".to_string(),
            ..Default::default()
        };
        let options = CompilerOptions {
            check_stack: true,
            define: vec!["DEBUG".to_string()],
            optimizer: Optimizer::Enabled {
                settings: vec![OptimizerSetting::InlineStdFuncs],
            },
            ..Default::default()
        };
        let out = toolchain.compile(&options, "main.c").await.unwrap();
        assert_eq!(out.stdout, "--check-stack -D DEBUG -Os main.c\n");
    }

    #[tokio::test]
    async fn link_accepts_empty_filename_list() {
        let toolchain = Toolchain {
            ld65: "echo".to_string(),
            ..Default::default()
        };
        let options = LinkerOptions {
            libs: vec!["c".to_string()],
            objs: vec!["main.o".to_string()],
            ..Default::default()
        };
        let out = toolchain.link::<&str>(&options, &[]).await.unwrap();
        assert_eq!(out.stdout, "--lib c --obj main.o\n");
    }
}
