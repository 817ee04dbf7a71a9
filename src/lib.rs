//! cc65-driver - Typed async driver for the cc65 6502 toolchain.
//!
//! This crate translates typed option structs into command lines for the
//! four external cc65 binaries and runs them asynchronously:
//!
//! - **`compiler`**: `cc65` C compiler options ([`cc65`])
//! - **`assembler`**: `ca65` macro assembler options ([`ca65`])
//! - **`linker`**: `ld65` linker options ([`ld65`])
//! - **`object`**: `co65` object converter options ([`co65`])
//! - **`toolchain`**: binary locations and working directory, TOML-loadable
//! - **`invoke`**: shell invocation with captured stdout/stderr
//!
//! # Architecture
//!
//! ```text
//!   options struct ──render──▶ CommandLine ──sh -c──▶ ToolOutput
//!        (args)                  (invoke)              or DriverError
//! ```
//!
//! The toolchain binaries are opaque collaborators: nothing here validates
//! option combinations or inspects the artifacts they produce. Every call
//! spawns one independent process and suspends only the awaiting caller; no
//! timeout, retry, or cancellation is applied.
//!
//! # Example
//!
//! ```rust,no_run
//! use cc65_driver::{CompilerOptions, Optimizer, OptimizerSetting, cc65};
//!
//! # async fn build() -> Result<(), cc65_driver::DriverError> {
//! let options = CompilerOptions {
//!     check_stack: true,
//!     define: vec!["DEBUG".to_string()],
//!     optimizer: Optimizer::Enabled {
//!         settings: vec![OptimizerSetting::InlineStdFuncs],
//!     },
//!     ..Default::default()
//! };
//! let output = cc65(&options, "main.c").await?;
//! println!("{}", output.stdout);
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod assembler;
pub mod compiler;
pub mod error;
pub mod invoke;
pub mod linker;
pub mod object;
pub mod target;
pub mod toolchain;

pub use args::CommandLine;
pub use assembler::{AssemblerCpu, AssemblerFeature, AssemblerOptions, MemoryModel, ca65};
pub use compiler::{
    CStandard, CompilerCpu, CompilerOptions, Optimizer, OptimizerSetting, cc65,
};
pub use error::{ConfigError, DriverError};
pub use invoke::{Tool, ToolOutput};
pub use linker::{LinkerOptions, ld65};
pub use object::{O65Model, ObjectToolOptions, co65};
pub use target::{LinkerTarget, TargetSystem};
pub use toolchain::Toolchain;
