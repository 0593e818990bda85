// file: src/config/mod.rs
// version: 2.0.0
// guid: 458c0ffc-5fd2-4c4a-87c3-e6c273570e69

//! Launch configuration for qwr
//!
//! Holds the immutable VM launch configuration assembled from the command line,
//! together with the runtime options that govern logging and execution.

pub mod launch;

pub use launch::{LaunchConfig, LaunchConfigBuilder};

use crate::error::UsageError;
use clap::ValueEnum;

/// CPU core count used when `--cores` is not given
pub const DEFAULT_CORES: &str = "1";

/// Memory size in GB used when `--mem` is not given
pub const DEFAULT_MEMORY_GB: &str = "1";

/// Host port forwarded to guest port 22 in ssh mode
pub const DEFAULT_SSH_PORT: &str = "2222";

/// Top-level action requested on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Install an OS from an ISO to a disk image
    Install,
    /// Run a VM with a GUI from a disk image
    Run,
    /// Run a VM in headless mode with SSH access
    Ssh,
    /// Create a new disk image
    CreateDrive,
}

impl Mode {
    /// Get the mode as it is spelled on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Install => "install",
            Mode::Run => "run",
            Mode::Ssh => "ssh",
            Mode::CreateDrive => "create-drive",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Mode as ValueEnum>::from_str(s, false)
            .map_err(|_| UsageError::UnknownArgument(s.to_string()))
    }
}

/// Logging verbosity selected by `--quiet` / `--verbose`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Runtime options that never affect the generated commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Print commands instead of executing them
    pub dry_run: bool,
    pub verbosity: Verbosity,
}
