// file: src/lib.rs
// version: 3.1.0
// guid: 4e2b7d10-93a6-4f0c-b8d5-71c6e0f29a47

//! # qwr
//!
//! A small launcher that turns a handful of intents (create a disk, install an
//! OS, run a VM, run a VM with SSH access) into `qemu-img` and
//! `qemu-system-x86_64` invocations.
//!
//! The pipeline is tokenize, interpret, build, execute:
//!
//! ```
//! use qwr::{cli, qemu};
//!
//! let tokens = cli::tokenize(["--img=disk.qcow2", "--sz=20", "create-drive"]);
//! if let cli::Invocation::Launch { config, .. } = cli::interpret(&tokens).unwrap() {
//!     let commands = qemu::build(&config).unwrap();
//!     assert_eq!(commands[0].to_string(), "qemu-img create -f qcow2 disk.qcow2 20G");
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod qemu;
pub mod utils;

pub use error::{QwrError, Result, UsageError};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
