// file: src/qemu/mod.rs
// version: 1.0.0
// guid: d9518349-aaeb-4079-a260-b9a0473007d2

//! QEMU command construction

pub mod builder;
pub mod command;
pub mod firmware;

pub use builder::{build, create_drive, install, run, ssh};
pub use command::ShellCommand;

/// Disk image tool used for drive creation
pub const QEMU_IMG: &str = "qemu-img";

/// System emulator used for every launch
pub const QEMU_SYSTEM: &str = "qemu-system-x86_64";
