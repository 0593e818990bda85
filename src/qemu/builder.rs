// file: src/qemu/builder.rs
// version: 1.1.0
// guid: b7e08ec6-c8bc-484b-9a0d-0e0d2b9841ae

//! Per-mode command synthesis
//!
//! Each entry point checks the fields its mode requires before building
//! anything, so a single [`LaunchConfig`] can be checked against any mode.

use super::{firmware, ShellCommand, QEMU_IMG, QEMU_SYSTEM};
use crate::{
    config::{LaunchConfig, Mode},
    error::UsageError,
};
use std::ffi::OsStr;
use tracing::{debug, warn};

/// Build the command sequence for the configured mode
pub fn build(config: &LaunchConfig) -> Result<Vec<ShellCommand>, UsageError> {
    let commands = match config.mode() {
        Mode::CreateDrive => vec![create_drive(config)?],
        Mode::Install => install(config)?,
        Mode::Run => vec![run(config)?],
        Mode::Ssh => vec![ssh(config)?],
    };

    for cmd in &commands {
        debug!("Built command: {}", cmd);
    }
    Ok(commands)
}

/// `qemu-img create` for the primary image
pub fn create_drive(config: &LaunchConfig) -> Result<ShellCommand, UsageError> {
    let image = require(config.image(), Mode::CreateDrive, "img")?;
    let size = require(config.size(), Mode::CreateDrive, "sz")?;
    Ok(disk_command(image, size))
}

/// Disk creation followed by a launch that boots from the ISO
pub fn install(config: &LaunchConfig) -> Result<Vec<ShellCommand>, UsageError> {
    let iso = require(config.iso(), Mode::Install, "iso")?;
    let image = require(config.image(), Mode::Install, "img")?;
    let size = require(config.size(), Mode::Install, "sz")?;

    if let Some(extra) = config.extra_disk() {
        warn!(
            "Ignoring --extra-disk={} in install mode",
            extra.to_string_lossy()
        );
    }

    let launch = launch_command(config)
        .arg("-cdrom")
        .arg(iso)
        .arg("-hda")
        .arg(image)
        .args(["-boot", "d"])
        .args(network_args(None))
        .args(graphical_args());

    Ok(vec![disk_command(image, size), launch])
}

/// Launch with a windowed display
pub fn run(config: &LaunchConfig) -> Result<ShellCommand, UsageError> {
    let image = require(config.image(), Mode::Run, "img")?;

    let cmd = launch_command(config)
        .arg("-hda")
        .arg(image)
        .args(network_args(None))
        .args(graphical_args());

    Ok(with_extra_disk(cmd, config))
}

/// Headless launch with host port forwarding to guest sshd
pub fn ssh(config: &LaunchConfig) -> Result<ShellCommand, UsageError> {
    let image = require(config.image(), Mode::Ssh, "img")?;

    let cmd = launch_command(config)
        .arg("-hda")
        .arg(image)
        .args(network_args(Some(config.ssh_port())))
        .arg("-nographic");

    Ok(with_extra_disk(cmd, config))
}

fn require<'a, T: ?Sized>(
    value: Option<&'a T>,
    mode: Mode,
    flag: &'static str,
) -> Result<&'a T, UsageError> {
    value.ok_or(UsageError::MissingField { mode, flag })
}

fn disk_command(image: &OsStr, size: &str) -> ShellCommand {
    ShellCommand::new(QEMU_IMG)
        .args(["create", "-f", "qcow2"])
        .arg(image)
        .arg(format!("{}G", size))
}

/// Segments shared by every launch, up to and including `-cpu host`.
///
/// The firmware block must precede the CPU model for the pflash and SMM
/// machine options to apply.
fn launch_command(config: &LaunchConfig) -> ShellCommand {
    ShellCommand::new(QEMU_SYSTEM)
        .arg("-enable-kvm")
        .args(["-m".to_string(), format!("{}G", config.memory())])
        .args(["-smp", config.cores()])
        .args(firmware::firmware_args(
            config.use_secure_boot(),
            config.use_tpm(),
        ))
        .args(["-cpu", "host"])
}

fn network_args(ssh_port: Option<&str>) -> Vec<String> {
    let netdev = match ssh_port {
        Some(port) => format!("user,id=net0,hostfwd=tcp::{}-:22", port),
        None => "user,id=net0".to_string(),
    };
    vec![
        "-netdev".to_string(),
        netdev,
        "-device".to_string(),
        "e1000,netdev=net0".to_string(),
    ]
}

fn graphical_args() -> [&'static str; 4] {
    ["-vga", "virtio", "-display", "sdl"]
}

fn with_extra_disk(cmd: ShellCommand, config: &LaunchConfig) -> ShellCommand {
    match config.extra_disk() {
        Some(extra) => cmd.arg("-hdb").arg(extra),
        None => cmd,
    }
}
