// file: src/cli/help.rs
// version: 1.1.0
// guid: 5035b2fe-5470-47e9-9282-4b6628737a28

//! Usage text

use super::args::flags;
use crate::config::{Mode, DEFAULT_CORES, DEFAULT_MEMORY_GB, DEFAULT_SSH_PORT};
use clap::ValueEnum;
use std::fmt;

/// Name used in usage lines and examples
pub const PROGRAM: &str = "qwr";

const EXAMPLES: [(&str, &str); 5] = [
    (
        "Create a 20GB disk image",
        "--img=disk.qcow2 --sz=20 create-drive",
    ),
    (
        "Install from an ISO",
        "--iso=ubuntu.iso --img=disk.qcow2 --sz=20 --cores=2 --mem=4 install",
    ),
    ("Run a VM with GUI", "--img=disk.qcow2 --cores=2 --mem=4 run"),
    (
        "Run a VM with SSH access",
        "--img=disk.qcow2 --ssh-port=2222 ssh",
    ),
    (
        "Run with TPM and secure boot",
        "--img=disk.qcow2 --tpm --secure run",
    ),
];

/// The full usage message
pub struct Usage;

impl Usage {
    fn option(f: &mut fmt::Formatter<'_>, flag: String, description: &str) -> fmt::Result {
        writeln!(f, "  {:<26}* {}", flag, description)
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Usage: {} [options] <mode>\n", PROGRAM)?;
        writeln!(f, "A utility for managing QEMU virtual machines.\n")?;

        writeln!(f, "Modes:")?;
        for mode in Mode::value_variants() {
            let help = mode
                .to_possible_value()
                .and_then(|pv| pv.get_help().map(ToString::to_string))
                .unwrap_or_default();
            writeln!(f, "  {:<16}{}", mode.as_str(), help)?;
        }
        writeln!(f)?;

        writeln!(f, "Options:")?;
        Self::option(
            f,
            format!("--{}=<file.iso>", flags::ISO),
            "ISO file for installation (required for install)",
        )?;
        Self::option(
            f,
            format!("--{}=<size>", flags::SIZE),
            "Disk size in GB (required for install, create-drive)",
        )?;
        Self::option(
            f,
            format!("--{}=<file.qcow2>", flags::IMAGE),
            "Disk image file (required for install, run, ssh, create-drive)",
        )?;
        Self::option(
            f,
            format!("--{}=<number>", flags::CORES),
            &format!("Number of CPU cores (default: {})", DEFAULT_CORES),
        )?;
        Self::option(
            f,
            format!("--{}=<size>", flags::MEMORY),
            &format!("Memory size in GB (default: {})", DEFAULT_MEMORY_GB),
        )?;
        Self::option(
            f,
            format!("--{}=<file.qcow2>", flags::EXTRA_DISK),
            "Attach an additional disk image (optional for run, ssh)",
        )?;
        Self::option(
            f,
            format!("--{}=<port>", flags::SSH_PORT),
            &format!(
                "SSH port for host (default: {}, optional for ssh)",
                DEFAULT_SSH_PORT
            ),
        )?;
        Self::option(
            f,
            format!("--{}", flags::TPM),
            "Attach an emulated TPM (requires a running swtpm)",
        )?;
        Self::option(
            f,
            format!("--{}", flags::SECURE),
            "Boot with UEFI secure boot firmware",
        )?;
        Self::option(
            f,
            format!("--{}", flags::DRY_RUN),
            "Print the commands instead of running them",
        )?;
        Self::option(f, format!("--{}", flags::VERBOSE), "Enable debug logging")?;
        Self::option(f, format!("--{}", flags::QUIET), "Only log errors")?;
        Self::option(
            f,
            format!("--{}", flags::VERSION),
            "Display version information",
        )?;
        Self::option(
            f,
            format!("-{}, --{}", flags::HELP_SHORT, flags::HELP),
            "Display this help message",
        )?;
        writeln!(f)?;

        writeln!(f, "Examples:")?;
        for (title, args) in EXAMPLES {
            writeln!(f, "  {}:", title)?;
            writeln!(f, "    {} {}\n", PROGRAM, args)?;
        }

        Ok(())
    }
}

/// Render the full usage message
pub fn usage() -> String {
    Usage.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_every_mode() {
        let text = usage();

        assert!(text.starts_with("Usage: qwr [options] <mode>"));
        for mode in Mode::value_variants() {
            assert!(text.contains(mode.as_str()), "missing mode {}", mode);
        }
        assert!(text.contains("Run a VM in headless mode with SSH access"));
    }

    #[test]
    fn test_usage_lists_every_flag() {
        let text = usage();

        let expected = [
            "--iso=",
            "--sz=",
            "--img=",
            "--cores=",
            "--mem=",
            "--extra-disk=",
            "--ssh-port=",
            "--tpm",
            "--secure",
            "--dry-run",
            "-h, --help",
        ];
        for flag in expected {
            assert!(text.contains(flag), "missing flag {}", flag);
        }
        assert!(text.contains("default: 2222"));
    }

    #[test]
    fn test_usage_display_matches_string() {
        assert_eq!(format!("{}", Usage), usage());
    }
}
