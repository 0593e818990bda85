// file: src/executor.rs
// version: 3.1.0
// guid: 8322d1f5-ffd8-42d4-8180-8a319f8582db

//! Sequential execution of built commands

use crate::{
    config::RunOptions,
    error::QwrError,
    qemu::ShellCommand,
    utils::SystemUtils,
    Result,
};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info};

/// Privilege escalation wrapper for qemu commands
pub const SUDO: &str = "sudo";

/// Runs commands one after another with the terminal attached
pub struct Executor {
    options: RunOptions,
    escalate: bool,
}

impl Executor {
    /// Create an executor that escalates through `sudo` unless already root
    pub fn new(options: RunOptions) -> Self {
        Self::with_escalation(options, !SystemUtils::is_root())
    }

    /// Create an executor with an explicit escalation choice
    pub fn with_escalation(options: RunOptions, escalate: bool) -> Self {
        Self { options, escalate }
    }

    /// The command as it will actually be spawned
    pub fn prepare(&self, command: &ShellCommand) -> ShellCommand {
        if self.escalate {
            ShellCommand::new(SUDO)
                .arg(command.program())
                .args(command.get_args())
        } else {
            command.clone()
        }
    }

    /// Run every command in order, stopping at the first failure
    pub async fn run_all(&self, commands: &[ShellCommand]) -> Result<()> {
        for command in commands {
            self.run(command).await?;
        }
        Ok(())
    }

    /// Run a single command and wait for it to exit
    pub async fn run(&self, command: &ShellCommand) -> Result<()> {
        let prepared = self.prepare(command);

        if self.options.dry_run {
            println!("{}", prepared);
            return Ok(());
        }

        SystemUtils::find_program(prepared.program())?;
        if self.escalate {
            SystemUtils::find_program(command.program())?;
        }

        info!("Executing: {}", prepared);

        let status = Command::new(prepared.program())
            .args(prepared.get_args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                QwrError::execution(format!("failed to start {}: {}", prepared.program(), e))
            })?;

        if !status.success() {
            return Err(QwrError::execution(format!(
                "{} {}",
                command.program(),
                describe(status)
            )));
        }

        debug!("{} completed", command.program());
        Ok(())
    }
}

fn describe(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(dry_run: bool) -> RunOptions {
        RunOptions {
            dry_run,
            ..RunOptions::default()
        }
    }

    #[test]
    fn test_prepare_with_escalation() {
        let executor = Executor::with_escalation(options(false), true);
        let cmd = ShellCommand::new("qemu-img").args(["create", "-f", "qcow2", "a.qcow2", "1G"]);

        let prepared = executor.prepare(&cmd);

        assert_eq!(prepared.program(), "sudo");
        assert_eq!(prepared.to_string(), "sudo qemu-img create -f qcow2 a.qcow2 1G");
    }

    #[test]
    fn test_prepare_without_escalation() {
        let executor = Executor::with_escalation(options(false), false);
        let cmd = ShellCommand::new("qemu-img").arg("--version");

        assert_eq!(executor.prepare(&cmd), cmd);
    }

    #[tokio::test]
    async fn test_dry_run_spawns_nothing() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir.path().join("marker");
        let executor = Executor::with_escalation(options(true), false);
        let cmd = ShellCommand::new("touch").arg(marker.to_string_lossy().into_owned());

        // Act
        let result = executor.run(&cmd).await;

        // Assert
        assert!(result.is_ok());
        assert!(!marker.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_all_in_order() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir.path().join("marker");
        let copy = temp_dir.path().join("copy");
        let executor = Executor::with_escalation(options(false), false);
        let commands = [
            ShellCommand::new("touch").arg(marker.to_string_lossy().into_owned()),
            ShellCommand::new("cp").args([marker.to_string_lossy().into_owned(), copy.to_string_lossy().into_owned()]),
        ];

        // Act
        let result = executor.run_all(&commands).await;

        // Assert
        assert!(result.is_ok());
        assert!(marker.exists());
        assert!(copy.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_stops_sequence() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir.path().join("marker");
        let executor = Executor::with_escalation(options(false), false);
        let commands = [
            ShellCommand::new("false"),
            ShellCommand::new("touch").arg(marker.to_string_lossy().into_owned()),
        ];

        // Act
        let result = executor.run_all(&commands).await;

        // Assert
        match result.unwrap_err() {
            QwrError::Execution(msg) => assert_eq!(msg, "false exited with status 1"),
            other => panic!("Expected Execution, got: {:?}", other),
        }
        assert!(!marker.exists());
    }

    #[tokio::test]
    async fn test_missing_program() {
        let executor = Executor::with_escalation(options(false), false);
        let cmd = ShellCommand::new("qwr-definitely-not-installed");

        let result = executor.run(&cmd).await;

        assert!(matches!(result, Err(QwrError::ToolNotFound(_))));
    }
}
