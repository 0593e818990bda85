// file: src/cli/commands.rs
// version: 2.0.0
// guid: a3f1c9e2-6b0d-4c57-9e18-2d7b4f0a8c31

//! Command implementations for the CLI

use super::{args::Invocation, help};
use crate::{
    config::{LaunchConfig, RunOptions},
    executor::Executor,
    logging::logger::{with_async_operation_span, with_operation_span},
    qemu, Result,
};
use tracing::info;

/// Carry out whatever the command line asked for
pub async fn run_invocation(invocation: Invocation) -> Result<()> {
    match invocation {
        Invocation::Help => {
            print!("{}", help::usage());
            Ok(())
        }
        Invocation::Version => {
            println!("{} {}", help::PROGRAM, crate::VERSION);
            Ok(())
        }
        Invocation::Launch { config, options } => launch_command(&config, options).await,
    }
}

/// Build the commands for the configured mode and execute them in order
pub async fn launch_command(config: &LaunchConfig, options: RunOptions) -> Result<()> {
    let commands = with_operation_span("build", || qemu::build(config))?;
    info!(
        "Prepared {} command(s) for `{}`",
        commands.len(),
        config.mode()
    );

    let executor = Executor::new(options);
    with_async_operation_span("execute", || executor.run_all(&commands)).await
}
