// file: src/cli/args.rs
// version: 2.1.0
// guid: 9793d3e4-ae5b-4482-a271-bbf4886d39a1

//! Command line interpretation

use super::tokens::ArgToken;
use crate::{
    config::{LaunchConfig, LaunchConfigBuilder, Mode, RunOptions, Verbosity},
    error::UsageError,
};
use std::ffi::OsStr;

/// Flag names as they appear after `--`
pub mod flags {
    pub const HELP_SHORT: &str = "h";
    pub const HELP: &str = "help";
    pub const VERSION: &str = "version";
    pub const ISO: &str = "iso";
    pub const SIZE: &str = "sz";
    pub const CORES: &str = "cores";
    pub const MEMORY: &str = "mem";
    pub const IMAGE: &str = "img";
    pub const EXTRA_DISK: &str = "extra-disk";
    pub const SSH_PORT: &str = "ssh-port";
    pub const TPM: &str = "tpm";
    pub const SECURE: &str = "secure";
    pub const DRY_RUN: &str = "dry-run";
    pub const VERBOSE: &str = "verbose";
    pub const QUIET: &str = "quiet";
}

/// What the command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    Launch {
        config: LaunchConfig,
        options: RunOptions,
    },
}

/// Fold the tokens into an [`Invocation`].
///
/// Help short-circuits at the point it is seen, so errors in earlier tokens
/// still win. Values are decoded only when they are reached, and only for
/// fields that must be text; paths stay raw. Mode-specific required fields
/// are not checked here.
pub fn interpret(tokens: &[ArgToken]) -> Result<Invocation, UsageError> {
    if tokens.is_empty() {
        return Ok(Invocation::Help);
    }

    let mut builder = LaunchConfig::builder();
    let mut options = RunOptions::default();

    for token in tokens {
        match token {
            ArgToken::Short(name) if name == flags::HELP_SHORT => return Ok(Invocation::Help),
            ArgToken::Short(name) => return Err(UsageError::UnknownFlag(format!("-{}", name))),
            ArgToken::Long { name, value } => match name.as_str() {
                flags::HELP => return Ok(Invocation::Help),
                flags::VERSION => return Ok(Invocation::Version),
                flags::TPM => builder = builder.tpm(true),
                flags::SECURE => builder = builder.secure_boot(true),
                flags::DRY_RUN => options.dry_run = true,
                flags::VERBOSE => options.verbosity = Verbosity::Verbose,
                flags::QUIET => options.verbosity = Verbosity::Quiet,
                other => builder = apply_valued(builder, other, value.as_deref())?,
            },
            ArgToken::Positional(value) => {
                let mode: Mode = value
                    .to_str()
                    .ok_or_else(|| {
                        UsageError::UnknownArgument(value.to_string_lossy().into_owned())
                    })?
                    .parse()?;
                if let Some(first) = builder.current_mode() {
                    return Err(UsageError::MultipleModes {
                        first,
                        second: mode,
                    });
                }
                builder = builder.mode(mode);
            }
        }
    }

    let config = builder.build().ok_or(UsageError::NoMode)?;
    Ok(Invocation::Launch { config, options })
}

/// Flags that require `=value`, with the placeholder shown when it is missing
const VALUED_FLAGS: [(&str, &str); 7] = [
    (flags::MEMORY, "<amt>"),
    (flags::CORES, "<amt>"),
    (flags::IMAGE, "<img.qcow2>"),
    (flags::EXTRA_DISK, "<img.qcow2>"),
    (flags::ISO, "<file.iso>"),
    (flags::SIZE, "<amt>"),
    (flags::SSH_PORT, "<port>"),
];

/// Apply one of the flags that take `=value`
fn apply_valued(
    builder: LaunchConfigBuilder,
    name: &str,
    value: Option<&OsStr>,
) -> Result<LaunchConfigBuilder, UsageError> {
    let (flag, hint) = VALUED_FLAGS
        .iter()
        .copied()
        .find(|(flag, _)| *flag == name)
        .ok_or_else(|| UsageError::UnknownFlag(format!("--{}", name)))?;
    let value = value.ok_or(UsageError::MissingValue { flag, hint })?;

    let text = || {
        value.to_str().ok_or_else(|| UsageError::InvalidEncoding {
            flag,
            value: value.to_string_lossy().into_owned(),
        })
    };

    Ok(match flag {
        flags::IMAGE => builder.image(value),
        flags::EXTRA_DISK => builder.extra_disk(value),
        flags::ISO => builder.iso(value),
        flags::MEMORY => builder.memory(text()?),
        flags::CORES => builder.cores(text()?),
        flags::SIZE => builder.size(text()?),
        _ => builder.ssh_port(text()?),
    })
}
