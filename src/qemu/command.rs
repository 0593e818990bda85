// file: src/qemu/command.rs
// version: 1.1.0
// guid: e57d38e0-af74-48c0-af87-198c5e0cbbbb

//! External command as an ordered list of argument tokens

use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
    fmt,
};

/// One external program invocation.
///
/// Arguments stay discrete, raw `OsString`s until the process boundary.
/// `Display` joins them with single spaces for printing, quoting any token
/// a POSIX shell would split or expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    program: String,
    args: Vec<OsString>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Append several arguments in order
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Index of the first argument equal to `token`
    pub fn position(&self, token: &str) -> Option<usize> {
        self.args.iter().position(|a| a == token)
    }

    /// Whether any argument contains `needle`
    pub fn mentions(&self, needle: &str) -> bool {
        self.args.iter().any(|a| a.to_string_lossy().contains(needle))
    }
}

/// Punctuation a POSIX shell passes through unquoted
const SHELL_SAFE: &str = "-_./,:=+@%";

/// Single-quote `token` when a shell would not read it back as one word
fn shell_quote(token: &str) -> Cow<'_, str> {
    let plain = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SHELL_SAFE.contains(c));
    if plain {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(format!("'{}'", token.replace('\'', r"'\''")))
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(&arg.to_string_lossy()))?;
        }
        Ok(())
    }
}
