// file: src/cli/tokens.rs
// version: 1.1.0
// guid: 59781c89-f5ee-40ff-942c-b3590062eddb

//! Raw argument tokenizer

use clap_lex::RawArgs;
use std::ffi::OsString;

/// One command line argument, classified but not yet interpreted.
///
/// Values keep their raw bytes; decoding happens during interpretation so
/// that a help flag seen earlier still wins over a badly encoded argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgToken {
    /// `-x`; the whole cluster after the dash is kept as one name
    Short(String),
    /// `--name` or `--name=value`
    Long {
        name: String,
        value: Option<OsString>,
    },
    Positional(OsString),
}

impl ArgToken {
    pub fn short(name: impl Into<String>) -> Self {
        Self::Short(name.into())
    }

    pub fn long(name: impl Into<String>) -> Self {
        Self::Long {
            name: name.into(),
            value: None,
        }
    }

    pub fn long_with(name: impl Into<String>, value: impl Into<OsString>) -> Self {
        Self::Long {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn positional(value: impl Into<OsString>) -> Self {
        Self::Positional(value.into())
    }
}

/// Split process arguments (without the program name) into tokens.
///
/// Everything after a bare `--` is positional. Flag names that are not
/// valid UTF-8 are kept lossily; they can never match a known flag.
pub fn tokenize<I, T>(args: I) -> Vec<ArgToken>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let raw = RawArgs::new(args);
    let mut cursor = raw.cursor();
    let mut tokens = Vec::new();

    while let Some(arg) = raw.next(&mut cursor) {
        if arg.is_escape() {
            tokens.extend(
                raw.remaining(&mut cursor)
                    .map(|rest| ArgToken::Positional(rest.to_os_string())),
            );
            break;
        }

        if let Some((name, value)) = arg.to_long() {
            let name = match name {
                Ok(name) => name.to_string(),
                Err(raw_name) => raw_name.to_string_lossy().into_owned(),
            };
            tokens.push(ArgToken::Long {
                name,
                value: value.map(|v| v.to_os_string()),
            });
        } else if arg.is_short() {
            let text = arg.to_value_os().to_string_lossy();
            tokens.push(ArgToken::Short(text[1..].to_string()));
        } else {
            tokens.push(ArgToken::Positional(arg.to_value_os().to_os_string()));
        }
    }

    tokens
}
