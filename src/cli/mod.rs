// file: src/cli/mod.rs
// version: 2.0.0
// guid: f5922889-25b0-4182-ac9f-4b1f78f42b3c

//! Command line interface for qwr

pub mod args;
pub mod commands;
pub mod help;
pub mod tokens;

pub use args::{interpret, Invocation};
pub use commands::run_invocation;
pub use tokens::{tokenize, ArgToken};
