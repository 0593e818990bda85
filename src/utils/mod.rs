// file: src/utils/mod.rs
// version: 2.0.0
// guid: 0c0c0114-79a8-47ca-b905-674513a72bc7

//! Utility modules for system operations

pub mod system;

pub use system::SystemUtils;
