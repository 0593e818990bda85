// file: src/logging/mod.rs
// version: 2.0.0
// guid: 23240c6c-cd8b-4a8e-a0b4-8e0fdf6820fd

//! Logging system for qwr

pub mod logger;

pub use logger::init_logger;
