// file: src/utils/system.rs
// version: 2.0.0
// guid: be00cef3-e573-4ef9-96ea-0f756693afb0

//! Host checks used before spawning external programs

use crate::{error::QwrError, Result};
use std::path::PathBuf;
use tracing::debug;

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Locate a program in PATH
    pub fn find_program(program: &str) -> Result<PathBuf> {
        let path = which::which(program).map_err(|_| QwrError::tool_not_found(program))?;
        debug!("Found {} at {}", program, path.display());
        Ok(path)
    }

    /// Check if running with an effective uid of root
    pub fn is_root() -> bool {
        #[cfg(unix)]
        {
            unsafe { libc::geteuid() == 0 }
        }
        #[cfg(not(unix))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_find_program_present() {
        let path = SystemUtils::find_program("sh").unwrap();
        assert!(path.is_absolute());
    }

    #[test]
    fn test_find_program_missing() {
        let result = SystemUtils::find_program("qwr-definitely-not-installed");

        match result.unwrap_err() {
            QwrError::ToolNotFound(name) => assert_eq!(name, "qwr-definitely-not-installed"),
            other => panic!("Expected ToolNotFound, got: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_is_root_matches_libc() {
        let expected = unsafe { libc::geteuid() } == 0;
        assert_eq!(SystemUtils::is_root(), expected);
    }
}
