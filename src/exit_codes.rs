//! Exit codes for mdtidy
//!
//! A run that completes exits 0 whether or not it changed anything. Only a
//! failure to run at all is reported through the exit code.

/// Success - The run completed (files may or may not have been changed)
pub const SUCCESS: i32 = 0;

/// Tool error - Configuration error, unreadable annotation file, or the root could not be read
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
