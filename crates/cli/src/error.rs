//! CLI exit codes for scripting and automation.
//!
//! Invariants:
//! - Exit code 1 covers configuration and I/O failures.
//! - Exit code 4 means the requested item (setting or `.env` file) does not exist.

/// Structured exit codes for envopt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - invalid configuration or unreadable settings file.
    GeneralError = 1,

    /// Not found - unknown setting, or no `.env` file located.
    NotFound = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
