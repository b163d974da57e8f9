// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for hookcheck.
//!
//! Only environment failures live here: a message file that cannot be read,
//! a broken configuration file. Rejected messages are not errors; they are
//! reported through [`crate::rules::Outcome`].

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for command-line usage errors.
pub const EXIT_USAGE: i32 = 64;

/// Exit code when the commit message file cannot be read.
pub const EXIT_NO_INPUT: i32 = 66;

/// Exit code for configuration problems.
pub const EXIT_CONFIG: i32 = 78;

/// The main error type for hookcheck operations.
#[derive(Error, Debug)]
pub enum HookError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit message file could not be read
    #[error("Failed to read commit message file {}: {source}", .path.display())]
    MessageFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HookError {
    /// Process exit code for this error.
    ///
    /// Never one of the validator status codes (0, 1, 2, 99).
    pub fn exit_code(&self) -> i32 {
        match self {
            HookError::Config(_) => EXIT_CONFIG,
            HookError::MessageFile { .. } => EXIT_NO_INPUT,
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration {}: {message}", .path.display())]
    ReadFailed { path: PathBuf, message: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Result type alias for hookcheck operations.
pub type Result<T> = std::result::Result<T, HookError>;
