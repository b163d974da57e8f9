// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! hookcheck - Pattern gate for git hooks
//!
//! Validates commit messages and branch names against accept and reject
//! regular expressions, returning a status code suitable as a hook exit
//! code.
//!
//! # Status codes
//!
//! | code | meaning |
//! |------|---------|
//! | 0 | accepted |
//! | 1 | empty text, or no accept pattern matched |
//! | 2 | a reject pattern matched |
//! | 99 | a supplied pattern failed to compile |
//!
//! # Example
//!
//! ```
//! use hookcheck::validate;
//!
//! let accept = vec!["^(feat|fix): ".to_string()];
//! let reject = vec!["WIP".to_string()];
//!
//! let (code, diagnostic) = validate("feat: add parser", &accept, &reject).into_parts();
//! assert_eq!(code, 0);
//! assert!(diagnostic.is_empty());
//!
//! let outcome = validate("feat: WIP parser", &accept, &reject);
//! assert_eq!(outcome.code(), 2);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use config::HookConfig;
pub use error::{HookError, Result};
pub use rules::{validate, Outcome, Status};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of hookcheck.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
