// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use git2::Repository;
use std::path::Path;

/// Get the current branch name for the repository containing the
/// working directory.
///
/// Returns an empty string when the name cannot be determined, which
/// the branch check then reports as an empty branch name.
pub fn current_branch_name() -> String {
    match std::env::current_dir() {
        Ok(dir) => branch_name_at(&dir),
        Err(e) => {
            tracing::warn!("Failed to get current directory: {}", e);
            String::new()
        }
    }
}

/// Get the branch name for the repository discovered from `path`.
///
/// A detached HEAD yields `HEAD`. Any failure yields an empty string.
pub fn branch_name_at(path: &Path) -> String {
    match head_shorthand(path) {
        Ok(name) => {
            tracing::debug!("Current branch: {}", name);
            name
        }
        Err(e) => {
            tracing::warn!("Failed to get branch name: {}", e.message());
            String::new()
        }
    }
}

fn head_shorthand(path: &Path) -> Result<String, git2::Error> {
    let repo = Repository::discover(path)?;
    let head = repo.head()?;

    if head.is_branch() {
        Ok(head.shorthand().unwrap_or_default().to_string())
    } else {
        Ok("HEAD".to_string())
    }
}
