// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine tying configuration, inputs and the validator together.

use crate::commit::read_commit_message;
use crate::config::HookConfig;
use crate::error::Result;
use crate::git;
use std::path::Path;

use super::validator::{validate, validate_subject, Outcome, Subject};

/// Rule engine for the commit message and branch name checks.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: HookConfig,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: HookConfig) -> Self {
        Self { config }
    }

    /// Read a commit message file and validate it.
    ///
    /// Configured patterns come first, then the ones passed in.
    /// A file that cannot be read is an error, not an outcome.
    pub fn check_commit_msg(
        &self,
        path: &Path,
        accept: &[String],
        reject: &[String],
    ) -> Result<Outcome> {
        let message = read_commit_message(path)?;
        Ok(self.check_message(&message, accept, reject))
    }

    /// Validate an already-read commit message.
    pub fn check_message(&self, message: &str, accept: &[String], reject: &[String]) -> Outcome {
        let patterns = self.config.commit_msg.with_extra(accept, reject);
        tracing::debug!(
            "Checking commit message against {} accept and {} reject patterns",
            patterns.accept.len(),
            patterns.reject.len()
        );
        validate(message, &patterns.accept, &patterns.reject)
    }

    /// Validate the current branch name.
    pub fn check_branch_name(&self, accept: &[String], reject: &[String]) -> Outcome {
        let branch = git::current_branch_name();
        self.check_branch(&branch, accept, reject)
    }

    /// Validate a given branch name.
    pub fn check_branch(&self, branch: &str, accept: &[String], reject: &[String]) -> Outcome {
        let patterns = self.config.branch_name.with_extra(accept, reject);
        tracing::debug!(
            "Checking branch {:?} against {} accept and {} reject patterns",
            branch,
            patterns.accept.len(),
            patterns.reject.len()
        );
        validate_subject(
            Subject::BranchName,
            branch,
            &patterns.accept,
            &patterns.reject,
        )
    }
}
