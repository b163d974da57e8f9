// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Accept/reject validation and its outcome.
//!
//! The decision order is fixed:
//!
//! 1. empty text fails before any pattern is looked at;
//! 2. reject patterns are compiled, then the first one that matches fails;
//! 3. accept patterns are compiled, and if none matches the text fails;
//! 4. otherwise the text is accepted.
//!
//! A pattern that does not compile is reported with status 99 instead of
//! propagating an error.

use crate::cli::args::OutputFormat;
use console::style;

use super::pattern::{PatternError, PatternKind, PatternSet};

/// What is being validated. Only changes the wording of diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// The contents of a commit message file.
    CommitMessage,
    /// The name of the current branch.
    BranchName,
}

impl Subject {
    /// Label used at the start of diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::CommitMessage => "Commit message",
            Subject::BranchName => "Branch name",
        }
    }

    /// Machine-readable name, matching the subcommand.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::CommitMessage => "commit-msg",
            Subject::BranchName => "branch-name",
        }
    }
}

/// Validation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The text passed every check.
    Accepted,
    /// The text was empty.
    Empty,
    /// An accept list was given and nothing in it matched.
    NoAcceptMatch,
    /// A reject pattern matched.
    Rejected,
    /// A supplied pattern failed to compile.
    InvalidPattern,
}

impl Status {
    /// The numeric status code, also used as the process exit code.
    pub fn code(&self) -> i32 {
        match self {
            Status::Accepted => 0,
            Status::Empty | Status::NoAcceptMatch => 1,
            Status::Rejected => 2,
            Status::InvalidPattern => 99,
        }
    }
}

/// Result of validating a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// What was validated.
    pub subject: Subject,
    /// The decision.
    pub status: Status,
    /// Empty on success, a one-line explanation otherwise.
    pub diagnostic: String,
}

impl Outcome {
    fn accepted(subject: Subject) -> Self {
        Self {
            subject,
            status: Status::Accepted,
            diagnostic: String::new(),
        }
    }

    fn failed(subject: Subject, status: Status, diagnostic: String) -> Self {
        Self {
            subject,
            status,
            diagnostic,
        }
    }

    fn invalid_pattern(subject: Subject, err: &PatternError) -> Self {
        tracing::debug!("Pattern {:?} failed to compile", err.pattern);
        Self::failed(subject, Status::InvalidPattern, err.to_string())
    }

    /// The numeric status code.
    pub fn code(&self) -> i32 {
        self.status.code()
    }

    /// The diagnostic text, empty on success.
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }

    /// Check if the text was accepted.
    pub fn is_accepted(&self) -> bool {
        self.status == Status::Accepted
    }

    /// Split into the `(status_code, diagnostic)` pair.
    pub fn into_parts(self) -> (i32, String) {
        (self.status.code(), self.diagnostic)
    }

    /// Report the outcome. Diagnostics always go to stderr.
    pub fn print(&self, format: Option<OutputFormat>) {
        if let Some(OutputFormat::Json) = format {
            self.print_json();
        }

        if !self.is_accepted() {
            eprintln!("{}", style(&self.diagnostic).red().for_stderr());
        }
    }

    fn print_json(&self) {
        let json = serde_json::json!({
            "subject": self.subject.as_str(),
            "status": self.code(),
            "diagnostic": self.diagnostic,
            "accepted": self.is_accepted(),
        });

        println!("{}", json);
    }
}

/// Validate a commit message against accept and reject patterns.
pub fn validate(message: &str, accept: &[String], reject: &[String]) -> Outcome {
    validate_subject(Subject::CommitMessage, message, accept, reject)
}

/// Validate any subject against accept and reject patterns.
pub fn validate_subject(
    subject: Subject,
    text: &str,
    accept: &[String],
    reject: &[String],
) -> Outcome {
    if text.is_empty() {
        return Outcome::failed(
            subject,
            Status::Empty,
            format!("{} is empty", subject.label()),
        );
    }

    if !reject.is_empty() {
        let set = match PatternSet::compile(PatternKind::Reject, reject) {
            Ok(set) => set,
            Err(e) => return Outcome::invalid_pattern(subject, &e),
        };
        tracing::debug!("Compiled {} {} patterns", set.len(), set.kind());

        if let Some(pattern) = set.first_match(text) {
            return Outcome::failed(
                subject,
                Status::Rejected,
                format!("{} matched rejection pattern: {}", subject.label(), pattern),
            );
        }
    }

    if !accept.is_empty() {
        let set = match PatternSet::compile(PatternKind::Accept, accept) {
            Ok(set) => set,
            Err(e) => return Outcome::invalid_pattern(subject, &e),
        };
        tracing::debug!("Compiled {} {} patterns", set.len(), set.kind());

        if set.first_match(text).is_none() {
            return Outcome::failed(
                subject,
                Status::NoAcceptMatch,
                format!(
                    "{} did not match any of the acceptance patterns supplied",
                    subject.label()
                ),
            );
        }
    }

    Outcome::accepted(subject)
}
