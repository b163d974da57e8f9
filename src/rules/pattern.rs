// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Compiled accept/reject pattern lists.

use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Which list a pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Patterns the text must match at least one of.
    Accept,
    /// Patterns the text must not match.
    Reject,
}

impl PatternKind {
    /// Get the string representation used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Accept => "accept",
            PatternKind::Reject => "reject",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pattern that failed to compile.
#[derive(Error, Debug, Clone)]
#[error("Error compiling {kind} pattern: {message}")]
pub struct PatternError {
    /// The list the pattern belongs to.
    pub kind: PatternKind,
    /// The pattern as supplied.
    pub pattern: String,
    /// The regex error folded onto a single line.
    pub message: String,
    /// The underlying regex error.
    #[source]
    pub source: regex::Error,
}

/// An ordered list of compiled patterns of one kind.
#[derive(Debug, Clone)]
pub struct PatternSet {
    kind: PatternKind,
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile every pattern in order, stopping at the first failure.
    pub fn compile<S: AsRef<str>>(
        kind: PatternKind,
        patterns: &[S],
    ) -> std::result::Result<Self, PatternError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|source| PatternError {
                    kind,
                    pattern: p.as_ref().to_string(),
                    message: single_line(&source.to_string()),
                    source,
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { kind, patterns })
    }

    /// The list this set was compiled from.
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the set holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Return the first pattern, in list order, found anywhere in `text`.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|re| re.is_match(text))
            .map(|re| re.as_str())
    }
}

/// Syntax errors render over several lines (pattern, caret, reason).
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
