// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit message and branch name validation.
//!
//! This module decides whether a piece of text passes a set of
//! accept and reject patterns.

mod engine;
mod pattern;
mod validator;

pub use engine::RuleEngine;
pub use pattern::{PatternError, PatternKind, PatternSet};
pub use validator::{validate, validate_subject, Outcome, Status, Subject};
