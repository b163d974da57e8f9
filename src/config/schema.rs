// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from hookcheck.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for hookcheck.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HookConfig {
    /// Patterns for the commit-msg check.
    pub commit_msg: PatternConfig,

    /// Patterns for the branch-name check.
    pub branch_name: PatternConfig,
}

impl HookConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Accept and reject pattern lists.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PatternConfig {
    /// At least one of these must match, if any are given.
    pub accept: Vec<String>,

    /// None of these may match.
    pub reject: Vec<String>,
}

impl PatternConfig {
    /// Append extra patterns after the configured ones.
    pub fn with_extra(&self, accept: &[String], reject: &[String]) -> PatternConfig {
        PatternConfig {
            accept: self.accept.iter().chain(accept).cloned().collect(),
            reject: self.reject.iter().chain(reject).cloned().collect(),
        }
    }
}
