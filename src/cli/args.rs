// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// hookcheck - Pattern gate for git hooks
///
/// Checks commit messages and branch names against accept and reject
/// regular expressions.
#[derive(Parser, Debug)]
#[command(name = "hookcheck")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Pattern gate for commit messages and branch names", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The check to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not look for a configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a commit message file
    CommitMsg(CommitMsgArgs),

    /// Validate the current branch name
    BranchName(PatternArgs),

    /// Print version information
    Version,
}

/// Accept and reject patterns given on the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct PatternArgs {
    /// Pattern the text must match (repeatable; any one suffices)
    #[arg(short, long, value_name = "PATTERN", allow_hyphen_values = true)]
    pub accept: Vec<String>,

    /// Pattern the text must not match (repeatable)
    #[arg(short, long, value_name = "PATTERN", allow_hyphen_values = true)]
    pub reject: Vec<String>,
}

/// Arguments for the commit-msg command.
#[derive(Args, Debug, Clone)]
pub struct CommitMsgArgs {
    /// Path to the commit message file
    #[arg(value_name = "FILE")]
    pub filepath: PathBuf,

    #[command(flatten)]
    pub patterns: PatternArgs,
}

impl Cli {
    /// Check whether configuration discovery should run.
    pub fn use_config(&self) -> bool {
        !self.no_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_accept() {
        let args = Cli::parse_from(["hookcheck", "commit-msg", "-a", "fix(bug):.*", "mock_filename"]);
        if let Commands::CommitMsg(check) = args.command {
            assert_eq!(check.patterns.accept, vec!["fix(bug):.*"]);
            assert!(check.patterns.reject.is_empty());
            assert_eq!(check.filepath, PathBuf::from("mock_filename"));
        } else {
            panic!("Expected CommitMsg command");
        }
    }

    #[test]
    fn test_multiple_accept() {
        let args = Cli::parse_from([
            "hookcheck",
            "commit-msg",
            "-a",
            "feat(new):.*",
            "--accept",
            "refactor:.*",
            "mock_filename",
        ]);
        if let Commands::CommitMsg(check) = args.command {
            assert_eq!(check.patterns.accept, vec!["feat(new):.*", "refactor:.*"]);
        } else {
            panic!("Expected CommitMsg command");
        }
    }

    #[test]
    fn test_multiple_reject() {
        let args = Cli::parse_from([
            "hookcheck",
            "commit-msg",
            "-r",
            "docs:.*",
            "-r",
            "test:.*",
            "mock_filename",
        ]);
        if let Commands::CommitMsg(check) = args.command {
            assert_eq!(check.patterns.reject, vec!["docs:.*", "test:.*"]);
            assert!(check.patterns.accept.is_empty());
        } else {
            panic!("Expected CommitMsg command");
        }
    }

    #[test]
    fn test_mixed_args() {
        let args = Cli::parse_from([
            "hookcheck",
            "commit-msg",
            "-a",
            "fix(bug):.*",
            "-r",
            "WIP:.*",
            "-a",
            "refactor:.*",
            "mock_filename",
        ]);
        if let Commands::CommitMsg(check) = args.command {
            assert_eq!(check.patterns.accept, vec!["fix(bug):.*", "refactor:.*"]);
            assert_eq!(check.patterns.reject, vec!["WIP:.*"]);
        } else {
            panic!("Expected CommitMsg command");
        }
    }

    #[test]
    fn test_commit_msg_requires_file() {
        let result = Cli::try_parse_from(["hookcheck", "commit-msg", "-a", "feat"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_branch_name_patterns() {
        let args = Cli::parse_from([
            "hookcheck",
            "branch-name",
            "-a",
            "fix/.*",
            "-r",
            "main",
            "-a",
            "feat/.*",
        ]);
        if let Commands::BranchName(patterns) = args.command {
            assert_eq!(patterns.accept, vec!["fix/.*", "feat/.*"]);
            assert_eq!(patterns.reject, vec!["main"]);
        } else {
            panic!("Expected BranchName command");
        }
    }

    #[test]
    fn test_hyphen_pattern_value() {
        let args = Cli::parse_from(["hookcheck", "branch-name", "-r", "-tmp$"]);
        if let Commands::BranchName(patterns) = args.command {
            assert_eq!(patterns.reject, vec!["-tmp$"]);
        } else {
            panic!("Expected BranchName command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["hookcheck", "branch-name", "--debug", "--format", "json", "--no-config"]);
        assert!(args.debug);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(!args.use_config());
    }

    #[test]
    fn test_config_conflicts_with_no_config() {
        let result = Cli::try_parse_from([
            "hookcheck",
            "--config",
            "hookcheck.toml",
            "--no-config",
            "branch-name",
        ]);
        assert!(result.is_err());
    }
}
