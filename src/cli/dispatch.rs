// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::HookConfig;
use crate::error::Result;
use crate::rules::RuleEngine;

use super::args::{Cli, CommitMsgArgs, Commands, PatternArgs};

/// Run the CLI with the given arguments.
///
/// Returns the process exit code, which is the validator status code.
pub fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::CommitMsg(args) => run_commit_msg(cli, args),
        Commands::BranchName(args) => run_branch_name(cli, args),
        Commands::Version => Ok(run_version()),
    }
}

fn load_config(cli: &Cli) -> Result<HookConfig> {
    match &cli.config {
        Some(path) => HookConfig::load_from(path),
        None if cli.use_config() => HookConfig::load(),
        None => {
            tracing::debug!("Configuration discovery disabled");
            Ok(HookConfig::default())
        }
    }
}

/// Run the commit-msg command.
fn run_commit_msg(cli: &Cli, args: &CommitMsgArgs) -> Result<i32> {
    tracing::debug!("Running commit-msg command with args: {:?}", args);

    let engine = RuleEngine::new(load_config(cli)?);

    let outcome = engine.check_commit_msg(
        &args.filepath,
        &args.patterns.accept,
        &args.patterns.reject,
    )?;
    outcome.print(cli.format);

    Ok(outcome.code())
}

/// Run the branch-name command.
fn run_branch_name(cli: &Cli, args: &PatternArgs) -> Result<i32> {
    tracing::debug!("Running branch-name command with args: {:?}", args);

    let engine = RuleEngine::new(load_config(cli)?);

    let outcome = engine.check_branch_name(&args.accept, &args.reject);
    outcome.print(cli.format);

    Ok(outcome.code())
}

/// Run the version command.
fn run_version() -> i32 {
    println!("hookcheck {}", crate::version::version_string());
    0
}
