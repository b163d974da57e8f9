// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds the git SHA and commit date read by `hookcheck::version`.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    Ok(())
}
