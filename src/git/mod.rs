// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Only the current branch name is ever read from the repository.

mod repo;

pub use repo::{branch_name_at, current_branch_name};
