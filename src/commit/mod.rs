// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message input.

mod message;

pub use message::read_commit_message;
