// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for hookcheck.
//!
//! Patterns can be kept in a hookcheck.toml file instead of being
//! repeated on every hook invocation. Configuration is only ever read.

mod loader;
mod schema;

pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
};
pub use schema::*;
