// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! hookcheck - Pattern gate for git hooks
//!
//! Exits with the validation status code: 0 accepted, 1 empty or no
//! accept match, 2 reject match, 99 invalid pattern.

use clap::Parser;
use hookcheck::cli::{run, Cli};
use hookcheck::error::EXIT_USAGE;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Usage errors must not reuse clap's default exit code 2, which means
    // "rejected" here.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Set up logging
    setup_logging(cli.debug);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Set up logging/tracing on stderr.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("hookcheck=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
