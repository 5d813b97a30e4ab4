//! Command line front end for `search-tags-patterns`.
//!
//! Reads an Emmet class abbreviation, prints the matching `className` search
//! pattern, or searches files for elements carrying the requested classes.

mod cli;
mod config;
mod error;
mod logging;
mod output;
mod search;

use std::io::{self, Write};

use clap::Parser;

use crate::cli::{Cli, run};
use crate::config::Config;
use crate::logging::init_logging;

fn main() {
    let args = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config.apply_overrides(args.log_level),
        Err(e) => {
            init_logging(&Config::default());
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    if let Err(e) = run(args.command) {
        tracing::debug!(error = ?e, "command failed");
        // Nothing more can be reported if stderr itself is gone.
        let _ = writeln!(io::stderr(), "error: {e:#}");
        std::process::exit(1);
    }
}
