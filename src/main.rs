//! # `Flagline`
//!
//! `Flagline` prints the command line equivalent to an options map, given a
//! definition of the target CLI's commands and flags.
//!
//! ## Usage
//!
//! ```sh
//! flagline --definition cli.yaml --options '{"_": ["src/index.js"], "dryRun": true}' build
//! ```
//!
//! See `flagline --help` for more options and details.

use anyhow::Result;
use clap::Parser as _;
use flagline::cli::Args;
use flagline::error::FlaglineError;
use flagline::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout only carries the rendered command
    let log_level = if args.verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let system = RealSystem::new();
    match flagline::run(&args, &system) {
        Ok(command_line) => {
            println!("{command_line}");
            std::process::exit(0);
        }
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<FlaglineError>()
                    .map_or(1, FlaglineError::exit_code),
            );
        }
    }
}
