//! `Flagline` - reconstruct command-line invocations
//!
//! Given a command tree (the flags each command declares) and an options
//! map (camelCase or kebab-case keys bound to values), this library renders
//! the equivalent command line: `program subcommand positionals --flag value`.
//! Boolean flags appear only when set; unknown keys fall back to kebab-case.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod operations;
pub mod options;
pub mod system;
pub mod utils;

use anyhow::Result;
use cli::Args;
use config::yaml::load_definition;
use operations::to_command_line::{OutputFormat, generate_command_line};
use system::System;

/// Main entry point for the flagline library
///
/// Loads the command definition and options named by `args` and returns the
/// rendered command line.
///
/// # Errors
///
/// Returns an error if:
/// - The output format is unknown
/// - The command definition cannot be loaded
/// - The options cannot be read
pub fn run(args: &Args, system: &dyn System) -> Result<String> {
    let format = args.output_format.parse::<OutputFormat>()?;
    let root = load_definition(system, &args.definition)?;
    let options = args.load_options(system)?;

    generate_command_line(&root, &args.path, &options, format)
}
