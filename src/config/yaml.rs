//! YAML command-definition loading and parsing

use crate::command::Command;
use crate::config::CommandDefinition;
use crate::config::validation::validate_command;
use crate::error::FlaglineError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::debug;

/// Parse a command definition from YAML (or JSON) text
///
/// # Errors
///
/// Returns an error if:
/// - The text is not a valid definition
/// - A flag entry cannot be parsed
/// - The resulting command tree fails validation
#[inline]
pub fn parse_definition(content: &str) -> Result<Command> {
    let definition: CommandDefinition = serde_yaml::from_str(content).map_err(|e| {
        // Extract line and column information from serde_yaml error
        let message = if let Some(location) = e.location() {
            format!(
                "Failed to parse command definition at line {}, column {}: {e}",
                location.line(),
                location.column()
            )
        } else {
            format!("Failed to parse command definition: {e}")
        };
        FlaglineError::configuration(message)
    })?;

    let command = definition.to_command()?;
    validate_command(&command)?;
    Ok(command)
}

/// Load and parse a command definition from file
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or is not a regular file
/// - The file cannot be read
/// - The contents are not a valid definition
#[inline]
pub fn load_definition(system: &dyn System, path: &str) -> Result<Command> {
    let path_obj = Path::new(path);

    if !system.exists(path_obj) {
        return Err(FlaglineError::configuration(format!(
            "Command definition file not found: {path}\n\
            Create a flagline.yaml file or specify a different path with --definition"
        ))
        .into());
    }

    if !system.is_file(path_obj) {
        return Err(FlaglineError::configuration(format!(
            "Command definition path is not a file: {path}"
        ))
        .into());
    }

    let content = system
        .read_to_string(path_obj)
        .with_context(|| format!("Failed to read command definition file: {path}"))?;

    let command = parse_definition(&content)
        .with_context(|| format!("Invalid command definition in file: {path}"))?;

    debug!(
        "Loaded command definition '{}' with {} subcommands from {path}",
        command.name(),
        command.subcommands().len()
    );

    Ok(command)
}
