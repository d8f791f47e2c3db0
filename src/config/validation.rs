//! Command-tree validation logic

use crate::command::Command;
use crate::error::FlaglineError;
use regex::Regex;
use std::collections::HashSet;

const LONG_FORM_PATTERN: &str = r"^--[A-Za-z0-9][A-Za-z0-9_-]*$";
const SHORT_FORM_PATTERN: &str = r"^-[A-Za-z0-9]$";

/// Compiled flag-form patterns
struct FormPatterns {
    long: Regex,
    short: Regex,
}

impl FormPatterns {
    fn compile() -> Result<Self, FlaglineError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                FlaglineError::configuration(format!("Invalid flag pattern '{pattern}': {e}"))
            })
        };
        Ok(Self {
            long: compile(LONG_FORM_PATTERN)?,
            short: compile(SHORT_FORM_PATTERN)?,
        })
    }
}

/// Validate a complete command tree
///
/// # Errors
///
/// Returns an error if:
/// - A command name is empty or contains whitespace
/// - A flag form is malformed (`--name`, `-n`)
/// - A command declares the same long or short form twice
/// - Two sibling subcommands share a name
#[inline]
pub fn validate_command(root: &Command) -> Result<(), FlaglineError> {
    let patterns = FormPatterns::compile()?;
    validate_node(root, "", &patterns)
}

fn validate_node(
    command: &Command,
    parent_path: &str,
    patterns: &FormPatterns,
) -> Result<(), FlaglineError> {
    validate_command_name(command.name())?;

    let path = if parent_path.is_empty() {
        command.name().to_owned()
    } else {
        format!("{parent_path} {}", command.name())
    };

    validate_flags(command, &path, patterns)?;

    let mut sibling_names = HashSet::new();
    for child in command.subcommands() {
        if !sibling_names.insert(child.name()) {
            return Err(FlaglineError::configuration(format!(
                "Command '{path}': subcommand '{}' is declared more than once",
                child.name()
            )));
        }
        validate_node(child, &path, patterns)?;
    }

    Ok(())
}

fn validate_flags(
    command: &Command,
    path: &str,
    patterns: &FormPatterns,
) -> Result<(), FlaglineError> {
    let mut seen = HashSet::new();

    for (index, flag) in command.flags().iter().enumerate() {
        let context = format!("Command '{path}', option #{}", index + 1);

        if let Some(long) = flag.long() {
            if !patterns.long.is_match(long) {
                return Err(FlaglineError::configuration(format!(
                    "{context}: invalid long form '{long}'. Expected --name"
                )));
            }
            if !seen.insert(long) {
                return Err(FlaglineError::configuration(format!(
                    "{context}: '{long}' is already declared"
                )));
            }
        }

        if let Some(short) = flag.short() {
            if !patterns.short.is_match(short) {
                return Err(FlaglineError::configuration(format!(
                    "{context}: invalid short form '{short}'. Expected -n"
                )));
            }
            if !seen.insert(short) {
                return Err(FlaglineError::configuration(format!(
                    "{context}: '{short}' is already declared"
                )));
            }
        }
    }

    Ok(())
}

/// Validate a command name
///
/// # Errors
///
/// Returns an error if the name is empty or contains whitespace
#[inline]
pub fn validate_command_name(name: &str) -> Result<(), FlaglineError> {
    if name.trim().is_empty() {
        return Err(FlaglineError::configuration("Command name cannot be empty"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(FlaglineError::configuration(format!(
            "Command name '{name}' cannot contain whitespace"
        )));
    }
    Ok(())
}
