//! Render an invocation in one of the supported output formats

use core::str::FromStr;

use crate::command::Command;
use crate::error::FlaglineError;
use crate::operations::stringify_command::{command_args, stringify_command_with_options};
use crate::options::OptionsMap;
use anyhow::Result;

/// Output format for command-line representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain space-joined line, values unescaped
    #[default]
    Line,
    /// Shell-escaped command ready to execute
    Shell,
    /// JSON array of arguments
    Json,
}

impl FromStr for OutputFormat {
    type Err = FlaglineError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "shell" => Ok(Self::Shell),
            "json" => Ok(Self::Json),
            _ => Err(FlaglineError::output(format!(
                "Invalid format: {s}. Use 'line', 'shell' or 'json'"
            ))),
        }
    }
}

/// Render the invocation of `path` under `root` with `options`
///
/// # Errors
///
/// Returns an error if the arguments cannot be serialized to JSON
#[inline]
pub fn generate_command_line<S: AsRef<str>>(
    root: &Command,
    path: &[S],
    options: &OptionsMap,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Line => Ok(stringify_command_with_options(root, path, options)),
        OutputFormat::Shell => Ok(format_as_shell(&command_args(root, path, options))),
        OutputFormat::Json => format_as_json(&command_args(root, path, options)),
    }
}

/// Format arguments as a single shell command line
fn format_as_shell(args: &[String]) -> String {
    args.iter()
        .map(|arg| shell_escape(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format arguments as JSON array
fn format_as_json(args: &[String]) -> Result<String> {
    serde_json::to_string_pretty(args)
        .map_err(|e| FlaglineError::output(format!("Failed to serialize to JSON: {e}")).into())
}

/// Quote one argument for a POSIX shell
///
/// Plain words pass through; anything else (including the empty argument)
/// is wrapped in double quotes with `"`, `\`, `$`, `` ` `` and `!` escaped.
fn shell_escape(s: &str) -> String {
    if is_plain_word(s) {
        return s.to_owned();
    }

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for ch in s.chars() {
        if matches!(ch, '"' | '\\' | '$' | '`' | '!') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

fn is_plain_word(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '.' | ':' | '=' | ',')
        })
}
