//! Configuration management module
//!
//! Handles command-definition files: YAML (or JSON) descriptions of a
//! command tree, turned into `Command` values and validated.

pub mod validation;
pub mod yaml;

use crate::command::{Command, FlagDeclaration, FlagKind};
use crate::error::FlaglineError;
use serde::{Deserialize, Serialize};

/// One command in a definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDefinition {
    /// Command name (the program name at the root)
    pub name: String,

    /// Declared flags, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FlagEntry>,

    /// Subcommands, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CommandDefinition>,
}

/// A flag entry: either `"-o, --output <dir>"` or a structured record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagEntry {
    /// Commander-style flag string
    Spec(String),

    /// Explicit long/short forms
    #[serde(rename_all = "camelCase")]
    Detailed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        long: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        short: Option<String>,
        #[serde(default)]
        takes_value: bool,
    },
}

impl FlagEntry {
    /// Build the flag declaration this entry describes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A flag string cannot be parsed
    /// - A structured entry has neither `long` nor `short`
    #[inline]
    pub fn to_declaration(&self) -> Result<FlagDeclaration, FlaglineError> {
        match *self {
            Self::Spec(ref spec) => FlagDeclaration::parse(spec),
            Self::Detailed {
                ref long,
                ref short,
                takes_value,
            } => {
                if long.is_none() && short.is_none() {
                    return Err(FlaglineError::flag(
                        "Option entries must set 'long', 'short' or both",
                    ));
                }
                let kind = if takes_value {
                    FlagKind::ValueTaking
                } else {
                    FlagKind::Boolean
                };
                let mut flag = FlagDeclaration::new(kind);
                if let Some(long) = long.as_ref() {
                    flag = flag.with_long(long.as_str());
                }
                if let Some(short) = short.as_ref() {
                    flag = flag.with_short(short.as_str());
                }
                Ok(flag)
            }
        }
    }
}

impl CommandDefinition {
    /// Convert this definition and its subcommands into a command tree
    ///
    /// # Errors
    ///
    /// Returns an error if any flag entry is invalid; the message names the
    /// command path
    #[inline]
    pub fn to_command(&self) -> Result<Command, FlaglineError> {
        self.to_command_under("")
    }

    fn to_command_under(&self, parent_path: &str) -> Result<Command, FlaglineError> {
        let path = if parent_path.is_empty() {
            self.name.clone()
        } else {
            format!("{parent_path} {}", self.name)
        };

        let mut command = Command::new(self.name.as_str());
        for entry in &self.options {
            let flag = entry
                .to_declaration()
                .map_err(|e| FlaglineError::flag(format!("Command '{path}': {}", e.message())))?;
            command = command.with_flag(flag);
        }
        for child in &self.commands {
            command = command.subcommand(child.to_command_under(&path)?);
        }
        Ok(command)
    }
}
