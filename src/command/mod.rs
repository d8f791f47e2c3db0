//! Command tree model
//!
//! A `Command` is a named node owning an ordered list of flag declarations
//! and an ordered list of subcommands. The tree is built once by the caller
//! (by hand, from a definition file, or from a clap command) and only read
//! afterwards.

pub mod clap_bridge;
pub mod flag;

pub use flag::{FlagDeclaration, FlagKind};

use crate::error::FlaglineError;

/// A node in a tree of commands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
    name: String,
    flags: Vec<FlagDeclaration>,
    subcommands: Vec<Command>,
}

impl Command {
    /// Create a command with no flags and no subcommands
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            flags: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    /// Declare a flag (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_flag(mut self, flag: FlagDeclaration) -> Self {
        self.flags.push(flag);
        self
    }

    /// Declare a flag from a commander-style string such as `-o, --output <dir>`
    ///
    /// # Errors
    ///
    /// Returns an error if the flag string cannot be parsed
    #[inline]
    pub fn option(self, spec: &str) -> Result<Self, FlaglineError> {
        Ok(self.with_flag(FlagDeclaration::parse(spec)?))
    }

    /// Attach a child command (builder pattern)
    #[must_use]
    #[inline]
    pub fn subcommand(mut self, child: Self) -> Self {
        self.subcommands.push(child);
        self
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared flags, in declaration order
    #[must_use]
    #[inline]
    pub fn flags(&self) -> &[FlagDeclaration] {
        &self.flags
    }

    /// Child commands, in declaration order
    #[must_use]
    #[inline]
    pub fn subcommands(&self) -> &[Self] {
        &self.subcommands
    }

    /// Find a direct child by exact name
    #[must_use]
    #[inline]
    pub fn find_subcommand(&self, name: &str) -> Option<&Self> {
        self.subcommands.iter().find(|child| child.name == name)
    }

    /// Walk `path` from this command, one exact-name match per segment
    ///
    /// An empty path resolves to `self`.
    #[must_use]
    #[inline]
    pub fn find_by_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&Self> {
        path.iter()
            .try_fold(self, |node, segment| node.find_subcommand(segment.as_ref()))
    }
}
