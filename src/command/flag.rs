//! Flag declarations owned by a command

use core::fmt;

use crate::error::FlaglineError;

/// Whether a flag is a presence switch or carries a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum FlagKind {
    /// Presence-only switch (`--watch`)
    #[default]
    Boolean,
    /// Flag followed by a value (`--mode production`)
    ValueTaking,
}

/// A flag declared on a command
///
/// Long and short forms are stored as declared (`--output`, `-o`). The
/// `*_name` accessors strip exactly one leading `--` / `-`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlagDeclaration {
    long: Option<String>,
    short: Option<String>,
    kind: FlagKind,
}

impl FlagDeclaration {
    /// Create a declaration with no names yet
    #[must_use]
    #[inline]
    pub const fn new(kind: FlagKind) -> Self {
        Self {
            long: None,
            short: None,
            kind,
        }
    }

    /// Set the long form, e.g. `--output` (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_long<S: Into<String>>(mut self, long: S) -> Self {
        self.long = Some(long.into());
        self
    }

    /// Set the short form, e.g. `-o` (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_short<S: Into<String>>(mut self, short: S) -> Self {
        self.short = Some(short.into());
        self
    }

    /// Parse a commander-style flag string such as `-o, --output <dir>`
    ///
    /// Tokens are separated by spaces, commas or `|`. A `<value>` or
    /// `[value]` token makes the flag value-taking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The string declares neither a long nor a short form
    /// - The string declares more than one long or short form
    /// - A token is neither a flag form nor a value placeholder
    #[inline]
    pub fn parse(spec: &str) -> Result<Self, FlaglineError> {
        let mut declaration = Self::default();

        for token in spec.split([' ', ',', '|']).filter(|t| !t.is_empty()) {
            if token.starts_with('<') || token.starts_with('[') {
                declaration.kind = FlagKind::ValueTaking;
            } else if token.starts_with("--") {
                if declaration.long.is_some() {
                    return Err(FlaglineError::flag(format!(
                        "'{spec}' declares more than one long form"
                    )));
                }
                declaration.long = Some(token.to_owned());
            } else if token.starts_with('-') {
                if declaration.short.is_some() {
                    return Err(FlaglineError::flag(format!(
                        "'{spec}' declares more than one short form"
                    )));
                }
                declaration.short = Some(token.to_owned());
            } else {
                return Err(FlaglineError::flag(format!(
                    "Unexpected token '{token}' in flag declaration '{spec}'"
                )));
            }
        }

        if declaration.long.is_none() && declaration.short.is_none() {
            return Err(FlaglineError::flag(format!(
                "'{spec}' declares neither a long nor a short form"
            )));
        }

        Ok(declaration)
    }

    /// Long form as declared (`--output`)
    #[must_use]
    #[inline]
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Short form as declared (`-o`)
    #[must_use]
    #[inline]
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// Long form without its leading `--`
    #[must_use]
    #[inline]
    pub fn long_name(&self) -> Option<&str> {
        self.long
            .as_deref()
            .map(|long| long.strip_prefix("--").unwrap_or(long))
    }

    /// Short form without its leading `-`
    #[must_use]
    #[inline]
    pub fn short_name(&self) -> Option<&str> {
        self.short
            .as_deref()
            .map(|short| short.strip_prefix('-').unwrap_or(short))
    }

    /// Name used when rendering this flag: the long name, else the short
    /// name, else the empty string
    #[must_use]
    #[inline]
    pub fn display_name(&self) -> &str {
        self.long_name()
            .filter(|name| !name.is_empty())
            .or_else(|| self.short_name().filter(|name| !name.is_empty()))
            .unwrap_or_default()
    }

    #[must_use]
    #[inline]
    pub const fn kind(&self) -> FlagKind {
        self.kind
    }

    #[must_use]
    #[inline]
    pub const fn is_boolean(&self) -> bool {
        matches!(self.kind, FlagKind::Boolean)
    }
}

impl fmt::Display for FlagDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.short.as_deref(), self.long.as_deref()) {
            (Some(short), Some(long)) => write!(f, "{short}, {long}")?,
            (Some(name), None) | (None, Some(name)) => f.write_str(name)?,
            (None, None) => {}
        }
        if self.kind == FlagKind::ValueTaking {
            f.write_str(" <value>")?;
        }
        Ok(())
    }
}
