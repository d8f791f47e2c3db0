//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for flagline operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FlaglineError {
    /// Configuration Error - missing or invalid command definition
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Options Error - the options map could not be read
    #[error("Options error: {message}")]
    Options { message: String },

    /// Flag Error - a flag declaration could not be parsed
    #[error("Flag error: {message}")]
    Flag { message: String },

    /// Output Error - the command line could not be rendered
    #[error("Output error: {message}")]
    Output { message: String },
}

impl FlaglineError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Options { .. } => 2,
            Self::Flag { .. } => 3,
            Self::Output { .. } => 4,
        }
    }

    /// Message without the category prefix
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        match *self {
            Self::Configuration { ref message }
            | Self::Options { ref message }
            | Self::Flag { ref message }
            | Self::Output { ref message } => message,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an options error
    #[inline]
    pub fn options<S: Into<String>>(message: S) -> Self {
        Self::Options {
            message: message.into(),
        }
    }

    /// Create a flag error
    #[inline]
    pub fn flag<S: Into<String>>(message: S) -> Self {
        Self::Flag {
            message: message.into(),
        }
    }

    /// Create an output error
    #[inline]
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}
