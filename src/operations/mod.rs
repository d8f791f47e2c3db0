//! Operations module
//!
//! Turns a command tree and an options map back into a command line

pub mod stringify_command;
pub mod stringify_options;
pub mod to_command_line;

pub use stringify_command::*;
pub use stringify_options::*;
pub use to_command_line::*;
