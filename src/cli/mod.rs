//! Command-line interface module
//!
//! Handles argument parsing for the flagline binary

pub mod args;

pub use args::*;
