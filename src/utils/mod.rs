//! Utility functions module
//!
//! Flag-name resolution helpers

pub mod naming;

pub use naming::*;
