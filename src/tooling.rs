//! Tooling Layer
//!
//! CLI commands over the scanner plus their text and JSON renderings.

pub mod cli;
pub mod format;
pub mod output;

pub use cli::{Cli, CliContext, Commands};
