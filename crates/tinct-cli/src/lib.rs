#![forbid(unsafe_code)]

//! Library half of the `tinct` binary: argument parsing, command execution,
//! and logging setup.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

pub use error::CliError;
