//! Brazilian capitals CLI library.
//!
//! This crate provides the subcommand handlers, terminal styling and output
//! formatting used by the `capitals-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
