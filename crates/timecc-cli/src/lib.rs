//! Build timing aggregator CLI library.
//!
//! This crate provides the CLI interface for the timing aggregator.

mod cli;
pub mod commands;

pub use cli::Cli;
