//! CLI module for tally - command-line interface and subcommands.
//!
//! Provides the main entry point with one subcommand per program.

pub mod commands;

pub use commands::Cli;
