//! Neurogenesis CLI library
//!
//! Argument parsing, configuration loading and the command handlers behind
//! the `ngen` binary.

pub mod cli;
pub mod commands;
pub mod config;
