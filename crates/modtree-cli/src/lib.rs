//! modtree CLI.
//!
//! Wraps the two build modes of `modtree-graph` behind a command line and
//! writes the result as JSON.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - command implementations
//! - [`logger`] - `tracing` subscriber setup

pub mod cli;
pub mod commands;
pub mod logger;
