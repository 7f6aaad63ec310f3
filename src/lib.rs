//! `booklend` - Library catalog and lending desk
//!
//! This crate provides the front end for the `bl` binary. The lending rules
//! themselves live in `booklend-lib`; everything here is input, output and
//! setup around them.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Layered configuration (defaults, YAML file, env, flags)
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - Tracing subscriber setup
//! - [`session`] - Interactive admin/patron menus

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod session;

pub use error::{AppError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if configuration or the session fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
