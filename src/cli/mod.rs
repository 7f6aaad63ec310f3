//! Command-line interface for `booklend`.
//!
//! This module provides the CLI parsing and command routing using clap.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use booklend_lib::Library;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::config::{CliOverrides, Config};
use crate::format::format_book_line;
use crate::logging;
use crate::session::{Clock, FixedClock, OutputMode, Session, SessionSettings, SystemClock};

/// `booklend` (bl) - Library catalog and lending desk.
#[derive(Parser, Debug)]
#[command(name = "bl")]
#[command(
    author,
    version,
    about = "Library catalog and lending desk",
    long_about = None,
    after_help = "All books and loans live in memory and are gone when the program exits."
)]
pub struct Cli {
    /// Render results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs as JSON lines to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, global = true, env = "BOOKLEND_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Loan period in days
    #[arg(long, global = true, env = "BOOKLEND_LOAN_DAYS", value_name = "DAYS")]
    pub loan_days: Option<u32>,

    /// Fine charged per day late
    #[arg(long, global = true, env = "BOOKLEND_FINE_PER_DAY", value_name = "AMOUNT")]
    pub fine_per_day: Option<f64>,

    /// Admin password
    #[arg(long, global = true, env = "BOOKLEND_ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: Option<String>,

    /// Start with an empty catalog instead of the sample books
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Use this date as "today" instead of the system date
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// The command to run (default: desk)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive lending desk
    Desk,

    /// Print the starting catalog and exit
    Books,

    /// Show the effective configuration
    Config,
}

impl Cli {
    /// Collect the flag/env values that override the config file.
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_path: self.config.clone(),
            loan_days: self.loan_days,
            fine_per_day: self.fine_per_day,
            admin_password: self.admin_password.clone(),
            no_seed: self.no_seed,
        }
    }

    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

/// Configuration as shown by `bl config`; the password is never printed.
#[derive(Serialize)]
struct ConfigView {
    loan_period_days: u32,
    fine_per_day: f64,
    seed_sample_data: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the session fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let config = Config::load(&cli.overrides()).context("Failed to load configuration")?;
    let library = if config.seed_sample_data {
        Library::with_sample_data(config.policy)
    } else {
        Library::new(config.policy)
    };

    match cli.command.unwrap_or(Commands::Desk) {
        Commands::Desk => {
            let settings = SessionSettings {
                admin_password: config.admin_password,
                mode: cli.output_mode(),
            };
            match cli.today {
                Some(date) => run_desk(library, settings, FixedClock(date)),
                None => run_desk(library, settings, SystemClock),
            }
        }
        Commands::Books => print_books(&library, cli.output_mode()),
        Commands::Config => print_config(&config, cli.output_mode()),
    }
}

fn run_desk<C: Clock>(library: Library, settings: SessionSettings, clock: C) -> Result<()> {
    info!(books = library.catalog().len(), today = %clock.today(), "Starting lending desk");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(library, stdin.lock(), stdout.lock(), clock, settings);
    session.run().context("Lending desk stopped")?;
    Ok(())
}

fn print_books(library: &Library, mode: OutputMode) -> Result<()> {
    let mut out = io::stdout().lock();
    if mode == OutputMode::Json {
        let books: Vec<_> = library.list_books().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&books)?)?;
    } else if library.catalog().is_empty() {
        writeln!(out, "No books in library.")?;
    } else {
        for book in library.list_books() {
            writeln!(out, "{}", format_book_line(book))?;
        }
        writeln!(out, "\n{} book(s)", library.catalog().len())?;
    }
    Ok(())
}

fn print_config(config: &Config, mode: OutputMode) -> Result<()> {
    let view = ConfigView {
        loan_period_days: config.policy.loan_period_days,
        fine_per_day: config.policy.fine_per_day,
        seed_sample_data: config.seed_sample_data,
    };
    let rendered = if mode == OutputMode::Json {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_yaml::to_string(&view)?
    };
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "bl",
            "--loan-days",
            "7",
            "--fine-per-day",
            "1.5",
            "--no-seed",
            "--today",
            "2024-02-29",
            "books",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Commands::Books));
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 2, 29));

        let overrides = cli.overrides();
        assert_eq!(overrides.loan_days, Some(7));
        assert_eq!(overrides.fine_per_day, Some(1.5));
        assert!(overrides.no_seed);
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(Cli::try_parse_from(["bl", "--today", "2024-13-01"]).is_err());
    }
}
