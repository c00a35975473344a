//! # textstat
//!
//! **CLI Binary**
//!
//! This is the entry point for the `textstat` command-line application.
//! It reads input, builds a [`textstat_core::TextStats`] and hands it to the
//! formatters.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load `textstat.toml`
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod error_hints;
mod input;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use textstat_config::{Cli, ConfigError, Settings, TomlConfig};
use textstat_core::error::{ErrorCode, TextstatError};
use textstat_types::OutputFormat;

/// Entry point used by the `textstat` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    let (global, command) = cli.into_command().unwrap_or_else(|err| err.exit());
    let requested = commands::requested_format(&command);

    let file = match TomlConfig::discover(global.config.as_deref(), Path::new("."))
        .context("Failed to load config")
    {
        Ok(file) => file,
        Err(err) => return fail(err, requested),
    };
    let settings = Settings::resolve(&global, requested, file.as_ref());
    tracing::debug!(?settings, "resolved settings");

    match commands::dispatch(command, &settings) {
        Err(err) => fail(err, Some(settings.format)),
        ok => ok,
    }
}

/// Structured form of an application error for `--format json`.
pub fn error_report(err: &anyhow::Error) -> TextstatError {
    let Some(config) = err.downcast_ref::<ConfigError>() else {
        return TextstatError::from_anyhow(err);
    };
    match config {
        ConfigError::Parse { source, .. } => TextstatError {
            details: Some(source.to_string()),
            ..TextstatError::invalid_config(config)
        },
        ConfigError::Io { source, .. } => TextstatError::with_details(
            ErrorCode::IoError,
            format!("{err:#}"),
            source.to_string(),
        ),
    }
}

fn fail(err: anyhow::Error, format: Option<OutputFormat>) -> Result<()> {
    if format == Some(OutputFormat::Json) {
        println!("{}", error_report(&err).to_json());
    }
    Err(err)
}

/// Human-readable error with remediation hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
