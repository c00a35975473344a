//! # textstat-config
//!
//! **Tier 5 (Configuration)**
//!
//! This crate defines the CLI arguments and the `textstat.toml` schema, and
//! merges the two into [`Settings`].
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Precedence rules (CLI flag > config file > default)
//!
//! ## What does NOT belong here
//! * Text analysis
//! * I/O operations (except config file parsing)

use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use thiserror::Error;
pub use textstat_types::{Metric, OutputFormat, View};

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "textstat.toml";

/// `textstat`: descriptive statistics for a piece of text.
///
/// Default mode (no subcommand) prints a report.
#[derive(Parser, Debug)]
#[command(name = "textstat", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Options for the implicit `report` mode. They are rejected when a
    /// subcommand follows; pass them after the subcommand instead.
    #[command(flatten)]
    pub report: ReportArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Case-fold the text before tokenizing.
    #[arg(long, global = true, overrides_with = "no_lower")]
    pub lower: bool,

    /// Do not case-fold, even when `textstat.toml` asks for it.
    #[arg(long, global = true, overrides_with = "lower")]
    pub no_lower: bool,

    /// Remove every occurrence of this substring from input files.
    #[arg(long, value_name = "SUBSTR", global = true)]
    pub strip: Option<String>,

    /// Remove tab, newline, carriage return and form feed runs from the input.
    #[arg(long, global = true, overrides_with = "no_strip_control")]
    pub strip_control: bool,

    /// Keep control characters, even when `textstat.toml` strips them.
    #[arg(long, global = true, overrides_with = "strip_control")]
    pub no_strip_control: bool,

    /// Path to a `textstat.toml` (default: ./textstat.toml when present).
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Split into the global flags and the command to run, `report` being
    /// the default. Report options given before a subcommand are an error.
    pub fn into_command(self) -> Result<(GlobalArgs, Commands), clap::Error> {
        let Some(command) = self.command else {
            return Ok((self.global, Commands::Report(self.report)));
        };
        if self.report.format.is_some() || self.report.out.is_some() {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "`--format` and `--out` before a subcommand only apply to the default \
                 report; pass them after the subcommand",
            ));
        }
        Ok((self.global, command))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Full report for one text (default).
    Report(ReportArgs),

    /// Compare two texts on one metric.
    Compare(CompareArgs),

    /// Print the result of a single query.
    Query(QueryArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Input file; `-` or nothing reads stdin.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format [default: md].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Append the report to FILE instead of printing it.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// First text (`-` for stdin).
    #[arg(value_name = "A")]
    pub first: PathBuf,

    /// Second text (`-` for stdin).
    #[arg(value_name = "B")]
    pub second: PathBuf,

    #[arg(long, value_enum, default_value_t = Metric::Count)]
    pub metric: Metric,

    #[arg(long, value_enum, default_value_t = View::Words)]
    pub view: View,

    /// Output format [default: md].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    #[arg(value_enum)]
    pub query: Query,

    /// Input file; `-` or nothing reads stdin.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// One facade query, printed on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Query {
    Text,
    Words,
    Sentences,
    WordCount,
    SentenceCount,
    AverageWordLength,
    AverageSentenceLength,
    WordFreqDist,
    SentenceFreqDist,
    WordSentiment,
    SentenceSentiment,
}

// =============================================================================
// TOML Configuration File Structures
// =============================================================================

/// Root TOML configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub analysis: AnalysisConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Case-fold the text before tokenizing.
    pub lower: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Substring removed from input files.
    pub strip: Option<String>,

    /// Strip control-character runs.
    pub strip_control: Option<bool>,

    /// Regex used by `strip_control` instead of the built-in one.
    pub control_pattern: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` when given (it must exist), otherwise
    /// `dir/textstat.toml` when that file is present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Option<Self>, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path).map(Some);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::from_file(&candidate).map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Failure to load a `textstat.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ============================================================
// Effective settings
// ============================================================

/// Options after merging CLI flags over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub lower: bool,
    pub strip: Option<String>,
    pub strip_control: bool,
    pub control_pattern: Option<String>,
    pub format: OutputFormat,
}

impl Settings {
    /// Flags set on the command line win; unset flags fall back to `file`,
    /// then to defaults.
    pub fn resolve(
        global: &GlobalArgs,
        format: Option<OutputFormat>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let file = file.cloned().unwrap_or_default();
        Self {
            lower: flag(global.lower, global.no_lower, file.analysis.lower),
            strip: global.strip.clone().or(file.input.strip),
            strip_control: flag(
                global.strip_control,
                global.no_strip_control,
                file.input.strip_control,
            ),
            control_pattern: file.input.control_pattern,
            format: format.or(file.output.format).unwrap_or_default(),
        }
    }
}

/// `--x` / `--no-x` pair over an optional file value.
fn flag(on: bool, off: bool, file: Option<bool>) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => file.unwrap_or(false),
    }
}
