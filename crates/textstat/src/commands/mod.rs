pub(crate) mod compare;
pub(crate) mod query;
pub(crate) mod report;

use anyhow::Result;
use textstat_config::{Commands, Settings};
use textstat_types::OutputFormat;

pub(crate) fn dispatch(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Report(args) => report::handle(args, settings),
        Commands::Compare(args) => compare::handle(args, settings),
        Commands::Query(args) => query::handle(args, settings),
    }
}

/// `--format` given on the command line, if the command takes one.
pub(crate) fn requested_format(command: &Commands) -> Option<OutputFormat> {
    match command {
        Commands::Report(args) => args.format,
        Commands::Compare(args) => args.format,
        Commands::Query(_) => None,
    }
}
