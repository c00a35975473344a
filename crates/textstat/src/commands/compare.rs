use anyhow::{Result, bail};
use textstat_config::{CompareArgs, Settings};
use textstat_core::TextStats;
use textstat_format::write_comparison_to;

use crate::input;

pub(crate) fn handle(args: CompareArgs, settings: &Settings) -> Result<()> {
    let (first, second) = (args.first.as_path(), args.second.as_path());
    if input::is_stdin(Some(first)) && input::is_stdin(Some(second)) {
        bail!("only one of the compared inputs can be read from stdin");
    }

    let first = TextStats::new(input::load_text(Some(first), settings)?, settings.lower);
    let second = TextStats::new(input::load_text(Some(second), settings)?, settings.lower);

    let result = first.compare(&second, args.view, args.metric)?;
    tracing::debug!(%result, metric = %args.metric, view = %args.view, "compared");

    write_comparison_to(&mut std::io::stdout().lock(), &result, args.view, settings.format)
}
