use std::io::Write;

use anyhow::Result;
use textstat_config::{ReportArgs, Settings};
use textstat_content::append_text;
use textstat_core::TextStats;
use textstat_format::write_summary_to;

use crate::input;

pub(crate) fn handle(args: ReportArgs, settings: &Settings) -> Result<()> {
    let text = input::load_text(args.path.as_deref(), settings)?;
    let stats = TextStats::new(text, settings.lower);
    let summary = stats.summary();

    match &args.out {
        Some(path) => {
            let mut buf = Vec::new();
            write_summary_to(&mut buf, &summary, settings.format)?;
            append_text(path, &String::from_utf8(buf)?)?;
            tracing::info!(path = %path.display(), "appended report");
        }
        None => {
            let mut out = std::io::stdout().lock();
            write_summary_to(&mut out, &summary, settings.format)?;
            out.flush()?;
        }
    }
    Ok(())
}
