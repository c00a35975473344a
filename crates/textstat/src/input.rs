use std::io;
use std::path::Path;

use anyhow::Result;
use textstat_config::Settings;
use textstat_content::{read_stream, read_text, strip_control_chars};

/// `None` and `-` read stdin.
pub(crate) fn is_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p == Path::new("-"))
}

/// Read one input and apply the configured stripping.
pub(crate) fn load_text(path: Option<&Path>, settings: &Settings) -> Result<String> {
    let strip = settings.strip.as_deref();
    let text = match path {
        Some(p) if !is_stdin(path) => {
            tracing::info!(path = %p.display(), "reading input file");
            read_text(p, strip)?
        }
        _ => {
            tracing::info!("reading stdin");
            read_stream(io::stdin().lock(), strip)?
        }
    };

    if settings.strip_control {
        strip_control_chars(&text, settings.control_pattern.as_deref())
    } else {
        Ok(text)
    }
}
