//! # textstat-format
//!
//! **Tier 4 (Formatting)**
//!
//! Rendering of textstat results and the [`TextPrinter`] console layer.
//!
//! ## What belongs here
//! * Markdown / JSON / plain renderers for [`TextSummary`]
//! * Writing query results to a stream
//!
//! ## What does NOT belong here
//! * Calculating statistics
//! * CLI arg parsing

mod printer;

use std::io::Write;

use anyhow::Result;
use textstat_types::{ComparisonResult, OutputFormat, TextSummary, View};

pub use printer::TextPrinter;

/// Render `summary` in `format` and write it to `out`.
pub fn write_summary_to<W: Write>(
    out: &mut W,
    summary: &TextSummary,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Md => write!(out, "{}", render_md(summary))?,
        OutputFormat::Text => write!(out, "{}", render_text(summary))?,
        OutputFormat::Json => writeln!(out, "{}", render_json(summary)?)?,
    }
    Ok(())
}

pub fn write_comparison_to<W: Write>(
    out: &mut W,
    result: &ComparisonResult,
    view: View,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Md => write!(out, "{}", render_comparison_md(result, view))?,
        OutputFormat::Text => writeln!(out, "{}", result)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(result)?)?,
    }
    Ok(())
}

pub fn render_md(summary: &TextSummary) -> String {
    let mut s = String::new();

    if let Some(notice) = summary.notice {
        s.push_str(&format!("> Note: {}\n\n", notice));
    }

    s.push_str("|View|Count|Length|Avg|Distinct|Polarity|Subjectivity|\n");
    s.push_str("|---|---:|---:|---:|---:|---:|---:|\n");
    for (view, seq) in [
        (View::Words, &summary.words),
        (View::Sentences, &summary.sentences),
    ] {
        s.push_str(&format!(
            "|{}|{}|{}|{}|{}|{:.2}|{:.2}|\n",
            view,
            seq.count,
            seq.total_length,
            fmt_opt(seq.average),
            seq.distinct,
            seq.sentiment.polarity,
            seq.sentiment.subjectivity,
        ));
    }

    s.push('\n');
    s.push_str(&format!(
        "Average sentence length: {}\n",
        fmt_opt(summary.average_sentence_length)
    ));
    s.push_str(&format!(
        "Average word length: {}\n",
        fmt_opt(summary.average_word_length)
    ));

    if !summary.top_words.is_empty() {
        s.push('\n');
        s.push_str("|Word|Count|\n");
        s.push_str("|---|---:|\n");
        for row in &summary.top_words {
            s.push_str(&format!("|{}|{}|\n", escape_md(&row.token), row.count));
        }
    }

    s
}

pub fn render_text(summary: &TextSummary) -> String {
    let mut s = String::new();
    if let Some(notice) = summary.notice {
        s.push_str(&format!("notice: {}\n", notice));
    }
    s.push_str(&format!("word_count: {}\n", summary.words.count));
    s.push_str(&format!("sentence_count: {}\n", summary.sentences.count));
    s.push_str(&format!("word_total_length: {}\n", summary.words.total_length));
    s.push_str(&format!(
        "sentence_total_length: {}\n",
        summary.sentences.total_length
    ));
    s.push_str(&format!(
        "average_sentence_length: {}\n",
        fmt_opt(summary.average_sentence_length)
    ));
    s.push_str(&format!(
        "average_word_length: {}\n",
        fmt_opt(summary.average_word_length)
    ));
    s.push_str(&format!("word_sentiment: {}\n", summary.words.sentiment));
    s.push_str(&format!("sentence_sentiment: {}\n", summary.sentences.sentiment));
    s
}

pub fn render_json(summary: &TextSummary) -> Result<String> {
    Ok(serde_json::to_string(summary)?)
}

pub fn render_comparison_md(result: &ComparisonResult, view: View) -> String {
    let mut s = String::new();
    s.push_str("|Metric|View|Result|\n");
    s.push_str("|---|---|---|\n");
    s.push_str(&format!("|{}|{}|{}|\n", result.metric, view, result));
    s
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

fn escape_md(token: &str) -> String {
    token.replace('|', "\\|")
}
