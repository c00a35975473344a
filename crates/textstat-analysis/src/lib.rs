//! # textstat-analysis
//!
//! **Tier 3 (Analysis units)**
//!
//! An [`AnalysisUnit`] pairs one tokenization view with the
//! [`MetricsEngine`] that owns the resulting tokens and with the sentiment
//! of the normalized text. Word and sentence units share the same shape and
//! differ only in their [`View`].
//!
//! Units are fixed once built. To analyze different text, build a new unit.

use textstat_metrics::MetricsEngine;
use textstat_sentiment::{PatternAnalyzer, SentimentAnalyzer, SentimentError};
use textstat_tokenize::{coerce, normalize, tokenize};
use textstat_types::{CoercionNotice, RawText, Sentiment, TokenSequence, View};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisUnit {
    view: View,
    text: String,
    notice: Option<CoercionNotice>,
    metrics: MetricsEngine,
    sentiment: Sentiment,
}

impl AnalysisUnit {
    /// Build a unit scored by the default [`PatternAnalyzer`].
    pub fn new(raw: impl Into<RawText>, lower: bool, view: View) -> Self {
        let (text, notice) = prepare(raw.into(), lower);
        let sentiment = PatternAnalyzer.score(&text);
        Self::assemble(view, text, notice, sentiment)
    }

    pub fn words(raw: impl Into<RawText>, lower: bool) -> Self {
        Self::new(raw, lower, View::Words)
    }

    pub fn sentences(raw: impl Into<RawText>, lower: bool) -> Self {
        Self::new(raw, lower, View::Sentences)
    }

    /// Build a unit scored by another sentiment collaborator. Its failure is
    /// returned as-is.
    pub fn with_analyzer(
        raw: impl Into<RawText>,
        lower: bool,
        view: View,
        analyzer: &dyn SentimentAnalyzer,
    ) -> Result<Self, SentimentError> {
        let (text, notice) = prepare(raw.into(), lower);
        let sentiment = analyzer.analyze(&text)?;
        Ok(Self::assemble(view, text, notice, sentiment))
    }

    #[tracing::instrument(skip_all, fields(view = %view))]
    fn assemble(
        view: View,
        text: String,
        notice: Option<CoercionNotice>,
        sentiment: Sentiment,
    ) -> Self {
        let metrics = MetricsEngine::new(tokenize(&text, view));
        tracing::debug!(tokens = metrics.count(), "built analysis unit");
        Self {
            view,
            text,
            notice,
            metrics,
            sentiment,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The normalized text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &TokenSequence {
        self.metrics.tokens()
    }

    pub fn metrics(&self) -> &MetricsEngine {
        &self.metrics
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    /// What, if anything, had to be coerced to build this unit.
    pub fn notice(&self) -> Option<CoercionNotice> {
        self.notice
    }
}

fn prepare(raw: RawText, lower: bool) -> (String, Option<CoercionNotice>) {
    let (text, notice) = coerce(raw);
    (normalize(text, lower), notice)
}
