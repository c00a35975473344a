//! # textstat-core
//!
//! This crate is the **primary library interface** for `textstat`.
//! [`TextStats`] builds a word view and a sentence view over the same input
//! and answers every statistics query through them.
//!
//! Values are never copied out and cached: each query walks
//! `TextStats -> AnalysisUnit -> MetricsEngine` and recomputes.
//!
//! ## Example
//!
//! ```rust
//! use textstat_core::TextStats;
//!
//! let stats = TextStats::new("The cat sat. The dog ran.", false);
//! assert_eq!(stats.word_count(), 6);
//! assert_eq!(stats.sentence_count(), 3);
//!
//! let empty = TextStats::new("", false);
//! assert!(empty.average_sentence_length().is_err());
//! ```

pub mod error;

use textstat_math::checked_ratio;
use textstat_types::{
    CoercionNotice, ComparisonResult, FrequencyDistribution, Metric, RawText, SCHEMA_VERSION,
    Sentiment, SequenceSummary, TextSummary, TokenSequence, View,
};

// Re-export the building blocks for convenience
pub use textstat_analysis::AnalysisUnit;
pub use textstat_metrics::{MetricsEngine, MetricsError};
pub use textstat_sentiment::{PatternAnalyzer, SentimentAnalyzer, SentimentError};
pub use textstat_types as types;

/// Number of entries in [`TextSummary::top_words`].
pub const TOP_WORDS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct TextStats {
    lower: bool,
    words: AnalysisUnit,
    sentences: AnalysisUnit,
}

impl TextStats {
    /// Analyze `raw`, case-folding first when `lower` is set.
    pub fn new(raw: impl Into<RawText>, lower: bool) -> Self {
        let raw = raw.into();
        Self {
            lower,
            words: AnalysisUnit::words(raw.clone(), lower),
            sentences: AnalysisUnit::sentences(raw, lower),
        }
    }

    /// Analyze `raw` with a caller-supplied sentiment collaborator.
    pub fn with_analyzer(
        raw: impl Into<RawText>,
        lower: bool,
        analyzer: &dyn SentimentAnalyzer,
    ) -> Result<Self, SentimentError> {
        let raw = raw.into();
        Ok(Self {
            lower,
            words: AnalysisUnit::with_analyzer(raw.clone(), lower, View::Words, analyzer)?,
            sentences: AnalysisUnit::with_analyzer(raw, lower, View::Sentences, analyzer)?,
        })
    }

    pub fn lower(&self) -> bool {
        self.lower
    }

    /// The normalized text.
    pub fn text(&self) -> &str {
        self.sentences.text()
    }

    pub fn words(&self) -> &TokenSequence {
        self.words.tokens()
    }

    pub fn sentences(&self) -> &TokenSequence {
        self.sentences.tokens()
    }

    pub fn unit(&self, view: View) -> &AnalysisUnit {
        match view {
            View::Words => &self.words,
            View::Sentences => &self.sentences,
        }
    }

    pub fn word_metrics(&self) -> &MetricsEngine {
        self.words.metrics()
    }

    pub fn sentence_metrics(&self) -> &MetricsEngine {
        self.sentences.metrics()
    }

    pub fn word_count(&self) -> usize {
        self.words.metrics().count()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.metrics().count()
    }

    /// Rounded average sentence length in characters.
    pub fn average_sentence_length(&self) -> Result<f64, MetricsError> {
        self.sentences.metrics().rounded_average()
    }

    /// Sentence-view rounded average divided by word-view rounded average.
    ///
    /// This is a ratio of two averages, not the mean length of a word. It
    /// fails when either view is empty or the word average is zero.
    pub fn average_word_length(&self) -> Result<f64, MetricsError> {
        let sentence_avg = self.sentences.metrics().rounded_average()?;
        let word_avg = self.words.metrics().rounded_average()?;
        checked_ratio(sentence_avg, word_avg).ok_or(MetricsError::division("average word length"))
    }

    pub fn word_frequency_distribution(&self) -> FrequencyDistribution {
        self.words.metrics().frequency_distribution()
    }

    pub fn sentence_frequency_distribution(&self) -> FrequencyDistribution {
        self.sentences.metrics().frequency_distribution()
    }

    pub fn word_sentiment(&self) -> Sentiment {
        self.words.sentiment()
    }

    pub fn sentence_sentiment(&self) -> Sentiment {
        self.sentences.sentiment()
    }

    /// Set when the input was a sequence or absent and had to be coerced.
    pub fn notice(&self) -> Option<CoercionNotice> {
        self.words.notice()
    }

    /// Compare this text (first) against `other` (second) on one view.
    pub fn compare(
        &self,
        other: &TextStats,
        view: View,
        metric: Metric,
    ) -> Result<ComparisonResult, MetricsError> {
        textstat_compare::compare(
            self.unit(view).metrics(),
            other.unit(view).metrics(),
            metric,
        )
    }

    /// Snapshot of every query. Recomputed on each call.
    pub fn summary(&self) -> TextSummary {
        TextSummary {
            schema_version: SCHEMA_VERSION,
            lower: self.lower,
            notice: self.notice(),
            words: sequence_summary(&self.words),
            sentences: sequence_summary(&self.sentences),
            average_sentence_length: self.average_sentence_length().ok(),
            average_word_length: self.average_word_length().ok(),
            top_words: self.word_frequency_distribution().most_common(TOP_WORDS),
        }
    }
}

fn sequence_summary(unit: &AnalysisUnit) -> SequenceSummary {
    let metrics = unit.metrics();
    SequenceSummary {
        count: metrics.count(),
        total_length: metrics.total_length(),
        average: metrics.rounded_average().ok(),
        distinct: metrics.frequency_distribution().len(),
        sentiment: unit.sentiment(),
    }
}
