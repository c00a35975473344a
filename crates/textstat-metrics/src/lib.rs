//! # textstat-metrics
//!
//! **Tier 2 (Metrics)**
//!
//! [`MetricsEngine`] owns one [`TokenSequence`] and derives every figure from
//! it on demand. Nothing is cached: each call re-reads the sequence.
//!
//! Every metric is total except the average, which is undefined for an
//! empty sequence and reported as [`MetricsError::Division`].

use textstat_math::checked_average;
use textstat_types::{FrequencyDistribution, Metric, TokenSequence};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("cannot compute {what}: division by zero")]
    Division { what: &'static str },
}

impl MetricsError {
    pub fn division(what: &'static str) -> Self {
        MetricsError::Division { what }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetricsEngine {
    tokens: TokenSequence,
}

impl MetricsEngine {
    pub fn new(tokens: TokenSequence) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    /// Number of tokens.
    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    /// Sum of per-token character counts.
    pub fn total_length(&self) -> usize {
        self.tokens.iter().map(|t| t.chars().count()).sum()
    }

    /// `total_length / count`, rounded to two decimals.
    pub fn rounded_average(&self) -> Result<f64, MetricsError> {
        checked_average(self.total_length(), self.count())
            .ok_or(MetricsError::division("rounded average"))
    }

    pub fn frequency_distribution(&self) -> FrequencyDistribution {
        FrequencyDistribution::from_tokens(self.tokens.iter().map(String::as_str))
    }

    /// Evaluate one comparable metric as `f64`.
    pub fn metric(&self, metric: Metric) -> Result<f64, MetricsError> {
        match metric {
            Metric::Count => Ok(self.count() as f64),
            Metric::Length => Ok(self.total_length() as f64),
            Metric::Average => self.rounded_average(),
        }
    }
}

impl From<TokenSequence> for MetricsEngine {
    fn from(tokens: TokenSequence) -> Self {
        Self::new(tokens)
    }
}
