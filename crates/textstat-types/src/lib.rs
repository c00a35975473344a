//! # textstat-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data contracts shared by every `textstat` crate.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Input coercion contract (`RawText`, `CoercionNotice`)
//! * Token containers (`TokenSequence`, `FrequencyDistribution`)
//! * Comparison and summary contracts
//!
//! ## What does NOT belong here
//! * Tokenization or metric computation
//! * File I/O
//! * CLI argument parsing

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The current schema version for serialized summaries.
pub const SCHEMA_VERSION: u32 = 1;

// -----------------------
// Input
// -----------------------

/// Text handed to the pipeline before coercion.
///
/// Strings pass through untouched, sequences of strings are joined with a
/// single space, and absent input becomes the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawText {
    Text(String),
    Parts(Vec<String>),
    #[default]
    Absent,
}

impl From<&str> for RawText {
    fn from(value: &str) -> Self {
        RawText::Text(value.to_string())
    }
}

impl From<String> for RawText {
    fn from(value: String) -> Self {
        RawText::Text(value)
    }
}

impl From<&String> for RawText {
    fn from(value: &String) -> Self {
        RawText::Text(value.clone())
    }
}

impl From<Vec<String>> for RawText {
    fn from(value: Vec<String>) -> Self {
        RawText::Parts(value)
    }
}

impl From<Vec<&str>> for RawText {
    fn from(value: Vec<&str>) -> Self {
        RawText::Parts(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for RawText {
    fn from(value: &[&str]) -> Self {
        RawText::Parts(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RawText {
    fn from(value: [&str; N]) -> Self {
        RawText::Parts(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<T: Into<RawText>> From<Option<T>> for RawText {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawText::Absent, Into::into)
    }
}

/// Structured warning emitted when input was not plain text and had to be
/// coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoercionNotice {
    /// A sequence of strings was joined with single spaces.
    JoinedParts { parts: usize },
    /// No input was given; the empty string was used instead.
    AbsentInput,
}

impl fmt::Display for CoercionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionNotice::JoinedParts { parts } => {
                write!(f, "input was a sequence of {} parts; joined with spaces", parts)
            }
            CoercionNotice::AbsentInput => write!(f, "input was absent; using empty text"),
        }
    }
}

// -----------------------
// Tokens
// -----------------------

/// Which tokenization feeds an analysis unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Whitespace-separated words.
    #[default]
    Words,
    /// Fragments between literal `.` characters.
    Sentences,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Words => "words",
            View::Sentences => "sentences",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered tokens derived from normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl AsRef<[String]> for TokenSequence {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl FromIterator<String> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Occurrence count per distinct token.
///
/// Backed by a `BTreeMap` so iteration and serialized output are
/// deterministic. The values always sum to the length of the sequence the
/// distribution was built from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyDistribution(BTreeMap<String, usize>);

impl FrequencyDistribution {
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Occurrences of `token`; zero when it never appeared.
    pub fn get(&self, token: &str) -> usize {
        self.0.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all occurrences.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The `n` most frequent tokens, most frequent first. Ties are broken by
    /// token, ascending.
    pub fn most_common(&self, n: usize) -> Vec<TokenCount> {
        let mut rows: Vec<TokenCount> = self
            .0
            .iter()
            .map(|(token, count)| TokenCount {
                token: token.clone(),
                count: *count,
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
        rows.truncate(n);
        rows
    }

    pub fn into_inner(self) -> BTreeMap<String, usize> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

// -----------------------
// Comparison
// -----------------------

/// A metric two token sequences can be compared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Number of tokens.
    #[default]
    Count,
    /// Sum of token character lengths.
    Length,
    /// Rounded average token length.
    Average,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::Count => "count",
            Metric::Length => "length",
            Metric::Average => "average",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    FirstExceeds,
    SecondExceeds,
}

/// Directional outcome of comparing two samples on one metric.
///
/// `magnitude` is the absolute difference rounded to two decimals. An exact
/// tie is reported as [`Direction::FirstExceeds`] with magnitude `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub metric: Metric,
    pub direction: Direction,
    pub magnitude: f64,
}

impl ComparisonResult {
    /// `first - second`, reconstructed from direction and magnitude.
    pub fn signed_difference(&self) -> f64 {
        match self.direction {
            Direction::FirstExceeds => self.magnitude,
            Direction::SecondExceeds => -self.magnitude,
        }
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::FirstExceeds => {
                write!(f, "first exceeds second by {:.2}", self.magnitude)
            }
            Direction::SecondExceeds => {
                write!(f, "second exceeds first by {:.2}", self.magnitude)
            }
        }
    }
}

// -----------------------
// Sentiment
// -----------------------

/// Polarity in `[-1.0, 1.0]` and subjectivity in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    pub const NEUTRAL: Sentiment = Sentiment {
        polarity: 0.0,
        subjectivity: 0.0,
    };
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sentiment(polarity={:.4}, subjectivity={:.4})",
            self.polarity, self.subjectivity
        )
    }
}

// -----------------------
// Output
// -----------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Markdown table.
    #[default]
    Md,
    /// JSON (compact).
    Json,
    /// Plain `key: value` lines.
    Text,
}

/// Per-view figures in a [`TextSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceSummary {
    pub count: usize,
    pub total_length: usize,
    /// `None` when the view has no tokens.
    pub average: Option<f64>,
    pub distinct: usize,
    pub sentiment: Sentiment,
}

/// Point-in-time snapshot of every facade query.
///
/// Averages that would divide by zero are `None` rather than a made-up
/// number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSummary {
    pub schema_version: u32,
    pub lower: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<CoercionNotice>,
    pub words: SequenceSummary,
    pub sentences: SequenceSummary,
    pub average_sentence_length: Option<f64>,
    pub average_word_length: Option<f64>,
    pub top_words: Vec<TokenCount>,
}
