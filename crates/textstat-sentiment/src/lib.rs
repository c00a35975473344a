//! # textstat-sentiment
//!
//! **Tier 1 (Collaborator)**
//!
//! Sentiment scoring is a black box to the rest of textstat: callers hand
//! over normalized text and receive a [`Sentiment`] pair. The
//! [`SentimentAnalyzer`] trait is the seam; [`PatternAnalyzer`] is the
//! default implementation.

mod lexicon;

use textstat_types::Sentiment;
use thiserror::Error;

pub use lexicon::{LexiconEntry, lookup};

/// Errors raised by a sentiment collaborator.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("sentiment analyzer failed: {0}")]
    Analyzer(String),
}

/// Anything that can score text for polarity and subjectivity.
pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Sentiment, SentimentError>;
}

/// Lexicon-based scorer.
///
/// Each lexicon word contributes its polarity and subjectivity. An
/// intensifier ("very", "extremely") scales the next scored word, and a
/// negation ("not", "never", "...n't") flips its polarity by `-0.5`. The
/// result is the mean over scored words; text without scored words is
/// neutral. Modifiers do not carry across `.`, `!`, `?` or `;`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternAnalyzer;

const NEGATION_FACTOR: f64 = -0.5;

impl PatternAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Infallible scoring used by the default construction path.
    pub fn score(&self, text: &str) -> Sentiment {
        let mut polarity = 0.0;
        let mut subjectivity = 0.0;
        let mut scored = 0usize;

        for clause in text.split(['.', '!', '?', ';']) {
            let mut intensity = 1.0;
            let mut negated = false;

            for word in words(clause) {
                if is_negation(&word) {
                    negated = true;
                    continue;
                }
                if let Some(factor) = intensifier(&word) {
                    intensity *= factor;
                    continue;
                }
                let Some(entry) = lookup(&word) else {
                    continue;
                };

                let mut p = (entry.polarity * intensity).clamp(-1.0, 1.0);
                let s = (entry.subjectivity * intensity).clamp(0.0, 1.0);
                if negated {
                    p *= NEGATION_FACTOR;
                }
                polarity += p;
                subjectivity += s;
                scored += 1;
                intensity = 1.0;
                negated = false;
            }
        }

        if scored == 0 {
            return Sentiment::NEUTRAL;
        }
        tracing::trace!(scored, "scored sentiment words");
        let n = scored as f64;
        Sentiment {
            polarity: (polarity / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity / n).clamp(0.0, 1.0),
        }
    }
}

impl SentimentAnalyzer for PatternAnalyzer {
    fn analyze(&self, text: &str) -> Result<Sentiment, SentimentError> {
        Ok(self.score(text))
    }
}

fn words(clause: &str) -> impl Iterator<Item = String> + '_ {
    clause
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

fn is_negation(word: &str) -> bool {
    matches!(word, "not" | "no" | "never" | "nor" | "cannot") || word.ends_with("n't")
}

fn intensifier(word: &str) -> Option<f64> {
    match word {
        "extremely" | "incredibly" => Some(1.5),
        "very" | "really" | "truly" => Some(1.3),
        "so" | "too" => Some(1.2),
        "quite" => Some(1.1),
        "somewhat" => Some(0.8),
        "slightly" => Some(0.7),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral() {
        assert_eq!(PatternAnalyzer.score(""), Sentiment::NEUTRAL);
    }

    #[test]
    fn unknown_words_are_neutral() {
        assert_eq!(PatternAnalyzer.score("the cat sat"), Sentiment::NEUTRAL);
    }

    #[test]
    fn positive_word_has_positive_polarity() {
        let s = PatternAnalyzer.score("a good day");
        assert!(s.polarity > 0.0);
        assert!(s.subjectivity > 0.0);
    }

    #[test]
    fn negation_flips_and_damps_polarity() {
        let plain = PatternAnalyzer.score("good");
        let negated = PatternAnalyzer.score("not good");
        assert!(negated.polarity < 0.0);
        assert!((negated.polarity - plain.polarity * NEGATION_FACTOR).abs() < 1e-12);
    }

    #[test]
    fn intensifier_scales_next_word() {
        let plain = PatternAnalyzer.score("good");
        let strong = PatternAnalyzer.score("very good");
        assert!(strong.polarity > plain.polarity);
    }

    #[test]
    fn negation_does_not_cross_sentence_boundary() {
        let s = PatternAnalyzer.score("not. good");
        assert!(s.polarity > 0.0);
    }

    #[test]
    fn scoring_is_case_insensitive() {
        assert_eq!(PatternAnalyzer.score("GOOD"), PatternAnalyzer.score("good"));
    }
}
