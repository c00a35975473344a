//! # textstat-tokenize
//!
//! **Tier 1 (Tokenization)**
//!
//! Pure transformations from raw input to token sequences:
//!
//! ```text
//! RawText --coerce--> String --normalize--> String --tokenize--> TokenSequence
//! ```
//!
//! Sentence splitting is a naive split on the literal `.` character. It has
//! no notion of abbreviations, and a trailing `.` yields an empty final
//! fragment (`"a. b."` gives `["a", " b", ""]`).

use textstat_types::{CoercionNotice, RawText, TokenSequence, View};

/// The single delimiter sentence splitting uses.
pub const SENTENCE_DELIMITER: char = '.';

/// Turn any accepted input into a string, reporting what was coerced.
pub fn coerce(raw: RawText) -> (String, Option<CoercionNotice>) {
    match raw {
        RawText::Text(text) => (text, None),
        RawText::Parts(parts) => {
            let notice = CoercionNotice::JoinedParts { parts: parts.len() };
            tracing::debug!(%notice, "coerced non-text input");
            (parts.join(" "), Some(notice))
        }
        RawText::Absent => {
            let notice = CoercionNotice::AbsentInput;
            tracing::debug!(%notice, "coerced non-text input");
            (String::new(), Some(notice))
        }
    }
}

/// Case-fold `text` when `lower` is set; otherwise return it unchanged.
///
/// Folding is full Unicode case folding, not lowercasing: `ß` becomes `ss`
/// and `ﬁ` becomes `fi`.
pub fn normalize(text: String, lower: bool) -> String {
    if lower {
        caseless::default_case_fold_str(&text)
    } else {
        text
    }
}

/// Split on runs of whitespace.
#[tracing::instrument(skip_all, fields(bytes = text.len()))]
pub fn tokenize_words(text: &str) -> TokenSequence {
    text.split_whitespace().map(str::to_string).collect()
}

/// Split on every literal `.`, keeping empty fragments.
///
/// Empty text has no sentences at all, so it yields an empty sequence
/// rather than a single empty fragment.
#[tracing::instrument(skip_all, fields(bytes = text.len()))]
pub fn tokenize_sentences(text: &str) -> TokenSequence {
    if text.is_empty() {
        return TokenSequence::default();
    }
    let tokens: TokenSequence = text
        .split(SENTENCE_DELIMITER)
        .map(str::to_string)
        .collect();
    tracing::trace!(fragments = tokens.len(), "split sentences");
    tokens
}

pub fn tokenize(text: &str, view: View) -> TokenSequence {
    match view {
        View::Words => tokenize_words(text),
        View::Sentences => tokenize_sentences(text),
    }
}
