//! Embedded polarity/subjectivity lexicon.

/// One scored word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub word: &'static str,
    pub polarity: f64,
    pub subjectivity: f64,
}

const fn entry(word: &'static str, polarity: f64, subjectivity: f64) -> LexiconEntry {
    LexiconEntry {
        word,
        polarity,
        subjectivity,
    }
}

// Sorted by word; `lookup` relies on it.
static LEXICON: &[LexiconEntry] = &[
    entry("amazing", 0.6, 0.9),
    entry("angry", -0.5, 1.0),
    entry("annoying", -0.8, 0.9),
    entry("awful", -1.0, 1.0),
    entry("bad", -0.7, 0.67),
    entry("beautiful", 0.85, 1.0),
    entry("best", 1.0, 0.3),
    entry("better", 0.5, 0.5),
    entry("boring", -1.0, 1.0),
    entry("bright", 0.7, 0.9),
    entry("broken", -0.4, 0.4),
    entry("calm", 0.3, 0.75),
    entry("clean", 0.37, 0.69),
    entry("clear", 0.1, 0.38),
    entry("cruel", -1.0, 1.0),
    entry("dirty", -0.6, 0.8),
    entry("dull", -0.31, 0.69),
    entry("easy", 0.43, 0.83),
    entry("excellent", 1.0, 1.0),
    entry("fair", 0.7, 0.9),
    entry("false", -0.4, 0.9),
    entry("fantastic", 0.4, 0.9),
    entry("fine", 0.42, 0.5),
    entry("fun", 0.3, 0.2),
    entry("funny", 0.25, 0.75),
    entry("glad", 0.5, 1.0),
    entry("good", 0.7, 0.6),
    entry("great", 0.8, 0.75),
    entry("happy", 0.8, 1.0),
    entry("hard", -0.29, 0.54),
    entry("hate", -0.8, 0.9),
    entry("helpful", 0.5, 0.6),
    entry("horrible", -1.0, 1.0),
    entry("important", 0.4, 1.0),
    entry("interesting", 0.5, 0.5),
    entry("kind", 0.6, 0.9),
    entry("lazy", -0.25, 0.6),
    entry("love", 0.5, 0.6),
    entry("lovely", 0.5, 0.75),
    entry("messy", -0.5, 0.6),
    entry("nice", 0.6, 1.0),
    entry("perfect", 1.0, 1.0),
    entry("pleasant", 0.73, 1.0),
    entry("poor", -0.4, 0.6),
    entry("right", 0.29, 0.54),
    entry("rude", -0.55, 0.8),
    entry("sad", -0.5, 1.0),
    entry("serious", -0.33, 0.67),
    entry("slow", -0.3, 0.39),
    entry("strong", 0.43, 0.73),
    entry("stupid", -0.8, 1.0),
    entry("terrible", -1.0, 1.0),
    entry("true", 0.35, 0.65),
    entry("ugly", -0.7, 1.0),
    entry("useful", 0.3, 0.0),
    entry("useless", -0.5, 0.2),
    entry("weak", -0.38, 0.63),
    entry("wonderful", 1.0, 1.0),
    entry("worse", -0.4, 0.6),
    entry("worst", -1.0, 1.0),
    entry("wrong", -0.5, 0.9),
];

/// Find the entry for an already lower-cased word.
pub fn lookup(word: &str) -> Option<&'static LexiconEntry> {
    LEXICON
        .binary_search_by(|e| e.word.cmp(word))
        .ok()
        .map(|idx| &LEXICON[idx])
}
