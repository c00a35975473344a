//! Console printing on top of the [`TextStats`] facade.

use std::io::Write;

use anyhow::Result;
use textstat_core::TextStats;
use textstat_types::{FrequencyDistribution, Sentiment};

/// Writes the result of a facade query to `out`.
///
/// The printer only borrows the facade; every `print_*` call re-runs the
/// underlying query.
pub struct TextPrinter<'a, W: Write> {
    stats: &'a TextStats,
    out: W,
}

impl<'a, W: Write> TextPrinter<'a, W> {
    pub fn new(stats: &'a TextStats, out: W) -> Self {
        Self { stats, out }
    }

    pub fn stats(&self) -> &'a TextStats {
        self.stats
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_text(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.stats.text())?;
        Ok(())
    }

    pub fn print_words(&mut self) -> Result<()> {
        writeln!(self.out, "{:?}", self.stats.words().as_slice())?;
        Ok(())
    }

    pub fn print_sentences(&mut self) -> Result<()> {
        writeln!(self.out, "{:?}", self.stats.sentences().as_slice())?;
        Ok(())
    }

    pub fn print_word_count(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.stats.word_count())?;
        Ok(())
    }

    pub fn print_sentence_count(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.stats.sentence_count())?;
        Ok(())
    }

    pub fn print_average_word_length(&mut self) -> Result<()> {
        let value = self.stats.average_word_length()?;
        writeln!(self.out, "{}", value)?;
        Ok(())
    }

    pub fn print_average_sentence_length(&mut self) -> Result<()> {
        let value = self.stats.average_sentence_length()?;
        writeln!(self.out, "{}", value)?;
        Ok(())
    }

    pub fn print_word_freq_dist(&mut self) -> Result<()> {
        let dist = self.stats.word_frequency_distribution();
        self.write_distribution(&dist)
    }

    pub fn print_sentence_freq_dist(&mut self) -> Result<()> {
        let dist = self.stats.sentence_frequency_distribution();
        self.write_distribution(&dist)
    }

    pub fn print_word_sentiment(&mut self) -> Result<()> {
        let sentiment = self.stats.word_sentiment();
        self.write_sentiment(sentiment)
    }

    pub fn print_sentence_sentiment(&mut self) -> Result<()> {
        let sentiment = self.stats.sentence_sentiment();
        self.write_sentiment(sentiment)
    }

    // Most frequent first, one `token<TAB>count` per line.
    fn write_distribution(&mut self, dist: &FrequencyDistribution) -> Result<()> {
        for row in dist.most_common(dist.len()) {
            writeln!(self.out, "{:?}\t{}", row.token, row.count)?;
        }
        Ok(())
    }

    fn write_sentiment(&mut self, sentiment: Sentiment) -> Result<()> {
        writeln!(self.out, "{}", sentiment)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(
        stats: &TextStats,
        f: impl FnOnce(&mut TextPrinter<'_, Vec<u8>>) -> Result<()>,
    ) -> String {
        let mut printer = TextPrinter::new(stats, Vec::new());
        f(&mut printer).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn prints_counts() {
        let stats = TextStats::new("The cat sat. The dog ran.", false);
        assert_eq!(printed(&stats, |p| p.print_word_count()), "6\n");
        assert_eq!(printed(&stats, |p| p.print_sentence_count()), "3\n");
    }

    #[test]
    fn prints_token_lists_in_debug_form() {
        let stats = TextStats::new("a b. c", false);
        assert_eq!(printed(&stats, |p| p.print_words()), "[\"a\", \"b.\", \"c\"]\n");
        assert_eq!(printed(&stats, |p| p.print_sentences()), "[\"a b\", \" c\"]\n");
    }

    #[test]
    fn average_word_length_prints_the_word_ratio() {
        let stats = TextStats::new("ab cd. efgh", false);
        let expected = format!("{}\n", 5.0 / 3.0);
        assert_eq!(printed(&stats, |p| p.print_average_word_length()), expected);
        assert_eq!(printed(&stats, |p| p.print_average_sentence_length()), "5\n");
    }

    #[test]
    fn empty_text_average_is_an_error() {
        let stats = TextStats::new("", false);
        let mut printer = TextPrinter::new(&stats, Vec::new());
        assert!(printer.print_average_sentence_length().is_err());
        assert!(printer.into_inner().is_empty());
    }

    #[test]
    fn distribution_prints_most_common_first() {
        let stats = TextStats::new("b a b", false);
        assert_eq!(
            printed(&stats, |p| p.print_word_freq_dist()),
            "\"b\"\t2\n\"a\"\t1\n"
        );
    }
}
