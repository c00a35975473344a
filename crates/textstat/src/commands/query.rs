use anyhow::Result;
use textstat_config::{Query, QueryArgs, Settings};
use textstat_core::TextStats;
use textstat_format::TextPrinter;

use crate::input;

pub(crate) fn handle(args: QueryArgs, settings: &Settings) -> Result<()> {
    let text = input::load_text(args.path.as_deref(), settings)?;
    let stats = TextStats::new(text, settings.lower);
    let mut printer = TextPrinter::new(&stats, std::io::stdout().lock());

    match args.query {
        Query::Text => printer.print_text(),
        Query::Words => printer.print_words(),
        Query::Sentences => printer.print_sentences(),
        Query::WordCount => printer.print_word_count(),
        Query::SentenceCount => printer.print_sentence_count(),
        Query::AverageWordLength => printer.print_average_word_length(),
        Query::AverageSentenceLength => printer.print_average_sentence_length(),
        Query::WordFreqDist => printer.print_word_freq_dist(),
        Query::SentenceFreqDist => printer.print_sentence_freq_dist(),
        Query::WordSentiment => printer.print_word_sentiment(),
        Query::SentenceSentiment => printer.print_sentence_sentiment(),
    }
}
