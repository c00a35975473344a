#![no_main]

use libfuzzer_sys::fuzz_target;
use textstat_core::TextStats;

const MAX_INPUT_SIZE: usize = 16 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for lower in [false, true] {
        let stats = TextStats::new(text, lower);

        assert_eq!(stats.word_frequency_distribution().total(), stats.word_count());
        assert_eq!(
            stats.sentence_frequency_distribution().total(),
            stats.sentence_count()
        );
        assert_eq!(
            stats.average_sentence_length().is_err(),
            stats.sentence_count() == 0
        );
        assert!(stats.words().iter().all(|w| !w.is_empty()));

        let sentiment = stats.word_sentiment();
        assert!((-1.0..=1.0).contains(&sentiment.polarity));
        assert!((0.0..=1.0).contains(&sentiment.subjectivity));

        assert_eq!(stats.summary(), stats.summary());
    }
});
