use proptest::prelude::*;
use textstat_types::{FrequencyDistribution, RawText};

proptest! {
    #[test]
    fn frequency_total_equals_token_count(tokens in prop::collection::vec("[a-c]{1,3}", 0..60)) {
        let dist = FrequencyDistribution::from_tokens(tokens.iter().map(String::as_str));
        prop_assert_eq!(dist.total(), tokens.len());
    }

    #[test]
    fn distinct_never_exceeds_total(tokens in prop::collection::vec("[a-z]{1,4}", 0..60)) {
        let dist = FrequencyDistribution::from_tokens(tokens.iter().map(String::as_str));
        prop_assert!(dist.len() <= dist.total());
    }

    #[test]
    fn most_common_is_sorted_descending(
        tokens in prop::collection::vec("[a-d]", 0..40),
        n in 0usize..6,
    ) {
        let dist = FrequencyDistribution::from_tokens(tokens.iter().map(String::as_str));
        let top = dist.most_common(n);
        prop_assert!(top.len() <= n);
        for w in top.windows(2) {
            prop_assert!(w[0].count >= w[1].count);
        }
    }

    #[test]
    fn some_string_converts_like_plain_string(s in "\\PC{0,40}") {
        let plain: RawText = s.as_str().into();
        let wrapped: RawText = Some(s.as_str()).into();
        prop_assert_eq!(plain, wrapped);
    }
}

#[test]
fn summary_json_omits_absent_notice() {
    use textstat_types::{SCHEMA_VERSION, Sentiment, SequenceSummary, TextSummary};

    let seq = SequenceSummary {
        count: 0,
        total_length: 0,
        average: None,
        distinct: 0,
        sentiment: Sentiment::NEUTRAL,
    };
    let summary = TextSummary {
        schema_version: SCHEMA_VERSION,
        lower: false,
        notice: None,
        words: seq.clone(),
        sentences: seq,
        average_sentence_length: None,
        average_word_length: None,
        top_words: vec![],
    };
    let json = serde_json::to_string(&summary).expect("serialize");
    assert!(!json.contains("notice"));
    assert!(json.contains("\"average_word_length\":null"));
}
