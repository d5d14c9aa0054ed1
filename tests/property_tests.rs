//! Property tests for the tagger invariants

use metrix_connectives::*;
use proptest::prelude::*;

const PHRASES: &[&str] = &["además", "sin embargo", "después de que", "mientras tanto"];

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "el", "estudio", "además", "sin", "embargo", "después", "de", "que", "mientras",
        "tanto", "es", "bueno", ",",
    ])
}

fn tagger() -> ConnectiveTagger {
    let ctx = PipelineContext::new().with_pipe(MORPHOLOGIZER);
    ConnectiveTagger::additive(&ctx, PHRASES).unwrap()
}

proptest! {
    #[test]
    fn count_always_equals_span_list_length(words in prop::collection::vec(word(), 0..40)) {
        let mut doc = Doc::from_words(&words);
        tagger().apply(&mut doc);
        prop_assert_eq!(
            doc.connectives_count(ConnectiveKind::Additive),
            doc.connectives(ConnectiveKind::Additive).len()
        );
    }

    #[test]
    fn stored_spans_never_overlap(words in prop::collection::vec(word(), 0..40)) {
        let mut doc = Doc::from_words(&words);
        tagger().apply(&mut doc);
        let spans = doc.connectives(ConnectiveKind::Additive);
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start, "overlap: {:?}", pair);
        }
    }

    #[test]
    fn spans_stay_within_document_bounds(words in prop::collection::vec(word(), 0..40)) {
        let mut doc = Doc::from_words(&words);
        tagger().apply(&mut doc);
        for span in doc.connectives(ConnectiveKind::Additive) {
            prop_assert!(span.start < span.end);
            prop_assert!(span.end <= doc.len());
        }
    }

    #[test]
    fn apply_is_idempotent(words in prop::collection::vec(word(), 0..40)) {
        let tagger = tagger();
        let mut doc = Doc::from_words(&words);
        tagger.apply(&mut doc);
        let once = doc.annotations().clone();
        tagger.apply(&mut doc);
        prop_assert_eq!(doc.annotations(), &once);
    }

    #[test]
    fn matching_ignores_ascii_and_unicode_case(words in prop::collection::vec(word(), 0..40)) {
        let tagger = tagger();

        let mut lower = Doc::from_words(&words);
        tagger.apply(&mut lower);

        let upper_words: Vec<String> = words.iter().map(|w| w.to_uppercase()).collect();
        let mut upper = Doc::from_words(&upper_words);
        tagger.apply(&mut upper);

        let lower_ranges: Vec<(usize, usize)> = lower
            .connectives(ConnectiveKind::Additive)
            .iter()
            .map(|s| (s.start, s.end))
            .collect();
        let upper_ranges: Vec<(usize, usize)> = upper
            .connectives(ConnectiveKind::Additive)
            .iter()
            .map(|s| (s.start, s.end))
            .collect();
        prop_assert_eq!(lower_ranges, upper_ranges);
    }
}
