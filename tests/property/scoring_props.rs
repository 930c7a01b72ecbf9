//! Scorer invariants: sign, monotonicity, recency bounds.

use chrono::Duration;
use proptest::prelude::*;

use mizan::scoring::recency_bonus;
use mizan::{score_record, tokenize, ContentRecord, ScoringWeights};

use super::common::{make_dated_record, make_record, test_now};

fn weights() -> ScoringWeights {
    ScoringWeights::default()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: scores are finite and never negative, whatever the text.
    #[test]
    fn prop_score_non_negative_and_finite(
        query in "\\PC{0,24}",
        title in "\\PC{0,48}",
        body in "\\PC{0,160}",
        days in -400i64..4000,
    ) {
        let record = make_dated_record(1, &title, &body, days);
        let score = score_record(&tokenize(&query), &record, test_now(), &weights());
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    /// Property: a query sharing no substring with the record scores 0,
    /// even for a brand-new record.
    #[test]
    fn prop_no_shared_terms_scores_zero(
        query in prop::collection::vec("[a-m]{1,6}", 1..4),
        title in "[n-z ]{0,40}",
        body in "[n-z ]{0,120}",
    ) {
        let record = make_dated_record(1, &title, &body, 0);
        let score = score_record(&query, &record, test_now(), &weights());
        prop_assert_eq!(score, 0.0);
    }

    /// Property: one more title occurrence of a term strictly raises the score.
    #[test]
    fn prop_monotonic_in_title_occurrences(term in "[a-z]{2,8}", k in 0usize..12) {
        let terms = vec![term.clone()];
        let fewer = make_record(1, &vec![term.as_str(); k].join(" "), "");
        let more = make_record(2, &vec![term.as_str(); k + 1].join(" "), "");
        let s_fewer = score_record(&terms, &fewer, test_now(), &weights());
        let s_more = score_record(&terms, &more, test_now(), &weights());
        prop_assert!(s_more > s_fewer, "{} title hits: {} vs {} hits: {}", k + 1, s_more, k, s_fewer);
    }

    /// Property: moving one occurrence from body to title raises the score.
    #[test]
    fn prop_title_outweighs_body(term in "[a-z]{2,8}", filler in "[0-9]{1,8}") {
        let terms = vec![term.clone()];
        let in_title = make_record(1, &term, &filler);
        let in_body = make_record(2, &filler, &term);
        prop_assert!(
            score_record(&terms, &in_title, test_now(), &weights())
                > score_record(&terms, &in_body, test_now(), &weights())
        );
    }

    /// Property: recency bonus stays within [0, cap].
    #[test]
    fn prop_recency_bounded(days in -10_000i64..10_000, minutes in 0i64..1440) {
        let created = test_now() - Duration::days(days) - Duration::minutes(minutes);
        let bonus = recency_bonus(created, test_now(), &weights());
        prop_assert!((0.0..=weights().recency_cap).contains(&bonus));
    }

    /// Property: older never scores higher than newer.
    #[test]
    fn prop_recency_non_increasing(a in 0i64..400, b in 0i64..400) {
        let (newer, older) = if a <= b { (a, b) } else { (b, a) };
        let w = weights();
        let bonus_newer = recency_bonus(test_now() - Duration::days(newer), test_now(), &w);
        let bonus_older = recency_bonus(test_now() - Duration::days(older), test_now(), &w);
        prop_assert!(bonus_newer >= bonus_older);
    }

    /// Property: the scorer is pure.
    #[test]
    fn prop_score_deterministic(query in "[a-z ]{0,20}", body in "[a-z ]{0,80}") {
        let record = ContentRecord {
            content: Some(body),
            created_at: Some("2025-02-20T00:00:00Z".into()),
            ..Default::default()
        };
        let terms = tokenize(&query);
        let first = score_record(&terms, &record, test_now(), &weights());
        let second = score_record(&terms, &record, test_now(), &weights());
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}
