//! Ranking order: field weights, phrase bonus, recency, ties.

use super::common::{make_dated_record, make_record, test_now, Site};
use mizan::{rank_full, rank_suggestions, Collection, FixedClock, RecordId};

fn ids(results: &[mizan::ScoredResult<'_>]) -> Vec<RecordId> {
    results.iter().map(|r| r.record.id.clone()).collect()
}

#[test]
fn test_prayer_query_across_all_collections() {
    let site = Site::sample();
    let collections = site.collections();
    let results = rank_full("صلاة", &collections, &FixedClock(test_now()));

    // 101: title + body + phrase + fresh   = 8 + 2 + 20 + 3
    // 301: title + phrase, no date         = 8 + 20
    // 102: body + phrase, 200 days old     = 2 + 20
    // kh-9: body + phrase, garbage date    = 2 + 20
    assert_eq!(
        ids(&results),
        vec![
            RecordId::Int(101),
            RecordId::Int(301),
            RecordId::Int(102),
            RecordId::Text("kh-9".into()),
        ]
    );
    assert!((results[0].score - 33.0).abs() < 1e-9);
    assert!((results[1].score - 28.0).abs() < 1e-9);
    assert!((results[2].score - 22.0).abs() < 1e-9);
    assert!((results[3].score - 22.0).abs() < 1e-9);

    let kinds: Vec<_> = results.iter().map(|r| r.collection_type).collect();
    assert_eq!(kinds, vec!["fatwas", "videos", "fatwas", "khutbahs"]);
}

#[test]
fn test_title_and_recency_beat_single_body_match() {
    let fatwas = vec![
        make_dated_record(1, "أحكام الصلاة", "...", 0),
        make_dated_record(2, "أحكام الزكاة", "باب الصلاة في السفر", 200),
        make_record(3, "أحكام الصيام", "رمضان"),
    ];
    let collections = [Collection::new("fatwas", &fatwas)];
    let results = rank_full("صلاة", &collections, &FixedClock(test_now()));

    assert_eq!(ids(&results), vec![RecordId::Int(1), RecordId::Int(2)]);
    assert!(results.iter().all(|r| r.score > 0.0));
}

#[test]
fn test_title_match_outranks_body_match() {
    let articles = vec![
        make_record(1, "Mountains", "a note on fasting"),
        make_record(2, "Fasting", "a note on mountains"),
    ];
    let collections = [Collection::new("articles", &articles)];
    let results = rank_full("fasting", &collections, &FixedClock(test_now()));
    assert_eq!(ids(&results), vec![RecordId::Int(2), RecordId::Int(1)]);
}

#[test]
fn test_more_title_occurrences_rank_higher() {
    let articles = vec![
        make_record(1, "zakat", ""),
        make_record(2, "zakat and zakat", ""),
    ];
    let collections = [Collection::new("articles", &articles)];
    let results = rank_full("zakat", &collections, &FixedClock(test_now()));
    assert_eq!(ids(&results), vec![RecordId::Int(2), RecordId::Int(1)]);
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_whole_phrase_beats_scattered_terms() {
    let articles = vec![
        make_record(1, "", "rules of travel and of prayer"),
        make_record(2, "", "travel prayer"),
    ];
    let collections = [Collection::new("articles", &articles)];
    let results = rank_full("travel prayer", &collections, &FixedClock(test_now()));
    assert_eq!(ids(&results), vec![RecordId::Int(2), RecordId::Int(1)]);
}

#[test]
fn test_newer_record_wins_otherwise_equal() {
    let articles = vec![
        make_dated_record(1, "Hajj guide", "", 60),
        make_dated_record(2, "Hajj guide", "", 1),
    ];
    let collections = [Collection::new("articles", &articles)];
    let results = rank_full("hajj", &collections, &FixedClock(test_now()));
    assert_eq!(ids(&results), vec![RecordId::Int(2), RecordId::Int(1)]);
}

#[test]
fn test_equal_scores_keep_collection_then_record_order() {
    let fatwas = vec![make_record(1, "wudu", ""), make_record(2, "wudu", "")];
    let articles = vec![make_record(3, "wudu", "")];
    let videos = vec![make_record(4, "wudu", "")];
    let collections = [
        Collection::new("videos", &videos),
        Collection::new("fatwas", &fatwas),
        Collection::new("articles", &articles),
    ];
    let results = rank_full("wudu", &collections, &FixedClock(test_now()));
    assert_eq!(
        ids(&results),
        vec![
            RecordId::Int(4),
            RecordId::Int(1),
            RecordId::Int(2),
            RecordId::Int(3)
        ]
    );
}

#[test]
fn test_truncation_keeps_the_best_200() {
    // Record i has i title hits, so higher ids score higher.
    let records: Vec<_> = (1..=250)
        .map(|i| make_record(i, &"sabr ".repeat(i as usize), ""))
        .collect();
    let collections = [Collection::new("articles", &records)];
    let results = rank_full("sabr", &collections, &FixedClock(test_now()));

    assert_eq!(results.len(), 200);
    assert_eq!(results[0].record.id, RecordId::Int(250));
    assert_eq!(results[199].record.id, RecordId::Int(51));
}

#[test]
fn test_suggestions_are_top_of_full_ranking() {
    let site = Site::sample();
    let collections = site.collections();
    let clock = FixedClock(test_now());

    let full = rank_full("صلاة", &collections, &clock);
    let suggestions = rank_suggestions("صلاة", &collections, &clock);

    assert_eq!(suggestions.len(), full.len().min(6));
    for (suggestion, result) in suggestions.iter().zip(&full) {
        assert_eq!(suggestion.id, result.record.id);
        assert_eq!(suggestion.kind, result.collection_type);
        assert_eq!(suggestion.score, result.score);
    }
    // Title falls back to `name` for the khutbah.
    assert_eq!(suggestions[3].title, "خطبة الجمعة");
}
