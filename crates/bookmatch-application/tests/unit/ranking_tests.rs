//! Candidate ranking properties

use bookmatch_application::{CandidateRanker, ScoringWeights};
use bookmatch_domain::value_objects::{CandidateItem, EmbeddingVector};

use crate::support::{capture_failures, ids};

fn pool() -> Vec<CandidateItem> {
    vec![
        CandidateItem::new("low").with_ratings(1.0, 0),
        CandidateItem::new("tie-first").with_ratings(3.0, 4),
        CandidateItem::new("high").with_ratings(5.0, 50),
        CandidateItem::new("tie-second").with_ratings(3.0, 4),
        CandidateItem::new("none"),
    ]
}

#[test]
fn test_rank_is_truncated_to_limit() {
    let ranker = CandidateRanker::default();
    for limit in 0..7 {
        let ranked = ranker.rank(None, &pool(), limit);
        assert_eq!(ranked.len(), limit.min(5));
    }
}

#[test]
fn test_rank_is_sorted_descending() {
    let ranker = CandidateRanker::default();
    let ranked = ranker.rank(None, &pool(), 10);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_equal_scores_keep_input_order() {
    let ranker = CandidateRanker::default();
    let ranked = ranker.rank(None, &pool(), 10);
    assert_eq!(
        ids(&ranked),
        vec!["high", "tie-first", "tie-second", "low", "none"]
    );
}

#[test]
fn test_ranking_is_reproducible() {
    let ranker = CandidateRanker::new(ScoringWeights {
        rating: 0.3,
        popularity: 0.1,
    });
    let profile = EmbeddingVector::new(vec![0.6, 0.8]);
    let candidates: Vec<CandidateItem> = (0u32..20)
        .map(|i| {
            CandidateItem::new(format!("b{i}"))
                .with_ratings(f64::from(i % 5), u64::from(i % 3))
                .with_embedding(vec![(i % 4) as f32, 1.0])
        })
        .collect();

    let first = ranker.rank(Some(&profile), &candidates, 10);
    let second = ranker.rank(Some(&profile), &candidates, 10);
    assert_eq!(first, second);
}

#[test]
fn test_cosine_only_candidate_outranks_signal_free_one() {
    let ranker = CandidateRanker::default();
    let profile = EmbeddingVector::new(vec![0.5, 0.5]);
    let candidates = vec![
        CandidateItem::new("plain"),
        CandidateItem::new("similar").with_embedding(vec![1.0, 0.0]),
    ];

    let ranked = ranker.rank(Some(&profile), &candidates, 2);

    assert_eq!(ids(&ranked), vec!["similar", "plain"]);
    assert!(ranked[0].score > 0.7);
    assert_eq!(ranked[1].score, 0.0);
    assert_eq!(ranked[0].reason.as_deref(), Some("similar-taste"));
}

#[test]
fn test_nan_score_does_not_disturb_finite_order() {
    let ranker = CandidateRanker::default();
    let candidates = vec![
        CandidateItem::new("b").with_ratings(1.0, 1),
        CandidateItem::new("broken").with_ratings(f64::NAN, 1),
        CandidateItem::new("a").with_ratings(5.0, 1),
        CandidateItem::new("c").with_ratings(3.0, 1),
    ];

    let ranked = ranker.rank(None, &candidates, 10);

    assert_eq!(ranked.len(), 4);
    let finite: Vec<&str> = ranked
        .iter()
        .filter(|item| item.score.is_finite())
        .map(|item| item.item_id.as_str())
        .collect();
    assert_eq!(finite, vec!["a", "c", "b"]);
}

#[test]
fn test_dimension_mismatch_warns_once_per_pass() {
    let ranker = CandidateRanker::default();
    let profile = EmbeddingVector::new(vec![1.0, 0.0]);
    let candidates: Vec<CandidateItem> = (0..5)
        .map(|i| CandidateItem::new(format!("b{i}")).with_embedding(vec![1.0, 0.0, 0.0]))
        .chain([CandidateItem::new("match").with_embedding(vec![1.0, 0.0])])
        .collect();
    let (failures, _guard) = capture_failures();

    let ranked = ranker.rank(Some(&profile), &candidates, 10);

    assert_eq!(ranked[0].item_id.as_str(), "match");
    assert!(ranked[1..].iter().all(|item| item.score == 0.0));
    assert_eq!(failures.count(), 1);
}
