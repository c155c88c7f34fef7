//! Candidate Ranking
//!
//! Scores a candidate pool, orders it by descending score and keeps the top
//! `limit`. Ordering uses a stable sort, so equal scores keep the order in
//! which the candidate source listed them.

use bookmatch_domain::constants::{REASON_POPULAR, REASON_SIMILAR_CONTENT, REASON_SIMILAR_TASTE};
use bookmatch_domain::value_objects::{CandidateItem, EmbeddingVector, RecommendationItem};

use tracing::warn;

use super::scoring::{ScoringWeights, SimilarityScorer};

/// Ranks candidates with a [`SimilarityScorer`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateRanker {
    scorer: SimilarityScorer,
}

impl CandidateRanker {
    /// Create a ranker using `weights`
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            scorer: SimilarityScorer::new(weights),
        }
    }

    /// Scorer in use
    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Rank against a user taste profile
    ///
    /// `limit` is trusted; callers clamp it first.
    pub fn rank(
        &self,
        profile: Option<&EmbeddingVector>,
        candidates: &[CandidateItem],
        limit: usize,
    ) -> Vec<RecommendationItem> {
        self.rank_tagged(profile, candidates, limit, REASON_SIMILAR_TASTE)
    }

    /// Rank against the embedding of a single item
    pub fn rank_similar(
        &self,
        query: &EmbeddingVector,
        candidates: &[CandidateItem],
        limit: usize,
    ) -> Vec<RecommendationItem> {
        self.rank_tagged(Some(query), candidates, limit, REASON_SIMILAR_CONTENT)
    }

    /// Rank by engagement signal alone
    pub fn rank_popular(&self, candidates: &[CandidateItem], limit: usize) -> Vec<RecommendationItem> {
        self.rank_tagged(None, candidates, limit, REASON_POPULAR)
    }

    fn rank_tagged(
        &self,
        query: Option<&EmbeddingVector>,
        candidates: &[CandidateItem],
        limit: usize,
        match_reason: &'static str,
    ) -> Vec<RecommendationItem> {
        if limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(f64, f64, &CandidateItem)> = candidates
            .iter()
            .map(|candidate| {
                let similarity = self.scorer.similarity(query, candidate);
                let score = similarity + self.scorer.popularity_score(candidate);
                (score, similarity, candidate)
            })
            .collect();

        if let Some(query) = query {
            let mismatched = candidates
                .iter()
                .filter_map(|candidate| candidate.embedding.as_ref())
                .filter(|embedding| embedding.dimensions() != query.dimensions())
                .count();
            if mismatched > 0 {
                warn!(
                    query_dimensions = query.dimensions(),
                    mismatched,
                    "candidate embeddings of another dimension scored with zero similarity"
                );
            }
        }

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(limit);

        scored
            .into_iter()
            .map(|(score, similarity, candidate)| {
                let reason = if similarity > 0.0 {
                    match_reason
                } else {
                    REASON_POPULAR
                };
                RecommendationItem::new(candidate.item_id.clone(), score).with_reason(reason)
            })
            .collect()
    }
}
