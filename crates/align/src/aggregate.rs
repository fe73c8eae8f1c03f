use std::collections::BTreeMap;

use tracing::debug;

use crate::matcher::KeyHit;
use crate::model::{KeyEvidence, MatchCandidate};

/// Display id for a pair: blake3 over the right then left identifiers.
pub fn pair_id(right: &str, left: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(right.as_bytes());
    hasher.update(left.as_bytes());
    hasher.finalize().to_hex().to_string()
}

/// Accumulates one vote per resolved left key, keyed by (left, right).
#[derive(Debug, Default)]
pub struct MatchAggregator {
    candidates: BTreeMap<(String, String), MatchCandidate>,
}

impl MatchAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `left_key` of `left` resolved to `hit` on the right.
    pub fn record(&mut self, left: &str, left_key: &str, hit: &KeyHit<'_>) {
        let candidate = self
            .candidates
            .entry((left.to_string(), hit.resource.to_string()))
            .or_insert_with(|| MatchCandidate {
                pair_id: pair_id(hit.resource, left),
                left: left.to_string(),
                right: hit.resource.to_string(),
                score: 0,
                evidence: Vec::new(),
            });
        candidate.score += 1;
        candidate.evidence.push(KeyEvidence {
            left_key: left_key.to_string(),
            right_key: hit.key.clone(),
            strategy: hit.strategy,
        });
        debug!(
            left,
            right = hit.resource,
            key = left_key,
            strategy = %hit.strategy,
            score = candidate.score,
            "label match"
        );
    }

    pub fn get(&self, left: &str, right: &str) -> Option<&MatchCandidate> {
        self.candidates.get(&(left.to_string(), right.to_string()))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates ordered by (left, right).
    pub fn into_candidates(self) -> Vec<MatchCandidate> {
        self.candidates.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::KeyStrategy;

    fn hit<'a>(resource: &'a str, key: &str) -> KeyHit<'a> {
        KeyHit { resource, key: key.into(), strategy: KeyStrategy::Exact }
    }

    #[test]
    fn first_observation_scores_one() {
        let mut agg = MatchAggregator::new();
        agg.record("l:1", "cat_en", &hit("r:1", "cat_en"));
        let c = agg.get("l:1", "r:1").unwrap();
        assert_eq!(c.score, 1);
        assert_eq!(c.left, "l:1");
        assert_eq!(c.right, "r:1");
        assert_eq!(c.evidence.len(), 1);
    }

    #[test]
    fn votes_accumulate_per_pair() {
        let mut agg = MatchAggregator::new();
        agg.record("l:1", "cat_en", &hit("r:1", "cat_en"));
        agg.record("l:1", "gato_es", &hit("r:1", "gato_es"));
        agg.record("l:1", "chat_fr", &hit("r:2", "chat_fr"));
        assert_eq!(agg.len(), 2);
        assert_eq!(agg.get("l:1", "r:1").unwrap().score, 2);
        assert_eq!(agg.get("l:1", "r:2").unwrap().score, 1);
    }

    #[test]
    fn pair_id_is_stable_and_ordered() {
        assert_eq!(pair_id("r:1", "l:1"), pair_id("r:1", "l:1"));
        assert_ne!(pair_id("r:1", "l:1"), pair_id("l:1", "r:1"));
        assert_eq!(pair_id("r:1", "l:1").len(), 64);
    }

    #[test]
    fn concatenation_collision_does_not_merge_pairs() {
        // "ab"+"c" and "a"+"bc" share a digest input; the tuple key keeps them apart.
        let mut agg = MatchAggregator::new();
        agg.record("c", "k1", &hit("ab", "k1"));
        agg.record("bc", "k2", &hit("a", "k2"));
        assert_eq!(agg.len(), 2);
    }

    #[test]
    fn candidates_sorted_by_pair() {
        let mut agg = MatchAggregator::new();
        agg.record("l:2", "b_en", &hit("r:1", "b_en"));
        agg.record("l:1", "a_en", &hit("r:9", "a_en"));
        let lefts: Vec<_> = agg.into_candidates().into_iter().map(|c| c.left).collect();
        assert_eq!(lefts, vec!["l:1", "l:2"]);
    }
}
