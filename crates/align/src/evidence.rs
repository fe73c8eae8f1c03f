use crate::index::LabelIndex;
use crate::matcher::KeyStrategy;
use crate::model::{AlignSummary, MatchCandidate};

/// Compute summary statistics from the finished run.
pub fn compute_summary(
    left: &LabelIndex,
    right: &LabelIndex,
    promoted: &[MatchCandidate],
    excluded: &[MatchCandidate],
    unmatched: &[String],
    emitted_triples: usize,
) -> AlignSummary {
    let mut hits_exact = 0;
    let mut hits_upper = 0;
    let mut hits_lower = 0;

    for evidence in promoted.iter().chain(excluded).flat_map(|c| &c.evidence) {
        match evidence.strategy {
            KeyStrategy::Exact => hits_exact += 1,
            KeyStrategy::Upper => hits_upper += 1,
            KeyStrategy::Lower => hits_lower += 1,
        }
    }

    AlignSummary {
        left_index: left.stats().clone(),
        right_index: right.stats().clone(),
        key_hits: hits_exact + hits_upper + hits_lower,
        hits_exact,
        hits_upper,
        hits_lower,
        candidates: promoted.len() + excluded.len(),
        promoted: promoted.len(),
        excluded: excluded.len(),
        unmatched: unmatched.len(),
        emitted_triples,
    }
}
