use tracing::debug;

use crate::graph::{Graph, Object};
use crate::model::MatchCandidate;

#[derive(Debug, Default)]
pub struct Promotion {
    pub promoted: Vec<MatchCandidate>,
    pub excluded: Vec<MatchCandidate>,
    pub output: Graph,
}

/// Split candidates on `min_score` and emit both directions of `relation`
/// for every pair that reaches it.
pub fn promote(candidates: Vec<MatchCandidate>, min_score: u32, relation: &str) -> Promotion {
    let mut promotion = Promotion::default();

    for candidate in candidates {
        if candidate.score >= min_score {
            emit_symmetric(&mut promotion.output, &candidate.left, relation, &candidate.right);
            promotion.promoted.push(candidate);
        } else {
            debug!(
                left = %candidate.left,
                right = %candidate.right,
                score = candidate.score,
                min_score,
                "excluded below threshold"
            );
            promotion.excluded.push(candidate);
        }
    }

    promotion
}

fn emit_symmetric(graph: &mut Graph, a: &str, relation: &str, b: &str) {
    graph.add(a, relation, Object::Resource(b.to_string()));
    graph.add(b, relation, Object::Resource(a.to_string()));
}
