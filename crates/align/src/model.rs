use serde::Serialize;

use crate::graph::Graph;
use crate::index::IndexStats;
use crate::matcher::KeyStrategy;

// ---------------------------------------------------------------------------
// Candidates
// ---------------------------------------------------------------------------

/// One left label key that resolved on the right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyEvidence {
    pub left_key: String,
    pub right_key: String,
    pub strategy: KeyStrategy,
}

/// A (left, right) resource pairing supported by one or more label keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCandidate {
    /// Stable display id derived from (right, left).
    pub pair_id: String,
    pub left: String,
    pub right: String,
    /// Number of distinct left label keys resolving to this pair.
    pub score: u32,
    pub evidence: Vec<KeyEvidence>,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AlignSummary {
    pub left_index: IndexStats,
    pub right_index: IndexStats,
    /// Left keys that resolved on the right.
    pub key_hits: usize,
    /// Left keys that resolved under each fallback strategy.
    pub hits_exact: usize,
    pub hits_upper: usize,
    pub hits_lower: usize,
    pub candidates: usize,
    pub promoted: usize,
    pub excluded: usize,
    pub unmatched: usize,
    /// Triples written to the output graph (two per promoted pair).
    pub emitted_triples: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlignMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
    pub preferred_label: String,
    pub symmetric_relation: String,
    pub min_score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlignResult {
    pub meta: AlignMeta,
    pub summary: AlignSummary,
    pub promoted: Vec<MatchCandidate>,
    pub excluded: Vec<MatchCandidate>,
    pub unmatched: Vec<String>,
    /// Promoted symmetric assertions only; independent of both inputs.
    #[serde(skip)]
    pub output: Graph,
}
