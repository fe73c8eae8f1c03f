use tracing::{debug, info};

use crate::aggregate::MatchAggregator;
use crate::config::AlignConfig;
use crate::error::AlignError;
use crate::evidence::compute_summary;
use crate::graph::Graph;
use crate::index::LabelIndex;
use crate::matcher::lookup;
use crate::model::{AlignMeta, AlignResult};
use crate::promote::promote;
use crate::unmatched::UnmatchedTracker;

/// Matching stage output: aggregated candidates and the corrected
/// unmatched set.
#[derive(Debug)]
pub struct MatchOutput {
    pub aggregator: MatchAggregator,
    pub unmatched: Vec<String>,
}

/// Resolve every left key against the right index.
pub fn match_indexes(left: &LabelIndex, right: &LabelIndex) -> MatchOutput {
    let mut aggregator = MatchAggregator::new();
    let mut tracker = UnmatchedTracker::new();

    for (key, left_resource) in left.iter() {
        match lookup(key, right) {
            Some(hit) => {
                aggregator.record(left_resource, key, &hit);
                tracker.confirm(left_resource);
            }
            None => tracker.miss(left_resource),
        }
    }

    MatchOutput {
        aggregator,
        unmatched: tracker.finish(),
    }
}

/// Run alignment per config. Returns promoted assertions + report.
pub fn run(config: &AlignConfig, left: &Graph, right: &Graph) -> Result<AlignResult, AlignError> {
    config.validate()?;

    let left_index = LabelIndex::build("left", left, &config.preferred_label);
    let right_index = LabelIndex::build("right", right, &config.preferred_label);
    info!(
        left_keys = left_index.len(),
        right_keys = right_index.len(),
        "label indexes built"
    );

    let MatchOutput { aggregator, unmatched } = match_indexes(&left_index, &right_index);
    info!(candidates = aggregator.len(), "labels matched");

    let promotion = promote(
        aggregator.into_candidates(),
        config.min_score,
        &config.symmetric_relation,
    );

    info!(
        promoted = promotion.promoted.len(),
        excluded = promotion.excluded.len(),
        unmatched = unmatched.len(),
        "candidates promoted"
    );
    for resource in &unmatched {
        debug!(resource = %resource, "unmatched");
    }

    let summary = compute_summary(
        &left_index,
        &right_index,
        &promotion.promoted,
        &promotion.excluded,
        &unmatched,
        promotion.output.len(),
    );

    Ok(AlignResult {
        meta: AlignMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            preferred_label: config.preferred_label.clone(),
            symmetric_relation: config.symmetric_relation.clone(),
            min_score: config.min_score,
        },
        summary,
        promoted: promotion.promoted,
        excluded: promotion.excluded,
        unmatched,
        output: promotion.output,
    })
}
