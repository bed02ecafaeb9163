use std::collections::BTreeMap;

use crate::common::types::Page;
use crate::sim::error::SimulationError;
use crate::sim::policy::Policy;
use crate::sim::result::{ComparisonBatch, ComparisonRow};
use crate::sim::runner::run_simulation;

/// Run every selected policy over the same input and collect the results.
///
/// Each run constructs its own frame set and auxiliary state, so runs are
/// fully independent. The batch is returned whole; an invalid configuration
/// fails before any result is visible.
pub fn run_comparison(
    reference_string: &[Page],
    frame_count: usize,
    policies: &[Policy],
) -> Result<ComparisonBatch, SimulationError> {
    if policies.is_empty() {
        return Err(SimulationError::EmptyPolicySelection);
    }

    let mut results = BTreeMap::new();
    for &policy in policies {
        let result = run_simulation(policy, reference_string, frame_count)?;
        results.insert(policy, result);
    }

    log::debug!(
        "comparison batch: {} policies over {} references",
        results.len(),
        reference_string.len()
    );

    Ok(ComparisonBatch { results })
}

/// Total faults for all three policies at each requested frame count.
///
/// One row per frame count, every row computed from fresh, independent runs
/// over the same reference string.
pub fn sweep_frame_counts(
    reference_string: &[Page],
    frame_counts: impl IntoIterator<Item = usize>,
) -> Result<Vec<ComparisonRow>, SimulationError> {
    let mut rows = Vec::new();
    for frame_count in frame_counts {
        let fifo = run_simulation(Policy::Fifo, reference_string, frame_count)?;
        let lru = run_simulation(Policy::Lru, reference_string, frame_count)?;
        let optimal = run_simulation(Policy::Optimal, reference_string, frame_count)?;
        rows.push(ComparisonRow {
            frame_count,
            fifo_faults: fifo.total_faults,
            lru_faults: lru.total_faults,
            optimal_faults: optimal.total_faults,
        });
    }
    Ok(rows)
}
