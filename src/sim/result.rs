use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::types::Page;
use crate::sim::policy::Policy;

/// Outcome of processing one reference-string position.
///
/// The `frames` field is a deep snapshot of the frame set *after* the
/// reference was processed; later steps never mutate earlier records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub page: Page,
    pub frames: Vec<Option<Page>>,
    pub is_fault: bool,
    pub evicted_page: Option<Page>,
    pub rationale: String,
}

/// Full trace and statistics for one policy run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub policy: Policy,
    pub steps: Vec<StepRecord>,
    pub total_faults: usize,
    pub fault_rate: f64,
    pub reference_string: Vec<Page>,
    pub frame_count: usize,
}

impl RunResult {
    pub fn total_hits(&self) -> usize {
        self.steps.len() - self.total_faults
    }

    /// Running fault count after each step, for cumulative-fault charting
    pub fn cumulative_faults(&self) -> Vec<usize> {
        let mut total = 0;
        self.steps
            .iter()
            .map(|step| {
                if step.is_fault {
                    total += 1;
                }
                total
            })
            .collect()
    }
}

/// Results for every requested policy over one shared input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonBatch {
    pub results: BTreeMap<Policy, RunResult>,
}

impl ComparisonBatch {
    pub fn get(&self, policy: Policy) -> Option<&RunResult> {
        self.results.get(&policy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Policy, &RunResult)> {
        self.results.iter().map(|(&policy, result)| (policy, result))
    }

    pub fn policies(&self) -> impl Iterator<Item = Policy> + '_ {
        self.results.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Per-frame-count fault totals for all three policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub frame_count: usize,
    pub fifo_faults: usize,
    pub lru_faults: usize,
    pub optimal_faults: usize,
}
