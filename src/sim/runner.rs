use crate::common::types::Page;
use crate::sim::error::SimulationError;
use crate::sim::frame_set::FrameSet;
use crate::sim::policy::{self, Policy};
use crate::sim::result::RunResult;

/// Run one policy over a reference string with a fresh frame set.
///
/// An empty reference string is valid and yields an empty trace with a
/// fault rate of zero. A frame count below 1 is rejected before any
/// simulation work happens.
pub fn run_simulation(
    policy: Policy,
    reference_string: &[Page],
    frame_count: usize,
) -> Result<RunResult, SimulationError> {
    if frame_count < 1 {
        return Err(SimulationError::InvalidFrameCount(frame_count));
    }

    let mut frames = FrameSet::new(frame_count);
    let steps = match policy {
        Policy::Fifo => policy::fifo::simulate(reference_string, &mut frames),
        Policy::Lru => policy::lru::simulate(reference_string, &mut frames),
        Policy::Optimal => policy::optimal::simulate(reference_string, &mut frames),
    };

    let total_faults = steps.iter().filter(|step| step.is_fault).count();
    let fault_rate = if reference_string.is_empty() {
        0.0
    } else {
        total_faults as f64 / reference_string.len() as f64
    };

    log::debug!(
        "{} over {} references with {} frames: {} faults (rate {:.3})",
        policy,
        reference_string.len(),
        frame_count,
        total_faults,
        fault_rate
    );

    Ok(RunResult {
        policy,
        steps,
        total_faults,
        fault_rate,
        reference_string: reference_string.to_vec(),
        frame_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_frame_count() {
        let err = run_simulation(Policy::Fifo, &[1, 2, 3], 0).unwrap_err();
        assert_eq!(err, SimulationError::InvalidFrameCount(0));
    }

    #[test]
    fn test_empty_reference_string() {
        let result = run_simulation(Policy::Lru, &[], 3).unwrap();
        assert!(result.steps.is_empty());
        assert_eq!(result.total_faults, 0);
        assert_eq!(result.fault_rate, 0.0);
    }

    #[test]
    fn test_fault_rate_matches_fault_count() {
        let result = run_simulation(Policy::Fifo, &[1, 2, 1, 2], 2).unwrap();
        assert_eq!(result.total_faults, 2);
        assert_eq!(result.fault_rate, 0.5);
        assert_eq!(result.total_hits(), 2);
    }
}
