use std::collections::HashMap;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pagesim::generator::generate_with_rng;
use pagesim::{Page, Policy, SimulationError, run_comparison, run_simulation, sweep_frame_counts};

mod common;
use common::{frames_before, textbook_reference_string};

#[test]
fn test_batch_covers_every_selected_policy() -> Result<()> {
    let refs = textbook_reference_string();
    let batch = run_comparison(&refs, 3, &Policy::ALL)?;

    assert_eq!(batch.len(), 3);
    for policy in Policy::ALL {
        let result = batch.get(policy).unwrap();
        assert_eq!(result.policy, policy);
        assert_eq!(result.reference_string, refs);
        assert_eq!(result.frame_count, 3);
    }
    assert_eq!(batch.get(Policy::Fifo).unwrap().total_faults, 10);
    assert_eq!(batch.get(Policy::Lru).unwrap().total_faults, 9);
    assert_eq!(batch.get(Policy::Optimal).unwrap().total_faults, 7);
    Ok(())
}

#[test]
fn test_partial_policy_selection() -> Result<()> {
    let refs = textbook_reference_string();
    let batch = run_comparison(&refs, 3, &[Policy::Lru])?;
    assert_eq!(batch.len(), 1);
    assert!(batch.get(Policy::Fifo).is_none());
    assert!(batch.get(Policy::Lru).is_some());
    Ok(())
}

#[test]
fn test_empty_selection_fails_before_any_work() {
    let err = run_comparison(&textbook_reference_string(), 3, &[]).unwrap_err();
    assert_eq!(err, SimulationError::EmptyPolicySelection);
}

#[test]
fn test_replay_is_deterministic() -> Result<()> {
    let refs = textbook_reference_string();
    let first = run_comparison(&refs, 3, &Policy::ALL)?;
    let second = run_comparison(&refs, 3, &Policy::ALL)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_optimal_never_beaten_on_random_inputs() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);
    for trial in 0..100 {
        let length = 20 + (trial % 60);
        let refs = generate_with_rng(&mut rng, length, 8);
        let frame_count = 1 + (trial % 6);

        let batch = run_comparison(&refs, frame_count, &Policy::ALL)?;
        let optimal = batch.get(Policy::Optimal).unwrap().total_faults;
        let fifo = batch.get(Policy::Fifo).unwrap().total_faults;
        let lru = batch.get(Policy::Lru).unwrap().total_faults;

        assert!(
            optimal <= fifo && optimal <= lru,
            "trial {}: Optimal {} vs FIFO {} / LRU {} on {:?} with {} frames",
            trial,
            optimal,
            fifo,
            lru,
            refs,
            frame_count
        );
    }
    Ok(())
}

#[test]
fn test_lru_never_evicts_a_more_recently_used_page() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let refs = generate_with_rng(&mut rng, 60, 6);
        let frame_count = 3;
        let result = run_simulation(Policy::Lru, &refs, frame_count)?;

        // Last reference position of every page, maintained as the trace
        // is replayed.
        let mut last_use: HashMap<Page, usize> = HashMap::new();
        for (i, step) in result.steps.iter().enumerate() {
            if let Some(victim) = step.evicted_page {
                let victim_last = last_use[&victim];
                let before = frames_before(&result.steps, i, frame_count);
                for page in before.into_iter().flatten() {
                    if page != victim {
                        assert!(
                            last_use[&page] > victim_last,
                            "evicted {} (last used {}) over {} (last used {})",
                            victim,
                            victim_last,
                            page,
                            last_use[&page]
                        );
                    }
                }
            }
            last_use.insert(step.page, i);
        }
    }
    Ok(())
}

#[test]
fn test_lru_hit_becomes_most_recently_used() -> Result<()> {
    // After the hit on page 1, page 2 is least recently used, so the next
    // fault must evict 2 even though 1 entered memory first.
    let result = run_simulation(Policy::Lru, &[1, 2, 1, 3], 2)?;
    assert!(!result.steps[2].is_fault);
    assert_eq!(result.steps[3].evicted_page, Some(2));
    Ok(())
}

#[test]
fn test_sweep_rows_match_independent_runs() -> Result<()> {
    let refs = textbook_reference_string();
    let rows = sweep_frame_counts(&refs, 1..=5)?;

    assert_eq!(rows.len(), 5);
    for row in &rows {
        let fifo = run_simulation(Policy::Fifo, &refs, row.frame_count)?;
        let lru = run_simulation(Policy::Lru, &refs, row.frame_count)?;
        let optimal = run_simulation(Policy::Optimal, &refs, row.frame_count)?;
        assert_eq!(row.fifo_faults, fifo.total_faults);
        assert_eq!(row.lru_faults, lru.total_faults);
        assert_eq!(row.optimal_faults, optimal.total_faults);
    }
    Ok(())
}

#[test]
fn test_runs_in_a_batch_share_no_state() -> Result<()> {
    // Policy order in the selection must not change any individual result.
    let refs = textbook_reference_string();
    let forward = run_comparison(&refs, 3, &[Policy::Fifo, Policy::Optimal])?;
    let reverse = run_comparison(&refs, 3, &[Policy::Optimal, Policy::Fifo])?;
    assert_eq!(forward, reverse);
    Ok(())
}
