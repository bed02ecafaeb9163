use crate::common::types::Page;
use crate::sim::frame_set::FrameSet;
use crate::sim::result::StepRecord;

/// Optimal (Belady) replacement.
///
/// No auxiliary order structure: on every fault the remaining reference
/// string is rescanned to find, for each resident page, its next use. A
/// resident page with no future use is an unconditional victim and ends the
/// scan; otherwise the page used farthest in the future is evicted. The
/// scan visits slots in ascending order and only a strictly farther next
/// use displaces the candidate, so the lowest slot wins ties.
pub(crate) fn simulate(reference_string: &[Page], frames: &mut FrameSet) -> Vec<StepRecord> {
    let mut steps = Vec::with_capacity(reference_string.len());

    for (i, &page) in reference_string.iter().enumerate() {
        if frames.contains(page) {
            steps.push(StepRecord {
                step: i,
                page,
                frames: frames.snapshot(),
                is_fault: false,
                evicted_page: None,
                rationale: format!("Page {} is already in memory. No fault.", page),
            });
        } else if let Some(slot) = frames.first_empty_slot() {
            frames.place_in_empty(slot, page);
            steps.push(StepRecord {
                step: i,
                page,
                frames: frames.snapshot(),
                is_fault: true,
                evicted_page: None,
                rationale: format!("Page {} not found. Loaded into empty frame {}.", page, slot),
            });
        } else {
            let (victim_slot, never_used_again) = choose_victim(reference_string, i, frames);
            let evicted = frames.replace(victim_slot, page);
            let reason = if never_used_again {
                "never used again"
            } else {
                "used farthest in future"
            };
            steps.push(StepRecord {
                step: i,
                page,
                frames: frames.snapshot(),
                is_fault: true,
                evicted_page: Some(evicted),
                rationale: format!(
                    "Page {} not found. Replaced page {} ({}).",
                    page, evicted, reason
                ),
            });
        }
    }

    steps
}

/// Pick the slot whose resident page is used farthest in the future,
/// counting "never again" as infinitely far
fn choose_victim(reference_string: &[Page], current: usize, frames: &FrameSet) -> (usize, bool) {
    let mut victim_slot = 0;
    let mut farthest: Option<usize> = None;

    for (slot, resident) in frames.occupied() {
        match next_use(reference_string, current, resident) {
            None => return (slot, true),
            Some(next) => {
                if farthest.map_or(true, |f| next > f) {
                    farthest = Some(next);
                    victim_slot = slot;
                }
            }
        }
    }

    (victim_slot, false)
}

/// Position of the next occurrence of `page` strictly after `current`
fn next_use(reference_string: &[Page], current: usize, page: Page) -> Option<usize> {
    reference_string[current + 1..]
        .iter()
        .position(|&p| p == page)
        .map(|offset| current + 1 + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(reference_string: &[Page], frame_count: usize) -> Vec<StepRecord> {
        let mut frames = FrameSet::new(frame_count);
        simulate(reference_string, &mut frames)
    }

    #[test]
    fn test_evicts_page_used_farthest_in_future() {
        let steps = run(&[1, 2, 3, 4, 1, 2, 3], 3);
        // Next uses after step 3: page 1 at 4, page 2 at 5, page 3 at 6.
        assert_eq!(steps[3].evicted_page, Some(3));
        assert_eq!(steps[3].frames, vec![Some(1), Some(2), Some(4)]);
        assert!(steps[3].rationale.contains("used farthest in future"));
    }

    #[test]
    fn test_never_used_again_wins_over_distance() {
        // Page 2 never recurs; pages 1 and 3 both do. Page 2 must go even
        // though page 3's next use is farther than page 1's.
        let steps = run(&[1, 2, 3, 4, 1, 3], 3);
        assert_eq!(steps[3].evicted_page, Some(2));
        assert!(steps[3].rationale.contains("never used again"));
    }

    #[test]
    fn test_lowest_slot_wins_when_no_resident_recurs() {
        let steps = run(&[1, 2, 3, 4], 3);
        assert_eq!(steps[3].evicted_page, Some(1));
        assert_eq!(steps[3].frames, vec![Some(4), Some(2), Some(3)]);
    }

    #[test]
    fn test_next_use_is_strictly_after_current() {
        // The faulting reference itself must not count as a future use.
        assert_eq!(next_use(&[1, 2, 1, 2], 1, 2), Some(3));
        assert_eq!(next_use(&[1, 2, 1, 2], 3, 2), None);
    }
}
