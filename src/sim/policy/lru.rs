use std::collections::VecDeque;

use crate::common::types::Page;
use crate::sim::frame_set::FrameSet;
use crate::sim::result::StepRecord;

/// Least-recently-used replacement.
///
/// The recency list holds exactly the resident pages with the
/// most-recently-used page at the tail. A hit moves the page to the tail;
/// the victim is always the head.
pub(crate) fn simulate(reference_string: &[Page], frames: &mut FrameSet) -> Vec<StepRecord> {
    let mut steps = Vec::with_capacity(reference_string.len());
    let mut recency: VecDeque<Page> = VecDeque::with_capacity(frames.capacity());

    for (i, &page) in reference_string.iter().enumerate() {
        if frames.contains(page) {
            if let Some(pos) = recency.iter().position(|&p| p == page) {
                recency.remove(pos);
            }
            recency.push_back(page);
            steps.push(StepRecord {
                step: i,
                page,
                frames: frames.snapshot(),
                is_fault: false,
                evicted_page: None,
                rationale: format!("Page {} is in memory. Moved to most recently used.", page),
            });
        } else if let Some(slot) = frames.first_empty_slot() {
            frames.place_in_empty(slot, page);
            recency.push_back(page);
            steps.push(StepRecord {
                step: i,
                page,
                frames: frames.snapshot(),
                is_fault: true,
                evicted_page: None,
                rationale: format!("Page {} not found. Loaded into empty frame {}.", page, slot),
            });
        } else {
            let victim = recency.pop_front().expect("recency list empty on full frame set");
            let slot = frames.slot_of(victim).expect("LRU victim is not resident");
            let evicted = frames.replace(slot, page);
            recency.push_back(page);
            steps.push(StepRecord {
                step: i,
                page,
                frames: frames.snapshot(),
                is_fault: true,
                evicted_page: Some(evicted),
                rationale: format!(
                    "Page {} not found. Replaced page {} (least recently used).",
                    page, evicted
                ),
            });
        }
    }

    steps
}
