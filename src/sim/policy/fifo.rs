use std::collections::VecDeque;

use crate::common::types::Page;
use crate::sim::frame_set::FrameSet;
use crate::sim::result::StepRecord;

/// First-in-first-out replacement.
///
/// The victim is always the page resident the longest, tracked by an
/// insertion-order queue of resident pages. Hits never reorder the queue.
pub(crate) fn simulate(reference_string: &[Page], frames: &mut FrameSet) -> Vec<StepRecord> {
    let mut steps = Vec::with_capacity(reference_string.len());
    let mut queue: VecDeque<Page> = VecDeque::with_capacity(frames.capacity());

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
            queue.push_back(page);
            steps.push(StepRecord {
                step: i,
                page,
                frames: frames.snapshot(),
                is_fault: true,
                evicted_page: None,
                rationale: format!("Page {} not found. Loaded into empty frame {}.", page, slot),
            });
        } else {
            // The queue holds exactly the resident pages, so a full frame
            // set guarantees a front entry with a matching slot.
            let victim = queue.pop_front().expect("FIFO queue empty on full frame set");
            let slot = frames.slot_of(victim).expect("FIFO victim is not resident");
            let evicted = frames.replace(slot, page);
            queue.push_back(page);
            steps.push(StepRecord {
                step: i,
                page,
                frames: frames.snapshot(),
                is_fault: true,
                evicted_page: Some(evicted),
                rationale: format!(
                    "Page {} not found. Replaced page {} (oldest in queue).",
                    page, evicted
                ),
            });
        }
    }

    steps
}
