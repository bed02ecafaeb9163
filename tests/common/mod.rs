use pagesim::{Page, StepRecord};

// The classic demand-paging example used throughout the suite
pub fn textbook_reference_string() -> Vec<Page> {
    vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]
}

// Frame contents at the start of step `i` (records snapshot *after* each step)
pub fn frames_before(steps: &[StepRecord], i: usize, frame_count: usize) -> Vec<Option<Page>> {
    if i == 0 {
        vec![None; frame_count]
    } else {
        steps[i - 1].frames.clone()
    }
}
