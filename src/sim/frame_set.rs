use crate::common::types::Page;

/// Fixed-capacity set of physical frames.
///
/// Pure storage: each slot holds at most one resident page, and no page is
/// resident in two slots at once. Replacement policy decisions live in the
/// policy engines; the frame set only answers membership queries and moves
/// pages in and out of slots.
#[derive(Debug, Clone)]
pub struct FrameSet {
    slots: Vec<Option<Page>>,
}

impl FrameSet {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "frame set capacity must be at least 1");
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// True iff some slot currently holds `page`
    pub fn contains(&self, page: Page) -> bool {
        self.slots.contains(&Some(page))
    }

    /// Index of the first empty slot, if any
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_none())
    }

    /// Index of the slot holding `page`, if resident
    pub fn slot_of(&self, page: Page) -> Option<usize> {
        self.slots.iter().position(|&slot| slot == Some(page))
    }

    /// Place a page into an empty slot
    pub fn place_in_empty(&mut self, slot: usize, page: Page) {
        debug_assert!(
            self.slots[slot].is_none(),
            "place_in_empty called on occupied slot {}",
            slot
        );
        debug_assert!(!self.contains(page), "page {} is already resident", page);
        self.slots[slot] = Some(page);
    }

    /// Swap the page in an occupied slot, returning the evicted page
    pub fn replace(&mut self, slot: usize, page: Page) -> Page {
        debug_assert!(!self.contains(page), "page {} is already resident", page);
        match self.slots[slot].replace(page) {
            Some(evicted) => evicted,
            None => unreachable!("replace called on empty slot {}", slot),
        }
    }

    /// Occupied slots in ascending slot order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, Page)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|page| (idx, page)))
    }

    /// Deep copy of the current slot contents
    pub fn snapshot(&self) -> Vec<Option<Page>> {
        self.slots.clone()
    }
}
