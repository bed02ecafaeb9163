use rand::Rng;

use crate::common::types::Page;

/// Generate `length` pages sampled uniformly from `[0, max_page)`.
///
/// `max_page` must be at least 1 (caller contract).
pub fn generate_reference_string(length: usize, max_page: Page) -> Vec<Page> {
    generate_with_rng(&mut rand::thread_rng(), length, max_page)
}

/// Same sampling over a caller-supplied RNG, for seeded tests and benches
pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R, length: usize, max_page: Page) -> Vec<Page> {
    debug_assert!(max_page >= 1, "max_page must be at least 1");
    (0..length).map(|_| rng.gen_range(0..max_page)).collect()
}
