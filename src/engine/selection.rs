//! Truncation selection over the combined parent + offspring pool.

use super::types::Candidate;

/// Sorts `pool` ascending by fitness and keeps the best `survivors`.
///
/// The sort is stable, so among equal fitness values the earlier entry
/// (parents before their offspring) wins. If the pool is smaller than
/// `survivors`, the whole pool is kept.
pub fn truncate(mut pool: Vec<Candidate>, survivors: usize) -> Vec<Candidate> {
    pool.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pool.truncate(survivors);
    pool
}
