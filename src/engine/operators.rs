//! Population initialization and stochastic bit-flip reproduction.

use super::types::{Candidate, Perturbation};
use rand::Rng;

/// Creates `size` unevaluated candidates over `vertex_count` vertices,
/// each bit set independently with probability 0.5.
pub fn random_population<R: Rng>(size: usize, vertex_count: usize, rng: &mut R) -> Vec<Candidate> {
    (0..size)
        .map(|_| {
            let mask = (0..vertex_count)
                .map(|_| rng.random_range(0.0..1.0) < 0.5)
                .collect();
            Candidate::from_mask(mask)
        })
        .collect()
}

/// Standard logistic function `1 / (1 + e^-x)`.
#[inline]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Produces one offspring mask from `parent`.
///
/// For each vertex the parent's bit becomes `1.0` or `0.0`, a noise term
/// from `perturbation` is added, and the sum is squashed by [`logistic`].
/// The child's bit is set when a fresh uniform draw falls below that
/// probability. The returned candidate is unevaluated.
pub fn sprout<R: Rng>(parent: &Candidate, perturbation: &Perturbation, rng: &mut R) -> Candidate {
    let mask = parent
        .mask()
        .iter()
        .map(|&bit| {
            let base = if bit { 1.0 } else { 0.0 };
            let p = logistic(base + perturbation.sample(rng));
            rng.random_range(0.0..1.0) < p
        })
        .collect();
    Candidate::from_mask(mask)
}
