//! Fitness mapping and runner scheduling for the plant population.

use super::config::PpaConfig;
use crate::engine::{Brood, Candidate, OffspringPolicy, Perturbation};
use rand::Rng;

/// Fitness spreads below this are treated as a uniform population.
const FLAT_EPSILON: f64 = 1e-9;

/// Normalized fitness used when the population has no fitness spread.
pub const NEUTRAL_FITNESS: f64 = 0.5;

/// Min-max normalization where the best plant (lowest fitness) maps to 1
/// and the worst to 0.
///
/// Returns [`NEUTRAL_FITNESS`] when `max_fitness - min_fitness` is zero.
pub fn normalized_fitness(fitness: f64, min_fitness: f64, max_fitness: f64) -> f64 {
    let spread = max_fitness - min_fitness;
    if spread.abs() < FLAT_EPSILON {
        NEUTRAL_FITNESS
    } else {
        (max_fitness - fitness) / spread
    }
}

/// Smooth remap of `[0, 1]` onto `[0, 1]`: `0.5 * (tanh(4x - 2) + 1)`.
///
/// Steep around 0.5, flat near both ends, so mid-ranked plants are
/// separated more than the extremes.
///
/// ```
/// use u_vertex_cover::ppa::mapped_fitness;
///
/// assert!((mapped_fitness(0.5) - 0.5).abs() < 1e-12);
/// assert!(mapped_fitness(1.0) > 0.98);
/// assert!(mapped_fitness(0.0) < 0.02);
/// ```
pub fn mapped_fitness(normalized: f64) -> f64 {
    0.5 * ((4.0 * normalized - 2.0).tanh() + 1.0)
}

/// Runners for a plant: `ceil(max_runners * mapped * draw)`, at least 1.
///
/// `draw` is a uniform sample from `[0, 1)`.
pub fn runner_count(max_runners: usize, mapped: f64, draw: f64) -> usize {
    ((max_runners as f64 * mapped * draw).ceil() as usize).max(1)
}

/// Per-plant scores derived from the current population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantScore {
    pub normalized: f64,
    pub mapped: f64,
}

/// Offspring policy of the Plant Propagation Algorithm.
///
/// Plants in good spots send many short runners; plants in poor spots
/// send few long ones. Both the runner count and the runner length come
/// from the plant's mapped fitness.
#[derive(Debug, Clone)]
pub struct PpaPolicy {
    max_runners: usize,
}

impl PpaPolicy {
    pub fn new(config: &PpaConfig) -> Self {
        Self {
            max_runners: config.max_runners,
        }
    }

    /// Normalized and mapped fitness of every plant, in order.
    pub fn scores(plants: &[Candidate]) -> Vec<PlantScore> {
        let (min_fitness, max_fitness) = plants
            .iter()
            .map(Candidate::fitness)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), f| {
                (lo.min(f), hi.max(f))
            });

        plants
            .iter()
            .map(|plant| {
                let normalized = normalized_fitness(plant.fitness(), min_fitness, max_fitness);
                PlantScore {
                    normalized,
                    mapped: mapped_fitness(normalized),
                }
            })
            .collect()
    }
}

impl OffspringPolicy for PpaPolicy {
    fn schedule<R: Rng>(
        &self,
        _generation: usize,
        parents: &[Candidate],
        rng: &mut R,
    ) -> Vec<Brood> {
        Self::scores(parents)
            .into_iter()
            .map(|score| Brood {
                count: runner_count(self.max_runners, score.mapped, rng.random_range(0.0..1.0)),
                perturbation: Perturbation::Symmetric {
                    spread: 1.0 - score.mapped,
                },
            })
            .collect()
    }
}
