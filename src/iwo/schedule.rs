//! Seed counts and dispersal strength for the weed colony.

use super::config::IwoConfig;
use crate::engine::{Brood, Candidate, OffspringPolicy, Perturbation};
use rand::Rng;

/// Fitness spreads below this are treated as a uniform colony.
const FLAT_EPSILON: f64 = 1e-9;

/// Number of seeds for a weed with `fitness`, given the colony's fitness
/// range `[min_fitness, max_fitness]`.
///
/// Interpolates linearly from `max_seeds` (best weed, lowest fitness) to
/// `min_seeds` (worst weed) and rounds to the nearest integer. When the
/// colony is uniform every weed gets the midpoint `(min + max) / 2`.
///
/// ```
/// use u_vertex_cover::iwo::seed_count;
///
/// assert_eq!(seed_count(1.0, 1.0, 9.0, 0, 5), 5);
/// assert_eq!(seed_count(9.0, 1.0, 9.0, 0, 5), 0);
/// assert_eq!(seed_count(4.0, 4.0, 4.0, 0, 5), 2);
/// ```
pub fn seed_count(
    fitness: f64,
    min_fitness: f64,
    max_fitness: f64,
    min_seeds: usize,
    max_seeds: usize,
) -> usize {
    let spread = max_fitness - min_fitness;
    if spread.abs() < FLAT_EPSILON {
        return (min_seeds + max_seeds) / 2;
    }
    let share = (max_fitness - fitness) / spread;
    let extra = (share * (max_seeds - min_seeds) as f64).round().max(0.0) as usize;
    (min_seeds + extra).clamp(min_seeds, max_seeds)
}

/// Dispersal standard deviation for `generation` (0-based) out of
/// `max_generations`.
///
/// `sigma = (remaining / total)^exponent * (init - final) + final`, with
/// `remaining = total - generation - 1`, floored at `sigma_final`.
pub fn sigma(
    generation: usize,
    max_generations: usize,
    sigma_init: f64,
    sigma_final: f64,
    exponent: f64,
) -> f64 {
    if max_generations == 0 {
        return sigma_final;
    }
    let remaining = max_generations.saturating_sub(generation + 1) as f64;
    let ratio = remaining / max_generations as f64;
    let s = ratio.powf(exponent) * (sigma_init - sigma_final) + sigma_final;
    s.max(sigma_final)
}

/// Offspring policy of Invasive Weed Optimization.
///
/// Fitter weeds scatter more seeds; all seeds of a generation share one
/// Gaussian dispersal width that shrinks as the run progresses.
#[derive(Debug, Clone)]
pub struct IwoPolicy {
    min_seeds: usize,
    max_seeds: usize,
    sigma_init: f64,
    sigma_final: f64,
    decay_exponent: f64,
    max_generations: usize,
}

impl IwoPolicy {
    pub fn new(config: &IwoConfig) -> Self {
        Self {
            min_seeds: config.min_seeds,
            max_seeds: config.max_seeds,
            sigma_init: config.sigma_init,
            sigma_final: config.sigma_final,
            decay_exponent: config.decay_exponent,
            max_generations: config.max_generations,
        }
    }

    /// Dispersal width used in `generation`.
    pub fn sigma_at(&self, generation: usize) -> f64 {
        sigma(
            generation,
            self.max_generations,
            self.sigma_init,
            self.sigma_final,
            self.decay_exponent,
        )
    }
}

impl OffspringPolicy for IwoPolicy {
    fn schedule<R: Rng>(
        &self,
        generation: usize,
        parents: &[Candidate],
        _rng: &mut R,
    ) -> Vec<Brood> {
        let (min_fitness, max_fitness) = parents
            .iter()
            .map(Candidate::fitness)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), f| {
                (lo.min(f), hi.max(f))
            });
        let perturbation = Perturbation::Gaussian {
            sigma: self.sigma_at(generation),
        };

        parents
            .iter()
            .map(|weed| Brood {
                count: seed_count(
                    weed.fitness(),
                    min_fitness,
                    max_fitness,
                    self.min_seeds,
                    self.max_seeds,
                ),
                perturbation,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Evaluator;
    use crate::graph::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seed_count_interpolates() {
        assert_eq!(seed_count(0.0, 0.0, 10.0, 0, 5), 5);
        assert_eq!(seed_count(10.0, 0.0, 10.0, 0, 5), 0);
        // share 0.5 → 2.5 rounds away from zero
        assert_eq!(seed_count(5.0, 0.0, 10.0, 0, 5), 3);
        assert_eq!(seed_count(7.0, 0.0, 10.0, 1, 4), 2);
    }

    #[test]
    fn test_seed_count_uniform_colony() {
        assert_eq!(seed_count(3.0, 3.0, 3.0, 0, 5), 2);
        assert_eq!(seed_count(3.0, 3.0, 3.0, 2, 6), 4);
        assert_eq!(seed_count(3.0, 3.0, 3.0 + 1e-12, 0, 5), 2);
    }

    #[test]
    fn test_seed_count_stays_in_bounds() {
        for f in [-5.0, 0.0, 2.5, 10.0, 15.0] {
            let n = seed_count(f, 0.0, 10.0, 1, 4);
            assert!((1..=4).contains(&n), "fitness {f} gave {n} seeds");
        }
    }

    #[test]
    fn test_sigma_schedule() {
        // First generation of 200: (199/200)^2 * 0.499 + 0.001
        let first = sigma(0, 200, 0.5, 0.001, 2.0);
        assert!((first - ((199.0f64 / 200.0).powi(2) * 0.499 + 0.001)).abs() < 1e-12);

        // Last generation reaches the floor.
        assert!((sigma(199, 200, 0.5, 0.001, 2.0) - 0.001).abs() < 1e-15);

        // Non-increasing across the run.
        let values: Vec<f64> = (0..200).map(|g| sigma(g, 200, 0.5, 0.001, 2.0)).collect();
        assert!(values.windows(2).all(|w| w[1] <= w[0]));
        assert!(values.iter().all(|s| (0.001..=0.5).contains(s)));
    }

    #[test]
    fn test_sigma_linear_exponent() {
        let s = sigma(49, 100, 1.0, 1e-3, 1.0);
        assert!((s - (0.5 * (1.0 - 1e-3) + 1e-3)).abs() < 1e-12);
        assert_eq!(sigma(0, 0, 0.5, 0.001, 2.0), 0.001);
    }

    #[test]
    fn test_schedule_favors_fitter_weeds() {
        let graph = Graph::new(3, vec![(0, 1), (1, 2)]).unwrap();
        let ev = Evaluator::new(&graph, 1000.0);
        let mut parents = vec![
            Candidate::from_mask(vec![false, true, false]), // 1
            Candidate::from_mask(vec![true, false, false]), // 1001
            Candidate::from_mask(vec![false, false, false]), // 2000
        ];
        ev.evaluate_all(&mut parents, false);

        let policy = IwoPolicy::new(&IwoConfig::default());
        let broods = policy.schedule(0, &parents, &mut StdRng::seed_from_u64(0));

        assert_eq!(broods.len(), 3);
        let counts: Vec<usize> = broods.iter().map(|b| b.count).collect();
        assert_eq!(counts[0], 5);
        assert_eq!(counts[2], 0);
        assert!(counts[1] <= counts[0] && counts[1] >= counts[2]);
        for b in &broods {
            assert_eq!(b.perturbation, Perturbation::Gaussian { sigma: policy.sigma_at(0) });
        }
    }

    #[test]
    fn test_schedule_uniform_colony() {
        let graph = Graph::new(2, vec![(0, 1)]).unwrap();
        let ev = Evaluator::new(&graph, 1000.0);
        let mut parents = vec![Candidate::from_mask(vec![true, false]); 4];
        ev.evaluate_all(&mut parents, false);

        let policy = IwoPolicy::new(&IwoConfig::default());
        let broods = policy.schedule(3, &parents, &mut StdRng::seed_from_u64(0));
        assert!(broods.iter().all(|b| b.count == 2));
    }
}
