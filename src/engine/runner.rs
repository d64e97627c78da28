//! Generational loop shared by every offspring policy.
//!
//! [`CoverRunner`] drives: evaluate parents → schedule broods → sprout
//! offspring → evaluate offspring → truncate → track best-ever → repeat,
//! for a fixed number of generations.

use super::evaluator::Evaluator;
use super::operators::{random_population, sprout};
use super::selection::truncate;
use super::types::{Brood, Candidate};
use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Policy-independent parameters of the generational loop.
///
/// Each algorithm derives one of these from its own configuration
/// (see [`IwoConfig`](crate::iwo::IwoConfig) and
/// [`PpaConfig`](crate::ppa::PpaConfig)).
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Size of the random initial population.
    pub population_size: usize,

    /// Number of candidates kept after truncation.
    pub survivor_count: usize,

    /// Upper bound on parents + offspring in one generation.
    ///
    /// Offspring generation stops as soon as the pool reaches this size;
    /// later parents then get no offspring that generation.
    pub pool_capacity: usize,

    /// Fixed generation budget. Zero is allowed.
    pub max_generations: usize,

    /// Fitness penalty per uncovered edge.
    pub penalty: f64,

    /// Evaluate batches in parallel (requires the `parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.survivor_count == 0 {
            return Err("survivor_count must be at least 1".into());
        }
        if self.pool_capacity < self.population_size {
            return Err(format!(
                "pool_capacity ({}) must hold at least the initial population ({})",
                self.pool_capacity, self.population_size
            ));
        }
        if !self.penalty.is_finite() || self.penalty <= 0.0 {
            return Err(format!("penalty must be positive and finite, got {}", self.penalty));
        }
        Ok(())
    }
}

/// Decides, per generation, how each parent reproduces.
///
/// This is the seam between the shared loop and an algorithm variant:
/// the runner owns evaluation and selection, the policy owns offspring
/// counts and perturbation strength.
pub trait OffspringPolicy {
    /// Returns one [`Brood`] per parent, in parent order.
    ///
    /// `parents` are evaluated. `generation` counts from 0.
    fn schedule<R: Rng>(
        &self,
        generation: usize,
        parents: &[Candidate],
        rng: &mut R,
    ) -> Vec<Brood>;

    /// Called at the end of each generation with the best-ever fitness.
    ///
    /// `generation` counts from 1. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}

/// How the reporting side should present a result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every edge is covered. `vertices` may be empty (edgeless graph).
    Feasible { vertices: Vec<usize> },

    /// Best effort with uncovered edges left.
    Infeasible {
        fitness: f64,
        uncovered: usize,
        cover: usize,
    },
}

/// Result of an optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverResult {
    /// The best-ever candidate, evaluated. A deserialized result carries
    /// only its mask and must be re-evaluated against the graph.
    pub best: Candidate,

    /// Number of generations executed.
    pub generations: usize,

    /// Best-ever fitness at the end of each generation.
    pub fitness_history: Vec<f64>,
}

impl CoverResult {
    pub fn mask(&self) -> &[bool] {
        self.best.mask()
    }

    pub fn cover(&self) -> usize {
        self.best.cover()
    }

    pub fn uncovered(&self) -> usize {
        self.best.uncovered()
    }

    pub fn fitness(&self) -> f64 {
        self.best.fitness()
    }

    /// Whether the best candidate covers every edge.
    pub fn is_feasible(&self) -> bool {
        self.best.uncovered() == 0
    }

    /// Included vertex indices of the best candidate.
    pub fn vertices(&self) -> Vec<usize> {
        self.best.vertices()
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_feasible() {
            Outcome::Feasible {
                vertices: self.vertices(),
            }
        } else {
            Outcome::Infeasible {
                fitness: self.fitness(),
                uncovered: self.uncovered(),
                cover: self.cover(),
            }
        }
    }
}

/// Executes the generational loop for any [`OffspringPolicy`].
pub struct CoverRunner;

impl CoverRunner {
    /// Runs the optimization with a generator seeded from `config.seed`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`EngineConfig::validate`] first to get a descriptive error).
    pub fn run<P: OffspringPolicy>(graph: &Graph, policy: &P, config: &EngineConfig) -> CoverResult {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(graph, policy, config, &mut rng)
    }

    /// Runs the optimization drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<P: OffspringPolicy, R: Rng>(
        graph: &Graph,
        policy: &P,
        config: &EngineConfig,
        rng: &mut R,
    ) -> CoverResult {
        config.validate().expect("invalid EngineConfig");

        let evaluator = Evaluator::new(graph, config.penalty);
        let mut population = random_population(config.population_size, graph.vertex_count(), rng);
        let mut best = Candidate::sentinel();
        let mut fitness_history = Vec::with_capacity(config.max_generations);

        for generation in 0..config.max_generations {
            evaluator.evaluate_all(&mut population, config.parallel);

            let broods = policy.schedule(generation, &population, rng);
            let mut offspring = spawn(&population, &broods, config.pool_capacity, rng);
            evaluator.evaluate_all(&mut offspring, config.parallel);

            let pool_size = population.len() + offspring.len();
            population.extend(offspring);
            population = truncate(population, config.survivor_count);

            if let Some(leader) = population.first() {
                if leader.fitness() < best.fitness() {
                    best = leader.clone();
                }
            }
            fitness_history.push(best.fitness());

            debug!(
                generation,
                pool_size,
                population = population.len(),
                best_fitness = best.fitness(),
                "generation complete"
            );
            policy.on_generation(generation + 1, best.fitness());
        }

        if !best.is_evaluated() {
            // No generation ran; fall back to the first initial member.
            best = population
                .into_iter()
                .next()
                .unwrap_or_else(|| Candidate::from_mask(vec![false; graph.vertex_count()]));
            evaluator.evaluate(&mut best);
        }

        info!(
            generations = config.max_generations,
            fitness = best.fitness(),
            cover = best.cover(),
            uncovered = best.uncovered(),
            "optimization finished"
        );

        CoverResult {
            best,
            generations: config.max_generations,
            fitness_history,
        }
    }
}

/// Sprouts offspring parent by parent until the pool is full.
fn spawn<R: Rng>(
    parents: &[Candidate],
    broods: &[Brood],
    pool_capacity: usize,
    rng: &mut R,
) -> Vec<Candidate> {
    let room = pool_capacity.saturating_sub(parents.len());
    let mut offspring = Vec::new();

    for (parent, brood) in parents.iter().zip(broods) {
        for _ in 0..brood.count {
            if offspring.len() >= room {
                return offspring;
            }
            offspring.push(sprout(parent, &brood.perturbation, rng));
        }
    }
    offspring
}

pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

// ============================================================================
// Tests
// ============================================================================
