//! PPA configuration.

use crate::engine::EngineConfig;

/// Configuration for the Plant Propagation Algorithm.
///
/// # Examples
///
/// ```
/// use u_vertex_cover::ppa::PpaConfig;
///
/// let config = PpaConfig::default()
///     .with_population_size(40)
///     .with_max_runners(8)
///     .with_seed(42);
/// assert_eq!(config.population_size, 40);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PpaConfig {
    /// Number of plants, fixed across generations.
    pub population_size: usize,

    /// Fixed number of generations. Zero is allowed.
    pub max_generations: usize,

    /// Upper bound on runners sent out by one plant per generation.
    pub max_runners: usize,

    /// Fitness penalty per uncovered edge.
    pub penalty: f64,

    /// Whether to evaluate candidates in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for PpaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            max_generations: 100,
            max_runners: 5,
            penalty: 1000.0,
            parallel: false,
            seed: None,
        }
    }
}

impl PpaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_max_runners(mut self, n: usize) -> Self {
        self.max_runners = n;
        self
    }

    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Largest parents + runners pool one generation can produce, or
    /// `None` if it does not fit in `usize`.
    pub fn pool_capacity(&self) -> Option<usize> {
        self.max_runners
            .checked_add(1)
            .and_then(|per_plant| self.population_size.checked_mul(per_plant))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.max_runners == 0 {
            return Err("max_runners must be at least 1".into());
        }
        if self.pool_capacity().is_none() {
            return Err(format!(
                "population_size ({}) x (1 + max_runners ({})) overflows usize",
                self.population_size, self.max_runners
            ));
        }
        if !self.penalty.is_finite() || self.penalty <= 0.0 {
            return Err(format!("penalty must be positive and finite, got {}", self.penalty));
        }
        Ok(())
    }
}

impl From<&PpaConfig> for EngineConfig {
    fn from(config: &PpaConfig) -> Self {
        EngineConfig {
            population_size: config.population_size,
            survivor_count: config.population_size,
            pool_capacity: config.pool_capacity().unwrap_or(usize::MAX),
            max_generations: config.max_generations,
            penalty: config.penalty,
            parallel: config.parallel,
            seed: config.seed,
        }
    }
}
