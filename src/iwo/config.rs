//! IWO configuration.
//!
//! [`IwoConfig`] holds all parameters of the weed colony: population
//! bounds, seed counts, and the dispersal schedule.

use crate::engine::EngineConfig;

/// Configuration for Invasive Weed Optimization.
///
/// # Defaults
///
/// ```
/// use u_vertex_cover::iwo::IwoConfig;
///
/// let config = IwoConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.max_population, 25);
/// assert_eq!(config.max_generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_vertex_cover::iwo::IwoConfig;
///
/// let config = IwoConfig::default()
///     .with_max_generations(500)
///     .with_seeds(1, 8)
///     .with_sigma(0.8, 0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IwoConfig {
    /// Number of weeds in the random initial colony.
    pub population_size: usize,

    /// Colony size cap after each truncation.
    ///
    /// The colony grows from `population_size` toward this bound as
    /// offspring survive selection.
    pub max_population: usize,

    /// Fixed number of generations. Zero is allowed.
    pub max_generations: usize,

    /// Seeds produced by the worst weed.
    pub min_seeds: usize,

    /// Seeds produced by the best weed.
    pub max_seeds: usize,

    /// Dispersal standard deviation in the first generation.
    pub sigma_init: f64,

    /// Dispersal standard deviation floor, reached in the last generation.
    pub sigma_final: f64,

    /// Nonlinear modulation index of the sigma decay.
    ///
    /// 1.0 decays linearly; larger values drop sigma faster early on.
    pub decay_exponent: f64,

    /// Fitness penalty per uncovered edge.
    ///
    /// Should exceed the vertex count so that any feasible cover beats
    /// any infeasible one.
    pub penalty: f64,

    /// Whether to evaluate candidates in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for IwoConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_population: 25,
            max_generations: 200,
            min_seeds: 0,
            max_seeds: 5,
            sigma_init: 0.5,
            sigma_final: 0.001,
            decay_exponent: 2.0,
            penalty: 1000.0,
            parallel: false,
            seed: None,
        }
    }
}

impl IwoConfig {
    /// Sets the initial colony size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the colony size cap.
    pub fn with_max_population(mut self, n: usize) -> Self {
        self.max_population = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the seed count range `[min, max]`.
    pub fn with_seeds(mut self, min: usize, max: usize) -> Self {
        self.min_seeds = min;
        self.max_seeds = max;
        self
    }

    /// Sets the initial and final dispersal standard deviation.
    pub fn with_sigma(mut self, init: f64, final_: f64) -> Self {
        self.sigma_init = init;
        self.sigma_final = final_;
        self
    }

    /// Sets the sigma decay exponent.
    pub fn with_decay_exponent(mut self, n: f64) -> Self {
        self.decay_exponent = n.max(0.0);
        self
    }

    /// Sets the penalty per uncovered edge.
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Largest parents + seeds pool one generation can produce, or `None`
    /// if it does not fit in `usize`.
    pub fn pool_capacity(&self) -> Option<usize> {
        self.max_seeds
            .checked_add(1)
            .and_then(|per_weed| self.max_population.checked_mul(per_weed))
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.max_population < self.population_size {
            return Err(format!(
                "max_population ({}) must be at least population_size ({})",
                self.max_population, self.population_size
            ));
        }
        if self.min_seeds > self.max_seeds {
            return Err(format!(
                "min_seeds ({}) must not exceed max_seeds ({})",
                self.min_seeds, self.max_seeds
            ));
        }
        if self.pool_capacity().is_none() {
            return Err(format!(
                "max_population ({}) x (1 + max_seeds ({})) overflows usize",
                self.max_population, self.max_seeds
            ));
        }
        if self.sigma_final.is_nan() || self.sigma_final <= 0.0 {
            return Err(format!("sigma_final must be positive, got {}", self.sigma_final));
        }
        if !self.sigma_init.is_finite() || self.sigma_init < self.sigma_final {
            return Err(format!(
                "sigma_init ({}) must be finite and at least sigma_final ({})",
                self.sigma_init, self.sigma_final
            ));
        }
        if !self.decay_exponent.is_finite() || self.decay_exponent < 0.0 {
            return Err(format!(
                "decay_exponent must be non-negative and finite, got {}",
                self.decay_exponent
            ));
        }
        if !self.penalty.is_finite() || self.penalty <= 0.0 {
            return Err(format!("penalty must be positive and finite, got {}", self.penalty));
        }
        Ok(())
    }
}

impl From<&IwoConfig> for EngineConfig {
    fn from(config: &IwoConfig) -> Self {
        EngineConfig {
            population_size: config.population_size,
            survivor_count: config.max_population,
            pool_capacity: config.pool_capacity().unwrap_or(usize::MAX),
            max_generations: config.max_generations,
            penalty: config.penalty,
            parallel: config.parallel,
            seed: config.seed,
        }
    }
}
