//! PPA entry points.

use super::config::PpaConfig;
use super::schedule::PpaPolicy;
use crate::engine::{CoverResult, CoverRunner, EngineConfig};
use crate::graph::Graph;
use rand::Rng;

/// Searches for a minimum vertex cover with the Plant Propagation
/// Algorithm.
///
/// ```
/// use u_vertex_cover::graph::Graph;
/// use u_vertex_cover::ppa::{self, PpaConfig};
///
/// let graph = Graph::new(2, vec![(0, 1)]).unwrap();
/// let result = ppa::optimize(&graph, &PpaConfig::default().with_seed(42));
/// assert!(result.is_feasible());
/// assert_eq!(result.cover(), 1);
/// ```
///
/// # Panics
/// Panics if the configuration is invalid.
pub fn optimize(graph: &Graph, config: &PpaConfig) -> CoverResult {
    config.validate().expect("invalid PpaConfig");
    CoverRunner::run(graph, &PpaPolicy::new(config), &EngineConfig::from(config))
}

/// Like [`optimize`], drawing all randomness from `rng` instead of
/// `config.seed`.
///
/// # Panics
/// Panics if the configuration is invalid.
pub fn optimize_with_rng<R: Rng>(graph: &Graph, config: &PpaConfig, rng: &mut R) -> CoverResult {
    config.validate().expect("invalid PpaConfig");
    CoverRunner::run_with_rng(graph, &PpaPolicy::new(config), &EngineConfig::from(config), rng)
}
