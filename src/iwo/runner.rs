//! IWO entry points.

use super::config::IwoConfig;
use super::schedule::IwoPolicy;
use crate::engine::{CoverResult, CoverRunner, EngineConfig};
use crate::graph::Graph;
use rand::Rng;

/// Searches for a minimum vertex cover with Invasive Weed Optimization.
///
/// # Usage
///
/// ```
/// use u_vertex_cover::graph::Graph;
/// use u_vertex_cover::iwo::{self, IwoConfig};
///
/// let graph = Graph::new(3, vec![(0, 1), (1, 2)]).unwrap();
/// let result = iwo::optimize(&graph, &IwoConfig::default().with_seed(42));
/// assert!(result.is_feasible());
/// assert_eq!(result.vertices(), vec![1]);
/// ```
///
/// # Panics
/// Panics if the configuration is invalid (call [`IwoConfig::validate`]
/// first to get a descriptive error).
pub fn optimize(graph: &Graph, config: &IwoConfig) -> CoverResult {
    config.validate().expect("invalid IwoConfig");
    CoverRunner::run(graph, &IwoPolicy::new(config), &EngineConfig::from(config))
}

/// Like [`optimize`], drawing all randomness from `rng` instead of
/// `config.seed`.
///
/// # Panics
/// Panics if the configuration is invalid.
pub fn optimize_with_rng<R: Rng>(graph: &Graph, config: &IwoConfig, rng: &mut R) -> CoverResult {
    config.validate().expect("invalid IwoConfig");
    CoverRunner::run_with_rng(graph, &IwoPolicy::new(config), &EngineConfig::from(config), rng)
}

// ============================================================================
// Tests
// ============================================================================
