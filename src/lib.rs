//! Minimum vertex cover by population-based metaheuristics.
//!
//! Two algorithm variants share one engine and one representation (a
//! boolean inclusion mask over the graph's vertices):
//!
//! - **Invasive Weed Optimization (IWO)**: rank-interpolated seed counts
//!   and a Gaussian dispersal width that decays over the run.
//! - **Plant Propagation Algorithm (PPA)**: tanh-mapped fitness drives
//!   both the number of runners and how far they stray.
//!
//! Fitness is `uncovered * penalty + cover` (just `cover` once every edge
//! is covered), so lower is better and any feasible cover outranks any
//! infeasible one when the penalty exceeds the vertex count.
//!
//! # Quick Start
//!
//! ```
//! use u_vertex_cover::graph::Graph;
//! use u_vertex_cover::engine::Outcome;
//! use u_vertex_cover::{iwo, ppa};
//!
//! let graph = Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap();
//!
//! let weeds = iwo::optimize(&graph, &iwo::IwoConfig::default().with_seed(7));
//! let plants = ppa::optimize(&graph, &ppa::PpaConfig::default().with_seed(7));
//!
//! for result in [weeds, plants] {
//!     match result.outcome() {
//!         Outcome::Feasible { vertices } => assert_eq!(vertices.len(), 2),
//!         Outcome::Infeasible { .. } => unreachable!(),
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! - [`graph`]: Input graph, `.dat` loader, random connected generator
//! - [`engine`]: Candidate, evaluator, selection, and the generational
//!   loop, parameterized by an [`OffspringPolicy`](engine::OffspringPolicy)
//! - [`iwo`], [`ppa`]: The two policies and their configurations

pub mod engine;
pub mod graph;
pub mod iwo;
pub mod ppa;
