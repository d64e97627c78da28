//! Shared population engine for vertex cover search.
//!
//! Both algorithm variants run the same loop over the same representation
//! (a boolean inclusion mask per vertex). They differ only in how many
//! offspring each parent gets and how strongly those offspring are
//! perturbed. That difference is the [`OffspringPolicy`] trait; everything
//! else lives here.
//!
//! # Key Types
//!
//! - [`Candidate`]: Inclusion mask with cover size, uncovered edges, fitness
//! - [`Evaluator`]: Penalized fitness against one graph
//! - [`OffspringPolicy`]: Per-generation brood scheduling
//! - [`CoverRunner`]: Executes the generational loop
//! - [`CoverResult`]: Best-ever candidate plus run statistics
//!
//! # Submodules
//!
//! - [`operators`]: Random initialization and logistic bit-flip reproduction
//! - [`selection`]: Truncation selection over parents + offspring

mod evaluator;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use evaluator::Evaluator;
pub use runner::{CoverResult, CoverRunner, EngineConfig, OffspringPolicy, Outcome};
pub use types::{Brood, Candidate, Perturbation};
