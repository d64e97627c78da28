//! Invasive Weed Optimization (IWO).
//!
//! A colony of weeds (candidate covers) spreads seeds around itself. Each
//! weed's seed count is interpolated from its rank within the colony's
//! fitness range, and seeds land at a Gaussian distance whose width decays
//! nonlinearly over the run: wide exploration early, fine local search late.
//! Parents and seeds then compete for a bounded number of places
//! (competitive exclusion), so the colony grows from its initial size up to
//! [`IwoConfig::max_population`].
//!
//! On a bit-mask representation a seed is produced by adding the Gaussian
//! offset to each parent bit and sampling the logistic of the result.
//!
//! # References
//!
//! - Mehrabian & Lucas (2006), "A novel numerical optimization algorithm
//!   inspired from weed colonization", *Ecological Informatics* 1(4), 355–366

mod config;
mod runner;
mod schedule;

pub use config::IwoConfig;
pub use runner::{optimize, optimize_with_rng};
pub use schedule::{seed_count, sigma, IwoPolicy};
