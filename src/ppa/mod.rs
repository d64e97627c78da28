//! Plant Propagation Algorithm (PPA).
//!
//! Models the runner-based spread of strawberry plants. Each generation the
//! population's fitness is min-max normalized and passed through a tanh
//! remap. A plant with a high mapped fitness sends out several short runners
//! (small perturbation, exploitation); a poorly placed plant sends a single
//! long runner (large perturbation, exploration). Parents and runners are
//! ranked together and the population is cut back to its fixed size.
//!
//! # References
//!
//! - Salhi & Fraga (2011), "Nature-inspired optimisation approaches and the
//!   new plant propagation algorithm", *Proc. ICeMATH 2011*, K2-1–K2-8

mod config;
mod runner;
mod schedule;

pub use config::PpaConfig;
pub use runner::{optimize, optimize_with_rng};
pub use schedule::{
    mapped_fitness, normalized_fitness, runner_count, PlantScore, PpaPolicy, NEUTRAL_FITNESS,
};
