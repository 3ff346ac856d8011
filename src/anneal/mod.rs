//! Annealing engine.
//!
//! A small, problem-agnostic simulated annealing loop: Metropolis
//! acceptance, geometric cooling from `initial_temperature` down to a
//! floor, and best-so-far tracking. The waypoint ordering in
//! [`crate::order`] plugs a permutation problem into it.

mod config;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
pub use types::AnnealProblem;
