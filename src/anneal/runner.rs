//! SA execution loop.

use super::config::AnnealConfig;
use super::types::AnnealProblem;
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,
}

/// Executes the Simulated Annealing algorithm.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs SA with a generator seeded from `config.seed`, or from OS
    /// entropy when no seed is set. Unseeded runs are not reproducible.
    pub fn run<P: AnnealProblem>(
        problem: &P,
        config: &AnnealConfig,
    ) -> Result<AnnealResult<P::Solution>, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<P: AnnealProblem, R: Rng>(
        problem: &P,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<P::Solution>, ConfigError> {
        config.validate()?;

        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while iterations < config.max_iterations && temperature >= config.min_temperature {
            let neighbor = problem.neighbor(&current, rng);
            let neighbor_cost = problem.cost(&neighbor);
            let delta = neighbor_cost - current_cost;

            // Metropolis acceptance criterion. A NaN delta is never accepted.
            let accept = if delta <= 0.0 {
                true
            } else {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            iterations += 1;
            temperature *= config.cooling_rate;
        }

        trace!(
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            best_cost,
            "annealing finished"
        );

        Ok(AnnealResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        })
    }
}
