//! Problem trait for the annealing engine.

use rand::Rng;

/// A minimization problem searchable by [`AnnealRunner`](super::AnnealRunner).
///
/// The runner owns the schedule and the acceptance rule; the problem only
/// knows where to start, how to perturb a candidate and what it costs.
///
/// # Examples
///
/// Ordering stops along a line so that they are visited left to right:
///
/// ```
/// use rand::Rng;
/// use waypoint_order::anneal::{AnnealConfig, AnnealProblem, AnnealRunner};
///
/// struct Stops(Vec<f64>);
///
/// impl AnnealProblem for Stops {
///     type Solution = Vec<usize>;
///
///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
///         (0..self.0.len()).rev().collect()
///     }
///
///     fn cost(&self, order: &Vec<usize>) -> f64 {
///         order.windows(2).map(|w| (self.0[w[1]] - self.0[w[0]]).abs()).sum()
///     }
///
///     fn neighbor<R: Rng>(&self, order: &Vec<usize>, rng: &mut R) -> Vec<usize> {
///         let mut next = order.clone();
///         let i = rng.random_range(0..next.len());
///         let j = rng.random_range(0..next.len());
///         next.swap(i, j);
///         next
///     }
/// }
///
/// let config = AnnealConfig::default().with_seed(1);
/// let result = AnnealRunner::run(&Stops(vec![0.0, 1.0, 2.0]), &config).unwrap();
/// assert!(result.best_cost <= 2.0);
/// ```
pub trait AnnealProblem: Send + Sync {
    /// Candidate representation.
    type Solution: Clone + Send;

    /// Starting candidate.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Cost to minimize. NaN is treated as never better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// A random nearby candidate. Repeated moves must be able to reach
    /// every candidate.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
