//! Waypoint ordering.
//!
//! Given a fixed start, a fixed end and a set of waypoints, find the
//! visiting order that minimizes `start → waypoints… → end`. Two
//! strategies share the [`OrderingInstance`] representation:
//!
//! - [`ExactSolver`]: provably optimal, for up to [`EXACT_THRESHOLD`] waypoints.
//! - [`AnnealingSolver`]: simulated annealing followed by optional 2-opt
//!   refinement ([`two_opt`]), for anything larger.

mod annealing;
mod exact;
pub mod two_opt;

pub use annealing::AnnealingSolver;
pub use exact::ExactSolver;

use crate::geo::{Coordinate, DistanceMatrix};

/// Largest waypoint count solved by exhaustive search.
pub const EXACT_THRESHOLD: usize = 12;

/// Which ordering strategy produced a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrderStrategy {
    /// Exhaustive enumeration of all permutations.
    Exact,
    /// Simulated annealing with optional 2-opt refinement.
    Annealing,
}

impl OrderStrategy {
    /// Picks the strategy for `waypoints` waypoints.
    pub fn for_size(waypoints: usize) -> Self {
        if waypoints <= EXACT_THRESHOLD {
            OrderStrategy::Exact
        } else {
            OrderStrategy::Annealing
        }
    }
}

/// One ordering subproblem: a start, an end and the waypoints between them.
///
/// Nodes `0..n` are the waypoints in caller order, node `n` is the start
/// and node `n + 1` the end.
#[derive(Debug, Clone)]
pub struct OrderingInstance {
    matrix: DistanceMatrix,
    waypoints: usize,
}

impl OrderingInstance {
    /// Builds the instance, obtaining every edge cost from `distance`.
    pub fn new<F>(start: Coordinate, waypoints: &[Coordinate], end: Coordinate, distance: F) -> Self
    where
        F: FnMut(Coordinate, Coordinate) -> f64,
    {
        let mut points = Vec::with_capacity(waypoints.len() + 2);
        points.extend_from_slice(waypoints);
        points.push(start);
        points.push(end);

        Self {
            matrix: DistanceMatrix::from_points(&points, distance),
            waypoints: waypoints.len(),
        }
    }

    /// Number of waypoints to order.
    pub fn waypoint_count(&self) -> usize {
        self.waypoints
    }

    /// Node index of the start.
    pub fn start(&self) -> usize {
        self.waypoints
    }

    /// Node index of the end.
    pub fn end(&self) -> usize {
        self.waypoints + 1
    }

    /// Edge cost between two nodes.
    #[inline]
    pub fn edge(&self, from: usize, to: usize) -> f64 {
        self.matrix.get(from, to)
    }

    /// Total length of `start → order… → end`, summed left to right.
    pub fn route_distance(&self, order: &[usize]) -> f64 {
        let mut total = 0.0;
        let mut prev = self.start();
        for &node in order {
            total += self.edge(prev, node);
            prev = node;
        }
        total + self.edge(prev, self.end())
    }

    /// The caller's order, `0..n`.
    pub fn identity_order(&self) -> Vec<usize> {
        (0..self.waypoints).collect()
    }
}

/// A waypoint permutation with its route length.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointOrder {
    /// Indices into the waypoint list, in visiting order.
    pub order: Vec<usize>,
    /// Length of `start → order… → end` in meters.
    pub distance: f64,
}

impl WaypointOrder {
    /// Scores `order` against `instance`.
    pub fn evaluate(instance: &OrderingInstance, order: Vec<usize>) -> Self {
        let distance = instance.route_distance(&order);
        Self { order, distance }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::OrderingInstance;
    use crate::geo::{haversine_distance, Coordinate};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Random instance inside a city-sized box around Beijing.
    pub fn random_instance(waypoints: usize, seed: u64) -> OrderingInstance {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut point = || {
            Coordinate::new(
                rng.random_range(116.2..116.6),
                rng.random_range(39.8..40.1),
            )
        };
        let start = point();
        let end = point();
        let points: Vec<Coordinate> = (0..waypoints).map(|_| point()).collect();
        OrderingInstance::new(start, &points, end, haversine_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{haversine_distance, path_distance};

    #[test]
    fn test_strategy_threshold() {
        assert_eq!(OrderStrategy::for_size(0), OrderStrategy::Exact);
        assert_eq!(OrderStrategy::for_size(12), OrderStrategy::Exact);
        assert_eq!(OrderStrategy::for_size(13), OrderStrategy::Annealing);
    }

    #[test]
    fn test_route_distance_matches_path() {
        let start = Coordinate::new(116.397428, 39.90923);
        let end = Coordinate::new(116.473168, 39.993015);
        let waypoints = [
            Coordinate::new(116.466263, 39.921466),
            Coordinate::new(116.432919, 39.999659),
        ];
        let instance = OrderingInstance::new(start, &waypoints, end, haversine_distance);

        assert_eq!(instance.waypoint_count(), 2);
        assert_eq!(
            instance.route_distance(&[1, 0]),
            path_distance(&[start, waypoints[1], waypoints[0], end])
        );
    }

    #[test]
    fn test_empty_route_is_direct() {
        let start = Coordinate::new(0.0, 0.0);
        let end = Coordinate::new(1.0, 1.0);
        let instance = OrderingInstance::new(start, &[], end, haversine_distance);
        assert_eq!(instance.route_distance(&[]), haversine_distance(start, end));
        assert!(instance.identity_order().is_empty());
    }
}
