//! Start/end candidate selection.

use super::config::AlgorithmConfig;
use crate::error::{ConfigError, PlanError};
use crate::geo::{haversine_distance, Coordinate, DistanceCache};
use crate::order::{ExactSolver, OrderStrategy, OrderingInstance, WaypointOrder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Best route for one (start, end) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairRoute {
    /// Index into the start candidates.
    pub start_index: usize,
    /// Index into the end candidates.
    pub end_index: usize,
    /// Waypoint visiting order and route length.
    pub ordering: WaypointOrder,
}

/// Result of a full start × end search.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The winning pair.
    pub best: PairRoute,
    /// Strategy used for every pair.
    pub strategy: OrderStrategy,
    /// Number of pairs evaluated.
    pub pairs: usize,
}

/// Solves the waypoint ordering for every (start, end) pair and keeps the
/// shortest.
///
/// Each pair is solved independently and completely; there is no pruning
/// across pairs, so cost grows with `|starts| × |ends|`. Pairs are
/// enumerated start-major and the winner is the first pair, in that order,
/// with the minimum distance. With the `parallel` feature pairs are solved
/// on the rayon pool, but results are still reduced in enumeration order.
///
/// When a seed is configured each pair draws from its own generator seeded
/// with `seed + pair_index`, so sequential and parallel runs agree.
pub struct StartEndSelector<'a> {
    config: &'a AlgorithmConfig,
    cache: Option<&'a DistanceCache>,
}

impl<'a> StartEndSelector<'a> {
    /// Creates a selector. Pass `None` to compute every distance directly.
    pub fn new(config: &'a AlgorithmConfig, cache: Option<&'a DistanceCache>) -> Self {
        Self { config, cache }
    }

    /// Evaluates all pairs and returns the best.
    ///
    /// # Errors
    ///
    /// [`PlanError::EmptyStarts`] or [`PlanError::EmptyEnds`] when a
    /// candidate list is empty; no pair is solved in that case.
    /// [`PlanError::Config`] when the annealing parameters are invalid.
    pub fn select(
        &self,
        starts: &[Coordinate],
        waypoints: &[Coordinate],
        ends: &[Coordinate],
    ) -> Result<Selection, PlanError> {
        let strategy = OrderStrategy::for_size(waypoints.len());
        let tasks: Vec<(usize, usize)> = (0..starts.len())
            .flat_map(|si| (0..ends.len()).map(move |ei| (si, ei)))
            .collect();

        let solve = |pair_index: usize, &(si, ei): &(usize, usize)| {
            self.solve_pair(strategy, pair_index, (si, ei), starts[si], waypoints, ends[ei])
        };

        #[cfg(feature = "parallel")]
        let routes: Vec<PairRoute> = tasks
            .par_iter()
            .enumerate()
            .map(|(i, task)| solve(i, task))
            .collect::<Result<_, ConfigError>>()?;

        #[cfg(not(feature = "parallel"))]
        let routes: Vec<PairRoute> = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| solve(i, task))
            .collect::<Result<_, ConfigError>>()?;

        let pairs = routes.len();
        let mut routes = routes.into_iter();
        let Some(first) = routes.next() else {
            // No pairs were solved, so one of the candidate lists is empty.
            return Err(if starts.is_empty() {
                PlanError::EmptyStarts
            } else {
                PlanError::EmptyEnds
            });
        };
        let best = routes.fold(first, |best, candidate| {
            if is_shorter(candidate.ordering.distance, best.ordering.distance) {
                candidate
            } else {
                best
            }
        });

        Ok(Selection {
            best,
            strategy,
            pairs,
        })
    }

    fn solve_pair(
        &self,
        strategy: OrderStrategy,
        pair_index: usize,
        (start_index, end_index): (usize, usize),
        start: Coordinate,
        waypoints: &[Coordinate],
        end: Coordinate,
    ) -> Result<PairRoute, ConfigError> {
        let instance = match self.cache {
            Some(cache) => {
                OrderingInstance::new(start, waypoints, end, |a, b| cache.get_or_compute(a, b))
            }
            None => OrderingInstance::new(start, waypoints, end, haversine_distance),
        };

        let ordering = match strategy {
            OrderStrategy::Exact => ExactSolver::solve(&instance),
            OrderStrategy::Annealing => {
                let mut rng = match self.config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(pair_index as u64)),
                    None => StdRng::from_os_rng(),
                };
                self.config
                    .annealing_solver(waypoints.len())
                    .solve_with_rng(&instance, &mut rng)?
            }
        };

        debug!(
            start_index,
            end_index,
            distance = ordering.distance,
            "pair evaluated"
        );

        Ok(PairRoute {
            start_index,
            end_index,
            ordering,
        })
    }
}

/// Strictly shorter, with any number beating NaN.
fn is_shorter(candidate: f64, incumbent: f64) -> bool {
    candidate < incumbent || (incumbent.is_nan() && !candidate.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AlgorithmConfig {
        AlgorithmConfig::default().with_seed(42)
    }

    #[test]
    fn test_all_pairs_evaluated() {
        let config = config();
        let selector = StartEndSelector::new(&config, None);
        let starts = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
        let ends = [Coordinate::new(5.0, 0.0), Coordinate::new(0.5, 1.0)];

        let selection = selector.select(&starts, &[], &ends).unwrap();
        assert_eq!(selection.pairs, 4);
        assert_eq!(selection.strategy, OrderStrategy::Exact);
        assert_eq!(selection.best.start_index, 1);
        assert_eq!(selection.best.end_index, 1);
        assert_eq!(
            selection.best.ordering.distance,
            haversine_distance(starts[1], ends[1])
        );
    }

    #[test]
    fn test_tie_goes_to_first_pair() {
        let config = config();
        let selector = StartEndSelector::new(&config, None);
        // Both starts are equally far from both ends.
        let starts = [Coordinate::new(0.0, 1.0), Coordinate::new(0.0, -1.0)];
        let ends = [Coordinate::new(1.0, 0.0), Coordinate::new(-1.0, 0.0)];

        let selection = selector.select(&starts, &[], &ends).unwrap();
        assert_eq!(selection.best.start_index, 0);
        assert_eq!(selection.best.end_index, 0);
    }

    #[test]
    fn test_empty_candidates() {
        let config = config();
        let selector = StartEndSelector::new(&config, None);
        let p = [Coordinate::new(0.0, 0.0)];
        assert_eq!(selector.select(&[], &p, &p), Err(PlanError::EmptyStarts));
        assert_eq!(selector.select(&p, &p, &[]), Err(PlanError::EmptyEnds));
        assert_eq!(selector.select(&[], &[], &[]), Err(PlanError::EmptyStarts));
    }

    #[test]
    fn test_invalid_config_surfaces_for_annealing() {
        let config = config().with_cooling_rate(1.5);
        let selector = StartEndSelector::new(&config, None);
        let points: Vec<Coordinate> = (0..15)
            .map(|i| Coordinate::new(0.01 * i as f64, 0.0))
            .collect();
        assert_eq!(
            selector.select(&points[..1], &points, &points[..1]),
            Err(PlanError::Config(ConfigError::CoolingRate(1.5)))
        );
    }

    #[test]
    fn test_cache_filled_through_selector() {
        let config = config();
        let cache = DistanceCache::new();
        let selector = StartEndSelector::new(&config, Some(&cache));
        let starts = [Coordinate::new(0.0, 0.0)];
        let waypoints = [Coordinate::new(0.5, 0.5), Coordinate::new(0.7, 0.1)];
        let ends = [Coordinate::new(1.0, 1.0)];

        selector.select(&starts, &waypoints, &ends).unwrap();
        // 4 points, 6 unordered pairs.
        assert_eq!(cache.len(), 6);
    }

    #[test]
    fn test_shared_waypoint_edges_cached_once() {
        let config = config();
        let cache = DistanceCache::new();
        let selector = StartEndSelector::new(&config, Some(&cache));
        let starts = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.2)];
        let waypoints = [Coordinate::new(0.5, 0.5), Coordinate::new(0.7, 0.1)];
        let ends = [Coordinate::new(1.0, 1.0)];

        selector.select(&starts, &waypoints, &ends).unwrap();
        // Waypoint pair (1) + each start to waypoints and end (2 × 3) + waypoints to end (2).
        assert_eq!(cache.len(), 9);
    }

    #[test]
    fn test_nan_pair_loses_to_finite() {
        let config = config();
        let selector = StartEndSelector::new(&config, None);
        let starts = [Coordinate::new(f64::NAN, 0.0), Coordinate::new(0.0, 0.0)];
        let ends = [Coordinate::new(1.0, 1.0)];

        let selection = selector.select(&starts, &[], &ends).unwrap();
        assert_eq!(selection.best.start_index, 1);
        assert!(selection.best.ordering.distance.is_finite());
    }

    #[test]
    fn test_is_shorter() {
        assert!(is_shorter(1.0, 2.0));
        assert!(!is_shorter(2.0, 2.0));
        assert!(!is_shorter(f64::NAN, 2.0));
        assert!(is_shorter(2.0, f64::NAN));
        assert!(!is_shorter(f64::NAN, f64::NAN));
    }
}
