//! Route planning entry point.

use super::config::AlgorithmConfig;
use super::selector::StartEndSelector;
use crate::error::PlanError;
use crate::geo::{Coordinate, DistanceCache};
use crate::order::OrderStrategy;
use std::time::Instant;
use tracing::{debug, info};

/// Output of [`RoutePlanner::plan_route`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    /// Chosen start, waypoints in visiting order, chosen end.
    pub path: Vec<Coordinate>,

    /// Great-circle length of `path` in meters.
    pub total_distance: f64,

    /// Wall-clock planning time in milliseconds.
    pub execution_time_ms: f64,

    /// Index of the chosen start in the caller's start list.
    pub start_index: usize,

    /// Index of the chosen end in the caller's end list.
    pub end_index: usize,

    /// Indices into the caller's waypoint list, in visiting order.
    pub waypoint_order: Vec<usize>,

    /// Strategy that ordered the waypoints.
    pub strategy: OrderStrategy,
}

impl RouteResult {
    /// The chosen start coordinate.
    pub fn start(&self) -> Option<&Coordinate> {
        self.path.first()
    }

    /// The chosen end coordinate.
    pub fn end(&self) -> Option<&Coordinate> {
        self.path.last()
    }
}

/// Plans the shortest route from one of several starts, through every
/// waypoint, to one of several ends.
///
/// Waypoint counts up to [`EXACT_THRESHOLD`](crate::order::EXACT_THRESHOLD)
/// are solved exactly; larger sets use simulated annealing with optional
/// 2-opt refinement, which is randomized unless
/// [`AlgorithmConfig::seed`] is set.
///
/// The planner owns a [`DistanceCache`] that persists across calls while
/// `use_cache` is on. It only grows; call
/// [`clear_distance_cache`](Self::clear_distance_cache) between unrelated
/// sessions.
///
/// There is no internal timeout. Bound running time through
/// `max_iterations` or an external deadline.
///
/// # Examples
///
/// ```
/// use waypoint_order::geo::Coordinate;
/// use waypoint_order::planner::{AlgorithmConfig, RoutePlanner};
///
/// let planner = RoutePlanner::new(AlgorithmConfig::default()).unwrap();
/// let result = planner
///     .plan_route(
///         &[Coordinate::new(116.397428, 39.90923)],
///         &[
///             Coordinate::new(116.466263, 39.921466),
///             Coordinate::new(116.432919, 39.999659),
///         ],
///         &[Coordinate::new(116.473168, 39.993015)],
///     )
///     .unwrap();
/// assert_eq!(result.path.len(), 4);
/// assert!(result.total_distance > 0.0);
/// ```
#[derive(Debug)]
pub struct RoutePlanner {
    config: AlgorithmConfig,
    cache: DistanceCache,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self {
            config: AlgorithmConfig::default(),
            cache: DistanceCache::new(),
        }
    }
}

impl RoutePlanner {
    /// Creates a planner, rejecting invalid configurations.
    pub fn new(config: AlgorithmConfig) -> Result<Self, PlanError> {
        config.validate()?;
        Ok(Self {
            config,
            cache: DistanceCache::new(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    /// The planner's distance cache. Stays empty when `use_cache` is off.
    pub fn distance_cache(&self) -> &DistanceCache {
        &self.cache
    }

    /// Finds the shortest `start → waypoints… → end` route over all
    /// start/end candidate pairs.
    ///
    /// `waypoints` may be empty. Ties between pairs go to the earliest
    /// start, then the earliest end. Non-finite coordinates are not
    /// rejected; they yield a NaN `total_distance`.
    ///
    /// # Errors
    ///
    /// [`PlanError::EmptyStarts`] or [`PlanError::EmptyEnds`] when a
    /// candidate list is empty.
    pub fn plan_route(
        &self,
        starts: &[Coordinate],
        waypoints: &[Coordinate],
        ends: &[Coordinate],
    ) -> Result<RouteResult, PlanError> {
        let started = Instant::now();
        let cache = self.config.use_cache.then_some(&self.cache);
        let selection =
            StartEndSelector::new(&self.config, cache).select(starts, waypoints, ends)?;

        let best = selection.best;
        let start = starts[best.start_index];
        let end = ends[best.end_index];

        let mut path = Vec::with_capacity(waypoints.len() + 2);
        path.push(start);
        path.extend(best.ordering.order.iter().map(|&i| waypoints[i]));
        path.push(end);

        let execution_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        info!(
            pairs = selection.pairs,
            waypoints = waypoints.len(),
            strategy = ?selection.strategy,
            total_distance = best.ordering.distance,
            execution_time_ms,
            "route planned"
        );

        Ok(RouteResult {
            path,
            total_distance: best.ordering.distance,
            execution_time_ms,
            start_index: best.start_index,
            end_index: best.end_index,
            waypoint_order: best.ordering.order,
            strategy: selection.strategy,
        })
    }

    /// Drops all cached distances. No effect when caching is disabled.
    pub fn clear_distance_cache(&self) {
        if self.config.use_cache {
            debug!(entries = self.cache.len(), "clearing distance cache");
            self.cache.clear();
        }
    }
}
