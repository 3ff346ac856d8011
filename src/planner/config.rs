//! Planner configuration.

use crate::anneal::AnnealConfig;
use crate::error::ConfigError;
use crate::order::AnnealingSolver;

/// Neighbor move used by the annealing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NeighborMove {
    /// Exchange two uniformly chosen, distinct positions.
    #[default]
    Swap,
    /// Reverse the segment between two uniformly chosen, distinct positions.
    Reverse,
}

/// Starting permutation for the annealing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InitialOrder {
    /// Waypoints in the order the caller supplied them.
    #[default]
    Input,
    /// Greedy nearest-neighbor tour from the start.
    NearestNeighbor,
}

/// Multiplier on `n²` bounding the annealing budget for `n` waypoints.
pub const ITERATIONS_PER_WAYPOINT_SQUARED: usize = 50;

/// Parameters for one [`RoutePlanner`](super::RoutePlanner).
///
/// # Examples
///
/// ```
/// use waypoint_order::planner::{AlgorithmConfig, NeighborMove};
///
/// let config = AlgorithmConfig::default()
///     .with_cooling_rate(0.99)
///     .with_max_iterations(20_000)
///     .with_neighbor_move(NeighborMove::Reverse)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlgorithmConfig {
    /// Geometric cooling factor in (0, 1).
    pub cooling_rate: f64,

    /// Starting annealing temperature, in meters of route length.
    pub initial_temperature: f64,

    /// Upper bound on annealing iterations per (start, end) pair.
    ///
    /// The effective budget is further capped at
    /// `ITERATIONS_PER_WAYPOINT_SQUARED · n²`.
    pub max_iterations: usize,

    /// Memoize pairwise distances across pairs and calls.
    pub use_cache: bool,

    /// Run 2-opt on the annealing result.
    pub enable_local_search: bool,

    /// Annealing stops once the temperature drops below this.
    pub min_temperature: f64,

    /// Seed for all randomness. `None` draws fresh entropy per call.
    pub seed: Option<u64>,

    /// Annealing neighbor move.
    pub neighbor_move: NeighborMove,

    /// Annealing starting permutation.
    pub initial_order: InitialOrder,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            cooling_rate: 0.995,
            initial_temperature: 10_000.0,
            max_iterations: 100_000,
            use_cache: true,
            enable_local_search: true,
            min_temperature: 1.0,
            seed: None,
            neighbor_move: NeighborMove::Swap,
            initial_order: InitialOrder::Input,
        }
    }
}

impl AlgorithmConfig {
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.use_cache = enabled;
        self
    }

    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.enable_local_search = enabled;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_neighbor_move(mut self, neighbor_move: NeighborMove) -> Self {
        self.neighbor_move = neighbor_move;
        self
    }

    pub fn with_initial_order(mut self, initial_order: InitialOrder) -> Self {
        self.initial_order = initial_order;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.anneal_config(self.max_iterations).validate()
    }

    /// Annealing solver for an instance with `waypoints` waypoints.
    pub fn annealing_solver(&self, waypoints: usize) -> AnnealingSolver {
        let cap =
            ITERATIONS_PER_WAYPOINT_SQUARED.saturating_mul(waypoints.saturating_mul(waypoints));
        AnnealingSolver {
            anneal: self.anneal_config(self.max_iterations.min(cap).max(1)),
            neighbor_move: self.neighbor_move,
            initial_order: self.initial_order,
            local_search: self.enable_local_search,
        }
    }

    fn anneal_config(&self, max_iterations: usize) -> AnnealConfig {
        AnnealConfig {
            initial_temperature: self.initial_temperature,
            min_temperature: self.min_temperature,
            cooling_rate: self.cooling_rate,
            max_iterations,
            seed: self.seed,
        }
    }
}
