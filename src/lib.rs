//! Waypoint visiting-order optimization.
//!
//! Computes a near-optimal order for visiting a set of geographic
//! waypoints between a chosen start and a chosen end, minimizing
//! great-circle travel distance:
//!
//! - **Exact**: branch-and-bound enumeration of all permutations for up to
//!   12 waypoints, with a deterministic lexicographic tie-break.
//! - **Simulated Annealing + 2-opt**: for larger waypoint sets, Metropolis
//!   search over permutations followed by 2-opt refinement.
//! - **Multi start/end**: every (start, end) candidate pair is solved and
//!   the shortest route wins.
//!
//! # Architecture
//!
//! - [`geo`]: coordinates, Haversine distance, the distance cache.
//! - [`anneal`]: a problem-agnostic annealing engine.
//! - [`order`]: waypoint ordering strategies for a fixed start and end.
//! - [`planner`]: configuration, start/end selection, the planner itself.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for coordinates, configuration and results.
//! - `parallel`: evaluate (start, end) pairs on the rayon thread pool.

pub mod anneal;
pub mod error;
pub mod geo;
pub mod order;
pub mod planner;

pub use error::{ConfigError, PlanError};
pub use geo::Coordinate;
pub use planner::{AlgorithmConfig, RoutePlanner, RouteResult};
