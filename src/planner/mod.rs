//! Multi-start, multi-end route planning.
//!
//! [`RoutePlanner`] validates input, runs [`StartEndSelector`] over every
//! (start, end) candidate pair and assembles the winning [`RouteResult`].
//! Pair evaluation dispatches on waypoint count: exact enumeration up to
//! [`EXACT_THRESHOLD`](crate::order::EXACT_THRESHOLD) waypoints, simulated
//! annealing with 2-opt beyond.

mod config;
mod runner;
mod selector;

pub use config::{AlgorithmConfig, InitialOrder, NeighborMove, ITERATIONS_PER_WAYPOINT_SQUARED};
pub use runner::{RoutePlanner, RouteResult};
pub use selector::{PairRoute, Selection, StartEndSelector};
