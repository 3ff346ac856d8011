//! Error types for route planning.

use thiserror::Error;

/// Invalid [`AlgorithmConfig`](crate::planner::AlgorithmConfig) parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Cooling rate outside the open interval (0, 1).
    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRate(f64),

    /// Initial temperature not strictly positive.
    #[error("initial_temperature must be positive, got {0}")]
    InitialTemperature(f64),

    /// Temperature floor not strictly positive.
    #[error("min_temperature must be positive, got {0}")]
    MinTemperature(f64),

    /// Iteration budget of zero.
    #[error("max_iterations must be at least 1")]
    MaxIterations,
}

/// Errors returned by [`RoutePlanner`](crate::planner::RoutePlanner).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// No start candidates were supplied.
    #[error("at least one start coordinate is required")]
    EmptyStarts,

    /// No end candidates were supplied.
    #[error("at least one end coordinate is required")]
    EmptyEnds,

    /// The planner was constructed with an invalid configuration.
    #[error("invalid algorithm configuration: {0}")]
    Config(#[from] ConfigError),
}
