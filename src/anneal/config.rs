//! SA configuration.

use crate::error::ConfigError;

/// Configuration for the Simulated Annealing runner.
///
/// Cooling is geometric: after every iteration `T ← cooling_rate · T`.
/// The run stops after `max_iterations` neighbor evaluations or once the
/// temperature drops below `min_temperature`, whichever comes first.
///
/// # Examples
///
/// ```
/// use waypoint_order::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.001)
///     .with_cooling_rate(0.98)
///     .with_max_iterations(5_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. The run stops when T drops below this; a floor
    /// above `initial_temperature` skips the search entirely.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Maximum number of neighbor evaluations.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            min_temperature: 1.0,
            cooling_rate: 0.995,
            max_iterations: 100_000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Negated comparisons also reject NaN.
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        if !(self.initial_temperature > 0.0) {
            return Err(ConfigError::InitialTemperature(self.initial_temperature));
        }
        if !(self.min_temperature > 0.0) {
            return Err(ConfigError::MinTemperature(self.min_temperature));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::MaxIterations);
        }
        Ok(())
    }
}
