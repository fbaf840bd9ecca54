//! Engine configuration.

use life_detect::DetectorConfig;

/// Configuration for the board evolution service.
///
/// All values can be overridden per call where the operation accepts
/// parameters; these are the fallbacks.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Grid bound used when an upload does not specify one.
    pub default_max_dimension: i64,

    /// Iteration cap for stability runs.
    pub default_max_iterations: usize,

    /// Consecutive identical generations required for a fixed point.
    pub default_stable_state_threshold: usize,

    /// Longest oscillation period searched for.
    pub max_cycle_detection_length: usize,

    /// Consecutive cycle repetitions required before declaring an
    /// oscillation stable.
    pub cycle_stability_requirement: usize,

    /// Detector progress logging interval (0 disables). Observability
    /// only; has no effect on outcomes.
    pub progress_log_interval: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            default_max_dimension: 100,
            default_max_iterations: 1000,
            default_stable_state_threshold: 5,
            max_cycle_detection_length: 20,
            cycle_stability_requirement: 3,
            progress_log_interval: 100,
        }
    }
}

impl EngineConfig {
    /// Detector configuration for one stability run, with per-call
    /// overrides applied over the defaults.
    pub fn detector_config(
        &self,
        max_iterations: Option<usize>,
        stable_state_threshold: Option<usize>,
    ) -> DetectorConfig {
        DetectorConfig {
            max_iterations: max_iterations.unwrap_or(self.default_max_iterations),
            stable_state_threshold: stable_state_threshold
                .unwrap_or(self.default_stable_state_threshold),
            max_cycle_length: self.max_cycle_detection_length,
            cycle_stability_requirement: self.cycle_stability_requirement,
            progress_log_interval: self.progress_log_interval,
        }
    }
}

/// Builder for engine configuration.
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn default_max_dimension(mut self, dimension: i64) -> Self {
        self.config.default_max_dimension = dimension;
        self
    }

    pub fn default_max_iterations(mut self, iterations: usize) -> Self {
        self.config.default_max_iterations = iterations;
        self
    }

    pub fn default_stable_state_threshold(mut self, threshold: usize) -> Self {
        self.config.default_stable_state_threshold = threshold;
        self
    }

    pub fn max_cycle_detection_length(mut self, length: usize) -> Self {
        self.config.max_cycle_detection_length = length;
        self
    }

    pub fn cycle_stability_requirement(mut self, repetitions: usize) -> Self {
        self.config.cycle_stability_requirement = repetitions;
        self
    }

    pub fn progress_log_interval(mut self, interval: usize) -> Self {
        self.config.progress_log_interval = interval;
        self
    }

    pub fn build(self) -> EngineConfig {
        self.config
    }
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
