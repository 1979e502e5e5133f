//! Configuration for the forgiveness demo

use serde::{Deserialize, Serialize};
use triadic_forgiveness::ReleaseConfig;
use triadic_types::BoundedState;

/// Main demo configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Release parameters
    #[serde(default)]
    pub release: ReleaseConfig,

    /// Error scenario to confess and release
    #[serde(default)]
    pub scenario: ScenarioConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The hand-coded error that gets confessed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Timestamp recorded on the confession
    #[serde(default = "default_time")]
    pub time: f64,

    /// Free-text description of the error
    #[serde(default = "default_description")]
    pub description: String,

    /// Whether an external authority witnessed the confession
    #[serde(default = "default_true")]
    pub witnessed: bool,

    /// Error state in bounded (0,1) space
    #[serde(default = "default_error_state")]
    pub error_state: BoundedState,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            time: default_time(),
            description: default_description(),
            witnessed: true,
            error_state: default_error_state(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_time() -> f64 {
    10.0
}

fn default_description() -> String {
    "System locked into high closure with divergent facets".to_string()
}

fn default_error_state() -> BoundedState {
    BoundedState {
        x1: 0.8,
        x2: 0.2,
        x3: 0.3,
        closure: 0.9,
        memory_fast: 0.7,
        memory_slow: 0.6,
        dwelling: 0.1,
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl DemoConfig {
    /// Load configuration: defaults, then an optional file, then
    /// `TRIADIC_`-prefixed environment variables (`__` separates sections).
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&DemoConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("TRIADIC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
