use serde::{Deserialize, Serialize};

use crate::error::ForgivenessError;

/// Tuning parameters for release.
///
/// Deserializes with per-field defaults, so a partial config only overrides
/// what it names.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Weight pulling both memories toward the midpoint, in [0, 1].
    #[serde(default = "default_decay_rate")]
    pub decay_rate: f64,

    /// Amount added to dwelling before the ceiling is applied, >= 0.
    #[serde(default = "default_restore_boost")]
    pub restore_boost: f64,

    /// Amount subtracted from closure before the floor is applied, in [0, 1].
    #[serde(default = "default_closure_reduction")]
    pub closure_reduction: f64,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            decay_rate: default_decay_rate(),
            restore_boost: default_restore_boost(),
            closure_reduction: default_closure_reduction(),
        }
    }
}

// Default value helpers
fn default_decay_rate() -> f64 {
    0.3
}

fn default_restore_boost() -> f64 {
    0.3
}

fn default_closure_reduction() -> f64 {
    0.2
}

impl ReleaseConfig {
    pub fn new(decay_rate: f64, restore_boost: f64, closure_reduction: f64) -> Self {
        Self {
            decay_rate,
            restore_boost,
            closure_reduction,
        }
    }

    /// Check every parameter is finite and inside its documented range.
    pub fn validate(&self) -> Result<(), ForgivenessError> {
        unit_interval("decay_rate", self.decay_rate)?;
        unit_interval("closure_reduction", self.closure_reduction)?;

        if !self.restore_boost.is_finite() {
            return Err(ForgivenessError::InvalidParameter {
                name: "restore_boost",
                value: self.restore_boost,
                reason: "must be finite",
            });
        }
        if self.restore_boost < 0.0 {
            return Err(ForgivenessError::InvalidParameter {
                name: "restore_boost",
                value: self.restore_boost,
                reason: "must not be negative",
            });
        }

        Ok(())
    }
}

fn unit_interval(name: &'static str, value: f64) -> Result<(), ForgivenessError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ForgivenessError::InvalidParameter {
            name,
            value,
            reason: "must be within [0, 1]",
        });
    }
    Ok(())
}
