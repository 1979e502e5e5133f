use std::collections::HashSet;

use tracing::{debug, info};
use triadic_types::{to_unbounded, Determination, TriadicState};

use crate::confession::ConfessionRecord;
use crate::config::ReleaseConfig;
use crate::error::ForgivenessError;

/// Neutral point both memories decay toward.
pub const MEMORY_MIDPOINT: f64 = 0.5;

/// Upper cap on released dwelling; keeps it off saturation.
pub const DWELLING_CEILING: f64 = 0.95;

/// Lower floor on released closure; plasticity never goes fully flat.
pub const CLOSURE_FLOOR: f64 = 0.1;

/// Grace-mediated constraint release.
///
/// Learning is preserved (facets untouched) while binding force is released:
/// closure is reduced, dwelling restored, and memory decayed toward the
/// midpoint rather than erased.
#[derive(Clone, Debug, Default)]
pub struct ForgivenessOperator {
    config: ReleaseConfig,
}

impl ForgivenessOperator {
    /// Create an operator, rejecting out-of-range parameters up front.
    pub fn new(config: ReleaseConfig) -> Result<Self, ForgivenessError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReleaseConfig {
        &self.config
    }

    /// Release a confession whose determination is still `Unknown`.
    ///
    /// Returns the relaxed state and moves the confession to `Forgiven`. The
    /// confession's own state is left as recorded.
    pub fn release(
        &self,
        confession: &mut ConfessionRecord,
    ) -> Result<TriadicState, ForgivenessError> {
        if confession.determination() != Determination::Unknown {
            return Err(ForgivenessError::NotReleasable(confession.determination()));
        }

        let restored = relax(confession.state(), &self.config);

        confession.authorize(Determination::Forgiven)?;
        info!(
            confession_id = %confession.id(),
            description = %confession.error_description,
            "Confession forgiven"
        );

        Ok(restored)
    }

    /// Note that `signature` has been processed. Returns `true` when it was
    /// not already in `log`.
    pub fn forget(signature: impl Into<String>, log: &mut HashSet<String>) -> bool {
        record_forgotten_signature(signature, log)
    }
}

/// Release `confession` with explicit parameters.
///
/// The determination is checked before the parameters, so a double release
/// always reports `NotReleasable`.
pub fn release(
    confession: &mut ConfessionRecord,
    config: &ReleaseConfig,
) -> Result<TriadicState, ForgivenessError> {
    if confession.determination() != Determination::Unknown {
        return Err(ForgivenessError::NotReleasable(confession.determination()));
    }
    ForgivenessOperator::new(*config)?.release(confession)
}

/// Add `signature` to the caller-owned log of processed error signatures.
///
/// Never touches any state; re-adding a known signature is a no-op.
pub fn record_forgotten_signature(signature: impl Into<String>, log: &mut HashSet<String>) -> bool {
    let signature = signature.into();
    let inserted = log.insert(signature);
    debug!(inserted, log_size = log.len(), "Forgotten signature recorded");
    inserted
}

/// Compute the released state. Arithmetic happens in bounded space; facets
/// are copied bit-for-bit from the unbounded input.
fn relax(state: &TriadicState, config: &ReleaseConfig) -> TriadicState {
    let b = state.project_bounded();
    let decay = config.decay_rate;

    let memory_fast = (1.0 - decay) * b.memory_fast + decay * MEMORY_MIDPOINT;
    let memory_slow = (1.0 - decay) * b.memory_slow + decay * MEMORY_MIDPOINT;
    let dwelling = (b.dwelling + config.restore_boost).min(DWELLING_CEILING);
    let closure = (b.closure - config.closure_reduction).max(CLOSURE_FLOOR);

    debug!(
        closure_before = b.closure,
        closure_after = closure,
        dwelling_before = b.dwelling,
        dwelling_after = dwelling,
        memory_fast_before = b.memory_fast,
        memory_fast_after = memory_fast,
        memory_slow_before = b.memory_slow,
        memory_slow_after = memory_slow,
        "Release computed"
    );

    TriadicState::new(
        state.facets(),
        to_unbounded(closure),
        to_unbounded(memory_fast),
        to_unbounded(memory_slow),
        to_unbounded(dwelling),
    )
}
