use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use triadic_types::{Determination, TriadicState};

use crate::error::ForgivenessError;

/// Unique identifier for a confession record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfessionId(pub uuid::Uuid);

impl ConfessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ConfessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConfessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "confession:{}", self.0)
    }
}

/// Transparent record of system state at the moment of an error.
///
/// The captured state is never modified. Only the witness flag and the
/// determination move, and the determination moves at most once.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfessionRecord {
    id: ConfessionId,
    /// Caller-supplied timestamp; not validated.
    pub time: f64,
    state: TriadicState,
    /// Caller-computed summary, opaque to this crate.
    pub coherence: f64,
    /// Caller-computed summary, opaque to this crate.
    pub divergence: f64,
    pub error_description: String,
    witnessed: bool,
    determination: Determination,
}

impl ConfessionRecord {
    /// Record an unwitnessed confession with an `Unknown` determination.
    pub fn new(
        time: f64,
        state: TriadicState,
        coherence: f64,
        divergence: f64,
        error_description: impl Into<String>,
    ) -> Self {
        Self {
            id: ConfessionId::new(),
            time,
            state,
            coherence,
            divergence,
            error_description: error_description.into(),
            witnessed: false,
            determination: Determination::Unknown,
        }
    }

    /// Mark the confession as witnessed at creation.
    pub fn with_witness(mut self) -> Self {
        self.witnessed = true;
        self
    }

    pub fn id(&self) -> ConfessionId {
        self.id
    }

    pub fn state(&self) -> &TriadicState {
        &self.state
    }

    pub fn is_witnessed(&self) -> bool {
        self.witnessed
    }

    pub fn determination(&self) -> Determination {
        self.determination
    }

    /// Record that an external authority has witnessed this confession.
    pub fn witness(&mut self) {
        if !self.witnessed {
            debug!(confession_id = %self.id, "Confession witnessed");
        }
        self.witnessed = true;
    }

    /// Set the determination.
    ///
    /// Requires a witness, and only `Unknown -> terminal` is accepted. On
    /// failure the record is left unchanged.
    pub fn authorize(&mut self, determination: Determination) -> Result<(), ForgivenessError> {
        if !self.witnessed {
            warn!(
                confession_id = %self.id,
                requested = %determination,
                "Authorization without witness"
            );
            return Err(ForgivenessError::NotWitnessed);
        }

        if !self.determination.can_transition_to(determination) {
            return Err(ForgivenessError::InvalidTransition {
                from: self.determination,
                to: determination,
            });
        }

        debug!(confession_id = %self.id, determination = %determination, "Confession authorized");
        self.determination = determination;
        Ok(())
    }
}
