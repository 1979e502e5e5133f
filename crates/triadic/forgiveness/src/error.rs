use thiserror::Error;
use triadic_types::Determination;

/// Errors from authorization and release.
///
/// All of these are contract violations by the caller; nothing here is
/// retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForgivenessError {
    #[error("cannot authorize without witness")]
    NotWitnessed,

    #[error("can only release from the unknown determination (current: {0})")]
    NotReleasable(Determination),

    #[error("invalid determination transition: {from} -> {to}")]
    InvalidTransition {
        from: Determination,
        to: Determination,
    },

    #[error("invalid release parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Coarse classification of a [`ForgivenessError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Authorization attempted before the confession was witnessed.
    Authorization,
    /// The confession's determination does not permit the operation.
    InvalidState,
    /// A release parameter is out of range.
    InvalidParameter,
}

impl ForgivenessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotWitnessed => ErrorKind::Authorization,
            Self::NotReleasable(_) | Self::InvalidTransition { .. } => ErrorKind::InvalidState,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
        }
    }
}
