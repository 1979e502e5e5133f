#![deny(unsafe_code)]
//! # triadic-forgiveness
//!
//! Grace-mediated constraint release over [`triadic_types::TriadicState`].
//!
//! An error state is captured in a [`ConfessionRecord`], witnessed by an
//! external authority, and then released by the [`ForgivenessOperator`]:
//! closure is reduced, dwelling restored, and both memories decayed toward the
//! neutral midpoint. Facets are never touched. Release is not erasure; the
//! confession keeps the original state and only its determination advances.
//!
//! ## Core Components
//!
//! - **ConfessionRecord** — state snapshot plus witness/authorization metadata
//! - **ReleaseConfig** — validated tuning parameters for release
//! - **ForgivenessOperator** — the release transform and signature bookkeeping
//! - **SharedConfession** — lock-guarded confession for concurrent callers

pub mod confession;
pub mod config;
pub mod error;
pub mod operator;
pub mod shared;

pub use confession::{ConfessionId, ConfessionRecord};
pub use config::ReleaseConfig;
pub use error::{ErrorKind, ForgivenessError};
pub use operator::{
    record_forgotten_signature, release, ForgivenessOperator, CLOSURE_FLOOR, DWELLING_CEILING,
    MEMORY_MIDPOINT,
};
pub use shared::SharedConfession;

pub use triadic_types::{BoundedState, Coordinate, Determination, TriadicState};
