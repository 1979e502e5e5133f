#![deny(unsafe_code)]
//! # triadic-types
//!
//! Core value types for the triadic state model. No IO, no logging.
//!
//! - **Mapping** ([`to_bounded`], [`to_unbounded`]): sigmoid/logit pair with
//!   numerical clamping so neither direction ever yields NaN or infinity.
//! - **State** ([`TriadicState`]): seven coordinates held in unbounded (logit)
//!   space, projected on demand into a [`BoundedState`] snapshot.
//! - **Determination** ([`Determination`]): authorization status of a
//!   confession, with explicit transition checks.

pub mod determination;
pub mod mapping;
pub mod state;

pub use determination::Determination;
pub use mapping::{to_bounded, to_unbounded, BOUND_EPSILON, LOGIT_CLAMP};
pub use state::{BoundedState, Coordinate, TriadicState, TriadicStateBuilder};
