//! Property tests: release preserves facets, respects its caps, and is
//! deterministic for any valid parameters.

use proptest::prelude::*;
use triadic_forgiveness::{
    release, BoundedState, ConfessionRecord, Determination, ReleaseConfig, TriadicState,
    CLOSURE_FLOOR, DWELLING_CEILING, MEMORY_MIDPOINT,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Any state reachable from unbounded space, including saturated tails.
fn arb_state() -> impl Strategy<Value = TriadicState> {
    proptest::array::uniform7(-80.0f64..80.0)
        .prop_map(|z| TriadicState::new([z[0], z[1], z[2]], z[3], z[4], z[5], z[6]))
}

/// A state whose bounded values sit comfortably away from the clamps.
fn arb_interior_state() -> impl Strategy<Value = BoundedState> {
    proptest::array::uniform7(0.01f64..0.99).prop_map(|x| BoundedState {
        x1: x[0],
        x2: x[1],
        x3: x[2],
        closure: x[3],
        memory_fast: x[4],
        memory_slow: x[5],
        dwelling: x[6],
    })
}

fn arb_config() -> impl Strategy<Value = ReleaseConfig> {
    (0.0f64..=1.0, 0.0f64..2.0, 0.0f64..=1.0)
        .prop_map(|(decay, boost, reduction)| ReleaseConfig::new(decay, boost, reduction))
}

fn witnessed(state: TriadicState) -> ConfessionRecord {
    ConfessionRecord::new(0.0, state, 0.0, 0.0, "property").with_witness()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Facets come out bit-identical to what went in.
    #[test]
    fn facets_are_invariant(state in arb_state(), config in arb_config()) {
        let mut confession = witnessed(state);
        let out = release(&mut confession, &config).unwrap();
        for (a, b) in out.facets().iter().zip(state.facets().iter()) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    /// Dwelling never exceeds the ceiling and closure never drops below the floor.
    #[test]
    fn caps_and_floors_hold(state in arb_state(), config in arb_config()) {
        let mut confession = witnessed(state);
        let out = release(&mut confession, &config).unwrap().project_bounded();
        prop_assert!(out.dwelling <= DWELLING_CEILING + 1e-9);
        prop_assert!(out.closure >= CLOSURE_FLOOR - 1e-9);
    }

    /// Memory never moves away from the midpoint.
    #[test]
    fn memory_moves_toward_midpoint(bounded in arb_interior_state(), config in arb_config()) {
        let mut confession = witnessed(TriadicState::from_bounded(&bounded));
        let before = confession.state().project_bounded();
        let out = release(&mut confession, &config).unwrap().project_bounded();
        prop_assert!(
            (out.memory_fast - MEMORY_MIDPOINT).abs()
                <= (before.memory_fast - MEMORY_MIDPOINT).abs() + 1e-9
        );
        prop_assert!(
            (out.memory_slow - MEMORY_MIDPOINT).abs()
                <= (before.memory_slow - MEMORY_MIDPOINT).abs() + 1e-9
        );
    }

    /// Two independent copies release to bit-identical states.
    #[test]
    fn release_is_deterministic(state in arb_state(), config in arb_config()) {
        let template = witnessed(state);
        let mut a = template.clone();
        let mut b = template;
        let out_a = release(&mut a, &config).unwrap();
        let out_b = release(&mut b, &config).unwrap();
        prop_assert_eq!(out_a.closure().to_bits(), out_b.closure().to_bits());
        prop_assert_eq!(out_a.dwelling().to_bits(), out_b.dwelling().to_bits());
        prop_assert_eq!(out_a.memory_fast().to_bits(), out_b.memory_fast().to_bits());
        prop_assert_eq!(out_a.memory_slow().to_bits(), out_b.memory_slow().to_bits());
    }

    /// Every successful release leaves the confession forgiven and its state intact.
    #[test]
    fn release_only_advances_determination(state in arb_state(), config in arb_config()) {
        let mut confession = witnessed(state);
        release(&mut confession, &config).unwrap();
        prop_assert_eq!(confession.determination(), Determination::Forgiven);
        prop_assert_eq!(*confession.state(), state);
        prop_assert!(release(&mut confession, &config).is_err());
    }
}
