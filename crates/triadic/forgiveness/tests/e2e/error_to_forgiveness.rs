//! E2E: an error state is confessed, witnessed, released, and its signature
//! recorded as processed.

use std::collections::HashSet;

use triadic_forgiveness::{
    record_forgotten_signature, BoundedState, ConfessionRecord, Determination,
    ForgivenessOperator, TriadicState,
};

fn error_state() -> TriadicState {
    TriadicState::from_bounded(&BoundedState {
        x1: 0.8,
        x2: 0.2,
        x3: 0.3,
        closure: 0.9,
        memory_fast: 0.7,
        memory_slow: 0.6,
        dwelling: 0.1,
    })
}

fn within(actual: f64, expected: f64, tol: f64) -> bool {
    (actual - expected).abs() < tol
}

#[test]
fn error_state_is_forgiven_with_facets_preserved() {
    let state = error_state();
    let before = state.project_bounded();

    let facets = before.facets();
    let coherence: f64 = facets.iter().product();
    let mean = facets.iter().sum::<f64>() / 3.0;
    let divergence = (facets.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 3.0).sqrt();
    assert!(within(coherence, 0.048, 1e-6));
    assert!(within(divergence, 0.2625, 1e-3));

    let mut confession = ConfessionRecord::new(
        10.0,
        state,
        coherence,
        divergence,
        "System locked into high closure with divergent facets",
    )
    .with_witness();

    let restored = ForgivenessOperator::default()
        .release(&mut confession)
        .expect("witnessed unknown confession releases");
    let after = restored.project_bounded();

    assert!(within(after.closure, 0.7, 1e-3));
    assert!(within(after.dwelling, 0.4, 1e-3));
    assert!(within(after.memory_fast, 0.64, 1e-3));
    assert!(within(after.memory_slow, 0.57, 1e-3));
    assert_eq!(restored.facets(), state.facets());
    assert_eq!(after.facets(), before.facets());

    assert_eq!(confession.determination(), Determination::Forgiven);
    assert_eq!(*confession.state(), state);
    assert_eq!(confession.coherence, coherence);
}

#[test]
fn released_state_is_more_open_and_more_resilient() {
    let mut confession = ConfessionRecord::new(0.0, error_state(), 0.0, 0.0, "").with_witness();
    let before = confession.state().project_bounded();
    let after = ForgivenessOperator::default()
        .release(&mut confession)
        .unwrap()
        .project_bounded();

    assert!(after.closure < before.closure);
    assert!(after.dwelling > before.dwelling);
    assert!((after.memory_fast - 0.5).abs() < (before.memory_fast - 0.5).abs());
    assert!((after.memory_slow - 0.5).abs() < (before.memory_slow - 0.5).abs());
}

#[test]
fn identical_inputs_release_identically() {
    let template = ConfessionRecord::new(3.0, error_state(), 0.1, 0.2, "twin").with_witness();
    let mut a = template.clone();
    let mut b = template;
    let operator = ForgivenessOperator::default();

    let out_a = operator.release(&mut a).unwrap();
    let out_b = operator.release(&mut b).unwrap();

    for (x, y) in [
        (out_a.closure(), out_b.closure()),
        (out_a.memory_fast(), out_b.memory_fast()),
        (out_a.memory_slow(), out_b.memory_slow()),
        (out_a.dwelling(), out_b.dwelling()),
    ] {
        assert_eq!(x.to_bits(), y.to_bits());
    }
    assert_eq!(out_a, out_b);
}

#[test]
fn processed_signatures_are_deduplicated() {
    let mut log = HashSet::new();
    let mut confession = ConfessionRecord::new(0.0, error_state(), 0.0, 0.0, "E-closure-lock");
    confession.witness();
    ForgivenessOperator::default().release(&mut confession).unwrap();

    assert!(record_forgotten_signature(
        confession.error_description.clone(),
        &mut log
    ));
    assert!(!ForgivenessOperator::forget("E-closure-lock", &mut log));
    assert_eq!(log.len(), 1);
    assert_eq!(*confession.state(), error_state());
}
