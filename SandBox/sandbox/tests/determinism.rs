//! Determinism tests — identical inputs always produce identical outputs.
//!
//! Both slots are pure: no call depends on an earlier one, on call order,
//! or on which instance serves it.

mod common;

use badfactors_primitives::{multiply, proper_divisors, proper_divisors_paired};

use common::*;

const PAIRS: &[(i32, i32)] = &[
    (3, 4),
    (0, 99),
    (-7, 13),
    (46_341, 46_341),
    (i32::MAX, i32::MAX),
    (i32::MIN, 3),
];

// ── Test: repeated calls on one instance ──

#[test]
fn test_repeated_calls_identical() {
    let sandbox = load_sandbox();
    let (mut guest, _) = instantiate(&sandbox);

    for &(x, y) in PAIRS {
        let first = guest.multiply(x, y).unwrap();
        for run in 1..5 {
            assert_eq!(guest.multiply(x, y).unwrap(), first, "run {} of {} * {}", run, x, y);
        }
    }
}

// ── Test: call order does not matter ──

#[test]
fn test_reordered_calls_identical() {
    let sandbox = load_sandbox();
    let (mut forward, _) = instantiate(&sandbox);
    let (mut backward, _) = instantiate(&sandbox);

    let a: Vec<i32> = PAIRS.iter().map(|&(x, y)| forward.multiply(x, y).unwrap()).collect();
    let mut b: Vec<i32> = PAIRS
        .iter()
        .rev()
        .map(|&(x, y)| backward.multiply(x, y).unwrap())
        .collect();
    b.reverse();

    assert_eq!(a, b);
}

// ── Test: guest matches the reference semantics ──

#[test]
fn test_guest_matches_reference_multiply() {
    let sandbox = load_sandbox();
    let (mut guest, _) = instantiate(&sandbox);

    for &(x, y) in PAIRS {
        assert_eq!(guest.multiply(x, y).unwrap(), multiply(x, y), "{} * {}", x, y);
    }
}

// ── Test: import calls are pure too ──

#[test]
fn test_import_calls_identical_across_instances() {
    let sandbox = load_sandbox();
    let (mut one, _) = instantiate(&sandbox);
    let (mut two, _) = instantiate(&sandbox);

    for &(x, y) in PAIRS {
        assert_eq!(
            one.call_import("add", x, y).unwrap(),
            two.call_import("add", x, y).unwrap()
        );
    }
}

// ── Test: divisor engine is deterministic across strategies ──

#[test]
fn test_divisors_stable() {
    for n in [0i64, 1, 2, 12, 97, 360, 10_080] {
        let first = proper_divisors(n);
        assert_eq!(proper_divisors(n), first);
        assert_eq!(proper_divisors_paired(n), first);
    }
}
