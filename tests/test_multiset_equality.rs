//! Tests for multiset equality over sequences
//!
//! Covers the fixed cases (empty, order independence, multiplicity) plus
//! property tests for symmetry, reflexivity, and permutation invariance.

use proptest::prelude::*;
use utility_core_rs::multiset_eq;

#[test]
fn test_empty_sequences_are_equal() {
    assert!(multiset_eq::<i64>(&[], &[]));
}

#[test]
fn test_order_is_ignored() {
    assert!(multiset_eq(&[1, 2, 2], &[2, 1, 2]));
}

#[test]
fn test_length_mismatch_short_circuits() {
    assert!(!multiset_eq(&[1, 2], &[1, 2, 2]));
}

#[test]
fn test_same_length_different_multiplicities() {
    // Same element sets, different counts
    assert!(!multiset_eq(&[1, 1, 2], &[1, 2, 2]));
}

#[test]
fn test_disjoint_elements() {
    assert!(!multiset_eq(&[1, 2, 3], &[4, 5, 6]));
}

#[test]
fn test_single_element() {
    assert!(multiset_eq(&[7], &[7]));
    assert!(!multiset_eq(&[7], &[8]));
}

fn small_vec() -> impl Strategy<Value = Vec<i64>> {
    // Small element domain forces duplicates so multiplicity paths are hit
    prop::collection::vec(0i64..8, 0..64)
}

fn vec_and_permutation() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    small_vec().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
}

proptest! {
    #[test]
    fn prop_reflexive(a in small_vec()) {
        prop_assert!(multiset_eq(&a, &a));
    }

    #[test]
    fn prop_symmetric(a in small_vec(), b in small_vec()) {
        prop_assert_eq!(multiset_eq(&a, &b), multiset_eq(&b, &a));
    }

    #[test]
    fn prop_permutation_invariant((a, shuffled) in vec_and_permutation()) {
        prop_assert!(multiset_eq(&a, &shuffled));
    }

    #[test]
    fn prop_extra_element_breaks_equality(a in small_vec(), extra in 0i64..8) {
        let mut b = a.clone();
        b.push(extra);
        prop_assert!(!multiset_eq(&a, &b));
    }

    #[test]
    fn prop_changed_element_breaks_equality(a in small_vec()) {
        // Push the first element outside the 0..8 domain; lengths still
        // match but the multisets no longer do.
        let mut b = a.clone();
        if let Some(first) = b.first_mut() {
            *first += 100;
            prop_assert!(!multiset_eq(&a, &b));
        }
    }
}
