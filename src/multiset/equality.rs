//! Multiset equality over ordered sequences
//!
//! # Algorithm
//!
//! After a length fast-path, count occurrences in the left sequence, then
//! consume the counts while scanning the right sequence. Any element the
//! left side never produced, or produced fewer times, short-circuits to
//! `false`.
//!
//! O(n) time, O(distinct elements) space. The count map is local to the
//! call and never escapes.

use std::collections::HashMap;
use std::hash::Hash;

/// Compare two sequences for equality as multisets
///
/// Same elements with the same multiplicities, order ignored. Elements are
/// borrowed, never cloned.
///
/// # Example
/// ```
/// use utility_core_rs::multiset_eq;
///
/// assert!(multiset_eq(&[1, 2, 2], &[2, 1, 2]));
/// assert!(!multiset_eq(&[1, 1, 2], &[1, 2, 2]));
/// assert!(multiset_eq::<i64>(&[], &[]));
/// ```
pub fn multiset_eq<T: Eq + Hash>(left: &[T], right: &[T]) -> bool {
    // Different lengths can never be multiset-equal; skip building the map.
    if left.len() != right.len() {
        return false;
    }

    let mut counts: HashMap<&T, i64> = HashMap::with_capacity(left.len());
    for item in left {
        *counts.entry(item).or_insert(0) += 1;
    }

    for item in right {
        match counts.get_mut(item) {
            // Element in right that left never produced
            None => return false,
            Some(count) => {
                *count -= 1;
                // Right has more occurrences of this element than left
                if *count < 0 {
                    return false;
                }
            }
        }
    }

    true
}
