//! Order-independent sequence comparison
//!
//! Two sequences are multiset-equal when every distinct element occurs the
//! same number of times in both, regardless of order.

mod equality;

pub use equality::multiset_eq;
