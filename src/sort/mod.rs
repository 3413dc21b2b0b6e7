//! Sort Module
//!
//! The one sort algorithm used for records and for view orders, plus the
//! linear and binary searches.
//!
//! ## Two Call Shapes
//! ```text
//! direct:   [r3, r1, r2]            ──quick_sort_by──►          [r1, r2, r3]
//!
//! indices:  order [0, 1, 2]  ──quick_sort_indices_by(data)──►  order [1, 2, 0]
//!           data  [r3, r1, r2]  (borrowed shared, never moved)
//! ```
//! Comparators are "is less" predicates, the same shape `slice::sort_by`
//! uses internally.

mod quick;
mod search;

pub use quick::{insertion_sort_by, quick_sort_by, quick_sort_indices_by, INSERTION_THRESHOLD};
pub use search::{binary_search_by, linear_search_by};
