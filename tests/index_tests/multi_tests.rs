//! MultiIndex Tests
//!
//! Tests verify:
//! - Multiplicity and insertion order of positions
//! - Insertion-count based load factor
//! - clear() keeps the grown bucket array
//! - Float, integer and string keys

use std::collections::HashMap;

use finvault::index::{FloatKey, MultiIndex};
use proptest::prelude::*;

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_same_key_keeps_insertion_order() {
    let mut index = MultiIndex::new();

    index.put(FloatKey::new(100.0), 4);
    index.put(FloatKey::new(100.0), 1);

    assert_eq!(index.get(&FloatKey::new(100.0)), Some(&[4, 1][..]));
}

#[test]
fn test_distinct_keys() {
    let mut index = MultiIndex::new();

    index.put(12i64, 0);
    index.put(24i64, 1);
    index.put(12i64, 2);

    assert_eq!(index.get(&12), Some(&[0, 2][..]));
    assert_eq!(index.get(&24), Some(&[1][..]));
    assert_eq!(index.len(), 3);
    assert_eq!(index.key_count(), 2);
}

#[test]
fn test_get_missing_key_returns_none() {
    let mut index = MultiIndex::new();
    index.put(1i32, 0);

    assert_eq!(index.get(&2), None);
    assert!(!index.contains_key(&2));
}

#[test]
fn test_string_keys_with_borrowed_lookup() {
    let mut index = MultiIndex::new();
    index.put("gold".to_string(), 0);
    index.put("gold".to_string(), 3);

    assert_eq!(index.get("gold"), Some(&[0, 3][..]));
    assert_eq!(index.get("silver"), None);
}

#[test]
fn test_float_keys_are_exact() {
    let mut index = MultiIndex::new();
    index.put(FloatKey::new(5.5), 0);

    assert!(index.get(&FloatKey::new(5.5)).is_some());
    assert!(index.get(&FloatKey::new(5.500001)).is_none());
}

#[test]
fn test_iter_yields_every_key() {
    let mut index = MultiIndex::new();
    index.put(1i32, 0);
    index.put(2i32, 1);
    index.put(1i32, 2);

    let mut pairs: Vec<(i32, Vec<usize>)> =
        index.iter().map(|(k, positions)| (*k, positions.to_vec())).collect();
    pairs.sort();

    assert_eq!(pairs, vec![(1, vec![0, 2]), (2, vec![1])]);
}

// =============================================================================
// Clear Tests
// =============================================================================

#[test]
fn test_clear_empties_index() {
    let mut index = MultiIndex::new();
    index.put(1i32, 0);
    index.put(2i32, 1);

    index.clear();

    assert!(index.is_empty());
    assert_eq!(index.key_count(), 0);
    assert_eq!(index.get(&1), None);
}

#[test]
fn test_clear_keeps_bucket_count() {
    let mut index = MultiIndex::with_buckets(2);
    for i in 0..100i32 {
        index.put(i, i as usize);
    }
    let grown = index.bucket_count();
    assert!(grown > 2);

    index.clear();
    assert_eq!(index.bucket_count(), grown);

    // Refilling to the same size does not rehash again
    for i in 0..100i32 {
        index.put(i, i as usize);
    }
    assert_eq!(index.bucket_count(), grown);
}

// =============================================================================
// Growth Tests
// =============================================================================

#[test]
fn test_repeated_value_counts_toward_load_factor() {
    let mut index = MultiIndex::with_buckets(4);

    for pos in 0..3 {
        index.put(FloatKey::new(7.5), pos);
    }
    assert_eq!(index.bucket_count(), 4);

    // Fourth insertion of the same key: 4 / 4 > 0.75
    index.put(FloatKey::new(7.5), 3);
    assert_eq!(index.bucket_count(), 9);
    assert_eq!(index.key_count(), 1);
    assert_eq!(index.get(&FloatKey::new(7.5)), Some(&[0, 1, 2, 3][..]));
}

#[test]
fn test_load_factor_bound_after_every_put() {
    let mut index = MultiIndex::with_buckets(1);

    for i in 0..3000usize {
        index.put((i % 17) as i64, i);
        assert!(index.load_factor() <= 0.75);
    }
}

#[test]
fn test_lists_survive_rehash() {
    let mut index = MultiIndex::with_buckets(1);
    for i in 0..400usize {
        index.put((i % 10) as i32, i);
    }

    for key in 0..10i32 {
        let expected: Vec<usize> = (0..400).filter(|i| i % 10 == key as usize).collect();
        assert_eq!(index.get(&key), Some(expected.as_slice()));
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Lists equal the model's insertion-ordered lists after any put sequence
    #[test]
    fn prop_lists_match_model(ops in prop::collection::vec((0i32..20, 0usize..500), 0..300)) {
        let mut index = MultiIndex::with_buckets(2);
        let mut model: HashMap<i32, Vec<usize>> = HashMap::new();

        for (key, pos) in &ops {
            index.put(*key, *pos);
            model.entry(*key).or_default().push(*pos);
            prop_assert!(index.load_factor() <= 0.75);
        }

        prop_assert_eq!(index.len(), ops.len());
        prop_assert_eq!(index.key_count(), model.len());
        for (key, positions) in &model {
            prop_assert_eq!(index.get(key), Some(positions.as_slice()));
        }
    }
}
