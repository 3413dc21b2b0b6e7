//! Linear and Binary Search Tests

use finvault::sort::{binary_search_by, linear_search_by, quick_sort_by};

#[test]
fn test_linear_search_finds_first_match() {
    let v = vec![4, 8, 15, 8, 23];

    assert_eq!(linear_search_by(&v, &8, |a, b| a < b), Some(1));
    assert_eq!(linear_search_by(&v, &23, |a, b| a < b), Some(4));
    assert_eq!(linear_search_by(&v, &16, |a, b| a < b), None);
}

#[test]
fn test_linear_search_uses_comparator_equivalence() {
    let v = vec![("alice", 100), ("bob", 200), ("carol", 300)];

    // Compare by amount only; the name in the probe is ignored
    let found = linear_search_by(&v, &("", 200), |a, b| a.1 < b.1);
    assert_eq!(found, Some(1));
}

#[test]
fn test_linear_search_empty() {
    let v: Vec<i32> = Vec::new();
    assert_eq!(linear_search_by(&v, &1, |a, b| a < b), None);
}

#[test]
fn test_binary_search_every_element() {
    let v: Vec<i32> = (0..100).map(|i| i * 3).collect();

    for (idx, value) in v.iter().enumerate() {
        assert_eq!(binary_search_by(&v, value, |a, b| a < b), Some(idx));
    }
}

#[test]
fn test_binary_search_misses() {
    let v: Vec<i32> = (0..100).map(|i| i * 3).collect();

    assert_eq!(binary_search_by(&v, &-1, |a, b| a < b), None);
    assert_eq!(binary_search_by(&v, &1, |a, b| a < b), None);
    assert_eq!(binary_search_by(&v, &300, |a, b| a < b), None);
}

#[test]
fn test_binary_search_empty_and_single() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(binary_search_by(&empty, &1, |a, b| a < b), None);

    let single = vec![7];
    assert_eq!(binary_search_by(&single, &7, |a, b| a < b), Some(0));
    assert_eq!(binary_search_by(&single, &8, |a, b| a < b), None);
}

#[test]
fn test_binary_search_after_quick_sort() {
    let mut names = vec!["trent", "alice", "eve", "bob", "mallory", "carol", "dave"];
    quick_sort_by(&mut names, |a, b| a < b);

    let idx = binary_search_by(&names, &"eve", |a, b| a < b);
    assert_eq!(idx.map(|i| names[i]), Some("eve"));
    assert_eq!(binary_search_by(&names, &"zed", |a, b| a < b), None);
}
