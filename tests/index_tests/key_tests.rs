//! FloatKey Tests

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use finvault::index::FloatKey;

fn hash_of(key: FloatKey) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_zeros_are_one_key() {
    let pos = FloatKey::new(0.0);
    let neg = FloatKey::new(-0.0);

    assert_eq!(pos, neg);
    assert_eq!(hash_of(pos), hash_of(neg));
    assert!(neg.get().is_sign_positive());
}

#[test]
fn test_nan_equals_itself() {
    let a = FloatKey::new(f64::NAN);
    let b = FloatKey::new(f64::NAN);

    assert_eq!(a, b);
    assert_eq!(hash_of(a), hash_of(b));
}

#[test]
fn test_total_order() {
    let mut keys: Vec<FloatKey> = [3.5, -1.0, 0.0, 100.0, 2.25]
        .into_iter()
        .map(FloatKey::from)
        .collect();
    keys.sort();

    let values: Vec<f64> = keys.into_iter().map(FloatKey::get).collect();
    assert_eq!(values, vec![-1.0, 0.0, 2.25, 3.5, 100.0]);
}

#[test]
fn test_display_matches_f64() {
    assert_eq!(FloatKey::new(6.5).to_string(), "6.5");
    assert_eq!(FloatKey::new(100.0).to_string(), "100");
}
