//! Chained hash table
//!
//! Separate chaining over a `Vec` of buckets. Both index variants are thin
//! wrappers around this table; they differ only in what a slot holds and in
//! what counts toward the load factor.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

/// Rehash once `counted / bucket_count` exceeds this
pub(crate) const MAX_LOAD_FACTOR: f64 = 0.75;

/// Bucket array where each bucket is a chain of `(key, value)` entries
#[derive(Clone)]
pub(crate) struct ChainedTable<K, V, S> {
    buckets: Vec<Vec<(K, V)>>,
    hasher: S,
}

// Manual impl: `FxBuildHasher` does not implement `Debug`
impl<K: std::fmt::Debug, V: std::fmt::Debug, S> std::fmt::Debug for ChainedTable<K, V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedTable")
            .field("buckets", &self.buckets)
            .finish_non_exhaustive()
    }
}

impl<K, V, S> ChainedTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Create a table with `bucket_count` empty buckets (at least one)
    pub(crate) fn with_hasher(bucket_count: usize, hasher: S) -> Self {
        Self {
            buckets: Self::empty_buckets(bucket_count.max(1)),
            hasher,
        }
    }

    fn empty_buckets(count: usize) -> Vec<Vec<(K, V)>> {
        (0..count).map(|_| Vec::new()).collect()
    }

    /// Bucket a key hashes to under the current bucket count
    fn slot<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Scan the key's chain for an exact match
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.slot(key)]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.slot(key);
        self.buckets[slot]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Append a new entry to its chain. The caller guarantees the key is absent.
    pub(crate) fn insert_new(&mut self, key: K, value: V) {
        let slot = self.slot(&key);
        self.buckets[slot].push((key, value));
    }

    /// Whether `counted` entries would overload the current bucket array
    pub(crate) fn over_loaded(&self, counted: usize) -> bool {
        counted as f64 / self.buckets.len() as f64 > MAX_LOAD_FACTOR
    }

    /// Grow to `2 * bucket_count + 1` buckets, redistributing every entry
    pub(crate) fn grow(&mut self) {
        let new_count = self.buckets.len() * 2 + 1;
        tracing::debug!(
            "Rehashing index: {} -> {} buckets",
            self.buckets.len(),
            new_count
        );
        self.rehash(new_count);
    }

    fn rehash(&mut self, new_count: usize) {
        let old = std::mem::replace(&mut self.buckets, Self::empty_buckets(new_count));
        for (key, value) in old.into_iter().flatten() {
            let slot = self.slot(&key);
            self.buckets[slot].push((key, value));
        }
    }

    /// Drop every entry; the bucket array keeps its size
    pub(crate) fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }

    /// Number of distinct keys stored
    pub(crate) fn entry_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets.iter().flatten().map(|(k, v)| (k, v))
    }
}
