//! Unique-key index
//!
//! Maps each key to exactly one position. A second `put` for the same key
//! overwrites the stored position instead of adding an entry.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use super::table::ChainedTable;
use super::{Position, DEFAULT_BUCKET_COUNT};

/// Hash index from a unique key to a single position
#[derive(Clone)]
pub struct UniqueIndex<K, S = FxBuildHasher> {
    table: ChainedTable<K, Position, S>,

    /// Number of distinct keys
    len: usize,
}

// Manual impl: `FxBuildHasher` does not implement `Debug`
impl<K: std::fmt::Debug, S> std::fmt::Debug for UniqueIndex<K, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniqueIndex")
            .field("table", &self.table)
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Hash + Eq> UniqueIndex<K> {
    /// Create an empty index with the default bucket count
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create an empty index with `bucket_count` buckets (at least one)
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self::with_buckets_and_hasher(bucket_count, FxBuildHasher)
    }
}

impl<K: Hash + Eq> Default for UniqueIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> UniqueIndex<K, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    pub fn with_buckets_and_hasher(bucket_count: usize, hasher: S) -> Self {
        Self {
            table: ChainedTable::with_hasher(bucket_count, hasher),
            len: 0,
        }
    }

    /// Map `key` to `pos`, overwriting any previous position for `key`
    pub fn put(&mut self, key: K, pos: Position) {
        if let Some(slot) = self.table.find_mut(&key) {
            *slot = pos;
            return;
        }

        self.table.insert_new(key, pos);
        self.len += 1;

        if self.table.over_loaded(self.len) {
            self.table.grow();
        }
    }

    /// Position stored for `key`, or `None` if the key was never put
    pub fn get<Q>(&self, key: &Q) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.find(key).copied()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.find(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.table.bucket_count() as f64
    }

    /// All `(key, position)` pairs in bucket order
    pub fn iter(&self) -> impl Iterator<Item = (&K, Position)> {
        self.table.iter().map(|(k, pos)| (k, *pos))
    }
}
