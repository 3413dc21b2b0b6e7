//! Multi-value index
//!
//! Maps a key to every position inserted under it, in insertion order.
//!
//! ## Load Factor
//! The load factor counts *insertions*, not distinct keys: ten records
//! sharing one rate add ten to `len` but only one chain entry. Datasets with
//! many repeated values therefore grow the bucket array sooner than their
//! key cardinality needs. `clear()` never shrinks the bucket array, so
//! refilling after a rebuild does not rehash again.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use super::table::ChainedTable;
use super::{Position, DEFAULT_BUCKET_COUNT};

/// Hash index from a key to the list of positions holding it
#[derive(Clone)]
pub struct MultiIndex<K, S = FxBuildHasher> {
    table: ChainedTable<K, Vec<Position>, S>,

    /// Total number of `put` calls since creation or the last `clear`
    len: usize,
}

// Manual impl: `FxBuildHasher` does not implement `Debug`
impl<K: std::fmt::Debug, S> std::fmt::Debug for MultiIndex<K, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiIndex")
            .field("table", &self.table)
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Hash + Eq> MultiIndex<K> {
    /// Create an empty index with the default bucket count
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create an empty index with `bucket_count` buckets (at least one)
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self::with_buckets_and_hasher(bucket_count, FxBuildHasher)
    }
}

impl<K: Hash + Eq> Default for MultiIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> MultiIndex<K, S>
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

    /// Record that the record at `pos` holds `key`
    pub fn put(&mut self, key: K, pos: Position) {
        if let Some(positions) = self.table.find_mut(&key) {
            positions.push(pos);
        } else {
            self.table.insert_new(key, vec![pos]);
        }

        self.len += 1;

        if self.table.over_loaded(self.len) {
            self.table.grow();
        }
    }

    /// Every position put under `key`, oldest first
    pub fn get<Q>(&self, key: &Q) -> Option<&[Position]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.find(key).map(Vec::as_slice)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.find(key).is_some()
    }

    /// Empty the index but keep the current bucket count
    pub fn clear(&mut self) {
        self.table.clear();
        self.len = 0;
    }

    /// Total insertions (the quantity the load factor is computed from)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct keys
    pub fn key_count(&self) -> usize {
        self.table.entry_count()
    }

    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.table.bucket_count() as f64
    }

    /// All `(key, positions)` pairs in bucket order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[Position])> {
        self.table.iter().map(|(k, positions)| (k, positions.as_slice()))
    }
}
