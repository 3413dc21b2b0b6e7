//! Indexed store implementation
//!
//! Keeps the primary records, the key index, one value index per field and
//! the view order consistent with each other.

use rustc_hash::FxHashSet;

use crate::error::{Result, VaultError};
use crate::index::{MultiIndex, Position, UniqueIndex};
use crate::sort::{quick_sort_by, quick_sort_indices_by};

use super::record::{check_key, Field, FieldValue, Query, Record, SortBy};

/// Bucket count a store's indexes start with unless told otherwise
pub const DEFAULT_STORE_BUCKETS: usize = 211;

/// Result of a search through the store's indexes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The store holds no records; nothing was looked up
    EmptyStore,
    NotFound,
    /// Matching positions, in ascending position order
    Found(Vec<Position>),
}

/// Sizes of the store and its indexes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    pub records: usize,
    pub key_buckets: usize,
    /// One entry per field, in `Field::ALL` order
    pub value_buckets: Vec<usize>,
}

impl StoreStats {
    /// Records plus every bucket of every index
    pub fn space_units(&self) -> usize {
        self.records + self.key_buckets + self.value_buckets.iter().sum::<usize>()
    }
}

/// Records plus the hash indexes and view order built over them
///
/// ## Consistency Protocol
///
/// - **Append** is the only incremental mutation: the new record gets the
///   next position, which is put into every index and pushed onto the view.
/// - **Update** and **delete** are followed by a full rebuild. A delete
///   shifts every later position down by one and an update may move a
///   record between value buckets, so the indexes are rebuilt from scratch
///   rather than patched.
///
/// After a rebuild the records are sorted by key, the view order is the
/// identity permutation, and every index exactly reflects the records.
///
/// Positions returned by any method are valid until the next update,
/// delete, rebuild or reset.
#[derive(Debug, Clone)]
pub struct IndexedStore<R: Record> {
    /// Primary records
    records: Vec<R>,

    /// Key → position
    key_index: UniqueIndex<String>,

    /// Field value → positions, indexed by `Field::ordinal`
    value_indexes: Vec<MultiIndex<FieldValue>>,

    /// Display permutation over `records`
    view: Vec<Position>,

    /// Bucket count for freshly created indexes
    initial_buckets: usize,
}

impl<R: Record> IndexedStore<R> {
    /// Create an empty store with the default bucket count
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_STORE_BUCKETS)
    }

    /// Create an empty store whose indexes start with `bucket_count` buckets
    pub fn with_buckets(bucket_count: usize) -> Self {
        let initial_buckets = bucket_count.max(1);
        Self {
            records: Vec::new(),
            key_index: UniqueIndex::with_buckets(initial_buckets),
            value_indexes: Self::fresh_value_indexes(initial_buckets),
            view: Vec::new(),
            initial_buckets,
        }
    }

    /// Create a store over `records` and build every index
    pub fn from_records(records: Vec<R>, bucket_count: usize) -> Self {
        let mut store = Self::with_buckets(bucket_count);
        store.replace_all(records);
        store
    }

    fn fresh_value_indexes(bucket_count: usize) -> Vec<MultiIndex<FieldValue>> {
        R::Field::ALL
            .iter()
            .map(|_| MultiIndex::with_buckets(bucket_count))
            .collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a record at the end of the store
    ///
    /// The key must pass `check_key`. Cheap path: no rebuild. The record is
    /// appended to the view order too, so a sorted view stays sorted only
    /// until the next `sort_view`.
    pub fn append(&mut self, record: R) -> Result<Position> {
        check_key(record.key())?;
        if self.key_index.contains_key(record.key()) {
            return Err(VaultError::DuplicateKey(record.key().to_string()));
        }

        let pos = self.records.len();
        self.index_record(&record, pos);
        self.records.push(record);
        self.view.push(pos);

        Ok(pos)
    }

    /// Replace the record stored under `key` and rebuild
    ///
    /// The replacement may carry a new key as long as no other record holds
    /// it. Returns the record's position after the rebuild.
    pub fn update(&mut self, key: &str, replacement: R) -> Result<Position> {
        let pos = self
            .find_by_key(key)
            .ok_or_else(|| VaultError::KeyNotFound(key.to_string()))?;

        check_key(replacement.key())?;
        let new_key = replacement.key().to_string();
        if new_key != key && self.key_index.contains_key(new_key.as_str()) {
            return Err(VaultError::DuplicateKey(new_key));
        }

        self.records[pos] = replacement;
        self.rebuild();

        self.find_by_key(&new_key)
            .ok_or(VaultError::KeyNotFound(new_key))
    }

    /// Remove the record stored under `key` and rebuild
    pub fn delete(&mut self, key: &str) -> Result<R> {
        let pos = self
            .find_by_key(key)
            .ok_or_else(|| VaultError::KeyNotFound(key.to_string()))?;

        let removed = self.records.remove(pos);
        self.rebuild();

        Ok(removed)
    }

    /// Swap in a whole new record set and rebuild
    ///
    /// Records with an invalid key, and later records whose key was already
    /// seen, are dropped.
    pub fn replace_all(&mut self, records: Vec<R>) {
        let mut seen = FxHashSet::default();
        let mut duplicates = 0;
        let mut kept = Vec::with_capacity(records.len());

        for record in records {
            if let Err(e) = check_key(record.key()) {
                tracing::warn!("Dropped {} record: {}", R::KIND, e);
                continue;
            }
            if seen.insert(record.key().to_string()) {
                kept.push(record);
            } else {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            tracing::warn!("Dropped {} {} records with duplicate keys", duplicates, R::KIND);
        }

        self.records = kept;
        self.rebuild();
    }

    /// Re-sort the records by key and regenerate every index and the view
    pub fn rebuild(&mut self) {
        // Step 1: Canonical storage order
        quick_sort_by(&mut self.records, |a, b| a.key() < b.key());

        // Step 2: View order matches storage order until the next sort_view
        self.view.clear();
        self.view.extend(0..self.records.len());
        quick_sort_indices_by(&mut self.view, &self.records, |a, b| a.key() < b.key());

        // Step 3: Key index from scratch
        self.key_index = UniqueIndex::with_buckets(self.initial_buckets);

        // Step 4: Value indexes keep their grown bucket arrays
        for index in &mut self.value_indexes {
            index.clear();
        }

        for pos in 0..self.records.len() {
            let record = &self.records[pos];
            self.key_index.put(record.key().to_string(), pos);
            for (field, index) in R::Field::ALL.iter().zip(&mut self.value_indexes) {
                index.put(record.value(*field), pos);
            }
        }

        tracing::debug!(
            "Rebuilt {} store: {} records, {} key buckets",
            R::KIND,
            self.records.len(),
            self.key_index.bucket_count()
        );
    }

    /// Drop every record and start over with empty, initially sized indexes
    pub fn reset(&mut self) {
        self.records.clear();
        self.view.clear();
        self.key_index = UniqueIndex::with_buckets(self.initial_buckets);
        self.value_indexes = Self::fresh_value_indexes(self.initial_buckets);
    }

    /// Reorder the view; the records and indexes are untouched
    pub fn sort_view(&mut self, by: SortBy<R::Field>) {
        quick_sort_indices_by(&mut self.view, &self.records, |a, b| by.precedes(a, b));
    }

    fn index_record(&mut self, record: &R, pos: Position) {
        self.key_index.put(record.key().to_string(), pos);
        for (field, index) in R::Field::ALL.iter().zip(&mut self.value_indexes) {
            index.put(record.value(*field), pos);
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn find_by_key(&self, key: &str) -> Option<Position> {
        self.key_index.get(key)
    }

    /// Positions of every record whose `field` equals `value` (empty if none)
    pub fn find_by_value(&self, field: R::Field, value: &FieldValue) -> &[Position] {
        self.value_indexes[field.ordinal()]
            .get(value)
            .unwrap_or(&[])
    }

    pub fn search(&self, query: &Query<R::Field>) -> SearchOutcome {
        if self.records.is_empty() {
            return SearchOutcome::EmptyStore;
        }

        let found = match query {
            Query::Key(key) => self.find_by_key(key).into_iter().collect::<Vec<_>>(),
            Query::Value(field, value) => self.find_by_value(*field, value).to_vec(),
        };

        if found.is_empty() {
            SearchOutcome::NotFound
        } else {
            SearchOutcome::Found(found)
        }
    }

    pub fn get(&self, pos: Position) -> Option<&R> {
        self.records.get(pos)
    }

    pub fn get_by_key(&self, key: &str) -> Option<&R> {
        self.find_by_key(key).and_then(|pos| self.records.get(pos))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Records in storage order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    pub fn view_order(&self) -> &[Position] {
        &self.view
    }

    /// Records in view order
    pub fn view(&self) -> impl Iterator<Item = &R> + '_ {
        self.view.iter().map(move |&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn key_index(&self) -> &UniqueIndex<String> {
        &self.key_index
    }

    pub fn value_index(&self, field: R::Field) -> &MultiIndex<FieldValue> {
        &self.value_indexes[field.ordinal()]
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            records: self.records.len(),
            key_buckets: self.key_index.bucket_count(),
            value_buckets: self
                .value_indexes
                .iter()
                .map(MultiIndex::bucket_count)
                .collect(),
        }
    }
}

impl<R: Record> Default for IndexedStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
