//! Session Module
//!
//! One working session over one record kind.
//!
//! ## Responsibilities
//! - Load the kind's record file and build the store on open
//! - Route user operations to the store
//! - Keep a log of recent actions
//! - Save the records back on close

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::index::Position;
use crate::persistence;
use crate::store::{IndexedStore, Query, Record, SearchOutcome, SortBy};

/// Last-in, first-out log of user actions
///
/// Reading the log empties it.
#[derive(Debug, Default, Clone)]
pub struct RecentActions {
    entries: Vec<String>,
}

impl RecentActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: impl Into<String>) {
        self.entries.push(action.into());
    }

    /// Remove and return every action, newest first
    pub fn drain(&mut self) -> Vec<String> {
        self.entries.drain(..).rev().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A session over the records of kind `R`
///
/// ## Lifecycle
/// 1. `open`: read `{data_dir}/{stem}.txt` (no records if missing or
///    malformed) and build every index
/// 2. operations: `add`, `update`, `delete`, `search`, `sort_view`, ...
/// 3. `close`: write the records back to the same file
pub struct Session<R: Record> {
    /// Session configuration
    config: Config,

    /// Live record file
    data_path: PathBuf,

    /// Sample record file used by `load_sample`
    sample_path: PathBuf,

    /// Records and indexes
    store: IndexedStore<R>,

    /// Actions since the log was last read
    recent: RecentActions,
}

impl<R: Record> Session<R> {
    /// Open a session, creating the data directory if needed
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;
        fs::create_dir_all(&config.data_dir)?;

        let data_path = config.data_file(R::STEM);
        let sample_path = config.sample_file(R::STEM);

        let records = persistence::load_all::<R>(&data_path);
        let store = IndexedStore::from_records(records, config.initial_bucket_count);

        tracing::info!("Opened {} session with {} records", R::KIND, store.len());

        Ok(Self {
            config: config.clone(),
            data_path,
            sample_path,
            store,
            recent: RecentActions::new(),
        })
    }

    /// Add a record without rebuilding
    pub fn add(&mut self, record: R) -> Result<Position> {
        let name = record.key().to_string();
        let pos = self.store.append(record)?;
        self.recent.push(format!("Added {}: {}", R::KIND, name));
        Ok(pos)
    }

    /// Records in the current view order
    pub fn view(&self) -> impl Iterator<Item = &R> + '_ {
        self.store.view()
    }

    pub fn sort_view(&mut self, by: SortBy<R::Field>) {
        self.store.sort_view(by);
        self.recent.push(format!("Sorted {}s by {}", R::KIND, by.label()));
    }

    /// Look records up; searching an empty store is not logged
    pub fn search(&mut self, query: &Query<R::Field>) -> SearchOutcome {
        let outcome = self.store.search(query);
        if outcome != SearchOutcome::EmptyStore {
            self.recent.push(format!("Searched {}s", R::KIND));
        }
        outcome
    }

    pub fn update(&mut self, key: &str, replacement: R) -> Result<Position> {
        let pos = self.store.update(key, replacement)?;
        self.recent.push(format!("Updated {}: {}", R::KIND, key));
        Ok(pos)
    }

    pub fn delete(&mut self, key: &str) -> Result<R> {
        let removed = self.store.delete(key)?;
        self.recent.push(format!("Deleted {}: {}", R::KIND, key));
        Ok(removed)
    }

    /// Replace every record with the sample file's contents
    ///
    /// Fails without touching the current records if the sample file cannot
    /// be read. Returns the number of records loaded.
    pub fn load_sample(&mut self) -> Result<usize> {
        let records = persistence::try_load_all::<R>(&self.sample_path)?;
        self.store.replace_all(records);
        self.recent.push(format!("Loaded sample {}s", R::KIND));
        Ok(self.store.len())
    }

    /// Drop every record and overwrite the data file with an empty one
    ///
    /// Returns whether the empty file was written.
    pub fn reset(&mut self) -> bool {
        self.store.reset();
        self.recent.push(format!("Reset {} data", R::KIND));
        persistence::save_all::<R>(&[], &self.data_path)
    }

    /// Recent actions, newest first; empties the log
    pub fn recent_actions(&mut self) -> Vec<String> {
        self.recent.drain()
    }

    /// Write the records to the data file in storage order
    pub fn save(&self) -> bool {
        persistence::save_all(self.store.records(), &self.data_path)
    }

    /// End the session, saving unless `save_on_close` is off
    pub fn close(self) -> bool {
        if self.config.save_on_close {
            self.save()
        } else {
            true
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &IndexedStore<R> {
        &self.store
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn sample_path(&self) -> &Path {
        &self.sample_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
