//! Configuration for finvault
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, VaultError};
use crate::store::DEFAULT_STORE_BUCKETS;

/// Main configuration for a finvault session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all record files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── deposits.txt          (live deposit records)
    ///     ├── deposits_sample.txt   (sample data, read-only)
    ///     ├── loans.txt / loans_sample.txt
    ///     └── credits.txt / credits_sample.txt
    pub data_dir: PathBuf,

    /// Write the records back to `{stem}.txt` when a session closes
    pub save_on_close: bool,

    // -------------------------------------------------------------------------
    // Index Configuration
    // -------------------------------------------------------------------------
    /// Bucket count every index starts with (and returns to on reset)
    pub initial_bucket_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            save_on_close: true,
            initial_bucket_count: DEFAULT_STORE_BUCKETS,
        }
    }
}

impl Config {
    const DATA_EXT: &'static str = "txt";
    const SAMPLE_SUFFIX: &'static str = "_sample";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the values a session cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.initial_bucket_count == 0 {
            return Err(VaultError::Config(
                "initial_bucket_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the live record file for a record kind (e.g. `deposits.txt`)
    pub fn data_file(&self, stem: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", stem, Self::DATA_EXT))
    }

    /// Path of the sample record file for a record kind (e.g. `deposits_sample.txt`)
    pub fn sample_file(&self, stem: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}{}.{}", stem, Self::SAMPLE_SUFFIX, Self::DATA_EXT))
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all record files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set whether sessions save their records when closed
    pub fn save_on_close(mut self, save: bool) -> Self {
        self.config.save_on_close = save;
        self
    }

    /// Set the initial bucket count of every index
    pub fn initial_bucket_count(mut self, count: usize) -> Self {
        self.config.initial_bucket_count = count;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
