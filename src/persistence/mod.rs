//! Persistence Module
//!
//! Loads and saves whole record files.
//!
//! ## Responsibilities
//! - Read a record file at session start
//! - Overwrite it at session end
//! - Never fail the caller: `load_all` falls back to no records and
//!   `save_all` reports failure as `false`
//!
//! `try_load_all` / `try_save_all` expose the underlying error for callers
//! that want it.

mod codec;

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::{Result, VaultError};
use crate::store::Record;

pub use codec::{decode_record, encode_record, read_records, write_records};

/// Read every record in `path`
pub fn try_load_all<R: Record>(path: &Path) -> Result<Vec<R>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

/// Read every record in `path`, or none if the file is missing or malformed
pub fn load_all<R: Record>(path: &Path) -> Vec<R> {
    match try_load_all(path) {
        Ok(records) => {
            tracing::info!("Loaded {} {} records from {}", records.len(), R::KIND, path.display());
            records
        }
        Err(VaultError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No {} file at {}, starting empty", R::KIND, path.display());
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("Ignoring {} file {}: {}", R::KIND, path.display(), e);
            Vec::new()
        }
    }
}

/// Overwrite `path` with `records`
pub fn try_save_all<R: Record>(records: &[R], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Overwrite `path` with `records`; `false` if anything failed
pub fn save_all<R: Record>(records: &[R], path: &Path) -> bool {
    match try_save_all(records, path) {
        Ok(()) => {
            tracing::info!("Saved {} {} records to {}", records.len(), R::KIND, path.display());
            true
        }
        Err(e) => {
            tracing::error!("Failed to save {} records to {}: {}", R::KIND, path.display(), e);
            false
        }
    }
}
