//! Store Module
//!
//! The indexed in-memory store shared by every record kind.
//!
//! ## Layout
//! ```text
//!              ┌───────────────────────────────┐
//!  key_index ─►│ records: Vec<R>  (by key)     │◄─ value_indexes[field]
//!  "alice"→0   │  0: alice  1: bob  2: carol   │   100.0 → [0, 1]
//!              └───────────────────────────────┘
//!                      ▲
//!              view: [2, 0, 1]  (display order only)
//! ```
//!
//! One generic `IndexedStore<R>` serves deposits, loans and credits; a
//! record kind plugs in through the `Record` and `Field` traits.

mod indexed;
mod record;

pub use indexed::{IndexedStore, SearchOutcome, StoreStats, DEFAULT_STORE_BUCKETS};
pub use record::{check_key, check_values, Field, FieldValue, Query, Record, SortBy, ValueKind};
