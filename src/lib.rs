//! # finvault
//!
//! An interactive record manager for deposits, loans and credit lines with:
//! - A generic indexed in-memory store shared by every record kind
//! - Chained hash indexes with automatic rehashing
//! - A hybrid quicksort that can sort records or a view permutation
//! - Plain-text record files loaded at session start and saved at exit
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Console                                 │
//! │            (menus, prompts, one session per kind)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Session<R>                               │
//! │          (recent actions, load on open, save on close)       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────────┐
//!   │ Persistence │          │ IndexedStore<R> │
//!   │ (text file) │          │ (rebuild rules) │
//!   └─────────────┘          └───────┬─────────┘
//!                                    │
//!                          ┌─────────┴─────────┐
//!                          ▼                   ▼
//!                   ┌─────────────┐     ┌─────────────┐
//!                   │    Index    │     │    Sort     │
//!                   │ (hash maps) │     │ (quicksort) │
//!                   └─────────────┘     └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod index;
pub mod sort;
pub mod store;
pub mod domain;
pub mod persistence;
pub mod session;
pub mod console;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{VaultError, Result};
pub use config::Config;
pub use index::{MultiIndex, Position, UniqueIndex};
pub use store::{IndexedStore, Record};
pub use session::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of finvault
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
