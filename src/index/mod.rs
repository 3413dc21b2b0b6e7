//! Index Module
//!
//! Hash indexes from record keys and field values to store positions.
//!
//! ## Responsibilities
//! - Unique-key lookups (record name → one position)
//! - Value lookups (field value → every position holding it)
//! - Grow the bucket array as entries are added
//!
//! ## Data Structure Choice
//! Separate chaining over a `Vec` of buckets:
//! ```text
//! buckets[0] ─► (k1, v) ─► (k7, v)
//! buckets[1] ─► (empty)
//! buckets[2] ─► (k3, v)
//!    ...
//! ```
//! After each insertion, if the counted entries exceed 0.75 × bucket count,
//! the table is rebuilt with `2n + 1` buckets. The bucket array never shrinks.
//!
//! Keys are hashed with `FxBuildHasher`, which is deterministic across runs.

mod key;
mod multi;
mod table;
mod unique;

pub use key::FloatKey;
pub use multi::MultiIndex;
pub use unique::UniqueIndex;

/// Offset of a record in the primary store
///
/// Valid only until the next insertion before it or any deletion; a full
/// rebuild makes every stored position valid again.
pub type Position = usize;

/// Bucket count used by `new()` on either index
pub const DEFAULT_BUCKET_COUNT: usize = 101;
