//! # RecSet
//!
//! Ultra-fast in-memory membership set for 64-bit record identifiers.
//!
//! A fixed table of 2^23 buckets with separate chaining, built for tracking
//! tens of millions of record ids ("already seen", "already verified",
//! "pending") during graph traversal and synchronization passes of a
//! replicated record store.
//!
pub mod hash;
pub mod rng;
pub mod set;

// Re-export main types
pub use set::{bucket_index, IdSet, BUCKET_COUNT};

// Re-export for advanced usage
pub use hash::{mix_u64, mix_u64_nonzero};
pub use rng::KeyRng;
