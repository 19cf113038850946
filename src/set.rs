use smallvec::SmallVec;

use crate::hash::mix_u64;

/// Number of buckets in the table: 2^23, fixed at compile time.
///
/// This is deliberately not a runtime parameter. The table never grows and is
/// never rehashed; callers needing a different capacity/load trade-off need a
/// different build of this crate, not a configuration option. At the design
/// workload (a few multiples of the bucket count in total elements) the
/// average chain stays in the 1-4 range.
pub const BUCKET_COUNT: usize = 1 << 23;

const BUCKET_MASK: usize = BUCKET_COUNT - 1;

/// Elements stored inline in a bucket header before spilling to the heap.
/// Two inline slots keep the header at the same 24-byte footprint as a plain
/// `Vec<i64>`, so the common near-empty bucket costs no heap traffic at all.
const INLINE_BUCKET_CAP: usize = 2;

type Bucket = SmallVec<[i64; INLINE_BUCKET_CAP]>;

/// Maps a record identifier to its bucket index.
///
/// Deterministic and permanent: an identifier's bucket never changes for the
/// lifetime of the process, since the mix is stateless and the table size is
/// a constant. Public so callers (and tests) can reason about collisions.
#[inline(always)]
pub fn bucket_index(id: i64) -> usize {
    (mix_u64(id as u64) as usize) & BUCKET_MASK
}

// =============================================================================
// MAIN SET IMPLEMENTATION
// =============================================================================

/// A membership-only set of `i64` record identifiers.
///
/// Layout is a single contiguous allocation of [`BUCKET_COUNT`] bucket
/// headers; each bucket is a small insertion-ordered list of distinct
/// identifiers that mix to it, scanned linearly on every insert and lookup
/// (separate chaining). There is no deletion, no iteration and no resizing.
///
/// Not thread-safe: mutation goes through `&mut self`, so share-nothing or
/// wrap it yourself.
#[derive(Debug, Clone)]
pub struct IdSet {
    buckets: Box<[Bucket]>,
    count: usize,
}

impl IdSet {
    /// Creates an empty set with all bucket headers allocated up front.
    ///
    /// Reserves `BUCKET_COUNT * size_of::<Bucket>()` bytes (roughly 200 MiB)
    /// immediately; per-bucket heap storage only appears once a bucket spills
    /// past its inline capacity. If even the table allocation cannot be
    /// satisfied the global allocator aborts the process; there is no
    /// recoverable out-of-memory path here.
    pub fn new() -> Self {
        let mut buckets = Vec::new();
        buckets.resize_with(BUCKET_COUNT, Bucket::new);
        IdSet {
            buckets: buckets.into_boxed_slice(),
            count: 0,
        }
    }

    /// Number of identifiers currently in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Inserts `id` if absent. Returns `true` if it was newly inserted,
    /// `false` if it was already a member (in which case nothing is mutated).
    ///
    /// Idempotent: repeated inserts of the same identifier leave membership
    /// unchanged after the first. Expected O(1) at the design load factor;
    /// a pathological key distribution degrades to a linear scan of one
    /// bucket, with no mitigation by design.
    #[inline(always)]
    pub fn put(&mut self, id: i64) -> bool {
        // Safety: bucket_index masks with BUCKET_MASK and the table holds
        // exactly BUCKET_COUNT buckets.
        let bucket = unsafe { self.buckets.get_unchecked_mut(bucket_index(id)) };
        for k in 0..bucket.len() {
            if bucket[k] == id {
                return false;
            }
        }
        bucket.push(id);
        self.count += 1;
        true
    }

    /// Returns `true` iff `id` was inserted since construction or the last
    /// [`clear`](IdSet::clear). Same routing and scan as `put`, no mutation.
    #[inline(always)]
    pub fn contains(&self, id: i64) -> bool {
        let bucket = unsafe { self.buckets.get_unchecked(bucket_index(id)) };
        for k in 0..bucket.len() {
            if bucket[k] == id {
                return true;
            }
        }
        false
    }

    /// Truncates every bucket to zero elements while keeping its allocated
    /// capacity, so clear/refill cycles on the same set amortize allocation
    /// cost. Runs in O(BUCKET_COUNT + elements cleared).
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.count = 0;
    }

    /// Occupancy census over the whole table:
    /// `(empty, inline, spilled)` bucket counts.
    pub fn bucket_stats(&self) -> (usize, usize, usize) {
        let mut empty = 0;
        let mut inline = 0;
        let mut spilled = 0;
        for bucket in self.buckets.iter() {
            if bucket.is_empty() {
                empty += 1;
            } else if bucket.spilled() {
                spilled += 1;
            } else {
                inline += 1;
            }
        }
        (empty, inline, spilled)
    }

    /// One-line diagnostic summary of table occupancy.
    pub fn stats(&self) -> String {
        let mut occupied = 0usize;
        let mut spilled = 0usize;
        let mut longest = 0usize;
        for bucket in self.buckets.iter() {
            if !bucket.is_empty() {
                occupied += 1;
                longest = longest.max(bucket.len());
            }
            if bucket.spilled() {
                spilled += 1;
            }
        }
        format!(
            "{} ids in {}/{} buckets ({} spilled, longest chain {})",
            self.count, occupied, BUCKET_COUNT, spilled, longest
        )
    }
}

impl Default for IdSet {
    fn default() -> Self {
        Self::new()
    }
}
