//! # Deterministic key-stream generator
//!
//! A small xoroshiro128+ generator used to produce reproducible pseudo-random
//! identifier streams for stress tests, benchmarks and demos. It is seeded,
//! allocation-free and fast; it is not cryptographic and is not used anywhere
//! on the set's hot path (bucket routing has its own stateless mixer in
//! [`crate::hash`]).

use crate::hash::mix_u64_nonzero;

/// A xoroshiro128+ generator with two 64-bit state words.
///
/// # Example
/// ```rust
/// use recset::rng::KeyRng;
/// let mut rng = KeyRng::new(42);
/// let id = rng.next_i64();
/// ```
#[derive(Clone, Copy, Debug)]
pub struct KeyRng {
    state_a: u64,
    state_b: u64,
}

impl KeyRng {
    /// Creates a generator seeded with `seed`.
    ///
    /// Both state words are derived from the seed through a branchless
    /// zero-adjusted mix, so the all-zero absorbing state is unreachable for
    /// every seed including zero.
    #[inline(always)]
    pub fn new(seed: u64) -> Self {
        Self {
            state_a: mix_u64_nonzero(seed),
            state_b: mix_u64_nonzero(!seed),
        }
    }

    /// Next raw 64 bits of the stream.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state_a;
        let mut s1 = self.state_b;
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state_a = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state_b = s1.rotate_left(37);

        result
    }

    /// Next value reinterpreted as a signed record identifier.
    #[inline(always)]
    pub fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// Unbiased value in `[0, bound)` via Lemire's multiply-shift method,
    /// with rejection only in the biased tail. `bound` of 0 or 1 yields 0.
    #[inline(always)]
    pub fn below(&mut self, bound: u64) -> u64 {
        if bound <= 1 {
            return 0;
        }
        let mut multiresult = (self.next_u64() as u128) * (bound as u128);
        let mut leftover = multiresult as u64;
        if leftover < bound {
            let threshold = 0u64.wrapping_sub(bound) % bound;
            while leftover < threshold {
                multiresult = (self.next_u64() as u128) * (bound as u128);
                leftover = multiresult as u64;
            }
        }
        (multiresult >> 64) as u64
    }
}
