/// Finalizing multiplier constant.
/// This is the xorshift64* multiplier, a large odd constant chosen for good
/// high-bit diffusion after the shift rounds.
pub const MIX_K1: u64 = 0x2545F4914F6CDD1D;

/// Computes a single-round xorshift-multiply mix of a `u64` value.
///
/// This is a stateless finalizer, not a streaming hash: three shift-xor
/// rounds followed by one multiplication, giving full 64-bit avalanche at a
/// handful of cycles. It is applied once per set operation to route a key to
/// its bucket, so it must never allocate and must stay branch-free.
///
/// The mix is unseeded and therefore not resistant to adversarial key
/// selection; if inserted keys can be attacker-influenced, bucket clustering
/// is possible and a seeded mixer should be considered instead.
///
/// # Arguments
/// * `value` - The `u64` integer to mix.
///
/// # Returns
/// A 64-bit mixed value.
#[inline(always)]
pub fn mix_u64(value: u64) -> u64 {
    let mut x = value;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    x.wrapping_mul(MIX_K1)
}

/// Branchless zero-adjusted variant of [`mix_u64`].
///
/// `mix_u64(0)` is `0`, which is a fixed point: fine for bucket routing, but
/// unusable for seeding a generator whose all-zero state is absorbing. This
/// version nudges a zero input to one with bit manipulation instead of a
/// conditional branch, so the output is never zero for any input.
///
/// # Arguments
/// * `value` - The `u64` integer to mix.
///
/// # Returns
/// A non-zero 64-bit mixed value.
#[inline(always)]
pub fn mix_u64_nonzero(value: u64) -> u64 {
    let mask = ((value == 0) as u64).wrapping_neg(); // 0xFFFF... if zero, 0x0000... if not
    let adjusted = value | (mask & 1);
    mix_u64(adjusted)
}
