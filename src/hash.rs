//! Polynomial rolling hash used to pick a key's home slot.

/// Multiplier used by the default configuration.
pub const DEFAULT_MAGIC: u64 = 37;

/// Maps `key` to a slot index in `[0, capacity)`.
///
/// `acc = (acc * magic + byte) mod capacity` over every byte, starting at 0.
/// The reduction happens at each step, so the result depends on `capacity`
/// and must be recomputed when the table grows.
#[inline]
pub fn polynomial_hash(key: &[u8], magic: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "hash into an empty slot range");
    let cap = capacity as u128;
    let magic = magic as u128;
    let mut acc: u128 = 0;
    for &b in key {
        acc = (acc * magic + b as u128) % cap;
    }
    acc as usize
}
