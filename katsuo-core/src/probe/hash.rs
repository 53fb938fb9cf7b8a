//! Positional signature hash used to pick a key's home slot.
//!
//! The hash is a weighted sum of the first four bytes of the key. It is a toy
//! hash: anagrams of short prefixes and keys sharing a four-byte prefix collide
//! freely, which keeps the probe sequences long enough to be interesting.

/// Weights applied to the first four bytes of a key, in order.
pub const SIGNATURE_WEIGHTS: [u64; 4] = [39, 392, 393, 394];

/// Computes the positional signature of `key`.
///
/// Keys shorter than four bytes contribute only the bytes they have; missing
/// positions are not padded with zeros, they are skipped. The empty key has a
/// signature of `0`.
///
/// # Examples
/// ```
/// use katsuo_core::probe::signature;
///
/// assert_eq!(signature("a"), 39 * 97);
/// assert_eq!(signature("ab"), 39 * 97 + 392 * 98);
/// assert_eq!(signature("abcdef"), signature("abcd"));
/// ```
#[must_use]
pub fn signature(key: &str) -> u64 {
    key.bytes()
        .zip(SIGNATURE_WEIGHTS)
        .map(|(byte, weight)| weight * u64::from(byte))
        .sum()
}

/// Reduces the signature of `key` to a slot index in `0..capacity`.
///
/// `capacity` must be non-zero; [`crate::ProbeTable`] guarantees this for
/// every call it makes.
#[must_use]
pub(crate) fn home_slot(key: &str, capacity: usize) -> usize {
    let reduced = signature(key) % capacity as u64;
    // The remainder is below `capacity`, which already fits in `usize`.
    usize::try_from(reduced).unwrap_or_default()
}
