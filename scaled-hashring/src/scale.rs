//! Projection of a key hash onto the slot range of the ring.
//!
//! Classical consistent hashing binary-searches sorted node positions to
//! find the owner clockwise of a key. Here the positional node list itself
//! is the address space: the hash is scaled linearly from `[0, h_max]` onto
//! `[0, len - 1]` and rounded half up, which makes a lookup O(1).
//!
//! The price is weaker disruption bounds. Changing the node count rescales
//! every key, so a single add or remove moves more keys than a classical
//! ring would.

/// Linearly map `x` from `[a0, a1]` onto `[b0, b1]`.
#[inline]
pub fn scale(x: f64, a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    (x - a0) / (a1 - a0) * (b1 - b0) + b0
}

/// Slot index for `hash` in a ring of `len` slots, or `None` if the ring is empty.
#[inline]
pub fn index_for(hash: u64, h_max: u64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let last = len - 1;
    let scaled = scale(hash as f64, 0.0, h_max as f64, 0.0, last as f64);
    let idx = (scaled + 0.5).floor() as usize;

    // f64 cannot represent every u64; never step past the last slot.
    Some(idx.min(last))
}
