//! B-bit reductions of min-wise signatures, trading estimator accuracy for
//! storage, after Li and Koenig's b-bit minwise hashing
//! (<https://doi.org/10.1145/1772690.1772759>).
use crate::errors::{MinsketchError, Result};

/// Packs the low `b` bits of each signature value into 32-bit words, filling
/// every word from its most significant end.
///
/// `b` must be in `1..=32`. A value whose bits would cross the current word
/// boundary is consumed by the word flush and is not packed, so every flushed
/// word holds exactly `32 / b` values. A partially filled final word is
/// appended with its unused high bits zero; [`similarity`] decodes those bits
/// as zero-valued fields and counts them, which inflates estimates between
/// sketches with many untouched slots. Both behaviors are part of the layout
/// contract and are locked by tests.
pub fn pack(signature: &[u32], b: u32) -> Vec<u32> {
    debug_assert!((1..=32).contains(&b));

    let mask = u32::MAX >> (32 - b);
    let mut packed = vec![];
    let mut word = 0u32;
    // Bits still free in the current word.
    let mut bits = 32;

    for &v in signature {
        if bits >= b {
            word = word.checked_shl(b).unwrap_or(0) | (v & mask);
            bits -= b;
        } else {
            packed.push(word);
            word = 0;
            bits = 32;
        }
    }
    if bits != 32 {
        packed.push(word);
    }
    packed
}

/// Computes an estimate of the Jaccard similarity between two packed
/// signatures as the fraction of equal `b`-bit fields, decoding each word
/// from its least significant end.
///
/// Both signatures must come from packing equal-size sketches with the same
/// `b`; only the lengths are checked, and an error is returned when they
/// differ. Accuracy degrades with small `b`: unrelated values collide within
/// `b` bits with probability about `2^-b`, and the zero padding of the final
/// word counts toward the estimate. Two empty signatures yield NaN.
pub fn similarity(lhs: &[u32], rhs: &[u32], b: u32) -> Result<f64> {
    if lhs.len() != rhs.len() {
        return Err(MinsketchError::size_mismatch(lhs.len(), rhs.len()));
    }
    debug_assert!((1..=32).contains(&b));

    let mask = u32::MAX >> (32 - b);
    let mut intersect = 0usize;
    let mut count = 0usize;

    for (&w1, &w2) in lhs.iter().zip(rhs) {
        let mut w1 = w1;
        let mut w2 = w2;
        let mut bits = 32;
        while bits >= b {
            if w1 & mask == w2 & mask {
                intersect += 1;
            }
            count += 1;
            bits -= b;
            w1 = w1.checked_shr(b).unwrap_or(0);
            w2 = w2.checked_shr(b).unwrap_or(0);
        }
    }
    Ok(intersect as f64 / count as f64)
}
