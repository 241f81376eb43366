//! Bottom-k sketches for estimating the Jaccard similarity of streamed sets.
use std::collections::BinaryHeap;
use std::hash::{BuildHasher, Hasher};

use hashbrown::HashMap;

use crate::errors::{MinsketchError, Result};

/// Bottom-k sketch of a set, retaining the `k` smallest nonzero 64-bit hash
/// values observed on the stream.
///
/// The sketch owns its hash primitive: a [`BuildHasher`] that produces a fresh
/// [`Hasher`] for every added element, so no state leaks between elements.
/// Two sketches are comparable only when they were configured with the same
/// size and the same hash family; the latter is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use minsketch::BottomK;
/// use xxhash_rust::xxh3::Xxh3Builder;
///
/// let mut a = BottomK::new(Xxh3Builder::new().with_seed(42), 4)?;
/// a.add(b"doormat");
/// a.add(b"windmill");
/// assert_eq!(a.len(), 2);
/// assert_eq!(a.similarity(&a)?, 1.);
/// # Ok::<(), minsketch::errors::MinsketchError>(())
/// ```
#[derive(Clone)]
pub struct BottomK<B> {
    size: usize,
    build_hasher: B,
    minimums: BinaryHeap<u64>,
}

impl<B> BottomK<B>
where
    B: BuildHasher,
{
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `build_hasher` - Hash primitive producing one 64-bit hasher per element,
    ///                    owned exclusively by the sketch.
    /// * `size` - Maximum number of retained hash values (must be more than 0).
    pub fn new(build_hasher: B, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(MinsketchError::input("Sketch size must not be 0."));
        }
        Ok(Self {
            size,
            build_hasher,
            minimums: BinaryHeap::with_capacity(size),
        })
    }

    /// Adds an element to the set, hashing it with a freshly built hasher.
    ///
    /// A hash value of exactly zero is discarded: zero stays reserved as the
    /// vacancy marker for consumers of signatures. While fewer than `size`
    /// values are retained, every nonzero value is kept, so the retained
    /// collection is a multiset of distinct-by-chance values. At capacity, a
    /// new value replaces the current maximum only if it is strictly smaller.
    pub fn add(&mut self, elem: &[u8]) {
        let mut hasher = self.build_hasher.build_hasher();
        hasher.write(elem);
        let hv = hasher.finish();

        if hv == 0 {
            return;
        }
        if self.minimums.len() < self.size {
            self.minimums.push(hv);
            return;
        }
        if let Some(&max) = self.minimums.peek() {
            if hv < max {
                self.minimums.pop();
                self.minimums.push(hv);
            }
        }
    }

    /// Returns a copy of the retained hash values in ascending order.
    ///
    /// Repeated calls with no intervening [`BottomK::add`] return identical
    /// sequences.
    pub fn signature(&self) -> Vec<u64> {
        self.minimums.clone().into_sorted_vec()
    }

    /// Computes an estimate of the Jaccard similarity between the two sets,
    /// i.e., the multiset intersection of the retained values divided by the
    /// larger retained count.
    ///
    /// Returns an error when the sketches were configured with different
    /// sizes. Comparing two sketches that never saw an element yields NaN.
    pub fn similarity(&self, other: &Self) -> Result<f64> {
        if self.size != other.size {
            return Err(MinsketchError::size_mismatch(self.size, other.size));
        }

        let mut counts = HashMap::with_capacity(self.minimums.len());
        for &v in self.minimums.iter() {
            *counts.entry(v).or_insert(0usize) += 1;
        }

        let mut intersect = 0;
        for &v in other.minimums.iter() {
            if let Some(count) = counts.get_mut(&v) {
                if *count > 0 {
                    *count -= 1;
                    intersect += 1;
                }
            }
        }

        let max_len = self.minimums.len().max(other.minimums.len());
        Ok(intersect as f64 / max_len as f64)
    }

    /// Gets the configured maximum number of retained values.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Gets the number of currently retained values.
    pub fn len(&self) -> usize {
        self.minimums.len()
    }

    /// Checks if no values have been retained yet.
    pub fn is_empty(&self) -> bool {
        self.minimums.is_empty()
    }

    /// Gets the memory usage of the retained values in bytes.
    pub fn memory_in_bytes(&self) -> usize {
        self.minimums.len() * std::mem::size_of::<u64>()
    }
}
