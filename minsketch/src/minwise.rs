//! Min-wise sketches with a seeded universal hash family, after Broder's
//! min-wise independent permutations (1997).
use rand::{Rng, SeedableRng};
use rand_xoshiro::SplitMix64;

use crate::bbit;
use crate::errors::{MinsketchError, Result};

/// Exponent of the Mersenne prime used as the modulus of the hash family.
const MERSENNE_EXPONENT: u32 = 61;

/// Modulus of the hash family, the Mersenne prime 2^61 - 1.
const MERSENNE_PRIME: u64 = (1 << MERSENNE_EXPONENT) - 1;

/// Applies the family member `h(x) = (a*x + b) mod (2^61 - 1)` and truncates
/// the result to the low 32 bits. The product wraps in 64 bits before the
/// reduction; a folded result equal to the prime itself is kept as-is.
#[inline(always)]
fn permute(a: u64, b: u64, hv: u64) -> u32 {
    let mut phv = a.wrapping_mul(hv).wrapping_add(b);
    // 2^61 = 1 (mod 2^61 - 1), so folding the bits above bit 61 into the low
    // bits reduces phv without dividing.
    while phv >> MERSENNE_EXPONENT != 0 {
        phv = (phv & MERSENNE_PRIME) + (phv >> MERSENNE_EXPONENT);
    }
    phv as u32
}

/// Min-wise sketch of a set, tracking the minimum of `size` independent
/// universal hash functions over the stream.
///
/// The hash primitive is stateless and may be shared by any number of
/// sketches and threads. Two sketches built with the same primitive, the same
/// size, and the same seed draw identical coefficients and are therefore
/// comparable and mergeable; none of this is detected at comparison time
/// beyond the size check, so it stays the caller's responsibility.
///
/// # Examples
///
/// ```
/// use minsketch::MinWise;
/// use xxhash_rust::xxh32::xxh32;
///
/// fn hash32(elem: &[u8]) -> u32 {
///     xxh32(elem, 42)
/// }
///
/// let mut lines = MinWise::new(hash32, 64, 7)?;
/// lines.push(b"crept through the doorway");
/// lines.push(b"over the windowsill");
///
/// let mut other = MinWise::new(hash32, 64, 7)?;
/// other.push(b"crept through the doorway");
/// other.push(b"over the windowsill");
///
/// assert_eq!(lines.similarity(&other)?, 1.);
/// # Ok::<(), minsketch::errors::MinsketchError>(())
/// ```
#[derive(Clone)]
pub struct MinWise<F> {
    hash: F,
    minimums: Vec<u32>,
    a: Vec<u64>,
    b: Vec<u64>,
}

impl<F> MinWise<F>
where
    F: Fn(&[u8]) -> u32,
{
    /// Creates an instance whose coefficients are drawn from a seeded
    /// generator: `a[i]` uniformly from `[1, 2^61 - 1)` and `b[i]` uniformly
    /// from `[0, 2^61 - 1)`. Identical seeds reproduce identical families.
    ///
    /// # Arguments
    ///
    /// * `hash` - Stateless 32-bit hash primitive shared by the sketch.
    /// * `size` - Number of hash functions in the family (must be more than 0).
    /// * `seed` - Seed value for drawing the coefficients.
    pub fn new(hash: F, size: usize, seed: u64) -> Result<Self> {
        if size == 0 {
            return Err(MinsketchError::input("Sketch size must not be 0."));
        }
        let mut seeder = SplitMix64::seed_from_u64(seed);
        let mut a = Vec::with_capacity(size);
        let mut b = Vec::with_capacity(size);
        for _ in 0..size {
            a.push(seeder.gen_range(1..MERSENNE_PRIME));
            b.push(seeder.gen_range(0..MERSENNE_PRIME));
        }
        Ok(Self {
            hash,
            minimums: vec![u32::MAX; size],
            a,
            b,
        })
    }

    /// Adds an element to the set, updating every per-function minimum.
    /// Minima never increase.
    pub fn push(&mut self, elem: &[u8]) {
        let hv = u64::from((self.hash)(elem));
        for ((min, &a), &b) in self.minimums.iter_mut().zip(&self.a).zip(&self.b) {
            let phv = permute(a, b, hv);
            if phv < *min {
                *min = phv;
            }
        }
    }

    /// Merges the other sketch by taking element-wise minima, producing
    /// exactly the sketch of the union of the two underlying streams.
    ///
    /// Returns an error when the sizes differ. Merging sketches built with
    /// different seeds or hash primitives is not detected and produces
    /// meaningless estimates.
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.minimums.len() != other.minimums.len() {
            return Err(MinsketchError::size_mismatch(
                self.minimums.len(),
                other.minimums.len(),
            ));
        }
        for (min, &v) in self.minimums.iter_mut().zip(&other.minimums) {
            if v < *min {
                *min = v;
            }
        }
        Ok(())
    }

    /// Estimates the number of distinct elements pushed so far with the
    /// log-sum estimator of Cohen's size-estimation framework
    /// (<https://doi.org/10.1006/jcss.1997.1534>), truncated toward zero.
    ///
    /// A slot that never saw an element contributes an infinite term, so an
    /// empty sketch estimates 0.
    pub fn cardinality(&self) -> usize {
        let max = f64::from(u32::MAX);
        let mut sum = 0.;
        for &v in &self.minimums {
            sum += -(f64::from(u32::MAX - v) / max).ln();
        }
        ((self.minimums.len() - 1) as f64 / sum) as usize
    }

    /// Computes an estimate of the Jaccard similarity between the two sets as
    /// the fraction of exactly equal minima.
    ///
    /// Returns an error when the sizes differ.
    pub fn similarity(&self, other: &Self) -> Result<f64> {
        if self.minimums.len() != other.minimums.len() {
            return Err(MinsketchError::size_mismatch(
                self.minimums.len(),
                other.minimums.len(),
            ));
        }
        let intersect = self
            .minimums
            .iter()
            .zip(&other.minimums)
            .filter(|(x, y)| x == y)
            .count();
        Ok(intersect as f64 / self.minimums.len() as f64)
    }

    /// Returns the per-function minima as a read-only view. Unseen slots hold
    /// `u32::MAX`.
    pub fn signature(&self) -> &[u32] {
        &self.minimums
    }

    /// Returns the signature compressed to the low `b` bits per minimum.
    /// See [`bbit::pack`] for the exact layout.
    pub fn signature_bbit(&self, b: u32) -> Vec<u32> {
        bbit::pack(&self.minimums, b)
    }

    /// Gets the number of hash functions in the family.
    pub fn size(&self) -> usize {
        self.minimums.len()
    }

    /// Gets the memory usage of the minima and coefficients in bytes.
    pub fn memory_in_bytes(&self) -> usize {
        self.minimums.len() * std::mem::size_of::<u32>()
            + (self.a.len() + self.b.len()) * std::mem::size_of::<u64>()
    }
}
