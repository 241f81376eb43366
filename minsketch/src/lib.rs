//! Bottom-k and min-wise sketches for estimating the Jaccard similarity and
//! the cardinality of sets from compact, fixed-size summaries.
//!
//! Two independent sketch families are provided:
//!
//! - [`BottomK`] retains the k smallest 64-bit hash values of a stream and
//!   estimates similarity from the overlap of two retained sets.
//! - [`MinWise`] tracks the minima of k seeded universal hash functions,
//!   supports exact union via [`MinWise::merge`], cardinality estimation, and
//!   compressed b-bit signatures through the [`bbit`] module.
//!
//! Hash primitives are pluggable: [`BottomK`] takes any
//! [`std::hash::BuildHasher`], and [`MinWise`] takes any `Fn(&[u8]) -> u32`.
//! All estimates are statistical; their error shrinks as the sketch size
//! grows.
//!
//! # Examples
//!
//! ```
//! use minsketch::MinWise;
//! use xxhash_rust::xxh32::xxh32;
//!
//! fn hash32(elem: &[u8]) -> u32 {
//!     xxh32(elem, 42)
//! }
//!
//! let mut doc = MinWise::new(hash32, 128, 7)?;
//! for token in ["to", "be", "or", "not", "to", "be"] {
//!     doc.push(token.as_bytes());
//! }
//!
//! let mut other = MinWise::new(hash32, 128, 7)?;
//! for token in ["not", "to", "be", "or", "to", "be"] {
//!     other.push(token.as_bytes());
//! }
//!
//! // Identical token sets produce identical sketches.
//! assert_eq!(doc.similarity(&other)?, 1.);
//! assert!(doc.cardinality() <= 8);
//! # Ok::<(), minsketch::errors::MinsketchError>(())
//! ```
#![deny(missing_docs)]

pub mod bbit;
pub mod bottomk;
pub mod errors;
pub mod minwise;

pub use bottomk::BottomK;
pub use minwise::MinWise;
