//! Immutable tuples with value semantics, and a combinator that zips
//! sequences into them.
//!
//! # Operations
//!
//! - [`Tuple`]: a fixed-length ordered sequence that never changes after
//!   construction. Tuples compare and hash by value, and index their elements
//!   so membership and position queries don't scan.
//! - [`zip::Zip`]: ‘Zips up’ multiple sequences of the same item type into a
//!   single sequence of tuples, stopping at the shortest.
//! - [`Primes`]: the prime numbers, which the tuple hash mixes its elements
//!   with.
//!
//! # Examples
//!
//! Walk three sequences in lockstep:
//! ```rust
//! use tuple_zip::prelude::*;
//! use tuple_zip::Tuple;
//!
//! let mut s = vec![vec![1, 2], vec![10, 20], vec![100, 200]]
//!     .zip()
//!     .into_iter();
//!
//! assert_eq!(s.next(), Some(Tuple::from([1, 10, 100])));
//! assert_eq!(s.next(), Some(Tuple::from([2, 20, 200])));
//! assert!(!s.has_next());
//! ```
//!
//! Tuples are values, so they work as map keys:
//! ```rust
//! use std::collections::HashMap;
//! use tuple_zip::Tuple;
//!
//! let mut seen = HashMap::new();
//! seen.insert(Tuple::from(["x", "y"]), 1);
//! assert_eq!(seen.get(&Tuple::from(["x", "y"])), Some(&1));
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`Error`]. Tuples can be handed to code written
//! against a mutable list through [`tuple::ListMut`]; every such call fails
//! with [`Error::Unsupported`] and leaves the tuple as it was.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod error;
mod utils;

/// The tuple-zip prelude.
pub mod prelude {
    pub use super::tuple::CursorMut as _;
    pub use super::tuple::ListMut as _;
    pub use super::zip::Zip as _;
}

pub mod primes;
pub mod tuple;
pub mod zip;

pub use error::{Error, Operation};
pub use primes::Primes;
pub use tuple::Tuple;

/// Helper types for zipping fixed-length arrays of sequences.
pub mod array {
    pub use crate::zip::array::{IntoIter, Zip};
}

/// Helper types for zipping vectors of sequences.
pub mod vec {
    pub use crate::zip::vec::{IntoIter, Zip};
}
