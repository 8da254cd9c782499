//! Lockstep iteration over several sequences.
//!
//! # Examples
//!
//! ```
//! use tuple_zip::prelude::*;
//! use tuple_zip::Tuple;
//!
//! let a = vec![1, 2, 3];
//! let b = vec![10, 20];
//! let c = vec![100, 200, 300];
//! let zipped: Vec<Tuple<&i32>> = vec![&a, &b, &c].zip().into_iter().collect();
//!
//! assert_eq!(zipped.len(), 2);
//! assert_eq!(zipped[0], Tuple::from([&1, &10, &100]));
//! assert_eq!(zipped[1], Tuple::from([&2, &20, &200]));
//! ```
//!
//! # Shortest wins
//!
//! A step only happens when every source has another item. The first source
//! to run out ends the iteration, and whatever is left in the others is
//! never yielded. With no sources at all there is nothing to step over, so
//! the iteration is over before it starts.
//!
//! # Traversals
//!
//! A zip keeps its sources, not their iterators. [`vec::Zip::iter()`] and
//! [`array::Zip::iter()`] clone the sources and start over, so every
//! traversal is independent of the others. Sources that can't be cloned,
//! such as one-shot iterators, can only be walked once, by consuming the zip
//! with `into_iter()`.
//!
//! [`vec::Zip::iter()`]: crate::vec::Zip::iter
//! [`array::Zip::iter()`]: crate::array::Zip::iter

pub(crate) mod array;
pub(crate) mod vec;

/// ‘Zips up’ multiple sequences into a single sequence of tuples.
pub trait Zip {
    /// What does every step produce?
    type Item;

    /// What do we return?
    type Zip: IntoIterator<Item = Self::Item>;

    /// Combine multiple sequences into a single sequence of tuples.
    fn zip(self) -> Self::Zip;
}
