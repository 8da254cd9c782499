//! Immutable, fixed-length ordered sequences with value semantics.
//!
//! A [`Tuple`] is built once, from a vector, an array, a slice or any
//! iterator, and never changes afterwards. On construction it indexes every
//! distinct value to the positions it occupies, so membership and position
//! queries don't scan the elements.
//!
//! # Examples
//!
//! ```
//! use tuple_zip::Tuple;
//!
//! let t = Tuple::from(["a", "b", "a", "c"]);
//! assert_eq!(t.len(), 4);
//! assert!(t.contains("c"));
//! assert_eq!(t.index_of("a"), Some(0));
//! assert_eq!(t.last_index_of("a"), Some(2));
//! assert_eq!(t.index_of("z"), None);
//! ```
//!
//! Mutation is not part of the type. Code that expects a mutable list can
//! still be handed a tuple through [`ListMut`], which rejects every call:
//!
//! ```
//! use tuple_zip::prelude::*;
//! use tuple_zip::{Error, Operation, Tuple};
//!
//! let mut t = Tuple::from([1, 2, 3]);
//! assert_eq!(t.add(4), Err(Error::Unsupported(Operation::Add)));
//! assert_eq!(t.len(), 3);
//! ```

use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Index;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::sync::OnceLock;

use smallvec::SmallVec;

use crate::{Error, Primes};

mod cursor;
mod list;

pub use cursor::Cursor;
pub use list::{CursorMut, ListMut};

/// Positions of one value, ascending. Most values occur once.
type Positions = SmallVec<[usize; 1]>;

/// An immutable, fixed-length ordered sequence of `T`.
///
/// Two tuples are equal when they have the same length and equal elements at
/// every position. The element types don't have to match: a `Tuple<String>`
/// can be compared with a `Tuple<&str>`.
///
/// The hash of a tuple is computed on first use and cached; see
/// [`Tuple::hash_code()`].
pub struct Tuple<T> {
    items: Box<[T]>,
    positions: HashMap<T, Positions>,
    hash: OnceLock<u64>,
}

impl<T> Tuple<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates a tuple holding `items`, in order.
    ///
    /// ```
    /// use tuple_zip::Tuple;
    ///
    /// let t = Tuple::new(vec![10, 20, 30]);
    /// assert_eq!(t[1], 20);
    /// ```
    pub fn new(items: impl Into<Box<[T]>>) -> Self {
        let items = items.into();
        let positions = index(&items);
        Self {
            items,
            positions,
            hash: OnceLock::new(),
        }
    }

    /// Creates a new tuple from the elements in the half-open range
    /// `from..to`.
    ///
    /// `to` is clamped to the length of the tuple, and `from` to `to`, so
    /// out-of-bounds or inverted ranges produce a shorter or empty tuple
    /// instead of failing.
    ///
    /// ```
    /// use tuple_zip::Tuple;
    ///
    /// let t = Tuple::from([10, 20, 30, 40]);
    /// assert_eq!(t.sub_tuple(1, 2), Tuple::from([20]));
    /// assert_eq!(t.sub_tuple(2, 99), Tuple::from([30, 40]));
    /// ```
    pub fn sub_tuple(&self, from: usize, to: usize) -> Self {
        let to = to.min(self.items.len());
        let from = from.min(to);
        Self::from(&self.items[from..to])
    }
}

fn index<T: Eq + Hash + Clone>(items: &[T]) -> HashMap<T, Positions> {
    let mut positions: HashMap<T, Positions> = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match positions.get_mut(item) {
            Some(found) => found.push(i),
            None => {
                positions.insert(item.clone(), smallvec::smallvec![i]);
            }
        }
    }
    positions
}

impl<T> Tuple<T> {
    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the tuple has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.items.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements, front to back.
    ///
    /// Every call starts a new pass from the first element.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a bidirectional cursor positioned before the first element.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.items, 0)
    }

    /// Returns a bidirectional cursor positioned before the element at
    /// `index`. An `index` equal to the length places the cursor after the
    /// last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > self.len()`.
    pub fn cursor_at(&self, index: usize) -> Result<Cursor<'_, T>, Error> {
        if index > self.items.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(Cursor::new(&self.items, index))
    }

    /// Returns the elements as a vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }
}

impl<T: Clone> Tuple<T> {
    /// Copies the elements into a new vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }

    /// Copies every element into `dest`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`], leaving `dest` untouched, unless
    /// `dest` has exactly the length of the tuple.
    pub fn clone_into_slice(&self, dest: &mut [T]) -> Result<(), Error> {
        if dest.len() != self.items.len() {
            return Err(Error::LengthMismatch {
                expected: self.items.len(),
                actual: dest.len(),
            });
        }
        dest.clone_from_slice(&self.items);
        Ok(())
    }
}

impl<T> Tuple<T>
where
    T: Eq + Hash,
{
    /// Returns every position at which `value` occurs, in ascending order.
    /// The slice is empty if `value` doesn't occur.
    pub fn positions<Q>(&self, value: &Q) -> &[usize]
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(value)
            .map(|found| found.as_slice())
            .unwrap_or(&[])
    }

    /// Returns `true` if `value` occurs in the tuple.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(value)
    }

    /// Returns `true` if every one of `values` occurs in the tuple. How often
    /// a value occurs doesn't matter, and an empty `values` is always
    /// contained.
    ///
    /// ```
    /// use tuple_zip::Tuple;
    ///
    /// let t = Tuple::from([1, 2, 3]);
    /// assert!(t.contains_all(&[3, 1, 1]));
    /// assert!(!t.contains_all(&[1, 4]));
    /// assert!(t.contains_all(&[] as &[i32]));
    /// ```
    pub fn contains_all<'q, Q, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'q Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'q,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Returns the number of times `value` occurs.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions(value).len()
    }

    /// Returns the lowest position of `value`, or `None` if it doesn't occur.
    pub fn index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions(value).first().copied()
    }

    /// Returns the highest position of `value`, or `None` if it doesn't
    /// occur.
    pub fn last_index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions(value).last().copied()
    }
}

impl<T: Hash> Tuple<T> {
    /// Returns the hash of the tuple.
    ///
    /// Starting from 1, the accumulator is multiplied by the next prime and
    /// the hash of the next element is added, for every element in order. The
    /// result is computed once and cached; concurrent first calls agree on a
    /// single value.
    ///
    /// Element hashes come from a [`DefaultHasher`] created with fixed keys,
    /// so the result only depends on the elements.
    pub fn hash_code(&self) -> u64 {
        *self.hash.get_or_init(|| self.hash_code_with(Primes::new()))
    }

    /// Computes the hash of [`Tuple::hash_code()`] with the multipliers taken
    /// from `primes` instead of [`Primes`]. The result is not cached.
    ///
    /// `primes` should be infinite. If it runs out, the remaining elements
    /// are combined with a multiplier of 1.
    ///
    /// ```
    /// use tuple_zip::{Primes, Tuple};
    ///
    /// let t = Tuple::from([1u8, 2, 3]);
    /// assert_eq!(t.hash_code_with(Primes::new()), t.hash_code());
    /// assert_ne!(t.hash_code_with([7, 11, 13]), t.hash_code());
    /// ```
    pub fn hash_code_with<P>(&self, primes: P) -> u64
    where
        P: IntoIterator<Item = u64>,
    {
        let mut primes = primes.into_iter();
        self.items.iter().fold(1, |acc: u64, item| {
            let multiplier = primes.next().unwrap_or(1);
            acc.wrapping_mul(multiplier)
                .wrapping_add(element_hash(item))
        })
    }
}

fn element_hash<T: Hash + ?Sized>(item: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    item.hash(&mut hasher);
    hasher.finish()
}

impl<T: Clone> Clone for Tuple<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            positions: self.positions.clone(),
            hash: self.hash.clone(),
        }
    }
}

impl<T> Default for Tuple<T> {
    fn default() -> Self {
        Self {
            items: Box::default(),
            positions: HashMap::new(),
            hash: OnceLock::new(),
        }
    }
}

impl<T, U> PartialEq<Tuple<U>> for Tuple<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Tuple<U>) -> bool {
        self.items[..] == other.items[..]
    }
}

impl<T: Eq> Eq for Tuple<T> {}

impl<T: Hash> Hash for Tuple<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: fmt::Debug> fmt::Debug for Tuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Tuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str(")")
    }
}

impl<T> Index<usize> for Tuple<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> AsRef<[T]> for Tuple<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: Eq + Hash + Clone> From<Vec<T>> for Tuple<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Eq + Hash + Clone, const N: usize> From<[T; N]> for Tuple<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(Vec::from(items))
    }
}

impl<T: Eq + Hash + Clone> From<&[T]> for Tuple<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items)
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for Tuple<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> IntoIterator for Tuple<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Tuple<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
