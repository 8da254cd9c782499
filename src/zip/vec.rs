use super::Zip as ZipTrait;
use crate::utils;
use crate::{Error, Tuple};

use core::fmt;
use core::hash::Hash;
use core::iter::{FusedIterator, Peekable};

/// Sequences that are ‘zipped up’ into a single sequence of tuples.
///
/// This `struct` is created by the [`zip`] method on the [`Zip`] trait. See its
/// documentation for more.
///
/// [`zip`]: crate::zip::Zip::zip
/// [`Zip`]: crate::zip::Zip
#[derive(Clone)]
pub struct Zip<S> {
    sources: Vec<S>,
}

impl<S> Zip<S> {
    /// Zips up `sources`, in order.
    pub fn new(sources: Vec<S>) -> Self {
        Self { sources }
    }

    /// The number of sources, which is also the length of every tuple.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` if there are no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<S> Zip<S>
where
    S: IntoIterator + Clone,
{
    /// Starts a new traversal over clones of the sources.
    ///
    /// ```
    /// use tuple_zip::vec::Zip;
    /// use tuple_zip::Tuple;
    ///
    /// let zip = Zip::new(vec![vec![1, 2], vec![3, 4]]);
    /// let first: Vec<_> = zip.iter().collect();
    /// let second: Vec<_> = zip.iter().collect();
    /// assert_eq!(first, second);
    /// assert_eq!(first, [Tuple::from([1, 3]), Tuple::from([2, 4])]);
    /// ```
    pub fn iter(&self) -> IntoIter<S::IntoIter> {
        IntoIter::new(
            self.sources
                .iter()
                .cloned()
                .map(IntoIterator::into_iter)
                .collect(),
        )
    }
}

impl<S: fmt::Debug> fmt::Debug for Zip<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.sources.iter()).finish()
    }
}

impl<S> From<Vec<S>> for Zip<S> {
    fn from(sources: Vec<S>) -> Self {
        Self::new(sources)
    }
}

impl<S> FromIterator<S> for Zip<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S> IntoIterator for Zip<S>
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    type Item = Tuple<S::Item>;
    type IntoIter = IntoIter<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(
            self.sources
                .into_iter()
                .map(IntoIterator::into_iter)
                .collect(),
        )
    }
}

impl<'a, S> IntoIterator for &'a Zip<S>
where
    S: IntoIterator + Clone,
    S::Item: Eq + Hash + Clone,
{
    type Item = Tuple<S::Item>;
    type IntoIter = IntoIter<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S> ZipTrait for Vec<S>
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    type Item = Tuple<S::Item>;
    type Zip = Zip<S>;

    fn zip(self) -> Self::Zip {
        Zip::new(self)
    }
}

/// An iterator that steps through every source at once.
///
/// This `struct` is created by [`Zip::iter()`] and by `into_iter()`.
pub struct IntoIter<I: Iterator> {
    cursors: Vec<Peekable<I>>,
    done: bool,
}

impl<I: Iterator> IntoIter<I> {
    fn new(cursors: Vec<I>) -> Self {
        let done = cursors.is_empty();
        Self {
            cursors: cursors.into_iter().map(Iterator::peekable).collect(),
            done,
        }
    }

    /// Returns `true` if every source has another item.
    ///
    /// This may pull an item from a source to find out; that item is kept for
    /// the next step.
    pub fn has_next(&mut self) -> bool {
        if !self.done && !utils::all_ready(&mut self.cursors) {
            self.done = true;
        }
        !self.done
    }
}

impl<I> IntoIter<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    /// Takes one item from every source, in order, and returns them as a
    /// tuple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] once any source has run out.
    pub fn try_next(&mut self) -> Result<Tuple<I::Item>, Error> {
        if self.done {
            return Err(Error::Exhausted);
        }
        let step = utils::step(&mut self.cursors);
        if step.is_err() {
            self.done = true;
        }
        step
    }
}

impl<I: Iterator> fmt::Debug for IntoIter<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("sources", &self.cursors.len())
            .field("done", &self.done)
            .finish()
    }
}

impl<I> Iterator for IntoIter<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = Tuple<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        utils::size_hint(&self.cursors)
    }
}

impl<I> FusedIterator for IntoIter<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::{Error, Tuple};

    #[test]
    fn zip_vec_3() {
        let a = vec![1, 1];
        let b = vec![2, 2];
        let c = vec![3, 3];
        let mut s = vec![a, b, c].zip().into_iter();

        assert_eq!(s.next(), Some(Tuple::from([1, 2, 3])));
        assert_eq!(s.next(), Some(Tuple::from([1, 2, 3])));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn lockstep_to_the_end() {
        let mut s = vec![vec![1, 2], vec![10, 20], vec![100, 200]]
            .zip()
            .into_iter();

        assert!(s.has_next());
        assert_eq!(s.try_next(), Ok(Tuple::from([1, 10, 100])));
        assert!(s.has_next());
        assert_eq!(s.try_next(), Ok(Tuple::from([2, 20, 200])));
        assert!(!s.has_next());
        assert_eq!(s.try_next(), Err(Error::Exhausted));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn shortest_wins() {
        let s: Vec<_> = vec![vec![1, 2, 3], vec![4]].zip().into_iter().collect();
        assert_eq!(s, [Tuple::from([1, 4])]);
    }

    #[test]
    fn no_sources() {
        let mut s = Vec::<Vec<u8>>::new().zip().into_iter();
        assert!(!s.has_next());
        assert_eq!(s.size_hint(), (0, Some(0)));
        assert_eq!(s.try_next(), Err(Error::Exhausted));
    }

    #[test]
    fn has_next_does_not_lose_items() {
        let mut s = vec![vec![1, 2].into_iter(), vec![3, 4].into_iter()]
            .zip()
            .into_iter();
        assert!(s.has_next());
        assert!(s.has_next());
        assert_eq!(s.next(), Some(Tuple::from([1, 3])));
        assert_eq!(s.next(), Some(Tuple::from([2, 4])));
        assert!(!s.has_next());
    }

    #[test]
    fn traversals_are_independent() {
        let zip = vec![vec!['a', 'b'], vec!['c', 'd']].zip();
        let mut first = zip.iter();
        let mut second = zip.iter();
        assert_eq!(first.next(), Some(Tuple::from(['a', 'c'])));
        assert_eq!(second.next(), Some(Tuple::from(['a', 'c'])));
        assert_eq!(first.next(), Some(Tuple::from(['b', 'd'])));
        assert_eq!((&zip).into_iter().count(), 2);
    }

    #[test]
    fn size_hint() {
        let s = vec![vec![1, 2, 3], vec![4, 5]].zip().into_iter();
        assert_eq!(s.size_hint(), (2, Some(2)));
    }

    #[test]
    fn borrowed_sources() {
        let a = [1, 2];
        let b = [3, 4];
        let zip = vec![&a[..], &b[..]].zip();
        assert_eq!(zip.len(), 2);
        let s: Vec<_> = zip.iter().collect();
        assert_eq!(s, [Tuple::from([&1, &3]), Tuple::from([&2, &4])]);
    }

    #[test]
    fn debug() {
        let zip = vec![vec![1], vec![2]].zip();
        assert_eq!(format!("{zip:?}"), "[[1], [2]]");
    }
}
