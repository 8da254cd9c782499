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
pub struct Zip<S, const N: usize> {
    sources: [S; N],
}

impl<S, const N: usize> Zip<S, N> {
    /// Zips up `sources`, in order.
    pub fn new(sources: [S; N]) -> Self {
        Self { sources }
    }
}

impl<S, const N: usize> Zip<S, N>
where
    S: IntoIterator + Clone,
{
    /// Starts a new traversal over clones of the sources.
    pub fn iter(&self) -> IntoIter<S::IntoIter, N> {
        IntoIter::new(self.sources.clone().map(IntoIterator::into_iter))
    }
}

impl<S: fmt::Debug, const N: usize> fmt::Debug for Zip<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.sources.iter()).finish()
    }
}

impl<S, const N: usize> From<[S; N]> for Zip<S, N> {
    fn from(sources: [S; N]) -> Self {
        Self::new(sources)
    }
}

impl<S, const N: usize> IntoIterator for Zip<S, N>
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    type Item = Tuple<S::Item>;
    type IntoIter = IntoIter<S::IntoIter, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.sources.map(IntoIterator::into_iter))
    }
}

impl<'a, S, const N: usize> IntoIterator for &'a Zip<S, N>
where
    S: IntoIterator + Clone,
    S::Item: Eq + Hash + Clone,
{
    type Item = Tuple<S::Item>;
    type IntoIter = IntoIter<S::IntoIter, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S, const N: usize> ZipTrait for [S; N]
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    type Item = Tuple<S::Item>;
    type Zip = Zip<S, N>;

    fn zip(self) -> Self::Zip {
        Zip::new(self)
    }
}

/// An iterator that steps through every source at once.
///
/// This `struct` is created by [`Zip::iter()`] and by `into_iter()`.
pub struct IntoIter<I: Iterator, const N: usize> {
    cursors: [Peekable<I>; N],
    done: bool,
}

impl<I: Iterator, const N: usize> IntoIter<I, N> {
    fn new(cursors: [I; N]) -> Self {
        Self {
            cursors: cursors.map(Iterator::peekable),
            done: N == 0,
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

impl<I, const N: usize> IntoIter<I, N>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    /// Takes one item from every source, in order, and returns them as a
    /// tuple of length `N`.
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

impl<I: Iterator, const N: usize> fmt::Debug for IntoIter<I, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("sources", &N)
            .field("done", &self.done)
            .finish()
    }
}

impl<I, const N: usize> Iterator for IntoIter<I, N>
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

impl<I, const N: usize> FusedIterator for IntoIter<I, N>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
}
