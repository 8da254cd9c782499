use core::hash::Hash;
use core::iter::Peekable;

use crate::{Error, Tuple};

/// Returns `true` if every cursor has another item.
///
/// Peeked items stay buffered in their cursor, so asking is never lossy.
/// An empty set of cursors is never ready.
pub(crate) fn all_ready<I: Iterator>(cursors: &mut [Peekable<I>]) -> bool {
    !cursors.is_empty() && cursors.iter_mut().all(|cursor| cursor.peek().is_some())
}

/// Takes one item from every cursor, in order, if all of them have one.
pub(crate) fn step<I>(cursors: &mut [Peekable<I>]) -> Result<Tuple<I::Item>, Error>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    if !all_ready(cursors) {
        return Err(Error::Exhausted);
    }
    let items: Option<Vec<_>> = cursors.iter_mut().map(Iterator::next).collect();
    items.map(Tuple::from).ok_or(Error::Exhausted)
}

/// The number of steps left: the smallest bound across all cursors.
pub(crate) fn size_hint<I: Iterator>(cursors: &[Peekable<I>]) -> (usize, Option<usize>) {
    cursors
        .iter()
        .map(Iterator::size_hint)
        .reduce(|(low_a, high_a), (low_b, high_b)| {
            let high = match (high_a, high_b) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, None) => a,
                (None, b) => b,
            };
            (low_a.min(low_b), high)
        })
        .unwrap_or((0, Some(0)))
}
