use core::iter::FusedIterator;

use crate::Error;

/// A bidirectional cursor over the elements of a [`Tuple`].
///
/// The cursor sits between two elements, or before the first one, or after
/// the last one. Stepping forward returns the element after the cursor,
/// stepping back the one before it.
///
/// This `struct` is created by [`Tuple::cursor()`] and
/// [`Tuple::cursor_at()`].
///
/// ```
/// use tuple_zip::{Error, Tuple};
///
/// let t = Tuple::from(['a', 'b', 'c']);
/// let mut cursor = t.cursor_at(1)?;
/// assert_eq!(cursor.try_next(), Ok(&'b'));
/// assert_eq!(cursor.try_previous(), Ok(&'b'));
/// assert_eq!(cursor.try_previous(), Ok(&'a'));
/// assert_eq!(cursor.try_previous(), Err(Error::Exhausted));
/// # Ok::<(), Error>(())
/// ```
///
/// [`Tuple`]: crate::Tuple
/// [`Tuple::cursor()`]: crate::Tuple::cursor
/// [`Tuple::cursor_at()`]: crate::Tuple::cursor_at
#[derive(Debug)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            position: self.position,
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(items: &'a [T], position: usize) -> Self {
        debug_assert!(position <= items.len());
        Self { items, position }
    }

    /// Returns `true` if there is an element after the cursor.
    pub fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    /// Returns `true` if there is an element before the cursor.
    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// The position of the element a forward step would return. Equal to
    /// the length of the tuple when the cursor is at the end.
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// The position of the element a backward step would return, or `None`
    /// at the start.
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Returns the element after the cursor and moves past it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] at the end of the tuple.
    pub fn try_next(&mut self) -> Result<&'a T, Error> {
        let item = self.items.get(self.position).ok_or(Error::Exhausted)?;
        self.position += 1;
        Ok(item)
    }

    /// Returns the element before the cursor and moves back over it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] at the start of the tuple.
    pub fn try_previous(&mut self) -> Result<&'a T, Error> {
        let index = self.previous_index().ok_or(Error::Exhausted)?;
        let item = self.items.get(index).ok_or(Error::Exhausted)?;
        self.position = index;
        Ok(item)
    }

    /// Like [`Cursor::try_previous()`], returning `None` at the start.
    pub fn previous(&mut self) -> Option<&'a T> {
        self.try_previous().ok()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> FusedIterator for Cursor<'_, T> {}

#[cfg(test)]
mod tests {
    use super::Cursor;
    use crate::{Error, Tuple};

    #[test]
    fn walks_forward_and_back() {
        let t = Tuple::from([1, 2, 3]);
        let mut cursor = t.cursor();
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(cursor.next_index(), 0);

        assert_eq!(cursor.try_next(), Ok(&1));
        assert_eq!(cursor.try_next(), Ok(&2));
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.previous_index(), Some(1));

        assert_eq!(cursor.try_previous(), Ok(&2));
        assert_eq!(cursor.try_previous(), Ok(&1));
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.try_previous(), Err(Error::Exhausted));
        assert_eq!(cursor.next_index(), 0);
    }

    #[test]
    fn exhausted_at_the_end() {
        let t = Tuple::from([1]);
        let mut cursor = t.cursor();
        assert_eq!(cursor.try_next(), Ok(&1));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.try_next(), Err(Error::Exhausted));
        assert_eq!(cursor.next(), None);
        // Misuse leaves the cursor where it was.
        assert_eq!(cursor.try_previous(), Ok(&1));
    }

    #[test]
    fn seek() {
        let t = Tuple::from([10, 20, 30]);
        let cursor = t.cursor_at(3).unwrap();
        assert!(!cursor.has_next());
        assert!(cursor.has_previous());
        assert_eq!(cursor.previous_index(), Some(2));

        let rest: Vec<_> = t.cursor_at(1).unwrap().collect();
        assert_eq!(rest, [&20, &30]);

        assert_eq!(
            t.cursor_at(4).unwrap_err(),
            Error::OutOfRange { index: 4, len: 3 }
        );
    }

    #[test]
    fn exact_size() {
        let t = Tuple::from(['x', 'y', 'z']);
        let mut cursor = t.cursor();
        assert_eq!(cursor.len(), 3);
        cursor.next();
        assert_eq!(cursor.len(), 2);
        cursor.previous();
        assert_eq!(cursor.len(), 3);
    }

    #[test]
    fn empty() {
        let t = Tuple::<u8>::default();
        let mut cursor = t.cursor();
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.try_next(), Err(Error::Exhausted));
        assert_eq!(cursor.try_previous(), Err(Error::Exhausted));
    }

    #[test]
    fn clone_without_cloning_items() {
        // Not `Clone`.
        #[derive(Debug, PartialEq)]
        struct Token(u8);

        let items = [Token(1), Token(2)];
        let mut cursor = Cursor::new(&items, 0);
        assert_eq!(cursor.next(), Some(&Token(1)));

        let mut copy = cursor.clone();
        assert_eq!(copy.next(), Some(&Token(2)));
        assert!(!copy.has_next());
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.next(), Some(&Token(2)));
    }
}
