//! The mutable-list shape, for code written against it.
//!
//! [`Tuple`] and its [`Cursor`] implement these traits by rejecting every
//! call with [`Error::Unsupported`].

use crate::{Error, Operation};

use super::{Cursor, Tuple};

/// A list whose elements can be added, replaced and removed.
///
/// Every method reports failure through [`Error`]. Out-of-range positions
/// produce [`Error::OutOfRange`]; types that can't change at all produce
/// [`Error::Unsupported`] and have no side effect.
pub trait ListMut<T> {
    /// Appends `value`.
    fn add(&mut self, value: T) -> Result<(), Error>;

    /// Inserts `value` at `index`, shifting later elements back.
    fn insert(&mut self, index: usize, value: T) -> Result<(), Error>;

    /// Appends every element of `values`.
    fn add_all<I>(&mut self, values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>;

    /// Inserts every element of `values` at `index`, in order.
    fn insert_all<I>(&mut self, index: usize, values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>;

    /// Replaces the element at `index`, returning the old one.
    fn set(&mut self, index: usize, value: T) -> Result<T, Error>;

    /// Removes the first occurrence of `value`. Returns whether one was found.
    fn remove(&mut self, value: &T) -> Result<bool, Error>;

    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<T, Error>;

    /// Removes every occurrence of any of `values`. Returns whether the list
    /// changed.
    fn remove_all(&mut self, values: &[T]) -> Result<bool, Error>;

    /// Removes every element that is not one of `values`. Returns whether the
    /// list changed.
    fn retain_all(&mut self, values: &[T]) -> Result<bool, Error>;

    /// Removes every element.
    fn clear(&mut self) -> Result<(), Error>;
}

/// A cursor that can edit the list it walks over.
pub trait CursorMut<T> {
    /// Removes the element last returned by the cursor.
    fn remove(&mut self) -> Result<(), Error>;

    /// Replaces the element last returned by the cursor.
    fn set(&mut self, value: T) -> Result<(), Error>;

    /// Inserts `value` at the cursor.
    fn add(&mut self, value: T) -> Result<(), Error>;
}

impl<T> ListMut<T> for Tuple<T> {
    fn add(&mut self, _value: T) -> Result<(), Error> {
        Err(Error::Unsupported(Operation::Add))
    }

    fn insert(&mut self, _index: usize, _value: T) -> Result<(), Error> {
        Err(Error::Unsupported(Operation::Insert))
    }

    fn add_all<I>(&mut self, _values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        Err(Error::Unsupported(Operation::AddAll))
    }

    fn insert_all<I>(&mut self, _index: usize, _values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        Err(Error::Unsupported(Operation::InsertAll))
    }

    fn set(&mut self, _index: usize, _value: T) -> Result<T, Error> {
        Err(Error::Unsupported(Operation::Set))
    }

    fn remove(&mut self, _value: &T) -> Result<bool, Error> {
        Err(Error::Unsupported(Operation::Remove))
    }

    fn remove_at(&mut self, _index: usize) -> Result<T, Error> {
        Err(Error::Unsupported(Operation::RemoveAt))
    }

    fn remove_all(&mut self, _values: &[T]) -> Result<bool, Error> {
        Err(Error::Unsupported(Operation::RemoveAll))
    }

    fn retain_all(&mut self, _values: &[T]) -> Result<bool, Error> {
        Err(Error::Unsupported(Operation::RetainAll))
    }

    fn clear(&mut self) -> Result<(), Error> {
        Err(Error::Unsupported(Operation::Clear))
    }
}

impl<T> CursorMut<T> for Cursor<'_, T> {
    fn remove(&mut self) -> Result<(), Error> {
        Err(Error::Unsupported(Operation::Remove))
    }

    fn set(&mut self, _value: T) -> Result<(), Error> {
        Err(Error::Unsupported(Operation::Set))
    }

    fn add(&mut self, _value: T) -> Result<(), Error> {
        Err(Error::Unsupported(Operation::Add))
    }
}
