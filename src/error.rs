use core::fmt;

/// The errors returned by [`Tuple`], its cursors, and the zip iterators.
///
/// [`Tuple`]: crate::Tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The capability is permanently absent: tuples never change after
    /// construction.
    Unsupported(Operation),
    /// A position outside of the valid range was requested.
    OutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the sequence.
        len: usize,
    },
    /// A cursor was advanced past its last element.
    Exhausted,
    /// A destination buffer does not have the length of the tuple.
    LengthMismatch {
        /// The length of the tuple.
        expected: usize,
        /// The length of the destination.
        actual: usize,
    },
}

impl Error {
    /// Returns `true` if this error rejects a mutation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unsupported(op) => write!(f, "tuples do not support the {op} operation"),
            Error::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Error::Exhausted => f.write_str("the iteration is exhausted"),
            Error::LengthMismatch { expected, actual } => {
                write!(f, "expected a buffer of length {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// The mutating operations a [`ListMut`] or [`CursorMut`] can be asked to
/// perform.
///
/// [`ListMut`]: crate::tuple::ListMut
/// [`CursorMut`]: crate::tuple::CursorMut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Append one element.
    Add,
    /// Insert one element at a position.
    Insert,
    /// Append many elements.
    AddAll,
    /// Insert many elements at a position.
    InsertAll,
    /// Replace the element at a position.
    Set,
    /// Remove the first occurrence of a value.
    Remove,
    /// Remove the element at a position.
    RemoveAt,
    /// Remove every occurrence of many values.
    RemoveAll,
    /// Keep only the occurrences of many values.
    RetainAll,
    /// Remove every element.
    Clear,
}

impl Operation {
    /// The name of the operation, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Insert => "insert",
            Operation::AddAll => "add_all",
            Operation::InsertAll => "insert_all",
            Operation::Set => "set",
            Operation::Remove => "remove",
            Operation::RemoveAt => "remove_at",
            Operation::RemoveAll => "remove_all",
            Operation::RetainAll => "retain_all",
            Operation::Clear => "clear",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::Unsupported(Operation::RetainAll).to_string(),
            "tuples do not support the retain_all operation"
        );
        assert_eq!(
            Error::OutOfRange { index: 4, len: 2 }.to_string(),
            "index 4 is out of range for length 2"
        );
        assert_eq!(Error::Exhausted.to_string(), "the iteration is exhausted");
    }

    #[test]
    fn unsupported_is_distinct() {
        assert!(Error::Unsupported(Operation::Clear).is_unsupported());
        assert!(!Error::Exhausted.is_unsupported());
        assert!(!Error::OutOfRange { index: 0, len: 0 }.is_unsupported());
    }
}
