//! Mutation on top of [`IndexedContainer`].

use crate::{Access, IndexedContainer, InvalidArgument, SeqError, SliceSpec};

/// A value to store through an [`Access`] request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Assignment<T> {
    /// A single element, paired with [`Access::Index`].
    One(T),
    /// A run of elements, paired with [`Access::Range`].
    Many(Vec<T>),
}

/// A positional container whose elements can be replaced, removed and inserted.
///
/// All operations validate their arguments first; on error the container is left exactly
/// as it was.
pub trait MutableContainer: IndexedContainer {
    /// Replaces the element at `index`, returning the previous element.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if the rebased index is outside `[0, len)`.
    fn set(&mut self, index: isize, item: Self::Item) -> Result<Self::Item, SeqError>;

    /// Inserts `item` so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if the rebased index is outside `[0, len]`.
    fn insert(&mut self, index: isize, item: Self::Item) -> Result<(), SeqError>;

    /// Appends `item` at the end.
    fn push(&mut self, item: Self::Item);

    /// Removes the element at `index`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if the rebased index is outside `[0, len)`.
    fn remove(&mut self, index: isize) -> Result<Self::Item, SeqError>;

    /// Removes every element selected by `spec`, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] if `spec` has a zero step.
    fn remove_range(&mut self, spec: SliceSpec) -> Result<usize, SeqError>;

    /// Replaces the elements selected by `spec` with `items`.
    ///
    /// For a contiguous forward range the number of elements may change. Any other range
    /// requires exactly one replacement per selected position.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] if `spec` has a zero step, or if a
    /// non-contiguous range is given the wrong number of items.
    fn replace_range(&mut self, spec: SliceSpec, items: Vec<Self::Item>) -> Result<(), SeqError>;

    /// Removes whatever `access` selects, returning how many elements were removed.
    ///
    /// # Errors
    ///
    /// Returns the error of [`remove`](Self::remove) or
    /// [`remove_range`](Self::remove_range).
    fn delete(&mut self, access: impl Into<Access>) -> Result<usize, SeqError>
    where
        Self: Sized,
    {
        match access.into() {
            Access::Index(index) => self.remove(index).map(|_| 1),
            Access::Range(spec) => self.remove_range(spec),
        }
    }

    /// Stores `value` through `access`.
    ///
    /// An index must be paired with [`Assignment::One`] and a range with
    /// [`Assignment::Many`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::ShapeMismatch`] for mismatched pairs, otherwise the error
    /// of [`set`](Self::set) or [`replace_range`](Self::replace_range).
    fn assign(
        &mut self,
        access: impl Into<Access>,
        value: Assignment<Self::Item>,
    ) -> Result<(), SeqError>
    where
        Self: Sized,
    {
        match (access.into(), value) {
            (Access::Index(index), Assignment::One(item)) => self.set(index, item).map(drop),
            (Access::Range(spec), Assignment::Many(items)) => self.replace_range(spec, items),
            _ => Err(InvalidArgument::ShapeMismatch.into()),
        }
    }
}
