//! The positional container abstraction.
//!
//! [`IndexedContainer`] needs only two things from an implementor: its length and the
//! element at an in-bounds position. Negative indexing, bounds checking, range
//! extraction and [`Access`] dispatch are provided on top of those.
//!
//! # Examples
//!
//! A container whose elements are computed rather than stored:
//!
//! ```
//! use lazyseq_core::{IndexedContainer, Seq, SliceSpec};
//!
//! struct Evens(usize);
//!
//! impl IndexedContainer for Evens {
//!     type Item = usize;
//!     type Slice = Seq<usize>;
//!
//!     fn len(&self) -> usize {
//!         self.0
//!     }
//!
//!     fn element(&self, position: usize) -> Option<usize> {
//!         (position < self.0).then_some(position * 2)
//!     }
//! }
//!
//! let evens = Evens(5);
//! assert_eq!(evens.get(-1)?, 8);
//! assert_eq!(evens.get_range(SliceSpec::reversed())?, Seq::from([8, 6, 4, 2, 0]));
//! assert!(evens.get(5).is_err());
//! # Ok::<(), lazyseq_core::SeqError>(())
//! ```

use crate::{SeqError, SliceSpec, slice::ResolvedRange};

/// A tagged positional request: a single index or a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From, derive_more::IsVariant)]
pub enum Access {
    /// A single, possibly negative, index.
    Index(isize),
    /// A slice of positions.
    Range(SliceSpec),
}

/// The result of an [`Access`] request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Selection<T, S> {
    /// The element selected by an index.
    One(T),
    /// The container of elements selected by a slice.
    Many(S),
}

/// A finite collection whose elements are addressed by zero-based position.
pub trait IndexedContainer {
    /// The element type returned by lookups.
    type Item;

    /// The container type produced by [`get_range`](Self::get_range).
    type Slice: FromIterator<Self::Item>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `position`, or `None` if `position >= len()`.
    fn element(&self, position: usize) -> Option<Self::Item>;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, where negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if the rebased index is outside `[0, len)`.
    fn get(&self, index: isize) -> Result<Self::Item, SeqError> {
        let position = normalize_index(index, self.len())?;
        self.element(position)
            .ok_or(SeqError::out_of_range(index, self.len()))
    }

    /// Builds a new container holding the elements selected by `spec`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] if `spec` has a zero step.
    fn get_range(&self, spec: SliceSpec) -> Result<Self::Slice, SeqError> {
        let range = spec.resolve(self.len())?;
        Ok(collect_range(self, range))
    }

    /// Dispatches an [`Access`] request to [`get`](Self::get) or
    /// [`get_range`](Self::get_range).
    ///
    /// # Errors
    ///
    /// Returns the error of whichever lookup the request dispatched to.
    fn select(&self, access: impl Into<Access>) -> Result<Selection<Self::Item, Self::Slice>, SeqError>
    where
        Self: Sized,
    {
        match access.into() {
            Access::Index(index) => self.get(index).map(Selection::One),
            Access::Range(spec) => self.get_range(spec).map(Selection::Many),
        }
    }
}

impl<C> IndexedContainer for &C
where
    C: IndexedContainer + ?Sized,
{
    type Item = C::Item;
    type Slice = C::Slice;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn element(&self, position: usize) -> Option<Self::Item> {
        (**self).element(position)
    }
}

/// Rebases a possibly negative `index` against `len` and checks it is in `[0, len)`.
///
/// # Errors
///
/// Returns [`SeqError::IndexOutOfRange`] when the rebased index is out of bounds.
///
/// # Examples
///
/// ```
/// use lazyseq_core::container::normalize_index;
///
/// assert_eq!(normalize_index(-1, 6)?, 5);
/// assert_eq!(normalize_index(2, 6)?, 2);
/// assert!(normalize_index(6, 6).is_err());
/// assert!(normalize_index(-7, 6).is_err());
/// # Ok::<(), lazyseq_core::SeqError>(())
/// ```
pub fn normalize_index(index: isize, len: usize) -> Result<usize, SeqError> {
    let position = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index.unsigned_abs())
    };
    position
        .filter(|&p| p < len)
        .ok_or(SeqError::out_of_range(index, len))
}

/// Like [`normalize_index`], but also accepts `len` itself, as insertion does.
///
/// # Errors
///
/// Returns [`SeqError::IndexOutOfRange`] when the rebased index is outside `[0, len]`.
pub fn normalize_insert_index(index: isize, len: usize) -> Result<usize, SeqError> {
    if usize::try_from(index).is_ok_and(|p| p == len) {
        return Ok(len);
    }
    normalize_index(index, len)
}

fn collect_range<C>(container: &C, range: ResolvedRange) -> C::Slice
where
    C: IndexedContainer + ?Sized,
{
    range
        .indices()
        .filter_map(|position| container.element(position))
        .collect()
}
