//! The container-backed lazy iterator.

use std::iter::FusedIterator;

use lazyseq_core::{EndOfSequence, IndexedContainer};

/// A cursor over an [`IndexedContainer`] that fetches one element per step.
///
/// The iterator borrows its container and never copies it. It has two states: active,
/// while the cursor is below the container's length, and exhausted. The length is read
/// again on every call. Once the iterator reports the end it stays exhausted; create a
/// new one to traverse again.
///
/// # Examples
///
/// ```
/// use lazyseq_core::{EndOfSequence, Seq};
/// use lazyseq_iter::LazyIter;
///
/// let seq = Seq::from(['x', 'y', 'z']);
/// let mut iter = LazyIter::new(&seq);
///
/// assert_eq!(iter.advance(), Ok('x'));
/// assert_eq!(iter.next(), Some('y'));
/// assert_eq!(iter.next(), Some('z'));
/// assert_eq!(iter.advance(), Err(EndOfSequence));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct LazyIter<'a, C: ?Sized> {
    source: &'a C,
    cursor: usize,
    exhausted: bool,
}

impl<'a, C> LazyIter<'a, C>
where
    C: IndexedContainer + ?Sized,
{
    /// Creates an iterator positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a C) -> Self {
        Self {
            source,
            cursor: 0,
            exhausted: false,
        }
    }

    /// Returns the position of the next element to be produced.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Returns `true` once the iterator has reported the end.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Produces the next element, or [`EndOfSequence`] once there are none left.
    ///
    /// # Errors
    ///
    /// Returns [`EndOfSequence`] on this and every later call after the last element.
    pub fn advance(&mut self) -> Result<C::Item, EndOfSequence> {
        self.next().ok_or(EndOfSequence)
    }

    fn exhaust(&mut self) {
        log::trace!("lazy iterator exhausted at position {}", self.cursor);
        self.exhausted = true;
    }
}

impl<C> Clone for LazyIter<'_, C>
where
    C: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            cursor: self.cursor,
            exhausted: self.exhausted,
        }
    }
}

impl<C> Iterator for LazyIter<'_, C>
where
    C: IndexedContainer + ?Sized,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.cursor >= self.source.len() {
            self.exhaust();
            return None;
        }
        let Some(item) = self.source.element(self.cursor) else {
            self.exhaust();
            return None;
        };
        self.cursor += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let remaining = self.source.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl<C> FusedIterator for LazyIter<'_, C> where C: IndexedContainer + ?Sized {}
