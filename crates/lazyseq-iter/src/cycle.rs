//! Endless round-robin traversal.

use std::iter::FusedIterator;

use lazyseq_core::IndexedContainer;

/// An iterator that walks a container from start to end, then starts over, forever.
///
/// A container found empty ends the iterator for good.
///
/// # Examples
///
/// ```
/// use lazyseq_core::Seq;
/// use lazyseq_iter::Cyclic;
///
/// let directions: Seq<char> = "nsew".chars().collect();
/// let labels: Vec<_> = (0..6)
///     .zip(Cyclic::new(&directions))
///     .map(|(i, d)| format!("{i}{d}"))
///     .collect();
/// assert_eq!(labels, ["0n", "1s", "2e", "3w", "4n", "5s"]);
/// ```
#[derive(Debug)]
pub struct Cyclic<'a, C: ?Sized> {
    source: &'a C,
    cursor: usize,
    exhausted: bool,
}

impl<'a, C> Cyclic<'a, C>
where
    C: IndexedContainer + ?Sized,
{
    /// Creates a cyclic iterator starting at the first element of `source`.
    #[must_use]
    pub const fn new(source: &'a C) -> Self {
        Self {
            source,
            cursor: 0,
            exhausted: false,
        }
    }
}

impl<C> Iterator for Cyclic<'_, C>
where
    C: IndexedContainer + ?Sized,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let len = self.source.len();
        if len == 0 {
            log::trace!("cyclic iterator found an empty container");
            self.exhausted = true;
            return None;
        }
        let position = self.cursor % len;
        self.cursor = (position + 1) % len;
        self.source.element(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted || self.source.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}

impl<C> FusedIterator for Cyclic<'_, C> where C: IndexedContainer + ?Sized {}
