//! A sequence shared between its owner and its live iterators.

use std::{
    cell::{Ref, RefCell, RefMut},
    iter::FusedIterator,
    rc::{Rc, Weak},
};

use lazyseq_core::{EndOfSequence, Seq};

use crate::Traverse;

/// A [`Seq`] behind a shared handle that can be modified while it is being traversed.
///
/// Cloning a `SharedSeq` clones the handle, not the elements. Iterators returned by
/// [`traverse`](Traverse::traverse) hold only a weak reference, so they never keep the
/// sequence alive and never block mutation. Each step reads the current length again: an
/// iterator sees elements appended behind its cursor and ends early when the sequence
/// shrinks below it.
///
/// # Examples
///
/// ```
/// use lazyseq_core::{MutableContainer, Seq};
/// use lazyseq_iter::{SharedSeq, Traverse};
///
/// let queue = SharedSeq::new(Seq::from([1, 2]));
/// let mut iter = queue.traverse();
/// assert_eq!(iter.next(), Some(1));
///
/// queue.write().push(3);
/// assert_eq!(iter.collect::<Vec<_>>(), [2, 3]);
/// ```
#[derive(Debug)]
pub struct SharedSeq<T> {
    inner: Rc<RefCell<Seq<T>>>,
}

impl<T> SharedSeq<T> {
    /// Moves `seq` behind a new shared handle.
    #[must_use]
    pub fn new(seq: Seq<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(seq)),
        }
    }

    /// Returns the current number of elements.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is currently borrowed mutably.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` if the sequence currently has no elements.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is currently borrowed mutably.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the sequence.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is currently borrowed mutably.
    pub fn read(&self) -> Ref<'_, Seq<T>> {
        self.inner.borrow()
    }

    /// Borrows the sequence mutably.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is currently borrowed.
    pub fn write(&self) -> RefMut<'_, Seq<T>> {
        self.inner.borrow_mut()
    }

    /// Returns `true` if both handles point to the same sequence.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> SharedSeq<T> {
    /// Copies the current elements out of the shared sequence.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is currently borrowed mutably.
    #[must_use]
    pub fn snapshot(&self) -> Seq<T> {
        self.inner.borrow().clone()
    }
}

impl<T> Clone for SharedSeq<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedSeq<T> {
    fn default() -> Self {
        Self::new(Seq::new())
    }
}

impl<T> From<Seq<T>> for SharedSeq<T> {
    fn from(seq: Seq<T>) -> Self {
        Self::new(seq)
    }
}

impl<T: Clone> Traverse for SharedSeq<T> {
    type Item = T;
    type Iter<'a>
        = SharedIter<T>
    where
        Self: 'a;

    fn traverse(&self) -> Self::Iter<'_> {
        SharedIter {
            source: Rc::downgrade(&self.inner),
            cursor: 0,
            exhausted: false,
        }
    }
}

impl<T: Clone> IntoIterator for &SharedSeq<T> {
    type Item = T;
    type IntoIter = SharedIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

/// The iterator returned by [`SharedSeq::traverse`](Traverse::traverse).
///
/// The iterator ends when its cursor reaches the current length, when every
/// [`SharedSeq`] handle has been dropped, or when it finds the sequence mutably borrowed.
/// It stays ended afterwards.
#[derive(Debug)]
pub struct SharedIter<T> {
    source: Weak<RefCell<Seq<T>>>,
    cursor: usize,
    exhausted: bool,
}

impl<T> SharedIter<T> {
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

    fn exhaust(&mut self) {
        self.exhausted = true;
        self.source = Weak::new();
    }
}

impl<T: Clone> SharedIter<T> {
    /// Produces the next element, or [`EndOfSequence`] once there are none left.
    ///
    /// # Errors
    ///
    /// Returns [`EndOfSequence`] on this and every later call after the last element.
    pub fn advance(&mut self) -> Result<T, EndOfSequence> {
        self.next().ok_or(EndOfSequence)
    }
}

impl<T> Clone for SharedIter<T> {
    fn clone(&self) -> Self {
        Self {
            source: Weak::clone(&self.source),
            cursor: self.cursor,
            exhausted: self.exhausted,
        }
    }
}

impl<T: Clone> Iterator for SharedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let Some(source) = self.source.upgrade() else {
            log::debug!("shared sequence dropped at position {}", self.cursor);
            self.exhaust();
            return None;
        };
        let item = match source.try_borrow() {
            Ok(seq) => seq.as_slice().get(self.cursor).cloned(),
            Err(_) => {
                log::debug!(
                    "shared sequence is mutably borrowed at position {}",
                    self.cursor
                );
                None
            }
        };
        let Some(item) = item else {
            log::trace!("shared iterator exhausted at position {}", self.cursor);
            self.exhaust();
            return None;
        };
        self.cursor += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Other handles may grow or shrink the sequence before the next call.
        if self.exhausted {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<T: Clone> FusedIterator for SharedIter<T> {}
