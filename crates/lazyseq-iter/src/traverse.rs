//! Restartable traversal.

use std::cmp::Ordering;

use lazyseq_core::IndexedContainer;

use crate::{Cyclic, LazyIter};

/// Something that can be traversed from the start any number of times.
///
/// Each call to [`traverse`](Self::traverse) returns a brand-new iterator positioned at
/// the first element. Iterators obtained this way are independent: advancing one does
/// not move any other.
pub trait Traverse {
    /// The element type produced by traversal.
    type Item;

    /// The iterator returned by [`traverse`](Self::traverse).
    type Iter<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Starts a new traversal.
    fn traverse(&self) -> Self::Iter<'_>;

    /// Collects a fresh traversal into a sorted `Vec`.
    fn sorted(&self) -> Vec<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut items: Vec<_> = self.traverse().collect();
        items.sort();
        items
    }

    /// Collects a fresh traversal into a `Vec` sorted with `compare`.
    fn sorted_by<F>(&self, compare: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut items: Vec<_> = self.traverse().collect();
        items.sort_by(compare);
        items
    }

    /// Collects a fresh traversal into a `Vec` sorted by `key`.
    fn sorted_by_key<K, F>(&self, key: F) -> Vec<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut items: Vec<_> = self.traverse().collect();
        items.sort_by_key(key);
        items
    }
}

/// Adapters from any [`IndexedContainer`] to the iterators of this crate.
///
/// This is the explicit replacement for iterating "anything with a length and a
/// lookup": the adapter is built on request and borrows the container.
pub trait ContainerExt: IndexedContainer {
    /// Returns a lazy iterator over the container, from the first element.
    fn lazy_iter(&self) -> LazyIter<'_, Self> {
        LazyIter::new(self)
    }

    /// Returns an endless round-robin iterator over the container.
    fn cycle(&self) -> Cyclic<'_, Self> {
        Cyclic::new(self)
    }
}

impl<C> ContainerExt for C where C: IndexedContainer + ?Sized {}

#[cfg(test)]
mod tests {
    use lazyseq_core::Seq;

    use super::*;

    /// Traverses `0..len`, reversed.
    #[derive(Debug)]
    struct Countdown(u32);

    impl Traverse for Countdown {
        type Item = u32;
        type Iter<'a> = std::iter::Rev<std::ops::Range<u32>>;

        fn traverse(&self) -> Self::Iter<'_> {
            (0..self.0).rev()
        }
    }

    #[test]
    fn test_sorting_goes_through_traversal() {
        let countdown = Countdown(5);
        assert_eq!(countdown.sorted(), [0, 1, 2, 3, 4]);
        assert_eq!(countdown.sorted_by(|a, b| b.cmp(a)), [4, 3, 2, 1, 0]);
        assert_eq!(countdown.sorted_by_key(|&n| n % 3), [3, 0, 4, 1, 2]);
    }

    #[test]
    fn test_container_ext() {
        let seq = Seq::from(["n", "s", "e", "w"]);
        let collected: Vec<_> = seq.lazy_iter().collect();
        assert_eq!(collected, ["n", "s", "e", "w"]);
        let cycled: Vec<_> = seq.cycle().take(6).collect();
        assert_eq!(cycled, ["n", "s", "e", "w", "n", "s"]);
    }
}
