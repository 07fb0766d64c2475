//! Unbounded iterators whose elements are computed from the cursor.

use std::iter::FusedIterator;

/// An endless iterator producing `generate(0)`, `generate(1)`, ...
///
/// `generate` is called with the cursor only, so every element is a fresh value
/// that shares nothing with the ones before it. The iterator never ends on its own;
/// bound it with [`Iterator::take`] or an exit condition.
///
/// # Examples
///
/// ```
/// use lazyseq_iter::Computed;
///
/// let cubes: Vec<_> = Computed::new(|i| i * i * i).take(4).collect();
/// assert_eq!(cubes, [0, 1, 8, 27]);
/// ```
#[derive(Debug, Clone)]
pub struct Computed<F> {
    generate: F,
    cursor: usize,
}

impl<F, T> Computed<F>
where
    F: Fn(usize) -> T,
{
    /// Creates an iterator starting at cursor `0`.
    #[must_use]
    pub const fn new(generate: F) -> Self {
        Self {
            generate,
            cursor: 0,
        }
    }

    /// Returns the cursor value the next element will be computed from.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }
}

impl<F, T> Iterator for Computed<F>
where
    F: Fn(usize) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = (self.generate)(self.cursor);
        self.cursor = self.cursor.wrapping_add(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<F, T> FusedIterator for Computed<F> where F: Fn(usize) -> T {}
