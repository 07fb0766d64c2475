//! Numeric series computed one element at a time.
//!
//! Neither series stores its elements: each traversal computes the next value only when
//! it is asked for.

use std::iter::{FusedIterator, Take};

use crate::{Computed, Traverse};

/// The squares `0, 1, 4, 9, ...` of the first `len` integers.
///
/// # Examples
///
/// ```
/// use lazyseq_iter::{Squares, Traverse};
///
/// let squares = Squares::new(5);
/// assert_eq!(squares.traverse().collect::<Vec<_>>(), [0, 1, 4, 9, 16]);
/// // Traversing again starts over.
/// assert_eq!(squares.traverse().last(), Some(16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Squares {
    len: usize,
}

/// The iterator returned by [`Squares::traverse`].
pub type SquaresIter = Take<Computed<fn(usize) -> u128>>;

impl Squares {
    /// Creates the series of the first `len` squares.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Returns the number of squares in the series.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the series is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn square(i: usize) -> u128 {
    let i = i as u128;
    i * i
}

impl Traverse for Squares {
    type Item = u128;
    type Iter<'a> = SquaresIter;

    fn traverse(&self) -> Self::Iter<'_> {
        Computed::new(square as fn(usize) -> u128).take(self.len)
    }
}

/// The factorials `0!, 1!, 2!, ...`, either the first `n` of them or as many as fit in a
/// `u128`.
///
/// # Examples
///
/// ```
/// use lazyseq_iter::{Factorials, Traverse};
///
/// let facts = Factorials::new(5);
/// assert_eq!(facts.traverse().collect::<Vec<_>>(), [1, 1, 2, 6, 24]);
///
/// // The unbounded series ends at the largest factorial a `u128` can hold.
/// assert_eq!(Factorials::unbounded().traverse().count(), 35);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factorials {
    limit: Option<usize>,
}

impl Factorials {
    /// Creates the series of the first `len` factorials.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { limit: Some(len) }
    }

    /// Creates the series that runs until the next factorial would overflow.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { limit: None }
    }
}

impl Traverse for Factorials {
    type Item = u128;
    type Iter<'a> = FactorialsIter;

    fn traverse(&self) -> Self::Iter<'_> {
        FactorialsIter {
            cursor: 0,
            limit: self.limit,
            exhausted: false,
        }
    }
}

/// The iterator returned by [`Factorials::traverse`].
#[derive(Debug, Clone)]
pub struct FactorialsIter {
    cursor: usize,
    limit: Option<usize>,
    exhausted: bool,
}

fn checked_factorial(n: usize) -> Option<u128> {
    (1..=n).try_fold(1_u128, |acc, k| acc.checked_mul(k as u128))
}

impl Iterator for FactorialsIter {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        if self.exhausted || self.limit.is_some_and(|limit| self.cursor >= limit) {
            self.exhausted = true;
            return None;
        }
        let Some(value) = checked_factorial(self.cursor) else {
            log::trace!("factorial of {} overflows, ending series", self.cursor);
            self.exhausted = true;
            return None;
        };
        self.cursor += 1;
        Some(value)
    }
}

impl FusedIterator for FactorialsIter {}
