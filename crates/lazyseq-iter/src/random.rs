//! A seeded, restartable iterable of random integers.

use std::iter::FusedIterator;

use lazyseq_core::{InvalidArgument, SeqError};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::Traverse;

/// Options for [`RandomInts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomIntsOptions {
    /// Seed used at the start of every traversal.
    pub seed: u64,
    /// Inclusive lower bound of generated values.
    pub lower: i64,
    /// Inclusive upper bound of generated values.
    pub upper: i64,
}

impl Default for RandomIntsOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            lower: 0,
            upper: 10,
        }
    }
}

/// `length` random integers drawn from `[lower, upper]`.
///
/// The generator is reseeded at the start of every traversal, so each pass yields the same
/// values. Nothing is generated until a traversal asks for it.
///
/// # Examples
///
/// ```
/// use lazyseq_iter::{RandomInts, RandomIntsOptions, Traverse};
///
/// let ints = RandomInts::new(10, RandomIntsOptions { seed: 7, ..Default::default() })?;
/// let first: Vec<_> = ints.traverse().collect();
/// let second: Vec<_> = ints.traverse().collect();
/// assert_eq!(first, second);
/// assert!(first.iter().all(|n| (0..=10).contains(n)));
///
/// let sorted = ints.sorted();
/// assert!(sorted.is_sorted());
/// # Ok::<(), lazyseq_core::SeqError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomInts {
    len: usize,
    options: RandomIntsOptions,
}

impl RandomInts {
    /// Creates the iterable.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyRange`] if `lower > upper`.
    pub fn new(len: usize, options: RandomIntsOptions) -> Result<Self, SeqError> {
        let RandomIntsOptions { lower, upper, .. } = options;
        if lower > upper {
            return Err(InvalidArgument::EmptyRange { lower, upper }.into());
        }
        Ok(Self { len, options })
    }

    /// Returns how many integers each traversal yields.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if traversals yield nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the options this iterable was created with.
    #[must_use]
    pub const fn options(&self) -> &RandomIntsOptions {
        &self.options
    }
}

impl Traverse for RandomInts {
    type Item = i64;
    type Iter<'a> = RandomIntsIter;

    fn traverse(&self) -> Self::Iter<'_> {
        RandomIntsIter {
            rng: Pcg64::seed_from_u64(self.options.seed),
            remaining: self.len,
            lower: self.options.lower,
            upper: self.options.upper,
        }
    }
}

/// The iterator returned by [`RandomInts::traverse`].
#[derive(Debug, Clone)]
pub struct RandomIntsIter {
    rng: Pcg64,
    remaining: usize,
    lower: i64,
    upper: i64,
}

impl Iterator for RandomIntsIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.random_range(self.lower..=self.upper))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RandomIntsIter {}
impl FusedIterator for RandomIntsIter {}
