//! A positional container whose elements are computed on demand.

use std::cell::RefCell;

use crate::{IndexedContainer, InvalidArgument, Seq, SeqError};

/// The first `len` Fibonacci numbers, starting `1, 1, 2, 3, 5, ...`.
///
/// Nothing is computed at construction. Looking up an element computes (and memoises)
/// every number up to it, so later lookups of smaller or equal positions are free.
///
/// # Examples
///
/// ```
/// use lazyseq_core::{Fibonacci, IndexedContainer, Seq, SliceSpec};
///
/// let fib = Fibonacci::new(8)?;
/// assert_eq!(fib.get(3)?, 3);
/// assert_eq!(fib.get(-1)?, 21);
/// assert_eq!(fib.get_range(SliceSpec::new(Some(0), Some(5), Some(2)))?, Seq::from([1, 2, 5]));
/// assert!(fib.get(8).is_err());
/// # Ok::<(), lazyseq_core::SeqError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Fibonacci {
    len: usize,
    memo: RefCell<Vec<u128>>,
}

impl Fibonacci {
    /// The largest length whose every element fits in a `u128`.
    pub const MAX_LEN: usize = 186;

    /// Creates the sequence of the first `len` Fibonacci numbers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::LengthOverflow`] if `len` exceeds [`Self::MAX_LEN`].
    pub fn new(len: usize) -> Result<Self, SeqError> {
        if len > Self::MAX_LEN {
            return Err(InvalidArgument::LengthOverflow(len).into());
        }
        Ok(Self {
            len,
            memo: RefCell::new(vec![1, 1]),
        })
    }

    /// Returns how many numbers have been computed so far.
    #[must_use]
    pub fn computed(&self) -> usize {
        self.memo.borrow().len().min(self.len)
    }

    fn compute(&self, position: usize) -> u128 {
        let mut memo = self.memo.borrow_mut();
        while memo.len() <= position {
            let next = memo[memo.len() - 1] + memo[memo.len() - 2];
            memo.push(next);
        }
        memo[position]
    }
}

impl IndexedContainer for Fibonacci {
    type Item = u128;
    type Slice = Seq<u128>;

    fn len(&self) -> usize {
        self.len
    }

    fn element(&self, position: usize) -> Option<u128> {
        (position < self.len).then(|| self.compute(position))
    }
}

impl PartialEq for Fibonacci {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
    }
}

impl Eq for Fibonacci {}
