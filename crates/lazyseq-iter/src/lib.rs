//! Lazy, restartable iteration over positional containers.
//!
//! # Overview
//!
//! - [`LazyIter`] walks any [`IndexedContainer`](lazyseq_core::IndexedContainer) one
//!   lookup at a time and stays exhausted once it reports the end.
//! - [`Iterable`] wraps a container so that every traversal starts from the beginning.
//! - [`Traverse`] is implemented by everything that can be traversed repeatedly, and
//!   sorts through a fresh traversal.
//! - [`ContainerExt`] adapts any container to [`LazyIter`] and [`Cyclic`].
//! - [`Computed`], [`Squares`], [`Factorials`] and [`RandomInts`] produce values that are
//!   never stored.
//! - [`SharedSeq`] can be modified while its iterators are alive.
//!
//! # Examples
//!
//! ```
//! use lazyseq_core::Seq;
//! use lazyseq_iter::{Iterable, Traverse};
//!
//! let words = Iterable::new(Seq::from(["pear", "apple", "fig"]));
//! let lengths: Vec<_> = words.traverse().map(str::len).collect();
//! assert_eq!(lengths, [4, 5, 3]);
//! assert_eq!(words.sorted(), ["apple", "fig", "pear"]);
//! ```

mod computed;
mod cycle;
mod iterable;
mod lazy_iter;
mod random;
mod series;
mod shared;
mod traverse;

pub use self::{
    computed::Computed,
    cycle::Cyclic,
    iterable::Iterable,
    lazy_iter::LazyIter,
    random::{RandomInts, RandomIntsIter, RandomIntsOptions},
    series::{Factorials, FactorialsIter, Squares, SquaresIter},
    shared::{SharedIter, SharedSeq},
    traverse::{ContainerExt, Traverse},
};
