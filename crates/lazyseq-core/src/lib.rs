//! Positional containers and slice resolution.
//!
//! This crate provides the building blocks that the traversal crate iterates over.
//!
//! # Overview
//!
//! 1. **Slices** - [`slice`]: [`SliceSpec`] describes an open-ended, possibly negative
//!    `start:stop:step` request, and [`slice::resolve`] turns it into a concrete
//!    [`ResolvedRange`] for a given length.
//!
//! 2. **Containers** - [`container`] and [`mutable`]: [`IndexedContainer`] derives
//!    negative indexing, range extraction and [`Access`] dispatch from a length and a
//!    positional lookup. [`MutableContainer`] adds replacement, insertion and deletion
//!    by index or by range.
//!
//! 3. **Concrete containers**
//!    - [`Seq`]: an owned, growable sequence.
//!    - [`Point`] and [`Polygon`]: validated coordinates and a mutable sequence of them.
//!    - [`Fibonacci`]: a sequence whose elements are computed only when looked up.
//!
//! # Examples
//!
//! ```
//! use lazyseq_core::{Access, IndexedContainer, Selection, Seq, SliceSpec};
//!
//! let letters: Seq<char> = "abcdef".chars().collect();
//!
//! assert_eq!(letters.select(Access::Index(-2))?, Selection::One('e'));
//! assert_eq!(
//!     letters.select(SliceSpec::reversed())?,
//!     Selection::Many("fedcba".chars().collect())
//! );
//! # Ok::<(), lazyseq_core::SeqError>(())
//! ```

pub mod container;
mod error;
mod fibonacci;
pub mod mutable;
mod point;
mod seq;
pub mod slice;

pub use self::{
    container::{Access, IndexedContainer, Selection},
    error::{EndOfSequence, InvalidArgument, SeqError},
    fibonacci::Fibonacci,
    mutable::{Assignment, MutableContainer},
    point::{IntoPoint, Point, Polygon},
    seq::Seq,
    slice::{ResolvedRange, SliceSpec},
};
