//! An owned, growable positional container.

use std::{mem, ops::Add};

use crate::{
    IndexedContainer, InvalidArgument, MutableContainer, SeqError, SliceSpec,
    container::{normalize_index, normalize_insert_index},
};

/// An owned sequence of elements addressed by position.
///
/// `Seq` owns its elements exclusively. Lookups through [`IndexedContainer`] hand out
/// clones, and the combining operations ([`concat`](Self::concat),
/// [`repeat`](Self::repeat), `&a + &b`) clone every element they copy, so the result never
/// aliases the inputs. To share elements on purpose, store `Rc<T>` and clone the handles.
/// `a + b` on owned values moves the elements instead.
///
/// # Examples
///
/// ```
/// use lazyseq_core::{Access, Assignment, IndexedContainer, MutableContainer, Seq, SliceSpec};
///
/// let mut letters: Seq<char> = "abcdef".chars().collect();
/// assert_eq!(letters.get(-1)?, 'f');
/// assert_eq!(letters.get_range(SliceSpec::from(1..4))?, Seq::from(['b', 'c', 'd']));
///
/// letters.assign(SliceSpec::from(0..2), Assignment::Many(vec!['x']))?;
/// assert_eq!(letters, Seq::from(['x', 'c', 'd', 'e', 'f']));
///
/// letters.delete(Access::Index(-1))?;
/// assert_eq!(letters.len(), 4);
/// # Ok::<(), lazyseq_core::SeqError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Seq<T> {
    items: Vec<T>,
}

impl<T> Seq<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the sequence, returning its elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns a reference to the element at `index` without cloning it.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if the rebased index is outside `[0, len)`.
    pub fn get_ref(&self, index: isize) -> Result<&T, SeqError> {
        let position = normalize_index(index, self.len())?;
        Ok(&self.items[position])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if the rebased index is outside `[0, len)`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, SeqError> {
        let position = normalize_index(index, self.len())?;
        Ok(&mut self.items[position])
    }
}

impl<T: Clone> Seq<T> {
    /// Returns a new sequence holding clones of `self` followed by clones of `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        self.items.iter().chain(&other.items).cloned().collect()
    }

    /// Returns a new sequence holding `count` consecutive clones of this one.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] if the resulting length would overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq_core::Seq;
    ///
    /// let row = Seq::from([vec![0], vec![1]]);
    /// let mut grid = row.repeat(2)?;
    /// grid.get_mut(0)?.push(9);
    ///
    /// // Every repetition is an independent clone.
    /// assert_eq!(grid.as_slice(), [vec![0, 9], vec![1], vec![0], vec![1]]);
    /// # Ok::<(), lazyseq_core::SeqError>(())
    /// ```
    pub fn repeat(&self, count: usize) -> Result<Self, SeqError> {
        let total = self
            .len()
            .checked_mul(count)
            .filter(|&total| isize::try_from(total).is_ok())
            .ok_or(InvalidArgument::LengthOverflow(self.len().saturating_mul(count)))?;
        let mut items = Vec::with_capacity(total);
        for _ in 0..count {
            items.extend_from_slice(&self.items);
        }
        Ok(Self { items })
    }
}

impl<T: Clone> IndexedContainer for Seq<T> {
    type Item = T;
    type Slice = Self;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn element(&self, position: usize) -> Option<T> {
        self.items.get(position).cloned()
    }
}

impl<T: Clone> MutableContainer for Seq<T> {
    fn set(&mut self, index: isize, item: T) -> Result<T, SeqError> {
        let position = normalize_index(index, self.len())?;
        Ok(mem::replace(&mut self.items[position], item))
    }

    fn insert(&mut self, index: isize, item: T) -> Result<(), SeqError> {
        let position = normalize_insert_index(index, self.len())?;
        self.items.insert(position, item);
        Ok(())
    }

    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn remove(&mut self, index: isize) -> Result<T, SeqError> {
        let position = normalize_index(index, self.len())?;
        Ok(self.items.remove(position))
    }

    #[expect(clippy::cast_sign_loss)]
    fn remove_range(&mut self, spec: SliceSpec) -> Result<usize, SeqError> {
        let range = spec.resolve(self.len())?;
        let count = range.len();
        if count == 0 {
            return Ok(0);
        }
        log::debug!("removing {count} elements selected by {spec}");

        if range.is_contiguous() {
            // A non-empty forward range has `0 <= start < stop <= len`.
            self.items
                .drain(range.start() as usize..range.stop() as usize);
            return Ok(count);
        }

        let mut doomed = vec![false; self.items.len()];
        for position in range.indices() {
            doomed[position] = true;
        }
        let mut position = 0;
        self.items.retain(|_| {
            let keep = !doomed[position];
            position += 1;
            keep
        });
        Ok(count)
    }

    #[expect(clippy::cast_sign_loss)]
    fn replace_range(&mut self, spec: SliceSpec, items: Vec<T>) -> Result<(), SeqError> {
        let range = spec.resolve(self.len())?;

        if range.is_contiguous() {
            // A forward range has `0 <= start <= len`; an inverted one inserts at `start`.
            let start = range.start() as usize;
            let stop = range.stop().max(range.start()) as usize;
            log::debug!("splicing {} elements over {start}..{stop}", items.len());
            self.items.splice(start..stop, items);
            return Ok(());
        }

        let expected = range.len();
        if items.len() != expected {
            return Err(InvalidArgument::ExtendedSliceLength {
                expected,
                given: items.len(),
            }
            .into());
        }
        log::debug!("overwriting {expected} elements selected by {spec}");
        for (position, item) in range.indices().zip(items) {
            self.items[position] = item;
        }
        Ok(())
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Seq<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Seq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Add for Seq<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.items.extend(rhs.items);
        self
    }
}

impl<T: Clone> Add for &Seq<T> {
    type Output = Seq<T>;

    fn add(self, rhs: Self) -> Self::Output {
        self.concat(rhs)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Access, Assignment};

    fn letters() -> Seq<char> {
        "abcdef".chars().collect()
    }

    mod lookup {
        use super::*;

        #[test]
        fn test_get_and_negative_get() {
            let seq = letters();
            assert_eq!(seq.get(0), Ok('a'));
            assert_eq!(seq.get(-1), Ok('f'));
            assert_eq!(seq.get(-6), Ok('a'));
            assert_eq!(seq.get(100), Err(SeqError::out_of_range(100, 6)));
            assert_eq!(seq.get(-100), Err(SeqError::out_of_range(-100, 6)));
        }

        #[test]
        fn test_get_range_scenarios() {
            let seq = letters();
            assert_eq!(
                seq.get_range(SliceSpec::new(Some(1), Some(4), Some(1))),
                Ok(Seq::from(['b', 'c', 'd']))
            );
            assert_eq!(
                seq.get_range(SliceSpec::reversed()),
                Ok(Seq::from(['f', 'e', 'd', 'c', 'b', 'a']))
            );
            assert_eq!(
                seq.get_range(SliceSpec::new(Some(3), Some(-1), Some(-1))),
                Ok(Seq::new())
            );
        }

        #[test]
        fn test_get_ref_does_not_clone() {
            let seq = Seq::from([String::from("x")]);
            assert!(std::ptr::eq(seq.get_ref(0).unwrap(), &seq.as_slice()[0]));
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn test_set_returns_previous() {
            let mut seq = letters();
            assert_eq!(seq.set(-1, 'z'), Ok('f'));
            assert_eq!(seq.get(5), Ok('z'));
            assert!(seq.set(6, 'q').unwrap_err().is_index_out_of_range());
            assert_eq!(seq.get(5), Ok('z'));
        }

        #[test]
        fn test_insert_bounds() {
            let mut seq = Seq::from([1, 2, 3]);
            seq.insert(3, 4).unwrap();
            seq.insert(0, 0).unwrap();
            seq.insert(-1, 9).unwrap();
            assert_eq!(seq.as_slice(), [0, 1, 2, 3, 9, 4]);
            assert!(seq.insert(7, 5).is_err());
            assert!(seq.insert(-7, 5).is_err());
            assert_eq!(seq.len(), 6);
        }

        #[test]
        fn test_delete_index_and_ranges() {
            let mut seq = Seq::from([1, 2, 3, 4, 5]);
            assert_eq!(seq.delete(Access::Index(0)), Ok(1));
            assert_eq!(seq.as_slice(), [2, 3, 4, 5]);
            assert_eq!(seq.delete(SliceSpec::from(0..2)), Ok(2));
            assert_eq!(seq.as_slice(), [4, 5]);
            assert_eq!(seq.delete(Access::Index(-1)), Ok(1));
            assert_eq!(seq.as_slice(), [4]);
            assert_eq!(seq.delete(SliceSpec::from(5..9)), Ok(0));
        }

        #[test]
        fn test_delete_strided() {
            let mut seq: Seq<_> = (0..10).collect();
            assert_eq!(seq.delete(SliceSpec::new(None, None, Some(-3))), Ok(4));
            assert_eq!(seq.as_slice(), [1, 2, 4, 5, 7, 8]);
        }

        #[test]
        fn test_replace_contiguous_changes_length() {
            let mut seq = Seq::from([0, 1, 2]);
            seq.replace_range(SliceSpec::from(0..2), vec![10, 20, 30])
                .unwrap();
            assert_eq!(seq.as_slice(), [10, 20, 30, 2]);
            seq.replace_range(SliceSpec::from(1..), vec![]).unwrap();
            assert_eq!(seq.as_slice(), [10]);
        }

        #[test]
        fn test_replace_inverted_range_inserts() {
            let mut seq = Seq::from([0, 1, 2, 3]);
            seq.replace_range(SliceSpec::from(3..1), vec![7]).unwrap();
            assert_eq!(seq.as_slice(), [0, 1, 2, 7, 3]);
        }

        #[test]
        fn test_replace_extended_requires_same_length() {
            let mut seq = Seq::from([0, 1, 2, 3, 4]);
            let spec = SliceSpec::new(None, None, Some(2));
            let err = seq.replace_range(spec, vec![9, 9]).unwrap_err();
            assert_eq!(
                err,
                SeqError::from(InvalidArgument::ExtendedSliceLength {
                    expected: 3,
                    given: 2
                })
            );
            assert_eq!(seq.as_slice(), [0, 1, 2, 3, 4]);

            seq.replace_range(spec, vec![7, 8, 9]).unwrap();
            assert_eq!(seq.as_slice(), [7, 1, 8, 3, 9]);
            seq.replace_range(SliceSpec::reversed(), vec![1, 2, 3, 4, 5])
                .unwrap();
            assert_eq!(seq.as_slice(), [5, 4, 3, 2, 1]);
        }

        #[test]
        fn test_assign_shapes() {
            let mut seq = Seq::from([0, 1, 2]);
            seq.assign(1_isize, Assignment::One(5)).unwrap();
            seq.assign(SliceSpec::from(..1), Assignment::Many(vec![8, 9]))
                .unwrap();
            assert_eq!(seq.as_slice(), [8, 9, 5, 2]);

            let mismatch = SeqError::from(InvalidArgument::ShapeMismatch);
            assert_eq!(seq.assign(0_isize, Assignment::Many(vec![1])), Err(mismatch));
            assert_eq!(seq.assign(SliceSpec::FULL, Assignment::One(1)), Err(mismatch));
            assert_eq!(seq.as_slice(), [8, 9, 5, 2]);
        }

        #[test]
        fn test_zero_step_leaves_state() {
            let mut seq = Seq::from([0, 1, 2]);
            let zero = SliceSpec::FULL.with_step(0);
            assert!(seq.remove_range(zero).unwrap_err().is_invalid_argument());
            assert!(seq.replace_range(zero, vec![]).is_err());
            assert_eq!(seq.as_slice(), [0, 1, 2]);
        }
    }

    mod combining {
        use super::*;

        #[test]
        fn test_concat_clones() {
            let a = Seq::from([vec![1], vec![2]]);
            let b = Seq::from([vec![3]]);
            let mut joined = &a + &b;
            joined.get_mut(0).unwrap().push(100);
            assert_eq!(a.as_slice(), [vec![1], vec![2]]);
            assert_eq!(joined.as_slice(), [vec![1, 100], vec![2], vec![3]]);
        }

        #[test]
        fn test_owned_add_moves() {
            let joined = Seq::from([1, 2]) + Seq::from([3]);
            assert_eq!(joined.as_slice(), [1, 2, 3]);
        }

        #[test]
        fn test_repeat() {
            assert_eq!(Seq::from([1, 2]).repeat(3).unwrap().as_slice(), [1, 2, 1, 2, 1, 2]);
            assert!(Seq::from([1, 2]).repeat(0).unwrap().is_empty());
            assert_eq!(
                Seq::from([1, 2]).repeat(usize::MAX),
                Err(InvalidArgument::LengthOverflow(usize::MAX).into())
            );
            assert_eq!(
                Seq::from([0_u8; 2]).repeat(isize::MAX.unsigned_abs()),
                Err(InvalidArgument::LengthOverflow(usize::MAX - 1).into())
            );
        }
    }

    proptest! {
        #[test]
        fn test_double_reverse_is_identity(values in proptest::collection::vec(any::<u8>(), 0..64)) {
            let seq = Seq::from(values);
            let twice = seq
                .get_range(SliceSpec::reversed())
                .and_then(|r| r.get_range(SliceSpec::reversed()))
                .unwrap();
            prop_assert_eq!(twice, seq);
        }

        #[test]
        fn test_failed_mutation_keeps_state(values in proptest::collection::vec(any::<u8>(), 0..16), index in -40_isize..40) {
            let mut seq = Seq::from(values.clone());
            let result = seq.set(index, 0);
            if result.is_err() {
                prop_assert_eq!(seq.as_slice(), values.as_slice());
            }
        }
    }
}
