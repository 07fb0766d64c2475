//! Slice specifications and their resolution against a container length.
//!
//! A [`SliceSpec`] is a `start:stop:step` triple where each part may be omitted or
//! negative. Resolving it against a length produces a [`ResolvedRange`] whose parts are
//! concrete and clamped, so that stepping from `start` towards `stop` visits exactly the
//! selected positions.
//!
//! Resolution only looks at the length, never at the elements, so one spec can be reused
//! against containers of different sizes.
//!
//! # Examples
//!
//! ```
//! use lazyseq_core::slice::SliceSpec;
//!
//! let reversed = SliceSpec::reversed();
//!
//! let range = reversed.resolve(6)?;
//! assert_eq!((range.start(), range.stop(), range.step()), (5, -1, -1));
//! assert_eq!(range.indices().collect::<Vec<_>>(), [5, 4, 3, 2, 1, 0]);
//!
//! // The same spec works for any length.
//! assert_eq!(reversed.resolve(2)?.indices().collect::<Vec<_>>(), [1, 0]);
//! # Ok::<(), lazyseq_core::SeqError>(())
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{Range, RangeFrom, RangeFull, RangeTo},
};

use crate::{InvalidArgument, SeqError};

/// A possibly open-ended, possibly negative `start:stop:step` request.
///
/// `None` in any position means "use the default for the direction of travel".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceSpec {
    /// First position to select.
    pub start: Option<isize>,
    /// Position at which selection stops (exclusive).
    pub stop: Option<isize>,
    /// Distance between selected positions; negative values walk backwards.
    pub step: Option<isize>,
}

impl SliceSpec {
    /// The spec selecting every element in order (`[:]`).
    pub const FULL: Self = Self::new(None, None, None);

    /// Creates a spec from its three optional parts.
    #[must_use]
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Returns the spec selecting every element in reverse order (`[::-1]`).
    #[must_use]
    pub const fn reversed() -> Self {
        Self::new(None, None, Some(-1))
    }

    /// Returns a copy of this spec with the given step.
    #[must_use]
    pub const fn with_step(self, step: isize) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Resolves this spec against a container of `len` elements.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] if the step is zero or if `len` does not fit in
    /// an `isize`.
    pub fn resolve(&self, len: usize) -> Result<ResolvedRange, SeqError> {
        resolve(*self, len)
    }
}

impl Display for SliceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part(f: &mut fmt::Formatter<'_>, value: Option<isize>) -> fmt::Result {
            match value {
                Some(v) => write!(f, "{v}"),
                None => f.write_str("None"),
            }
        }
        f.write_str("slice(")?;
        part(f, self.start)?;
        f.write_str(", ")?;
        part(f, self.stop)?;
        f.write_str(", ")?;
        part(f, self.step)?;
        f.write_str(")")
    }
}

impl From<Range<isize>> for SliceSpec {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceSpec {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceSpec {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::FULL
    }
}

/// A concrete `start`, `stop`, `step` triple produced by [`resolve`].
///
/// Every position visited while stepping from `start` towards `stop` lies in
/// `[0, len)`. `start` and `stop` themselves stay in `[-1, len]`; `-1` is the
/// "before the first element" sentinel used by backward ranges and is never visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedRange {
    start: isize,
    stop: isize,
    step: isize,
}

impl ResolvedRange {
    /// Returns the first position (or the sentinel when the range is empty).
    #[must_use]
    pub const fn start(self) -> isize {
        self.start
    }

    /// Returns the exclusive end position.
    #[must_use]
    pub const fn stop(self) -> isize {
        self.stop
    }

    /// Returns the step, which is never zero.
    #[must_use]
    pub const fn step(self) -> isize {
        self.step
    }

    /// Returns `true` if the range visits consecutive ascending positions.
    #[must_use]
    pub const fn is_contiguous(self) -> bool {
        self.step == 1
    }

    /// Returns the number of positions the range visits.
    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub const fn len(self) -> usize {
        // Both differences are non-negative inside their branches.
        if self.step > 0 && self.start < self.stop {
            (self.stop - self.start - 1) as usize / self.step.unsigned_abs() + 1
        } else if self.step < 0 && self.stop < self.start {
            (self.start - self.stop - 1) as usize / self.step.unsigned_abs() + 1
        } else {
            0
        }
    }

    /// Returns `true` if the range visits no positions.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the visited positions, in visiting order.
    #[must_use]
    pub const fn indices(self) -> Indices {
        Indices {
            front: self.start,
            step: self.step,
            remaining: self.len(),
        }
    }
}

impl IntoIterator for ResolvedRange {
    type Item = usize;
    type IntoIter = Indices;

    fn into_iter(self) -> Self::IntoIter {
        self.indices()
    }
}

/// Resolves `spec` against a container of `len` elements.
///
/// The rules follow Python's `slice.indices`:
///
/// - `step` defaults to `1` and must not be `0`.
/// - Walking forwards, `start` defaults to `0` and `stop` to `len`; negative values are
///   rebased by `len` and clamped to `0`, values past the end clamp to `len`.
/// - Walking backwards, `start` defaults to `len - 1` and `stop` to the `-1` sentinel;
///   negative values are rebased by `len` and clamped to `-1`, values past the last
///   element clamp to `len - 1`.
///
/// # Errors
///
/// Returns [`SeqError::InvalidArgument`] if the step is zero or `len` exceeds `isize::MAX`.
///
/// # Examples
///
/// ```
/// use lazyseq_core::slice::{SliceSpec, resolve};
///
/// // Starting at 3 and walking backwards towards 5 selects nothing.
/// let range = resolve(SliceSpec::new(Some(3), Some(-1), Some(-1)), 6)?;
/// assert_eq!((range.start(), range.stop(), range.step()), (3, 5, -1));
/// assert!(range.is_empty());
/// # Ok::<(), lazyseq_core::SeqError>(())
/// ```
pub fn resolve(spec: SliceSpec, len: usize) -> Result<ResolvedRange, SeqError> {
    let step = spec.step.unwrap_or(1);
    if step == 0 {
        return Err(InvalidArgument::ZeroStep.into());
    }
    let len = isize::try_from(len).map_err(|_| InvalidArgument::LengthOverflow(len))?;

    let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
    let clamp = |value: isize| {
        if value < 0 {
            (value + len).max(lower)
        } else {
            value.min(upper)
        }
    };

    let (default_start, default_stop) = if step < 0 { (upper, lower) } else { (lower, upper) };
    let range = ResolvedRange {
        start: spec.start.map_or(default_start, clamp),
        stop: spec.stop.map_or(default_stop, clamp),
        step,
    };
    log::trace!("resolved {spec} against length {len} to {range:?}");
    Ok(range)
}

/// Iterator over the positions visited by a [`ResolvedRange`].
#[derive(Debug, Clone)]
pub struct Indices {
    front: isize,
    step: isize,
    remaining: usize,
}

impl Iterator for Indices {
    type Item = usize;

    #[inline]
    #[expect(clippy::cast_sign_loss)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.remaining -= 1;
        // Only advance while another visited position exists, so the cursor never
        // leaves the valid range.
        if self.remaining > 0 {
            self.front += self.step;
        }
        Some(current as usize)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Indices {
    #[inline]
    #[expect(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let back = self.front + self.remaining as isize * self.step;
        Some(back as usize)
    }
}

impl FusedIterator for Indices {}
impl ExactSizeIterator for Indices {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn triple(spec: SliceSpec, len: usize) -> (isize, isize, isize) {
        let range = resolve(spec, len).unwrap();
        (range.start(), range.stop(), range.step())
    }

    fn collect(spec: SliceSpec, len: usize) -> Vec<usize> {
        resolve(spec, len).unwrap().indices().collect()
    }

    mod defaults {
        use super::*;

        #[test]
        fn test_forward_defaults() {
            assert_eq!(triple(SliceSpec::FULL, 6), (0, 6, 1));
            assert_eq!(triple(SliceSpec::from(2..), 6), (2, 6, 1));
            assert_eq!(triple(SliceSpec::from(..4), 6), (0, 4, 1));
        }

        #[test]
        fn test_backward_defaults() {
            assert_eq!(triple(SliceSpec::reversed(), 6), (5, -1, -1));
            assert_eq!(triple(SliceSpec::reversed(), 0), (-1, -1, -1));
        }

        #[test]
        fn test_zero_step_rejected() {
            let err = resolve(SliceSpec::FULL.with_step(0), 6).unwrap_err();
            assert_eq!(err, SeqError::from(InvalidArgument::ZeroStep));
        }
    }

    mod clamping {
        use super::*;

        #[test]
        fn test_forward_clamps() {
            assert_eq!(triple(SliceSpec::from(-2..100), 6), (4, 6, 1));
            assert_eq!(triple(SliceSpec::from(-100..-100), 6), (0, 0, 1));
            assert_eq!(triple(SliceSpec::from(7..9), 6), (6, 6, 1));
        }

        #[test]
        fn test_backward_clamps() {
            let spec = SliceSpec::new(Some(100), Some(-100), Some(-2));
            assert_eq!(triple(spec, 6), (5, -1, -2));
            let spec = SliceSpec::new(Some(6), Some(6), Some(-1));
            assert_eq!(triple(spec, 6), (5, 5, -1));
        }
    }

    mod scenarios {
        use super::*;

        #[test]
        fn test_middle_range() {
            let spec = SliceSpec::new(Some(1), Some(4), Some(1));
            assert_eq!(triple(spec, 6), (1, 4, 1));
            assert_eq!(collect(spec, 6), [1, 2, 3]);
        }

        #[test]
        fn test_full_reverse() {
            assert_eq!(collect(SliceSpec::reversed(), 6), [5, 4, 3, 2, 1, 0]);
        }

        #[test]
        fn test_backward_past_stop_is_empty() {
            let spec = SliceSpec::new(Some(3), Some(-1), Some(-1));
            assert_eq!(triple(spec, 6), (3, 5, -1));
            assert!(collect(spec, 6).is_empty());
        }

        #[test]
        fn test_strided() {
            assert_eq!(collect(SliceSpec::new(Some(0), Some(5), Some(2)), 10), [0, 2, 4]);
            assert_eq!(collect(SliceSpec::new(None, None, Some(-3)), 10), [9, 6, 3, 0]);
        }

        #[test]
        fn test_huge_step() {
            assert_eq!(collect(SliceSpec::FULL.with_step(isize::MAX), 4), [0]);
            assert_eq!(collect(SliceSpec::FULL.with_step(isize::MIN), 4), [3]);
        }
    }

    #[test]
    fn test_indices_from_both_ends() {
        let range = resolve(SliceSpec::new(Some(1), Some(8), Some(3)), 10).unwrap();
        let mut indices = range.indices();
        assert_eq!(indices.len(), 3);
        assert_eq!(indices.next_back(), Some(7));
        assert_eq!(indices.next(), Some(1));
        assert_eq!(indices.next(), Some(4));
        assert_eq!(indices.next(), None);
        assert_eq!(indices.next_back(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(SliceSpec::reversed().to_string(), "slice(None, None, -1)");
        assert_eq!(SliceSpec::from(1..4).to_string(), "slice(1, 4, None)");
    }

    /// Independent reference for Python's slice rule, computed with wide integers.
    fn reference_indices(spec: SliceSpec, len: usize) -> Vec<usize> {
        let len = i128::try_from(len).unwrap();
        let step = i128::from(spec.step.map_or(1_i64, |s| s as i64));
        let adjust = |value: Option<isize>, default: i128| -> i128 {
            let Some(value) = value else {
                return default;
            };
            let value = value as i128;
            let value = if value < 0 { value + len } else { value };
            if step > 0 {
                value.clamp(0, len)
            } else {
                value.clamp(-1, len - 1)
            }
        };
        let (start, stop) = if step > 0 {
            (adjust(spec.start, 0), adjust(spec.stop, len))
        } else {
            (adjust(spec.start, len - 1), adjust(spec.stop, -1))
        };

        let mut out = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            out.push(usize::try_from(i).unwrap());
            i += step;
        }
        out
    }

    fn arb_spec() -> impl Strategy<Value = SliceSpec> {
        (
            proptest::option::of(-40_isize..40),
            proptest::option::of(-40_isize..40),
            proptest::option::of(prop_oneof![-7_isize..=-1, 1_isize..=7]),
        )
            .prop_map(|(start, stop, step)| SliceSpec::new(start, stop, step))
    }

    proptest! {
        #[test]
        fn test_resolved_bounds(spec in arb_spec(), len in 0_usize..32) {
            let range = resolve(spec, len).unwrap();
            let len_i = isize::try_from(len).unwrap();
            prop_assert!((-1..=len_i).contains(&range.start()));
            prop_assert!((-1..=len_i).contains(&range.stop()));
            prop_assert_ne!(range.step(), 0);
            for i in range.indices() {
                prop_assert!(i < len);
            }
        }

        #[test]
        fn test_matches_reference(spec in arb_spec(), len in 0_usize..32) {
            let range = resolve(spec, len).unwrap();
            let got: Vec<_> = range.indices().collect();
            prop_assert_eq!(got.len(), range.len());
            prop_assert_eq!(got, reference_indices(spec, len));
        }

        #[test]
        fn test_reverse_iteration(spec in arb_spec(), len in 0_usize..32) {
            let range = resolve(spec, len).unwrap();
            let mut forward: Vec<_> = range.indices().collect();
            forward.reverse();
            let backward: Vec<_> = range.indices().rev().collect();
            prop_assert_eq!(forward, backward);
        }
    }
}
