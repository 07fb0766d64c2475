/// Errors returned by positional containers and slice resolution.
///
/// Every failing operation leaves the container it was called on unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SeqError {
    /// An index, after negative-index rebasing, fell outside the valid bounds.
    #[display("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index as supplied by the caller (before rebasing).
        index: isize,
        /// The container length at the time of the call.
        len: usize,
    },
    /// An argument was rejected before any work was done.
    #[display("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: InvalidArgument,
    },
}

impl SeqError {
    pub(crate) const fn out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

impl From<InvalidArgument> for SeqError {
    fn from(reason: InvalidArgument) -> Self {
        Self::InvalidArgument { reason }
    }
}

/// The specific reason an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidArgument {
    /// A slice step of zero was requested.
    #[display("slice step cannot be zero")]
    ZeroStep,
    /// A point coordinate was NaN or infinite.
    #[display("point coordinates must be finite real numbers")]
    NonFiniteCoordinate,
    /// A point was built from a sequence that does not hold exactly two values.
    #[display("a point needs exactly 2 coordinates, got {_0}")]
    PointArity(usize),
    /// A non-contiguous range was assigned a sequence of a different length.
    #[display(
        "attempt to assign sequence of size {given} to extended slice of size {expected}"
    )]
    ExtendedSliceLength {
        /// Number of indices selected by the range.
        expected: usize,
        /// Number of elements supplied.
        given: usize,
    },
    /// An index was paired with many values, or a range with a single value.
    #[display("incompatible index/range assignment")]
    ShapeMismatch,
    /// A value range whose lower bound exceeds its upper bound.
    #[display("lower bound {lower} exceeds upper bound {upper}")]
    EmptyRange {
        /// Inclusive lower bound.
        lower: i64,
        /// Inclusive upper bound.
        upper: i64,
    },
    /// The requested length cannot be represented.
    #[display("length {_0} exceeds the supported maximum")]
    LengthOverflow(usize),
}

/// Terminal signal returned by an exhausted traversal.
///
/// This is the `Result`-flavoured counterpart of an iterator returning `None`. It is not a
/// [`SeqError`] variant: callers match on the type, never on a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display, derive_more::Error)]
#[display("end of sequence")]
pub struct EndOfSequence;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SeqError::out_of_range(-7, 6).to_string(),
            "index -7 out of range for length 6"
        );
        assert_eq!(
            SeqError::from(InvalidArgument::ZeroStep).to_string(),
            "invalid argument: slice step cannot be zero"
        );
        assert_eq!(EndOfSequence.to_string(), "end of sequence");
    }

    #[test]
    fn test_kinds_are_distinguishable() {
        let err = SeqError::from(InvalidArgument::ShapeMismatch);
        assert!(err.is_invalid_argument());
        assert!(!err.is_index_out_of_range());
        assert!(matches!(
            err,
            SeqError::InvalidArgument {
                reason: InvalidArgument::ShapeMismatch
            }
        ));
    }
}
