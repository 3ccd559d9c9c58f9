//! Index sequences over paths: strided selection, per-index replication and
//! front/back trimming.

use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("stride must be non-zero")]
    ZeroStride,
}

/// How the source indices are walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Visit every n-th index.
    Stride(NonZeroUsize),
    /// Repeat every index n times, then trim the expanded sequence.
    Repeat(NonZeroUsize),
}

/// Selection of indices in `0..len`.
///
/// `end > 0` is an exclusive count from the front; `end <= 0` trims `-end`
/// entries from the back. A negative `start` is clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub start: isize,
    pub end: isize,
    pub step: Step,
}

impl IndexRange {
    /// All indices, in order.
    pub const ALL: Self = Self {
        start: 0,
        end: 0,
        step: Step::Stride(NonZeroUsize::MIN),
    };

    #[must_use]
    pub const fn new(start: isize, end: isize, step: Step) -> Self {
        Self { start, end, step }
    }

    /// Builds a range from a signed stride: positive strides skip, negative
    /// strides replicate.
    pub fn from_stride(start: isize, end: isize, stride: isize) -> Result<Self, IndexError> {
        let magnitude = NonZeroUsize::new(stride.unsigned_abs()).ok_or(IndexError::ZeroStride)?;
        let step = if stride > 0 {
            Step::Stride(magnitude)
        } else {
            Step::Repeat(magnitude)
        };
        Ok(Self::new(start, end, step))
    }

    /// Indices into a sequence of length `len`.
    #[must_use]
    pub fn indices(&self, len: usize) -> Vec<usize> {
        match self.step {
            Step::Stride(stride) => {
                let (first, limit) = self.bounds(len);
                (first..limit).step_by(stride.get()).collect()
            }
            Step::Repeat(times) => {
                let times = times.get();
                let (first, limit) = self.bounds(len.saturating_mul(times));
                (first..limit).map(|k| k / times).collect()
            }
        }
    }

    fn bounds(&self, len: usize) -> (usize, usize) {
        let limit = if self.end > 0 {
            self.end.unsigned_abs().min(len)
        } else {
            len.saturating_sub(self.end.unsigned_abs())
        };
        let first = usize::try_from(self.start).unwrap_or(0);
        (first.min(limit), limit)
    }
}

impl Default for IndexRange {
    fn default() -> Self {
        Self::ALL
    }
}

/// Shorthand for [`IndexRange::from_stride`] followed by [`IndexRange::indices`].
pub fn index_range(
    len: usize,
    start: isize,
    end: isize,
    stride: isize,
) -> Result<Vec<usize>, IndexError> {
    Ok(IndexRange::from_stride(start, end, stride)?.indices(len))
}
