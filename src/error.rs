use std::fmt;

/// Which of the two scoring functions produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreSource {
    /// The reference scoring function.
    Ideal,
    /// The approximation being tested.
    Approx,
}

impl fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreSource::Ideal => f.write_str("ideal"),
            ScoreSource::Approx => f.write_str("approx"),
        }
    }
}

/// Failure while comparing two rankings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// A scoring function returned NaN and the comparison was set to reject
    /// NaN scores.
    #[error("{scorer} score of item {index} is NaN. Fix the scoring function or use NanPolicy::TotalOrder.")]
    NotANumber {
        /// Which scoring function returned NaN.
        scorer: ScoreSource,
        /// Position of the offending item.
        index: usize,
    },
}

/// A vector of indexes that is not a permutation of `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermutationError {
    #[error("index {value} at position {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, value: usize, len: usize },
    #[error("index {value} appears more than once")]
    Duplicate { value: usize },
}
