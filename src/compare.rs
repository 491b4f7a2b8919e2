//! Compare the ranking imposed by a scoring function and its approximation.
//!
//! Both scoring functions are evaluated once per item. Each list of scores
//! is turned into a sort order with [`sorting_index`], and each sort order
//! into ranks by sorting it again. The result is the rank under the ideal
//! function minus the rank under the approximation, per item.
use tracing::{debug, trace};

use crate::{
    error::{CompareError, ScoreSource},
    permutation::Permutation,
    sorting_index::sorting_index,
};

/// Signed difference between the ranks an item gets from two scoring
/// functions.
pub type RankDelta = isize;

/// What to do when a scoring function returns NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanPolicy {
    /// Fail with [`CompareError::NotANumber`] before sorting anything.
    #[default]
    Reject,
    /// Keep NaN scores, ordered by IEEE 754 `totalOrder`: positive NaN ranks
    /// above `+∞`, negative NaN below `-∞`.
    TotalOrder,
}

/// Options for comparing rankings.
///
/// ```
/// use rankdiff::{NanPolicy, RankCompare};
///
/// let cmp = RankCompare::new().nan_policy(NanPolicy::TotalOrder);
/// let deltas = cmp.compare(&[1.0, 2.0, 3.0], |&x| x, |&x| if x == 2.0 { f64::NAN } else { x });
/// assert_eq!(deltas.unwrap(), vec![0, -1, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankCompare {
    nan_policy: NanPolicy,
}

impl RankCompare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nan_policy(mut self, nan_policy: NanPolicy) -> Self {
        self.nan_policy = nan_policy;
        self
    }

    pub fn get_nan_policy(&self) -> NanPolicy {
        self.nan_policy
    }

    /// For every item, the rank under `ideal` minus the rank under `approx`.
    ///
    /// A zero means the item is in the same position in both rankings, and a
    /// positive value means it sorts later under `ideal`. Ranks start at 0
    /// for the smallest score, and tied scores are ranked by position.
    ///
    /// Both functions must be deterministic; otherwise the result is
    /// meaningless but still has one entry per item.
    pub fn compare<T, F, G>(
        &self,
        items: &[T],
        ideal: F,
        approx: G,
    ) -> Result<Vec<RankDelta>, CompareError>
    where
        F: Fn(&T) -> f64,
        G: Fn(&T) -> f64,
    {
        debug!(items = items.len(), nan_policy = ?self.nan_policy, "comparing rankings");
        let y: Vec<f64> = items.iter().map(ideal).collect();
        let y2: Vec<f64> = items.iter().map(approx).collect();
        self.check(&y, ScoreSource::Ideal)?;
        self.check(&y2, ScoreSource::Approx)?;

        let sort_order = sorting_index(&y);
        let sort_order2 = sorting_index(&y2);
        let rank = sorting_index(sort_order.as_slice());
        let rank2 = sorting_index(sort_order2.as_slice());

        let deltas: Vec<RankDelta> = rank
            .iter()
            .zip(rank2.iter())
            .map(|(&r, &r2)| r as RankDelta - r2 as RankDelta)
            .collect();
        let displacement: usize = deltas.iter().map(|d| d.unsigned_abs()).sum();
        trace!(displacement, "rankings compared");
        Ok(deltas)
    }

    /// The 0-based rank of every item under `score`. A rejected NaN score is
    /// reported as coming from `scorer`.
    pub fn ranks_by<T, F>(
        &self,
        items: &[T],
        score: F,
        scorer: ScoreSource,
    ) -> Result<Permutation, CompareError>
    where
        F: Fn(&T) -> f64,
    {
        let y: Vec<f64> = items.iter().map(score).collect();
        self.check(&y, scorer)?;
        let sort_order = sorting_index(&y);
        Ok(sorting_index(sort_order.as_slice()))
    }

    fn check(&self, scores: &[f64], scorer: ScoreSource) -> Result<(), CompareError> {
        if self.nan_policy == NanPolicy::TotalOrder {
            return Ok(());
        }
        match scores.iter().position(|s| s.is_nan()) {
            Some(index) => {
                debug!(%scorer, index, "rejecting NaN score");
                Err(CompareError::NotANumber { scorer, index })
            }
            None => Ok(()),
        }
    }
}

/// Compare the rankings of `items` under `ideal` and `approx`, rejecting NaN
/// scores. See [`RankCompare::compare`].
pub fn rank_compare<T, F, G>(
    items: &[T],
    ideal: F,
    approx: G,
) -> Result<Vec<RankDelta>, CompareError>
where
    F: Fn(&T) -> f64,
    G: Fn(&T) -> f64,
{
    RankCompare::default().compare(items, ideal, approx)
}
