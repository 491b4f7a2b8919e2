//! Indexes that sort a sequence, and ranks derived from them.
use std::cmp::Ordering;

use crate::permutation::Permutation;

/// A numeric value with a total order, usable as a sort key.
///
/// Integers use their usual order. Floats use the IEEE 754 `totalOrder`
/// predicate, so that `-NaN < -∞ < -0.0 < +0.0 < +∞ < +NaN`.
pub trait SortKey {
    fn key_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_sort_key_ord {
    ($($t:ty),*) => {
        $(impl SortKey for $t {
            #[inline]
            fn key_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}

impl_sort_key_ord!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl SortKey for f64 {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl SortKey for f32 {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Returns `[0, 1, ..., n - 1]`.
pub fn range(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Find the indexes that sort `values` in ascending order.
///
/// For the result `i`, gathering `values` through `i` (see
/// [`Permutation::gather`]) gives `values` sorted. Equal values keep their
/// relative order from `values`.
///
/// ```
/// use rankdiff::sorting_index;
///
/// let v = [5, 3, 8, 1];
/// let i = sorting_index(&v);
/// assert_eq!(i.as_slice(), &[3, 1, 0, 2]);
/// assert_eq!(i.gather(&v), vec![1, 3, 5, 8]);
/// ```
pub fn sorting_index<K: SortKey>(values: &[K]) -> Permutation {
    let mut n = range(values.len());
    n.sort_by(|&a, &b| values[a].key_cmp(&values[b]));
    Permutation::from_vec_unchecked(n)
}

/// The 0-based rank of every element of `values`, where ties are ranked by
/// position.
///
/// This is `sorting_index` applied twice: sorting the sort order recovers,
/// for each original position, where that element ended up.
pub fn ranks<K: SortKey>(values: &[K]) -> Permutation {
    let order = sorting_index(values);
    sorting_index(order.as_slice())
}
