//! This is a crate used to check how well a cheap scoring function preserves
//! the ranking produced by an expensive one.
//!
//! The building block is [`sorting_index`], which finds the indexes that sort
//! a sequence. Sorting those indexes again gives the rank of every element
//! (see [`ranks`]), and [`rank_compare`] subtracts the ranks two scoring
//! functions assign to the same items.
//!
//! Example usage:
//! ```
//! use rankdiff::prelude::*;
//!
//! let v = [5.0, 3.0, 8.0, 1.0];
//! let order = sorting_index(&v);
//! assert_eq!(order.as_slice(), &[3, 1, 0, 2]);
//! assert_eq!(sorting_index(order.as_slice()).as_slice(), &[2, 1, 3, 0]);
//!
//! let items = [0.1, 0.2, 0.3];
//! let deltas = rank_compare(&items, |&x| x, |&x| -x).unwrap();
//! assert_eq!(deltas, vec![-2, 0, 2]);
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod compare;
pub mod error;
pub mod generators;
pub mod permutation;
pub mod sorting_index;

pub use compare::{rank_compare, NanPolicy, RankCompare, RankDelta};
pub use error::{CompareError, PermutationError, ScoreSource};
pub use permutation::Permutation;
pub use sorting_index::{range, ranks, sorting_index, SortKey};

/// Commonly used items
pub mod prelude {
    pub use super::{rank_compare, ranks, sorting_index, NanPolicy, Permutation, RankCompare};
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // `Gen` contains a rng, but it's a private member so this method is used to get
    // a seeded rng generated from `Gen`
    pub fn std_rng(g: &mut Gen) -> ChaCha8Rng {
        let mut seed = [0u8; 32];
        for byte in seed.iter_mut() {
            *byte = Arbitrary::arbitrary(g);
        }
        ChaCha8Rng::from_seed(seed)
    }

    // Quickcheck happily generates NaN, infinities and `f64::MAX`, which most
    // properties here don't care about. Scores derived from huge values can
    // overflow to infinity and then to NaN.
    pub fn finite(xs: Vec<f64>) -> Vec<f64> {
        xs.into_iter().filter(|x| x.is_finite() && x.abs() <= 1e100).collect()
    }
}
