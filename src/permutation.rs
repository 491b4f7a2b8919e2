use std::ops::Index;

use crate::error::PermutationError;

/// A reordering of the positions `0..n`, where every position appears exactly
/// once.
///
/// Used both for sort orders (`order[k]` is the position of the `k`th smallest
/// element) and for ranks (`rank[i]` is where the element at position `i`
/// ends up).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Permutation {
    indexes: Vec<usize>,
}

impl Permutation {
    /// The permutation that leaves every position in place.
    pub fn identity(n: usize) -> Self {
        Permutation { indexes: crate::sorting_index::range(n) }
    }

    // `indexes` must be a reordering of `range(indexes.len())`.
    pub(crate) fn from_vec_unchecked(indexes: Vec<usize>) -> Self {
        debug_assert!(unique_and_bounded(&indexes).is_ok());
        Permutation { indexes }
    }

    /// Number of positions being permuted
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indexes
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.indexes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.indexes.iter()
    }

    /// Returns `result` where `result[k] = values[self[k]]`.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != self.len()`.
    pub fn gather<T: Clone>(&self, values: &[T]) -> Vec<T> {
        assert_eq!(values.len(), self.len(), "gathered slice must have one value per position");
        self.indexes.iter().map(|&i| values[i].clone()).collect()
    }

    /// The permutation that undoes `self`.
    ///
    /// Gives the same result as `sorting_index(self.as_slice())`, but in
    /// linear time.
    pub fn inverse(&self) -> Permutation {
        let mut inverse = vec![0; self.len()];
        for (k, &i) in self.indexes.iter().enumerate() {
            inverse[i] = k;
        }
        Permutation { indexes: inverse }
    }
}

fn unique_and_bounded(order: &[usize]) -> Result<(), PermutationError> {
    let len = order.len();
    let mut seen = vec![false; len];
    for (index, &value) in order.iter().enumerate() {
        if value >= len {
            return Err(PermutationError::OutOfBounds { index, value, len });
        }
        if seen[value] {
            return Err(PermutationError::Duplicate { value });
        }
        seen[value] = true;
    }
    Ok(())
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = PermutationError;

    fn try_from(indexes: Vec<usize>) -> Result<Self, Self::Error> {
        unique_and_bounded(&indexes)?;
        Ok(Permutation { indexes })
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(p: Permutation) -> Self {
        p.indexes
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] {
        &self.indexes
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.indexes[i]
    }
}

impl<'a> IntoIterator for &'a Permutation {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indexes.iter()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use rand::seq::SliceRandom;

    use super::*;
    use crate::{sorting_index::sorting_index, tests::std_rng};

    impl Arbitrary for Permutation {
        fn arbitrary(g: &mut Gen) -> Self {
            // Modulo to avoid problematic values
            let n = <usize as Arbitrary>::arbitrary(g) % g.size();
            let mut indexes = crate::sorting_index::range(n);
            indexes.shuffle(&mut std_rng(g));
            Permutation { indexes }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            // Dropping the largest value keeps it a permutation
            let x = self.clone();
            let iter = (0..x.len()).rev().map(move |n| Permutation {
                indexes: x.indexes.iter().copied().filter(|&i| i < n).collect(),
            });
            Box::new(iter)
        }
    }

    #[test]
    fn try_from_valid() {
        let p = Permutation::try_from(vec![2, 0, 1]).unwrap();
        assert_eq!(p.as_slice(), &[2, 0, 1]);
        assert_eq!(p[0], 2);
        assert!(Permutation::try_from(vec![]).unwrap().is_empty());
    }

    #[test]
    fn try_from_out_of_bounds() {
        assert_eq!(
            Permutation::try_from(vec![0, 3, 1]),
            Err(PermutationError::OutOfBounds { index: 1, value: 3, len: 3 })
        );
    }

    #[test]
    fn try_from_duplicate() {
        assert_eq!(
            Permutation::try_from(vec![1, 0, 1]),
            Err(PermutationError::Duplicate { value: 1 })
        );
    }

    #[test]
    fn gather_example() {
        let p = Permutation::try_from(vec![3, 1, 0, 2]).unwrap();
        assert_eq!(p.gather(&["a", "b", "c", "d"]), vec!["d", "b", "a", "c"]);
    }

    #[test]
    #[should_panic]
    fn gather_wrong_length() {
        let _ = Permutation::identity(3).gather(&[1, 2]);
    }

    #[test]
    fn inverse_example() {
        let p = Permutation::try_from(vec![3, 1, 0, 2]).unwrap();
        assert_eq!(p.inverse().as_slice(), &[2, 1, 3, 0]);
    }

    #[quickcheck]
    fn qc_inverse_is_double_sort(p: Permutation) -> bool {
        p.inverse() == sorting_index(p.as_slice())
    }

    #[quickcheck]
    fn qc_inverse_involution(p: Permutation) -> bool {
        p.inverse().inverse() == p
    }

    #[quickcheck]
    fn qc_gather_inverse_identity(p: Permutation) -> bool {
        p.inverse().gather(p.as_slice()) == Permutation::identity(p.len()).into_vec()
    }

    #[quickcheck]
    fn qc_arbitrary_valid(p: Permutation) -> bool {
        Permutation::try_from(p.clone().into_vec()) == Ok(p)
    }
}
