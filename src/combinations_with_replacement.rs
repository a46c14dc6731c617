use num_bigint::BigUint;

use crate::{
    count::multichoose,
    error::Error,
    tuple_generator::{Lifecycle, TupleGenerator},
};

/// Lazily enumerates all k-combinations with replacement of `n` positions as
/// non-decreasing index tuples, in lexicographic order.
///
/// Unlike [`Combinations`](crate::Combinations), `k` may exceed `n`:
/// repetition makes tuples longer than the domain possible.
#[derive(Clone, Debug)]
pub struct CombinationsWithReplacement {
    n: usize,
    k: usize,
    length: BigUint,
    indices: Vec<usize>,
    state: Lifecycle,
}

impl CombinationsWithReplacement {
    pub fn new(n: usize, k: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::DomainEmpty);
        }
        if k == 0 {
            return Err(Error::ArityZero);
        }

        Ok(CombinationsWithReplacement {
            n,
            k,
            length: multichoose(n, k),
            indices: vec![0; k],
            state: Lifecycle::NotStarted,
        })
    }
}

impl TupleGenerator for CombinationsWithReplacement {
    fn advance(&mut self) -> bool {
        match self.state {
            Lifecycle::NotStarted => {
                // First tuple is all zeros, which `new` already produced.
                self.state = Lifecycle::Active;
                true
            }
            Lifecycle::Active => {
                let unsaturated = (0..self.k).rev().find(|&i| self.indices[i] != self.n - 1);

                let Some(p) = unsaturated else {
                    self.state = Lifecycle::Exhausted;
                    return false;
                };

                // Every position from p onward restarts at the same value,
                // keeping the tuple non-decreasing.
                let value = self.indices[p] + 1;
                for index in &mut self.indices[p..] {
                    *index = value;
                }
                true
            }
            Lifecycle::Exhausted => false,
        }
    }

    fn indices(&self) -> &[usize] {
        &self.indices
    }

    fn arity(&self) -> usize {
        self.k
    }

    fn domain_size(&self) -> usize {
        self.n
    }

    fn total_count(&self) -> &BigUint {
        &self.length
    }
}

impl Iterator for CombinationsWithReplacement {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().then(|| self.indices.clone())
    }
}

#[cfg(test)]
mod test {

    use super::*;

    fn collect_all(mut combinations: CombinationsWithReplacement) -> Vec<Vec<usize>> {
        let mut all = Vec::new();
        while combinations.advance() {
            all.push(combinations.indices().to_vec());
        }
        all
    }

    #[test]
    fn test_3_2() {
        let combinations = CombinationsWithReplacement::new(3, 2).unwrap();
        assert_eq!(combinations.total_count(), &BigUint::from(6u32));
        assert_eq!(
            collect_all(combinations),
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 1],
                vec![1, 2],
                vec![2, 2],
            ]
        );
    }

    #[test]
    fn test_k_larger_than_n() {
        let combinations = CombinationsWithReplacement::new(2, 3).unwrap();
        assert_eq!(combinations.total_count(), &BigUint::from(4u32));
        assert_eq!(
            collect_all(combinations),
            vec![
                vec![0, 0, 0],
                vec![0, 0, 1],
                vec![0, 1, 1],
                vec![1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_single_position() {
        let all = collect_all(CombinationsWithReplacement::new(1, 4).unwrap());
        assert_eq!(all, vec![vec![0, 0, 0, 0]]);
    }

    #[test]
    fn exhaustion_is_permanent() {
        let mut combinations = CombinationsWithReplacement::new(2, 2).unwrap();
        while combinations.advance() {}

        assert!(!combinations.advance());
        assert_eq!(combinations.indices(), &[1, 1]);
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            CombinationsWithReplacement::new(0, 2).unwrap_err(),
            Error::DomainEmpty
        );
        assert_eq!(
            CombinationsWithReplacement::new(2, 0).unwrap_err(),
            Error::ArityZero
        );
    }
}
