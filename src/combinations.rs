use num_bigint::BigUint;

use crate::{
    count::choose,
    error::Error,
    tuple_generator::{Lifecycle, TupleGenerator},
};

/// Lazily enumerates all k-combinations of `n` positions as strictly
/// increasing index tuples, in lexicographic order.
///
/// ```
/// use combinatorics::{Combinations, TupleGenerator};
///
/// let mut combinations = Combinations::new(3, 2).unwrap();
/// while combinations.advance() {
///     println!("{:?}", combinations.indices());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    k: usize,
    length: BigUint,
    indices: Vec<usize>,
    state: Lifecycle,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::DomainEmpty);
        }
        if k == 0 {
            return Err(Error::ArityZero);
        }
        if k > n {
            return Err(Error::ArityExceedsDomain);
        }

        Ok(Combinations {
            n,
            k,
            length: choose(n, k),
            indices: vec![0; k],
            state: Lifecycle::NotStarted,
        })
    }
}

impl TupleGenerator for Combinations {
    fn advance(&mut self) -> bool {
        match self.state {
            Lifecycle::NotStarted => {
                for (i, index) in self.indices.iter_mut().enumerate() {
                    *index = i;
                }
                self.state = Lifecycle::Active;
                true
            }
            Lifecycle::Active => {
                // Rightmost position not yet at its ceiling, given that the
                // positions after it each need one larger value.
                let unsaturated = (0..self.k)
                    .rev()
                    .find(|&i| self.indices[i] != i + self.n - self.k);

                let Some(p) = unsaturated else {
                    self.state = Lifecycle::Exhausted;
                    return false;
                };

                self.indices[p] += 1;
                for j in p + 1..self.k {
                    self.indices[j] = self.indices[j - 1] + 1;
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

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().then(|| self.indices.clone())
    }
}
