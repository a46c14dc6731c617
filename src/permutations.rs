use num_bigint::BigUint;

use crate::{
    count::permute,
    error::Error,
    tuple_generator::{Lifecycle, TupleGenerator},
};

/// Lazily enumerates all k-permutations of `n` positions as ordered tuples of
/// distinct indices, in lexicographic order.
///
/// Works on a full `n`-length array of positions plus one cycle countdown per
/// tuple slot; the exposed tuple is the first `k` entries of the working
/// array. Each advance costs amortized O(1) rotate-and-swap work.
#[derive(Clone, Debug)]
pub struct Permutations {
    n: usize,
    k: usize,
    length: BigUint,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    state: Lifecycle,
}

impl Permutations {
    pub fn new(n: usize, k: usize) -> Result<Self, Error> {
        if k == 0 {
            return Err(Error::ArityZero);
        }
        if k > n {
            return Err(Error::ArityExceedsDomain);
        }

        // Cycle countdowns seeded n, n-1, ..., n-k+1: slot i cycles through
        // the n-i values still unused to its left.
        let cycles = (n - k + 1..=n).rev().collect();

        Ok(Permutations {
            n,
            k,
            length: permute(n, k),
            indices: (0..n).collect(),
            cycles,
            state: Lifecycle::NotStarted,
        })
    }
}

impl TupleGenerator for Permutations {
    fn advance(&mut self) -> bool {
        match self.state {
            Lifecycle::NotStarted => {
                // The identity arrangement is the first permutation.
                self.state = Lifecycle::Active;
                true
            }
            Lifecycle::Active => {
                // All countdowns at 1 means every slot would carry: the
                // current tuple was the last one. Latch before touching the
                // arrays, so the last emitted tuple stays observable.
                if self.cycles.iter().all(|&cycle| cycle == 1) {
                    self.state = Lifecycle::Exhausted;
                    return false;
                }

                for i in (0..self.k).rev() {
                    self.cycles[i] -= 1;

                    if self.cycles[i] == 0 {
                        // Slot i has cycled through every candidate: rotate
                        // its element to the back and carry into slot i-1.
                        self.indices[i..].rotate_left(1);
                        self.cycles[i] = self.n - i;
                    } else {
                        let j = self.cycles[i];
                        self.indices.swap(i, self.n - j);
                        return true;
                    }
                }

                unreachable!("some countdown was above 1")
            }
            Lifecycle::Exhausted => false,
        }
    }

    fn indices(&self) -> &[usize] {
        &self.indices[..self.k]
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

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().then(|| self.indices[..self.k].to_vec())
    }
}
