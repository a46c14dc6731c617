use num_bigint::BigUint;

use crate::{error::Error, tuple_generator::TupleGenerator};

/// Writes `data[indices[j]]` into `buffer[j]` for every position.
///
/// Fails with [`Error::BufferMismatch`] when the buffer and the index tuple
/// disagree in length. Every entry of `indices` must be a valid index into
/// `data`; generators guarantee this for their own tuples.
pub fn fill_buffer<T: Clone>(buffer: &mut [T], data: &[T], indices: &[usize]) -> Result<(), Error> {
    if buffer.len() != indices.len() {
        return Err(Error::BufferMismatch);
    }

    for (slot, &index) in buffer.iter_mut().zip(indices) {
        *slot = data[index].clone();
    }
    Ok(())
}

/// A reusable arity-sized buffer for projected items.
///
/// One allocation serves every projection over the buffer's lifetime; each
/// call overwrites the previous contents, so callers keeping a tuple's items
/// must copy them out before the next call.
#[derive(Clone, Debug)]
pub struct ItemBuffer<T> {
    arity: usize,
    items: Vec<T>,
}

impl<T: Clone> ItemBuffer<T> {
    pub fn new(arity: usize) -> Self {
        ItemBuffer {
            arity,
            items: Vec::with_capacity(arity),
        }
    }

    /// Overwrites the buffer with the items of `data` selected by `indices`
    /// and returns a view of them.
    pub fn project(&mut self, data: &[T], indices: &[usize]) -> Result<&[T], Error> {
        if indices.len() != self.arity {
            return Err(Error::BufferMismatch);
        }

        self.items.clear();
        self.items
            .extend(indices.iter().map(|&index| data[index].clone()));
        Ok(&self.items)
    }
}

/// Binds a generator to a caller-owned element sequence, so each advance can
/// be observed as items instead of raw indices.
///
/// ```
/// use combinatorics::{Combinations, Projected};
///
/// let fruit = ["apple", "banana", "cherry"];
/// let combinations = Combinations::new(fruit.len(), 2).unwrap();
/// let mut pairs = Projected::new(combinations, &fruit).unwrap();
///
/// while pairs.advance() {
///     println!("{:?}", pairs.items());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Projected<'d, T, G> {
    generator: G,
    data: &'d [T],
    buffer: ItemBuffer<T>,
}

impl<'d, T: Clone, G: TupleGenerator> Projected<'d, T, G> {
    /// Fails with [`Error::DataLengthMismatch`] unless `data` has exactly one
    /// element per position of the generator's domain.
    pub fn new(generator: G, data: &'d [T]) -> Result<Self, Error> {
        if data.len() != generator.domain_size() {
            return Err(Error::DataLengthMismatch {
                data_len: data.len(),
                n: generator.domain_size(),
            });
        }

        let buffer = ItemBuffer::new(generator.arity());
        Ok(Projected {
            generator,
            data,
            buffer,
        })
    }

    pub fn advance(&mut self) -> bool {
        self.generator.advance()
    }

    /// The current tuple projected onto the bound sequence. The view aliases
    /// the internal buffer and is overwritten by the next call.
    pub fn items(&mut self) -> &[T] {
        // Arity and data length were checked at construction.
        self.buffer
            .project(self.data, self.generator.indices())
            .unwrap()
    }

    pub fn indices(&self) -> &[usize] {
        self.generator.indices()
    }

    pub fn arity(&self) -> usize {
        self.generator.arity()
    }

    pub fn total_count(&self) -> &BigUint {
        self.generator.total_count()
    }
}
