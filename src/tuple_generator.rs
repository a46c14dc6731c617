use num_bigint::BigUint;

/// Where a generator is in its enumeration.
///
/// `Exhausted` is terminal: once reached, `advance` keeps returning `false`
/// and never mutates the index tuple again.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Lifecycle {
    NotStarted,
    Active,
    Exhausted,
}

/// Common contract of the three index-tuple generators.
///
/// Every implementation emits its tuples in strict lexicographic order and
/// mutates a single internal tuple in place, so `indices` aliases state that
/// the next `advance` overwrites. Copy the slice out before advancing if the
/// tuple needs to be retained.
pub trait TupleGenerator {
    /// Steps to the next tuple. Returns `false` once the enumeration is
    /// exhausted, in which case no state was mutated.
    fn advance(&mut self) -> bool;

    /// The current index tuple, `arity` entries each in `[0, domain_size)`.
    /// Only meaningful after `advance` has returned `true`.
    fn indices(&self) -> &[usize];

    /// Number of entries per tuple.
    fn arity(&self) -> usize;

    /// Number of positions the indices are drawn from.
    fn domain_size(&self) -> usize;

    /// Exact number of tuples this generator emits over its lifetime,
    /// available before the first `advance`.
    fn total_count(&self) -> &BigUint;
}
