//! Lazy lexicographic enumeration of combinations, combinations with
//! replacement, and partial permutations over `n` labeled positions.
//!
//! Each family is an independent state machine that mutates one index tuple
//! in place per [`TupleGenerator::advance`] call, so enumerating the full
//! family never allocates per tuple and never materializes more than the
//! current tuple. Exact cardinalities come from the big-integer counting
//! functions in [`count`], available before the first advance.
//!
//! ```
//! use combinatorics::{Combinations, TupleGenerator};
//!
//! let mut pairs = Combinations::new(4, 2).unwrap();
//! assert_eq!(pairs.total_count().to_string(), "6");
//!
//! while pairs.advance() {
//!     // indices() aliases internal state; copy it out to retain it
//!     println!("{:?}", pairs.indices());
//! }
//! ```

pub mod combinations;
pub mod combinations_with_replacement;
pub mod count;
pub mod error;
pub mod permutations;
pub mod project;
pub mod tuple_generator;

pub use combinations::Combinations;
pub use combinations_with_replacement::CombinationsWithReplacement;
pub use error::Error;
pub use permutations::Permutations;
pub use project::{fill_buffer, ItemBuffer, Projected};
pub use tuple_generator::TupleGenerator;
