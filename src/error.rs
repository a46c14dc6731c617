use thiserror::Error;

/// Errors produced by generator construction and item projection.
///
/// Advancing a generator never fails; exhaustion is reported as a plain
/// `false` from `advance`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("n must be greater than 0")]
    DomainEmpty,

    #[error("k must be greater than 0")]
    ArityZero,

    #[error("k must be less than or equal to n")]
    ArityExceedsDomain,

    /// The source sequence handed to a projection does not have one element
    /// per position of the generator's domain.
    #[error("data length {data_len} does not match domain size {n}")]
    DataLengthMismatch { data_len: usize, n: usize },

    /// Caller bug: the output buffer and the index tuple disagree in length.
    #[error("length of buffer and indices did not match")]
    BufferMismatch,
}
