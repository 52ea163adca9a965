use thiserror::Error;

/// Errors produced by the sieves, the Fibonacci variants and the
/// verification harness.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchError {
    /// Bounded mode found more base primes than it has slots for.
    #[error("base prime capacity exceeded: {found} primes <= {bound}, capacity {capacity}")]
    BaseCapacityExceeded {
        bound: u64,
        capacity: usize,
        found: usize,
    },

    /// A fixed base bound does not reach sqrt(limit).
    #[error("base bound {bound} too small for limit {limit} (needs at least {required})")]
    BaseBoundTooSmall { bound: u64, limit: u64, required: u64 },

    #[error("invalid segment size: {segment_size}")]
    InvalidSegmentSize { segment_size: usize },

    #[error("{what}({n}) overflows u64")]
    Overflow { what: &'static str, n: u32 },

    #[error("modulus must be non-zero")]
    InvalidModulus,

    /// A verification table entry did not match.
    #[error("Mismatch for {program} {input} expected={expected} got={got}")]
    Mismatch {
        program: String,
        input: String,
        expected: u64,
        got: u64,
    },
}

pub type BenchResult<T> = Result<T, BenchError>;
