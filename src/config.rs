//! Sieve parameters and program defaults.

/// Segment width used by the reference program.
pub const DEFAULT_SEGMENT_SIZE: usize = 10_000;

/// Base-prime bound of the reference program.
pub const REFERENCE_BASE_BOUND: u64 = 1_000;

/// Base-prime slots of the reference program.
pub const REFERENCE_BASE_CAPACITY: usize = 200;

/// Production-scale limit timed by `prime_sieve`.
pub const DEFAULT_SIEVE_LIMIT: u64 = 100_000;

/// Known prime counts: pi(10), pi(100), pi(1000), pi(10000).
pub const SIEVE_VERIFICATION: [(u64, u64); 4] = [(10, 4), (100, 25), (1000, 168), (10000, 1229)];

/// Stress loop limits: start, end (inclusive), step.
pub const SIEVE_STRESS_RANGE: (u64, u64, u64) = (1_000, 50_000, 1_000);

pub const FIB_VERIFICATION: [(u32, u64); 6] =
    [(0, 0), (1, 1), (5, 5), (10, 55), (15, 610), (20, 6765)];

pub const DEFAULT_FIB_RECURSIVE_N: u32 = 35;
pub const DEFAULT_FIB_ITERATIVE_N: u32 = 10_000;
pub const DEFAULT_FIB_DOUBLING_N: u32 = 50_000;

/// Large Fibonacci results are reported modulo this value.
pub const FIB_REPORT_MODULUS: u64 = 1_000_000;

/// Stress loop: sum of F(i) mod `FIB_STRESS_MODULUS` for i in 1..=`FIB_STRESS_COUNT`.
pub const FIB_STRESS_COUNT: u32 = 1_000;
pub const FIB_STRESS_MODULUS: u64 = 1_000;

/// How far the base-prime generator sieves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseBound {
    /// floor(sqrt(limit)), recomputed per call.
    SqrtLimit,
    /// A constant bound; limits beyond bound^2 are rejected.
    Fixed(u64),
}

/// How many base primes may be collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseCapacity {
    Growable,
    /// At most this many; exceeding it is an error rather than a truncation.
    Bounded(usize),
}

/// Parameters of a [`SegmentedSieve`](crate::sieve::SegmentedSieve).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveConfig {
    pub segment_size: usize,
    pub base_bound: BaseBound,
    pub capacity: BaseCapacity,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            segment_size: DEFAULT_SEGMENT_SIZE,
            base_bound: BaseBound::SqrtLimit,
            capacity: BaseCapacity::Growable,
        }
    }
}

impl SieveConfig {
    /// The constants of the reference C program: 10000-wide segments,
    /// base primes up to 1000, at most 200 of them.
    pub fn reference() -> Self {
        Self {
            segment_size: DEFAULT_SEGMENT_SIZE,
            base_bound: BaseBound::Fixed(REFERENCE_BASE_BOUND),
            capacity: BaseCapacity::Bounded(REFERENCE_BASE_CAPACITY),
        }
    }

    pub fn with_segment_size(mut self, segment_size: usize) -> Self {
        self.segment_size = segment_size;
        self
    }

    pub fn with_base_bound(mut self, base_bound: BaseBound) -> Self {
        self.base_bound = base_bound;
        self
    }

    pub fn with_capacity(mut self, capacity: BaseCapacity) -> Self {
        self.capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_growable_sqrt() {
        let config = SieveConfig::default();
        assert_eq!(config.segment_size, 10_000);
        assert_eq!(config.base_bound, BaseBound::SqrtLimit);
        assert_eq!(config.capacity, BaseCapacity::Growable);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = SieveConfig::reference()
            .with_segment_size(64)
            .with_capacity(BaseCapacity::Growable);
        assert_eq!(config.segment_size, 64);
        assert_eq!(config.base_bound, BaseBound::Fixed(1_000));
        assert_eq!(config.capacity, BaseCapacity::Growable);
    }
}
