//! CPU micro-benchmarks: Sieve of Eratosthenes variants and Fibonacci.
//!
//! The segmented sieve is the main algorithm; the rest exists to time and
//! cross-check it.
//!
//! ```
//! use sieve_benchmarks::{segmented_sieve, SegmentedSieve, SieveConfig};
//!
//! assert_eq!(segmented_sieve(10_000), 1_229);
//!
//! let sieve = SegmentedSieve::new(SieveConfig::default().with_segment_size(128))?;
//! assert_eq!(sieve.count(100)?, 25);
//! # Ok::<(), sieve_benchmarks::BenchError>(())
//! ```

pub mod config;
pub mod error;
pub mod fibonacci;
pub mod harness;
pub mod report;
pub mod sieve;

pub use config::{BaseBound, BaseCapacity, SieveConfig};
pub use error::{BenchError, BenchResult};
pub use fibonacci::{
    fibonacci_doubling_mod, fibonacci_iterative, fibonacci_iterative_mod, fibonacci_recursive,
};
pub use sieve::{
    base_primes, basic_sieve, isqrt, odd_sieve, primes_up_to, segmented_sieve, SegmentedSieve,
};

/// Installs the stderr `tracing` subscriber used by the binaries.
///
/// `RUST_LOG` wins over the default level when set.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
