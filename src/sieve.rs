//! Sieve of Eratosthenes variants.
//!
//! All counters return pi(limit), the number of primes in `[2, limit]`.
//! `limit < 2` is a valid input and yields 0.

use tracing::{debug, trace};

use crate::config::{BaseBound, BaseCapacity, SieveConfig, DEFAULT_SEGMENT_SIZE};
use crate::error::{BenchError, BenchResult};

/// Integer square root, floor(sqrt(n)), exact for every `u64`.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = (n as f64).sqrt() as u64;
    // The f64 seed can be off by one either way near 2^64.
    while x.checked_mul(x).map_or(true, |sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) {
        x += 1;
    }
    x
}

// ============================================================================
// Basic sieve
// ============================================================================

/// Flags for `[0, limit]`, `true` where the index is prime.
fn prime_flags(limit: u64) -> Vec<bool> {
    let len = limit as usize + 1;
    let mut prime = vec![true; len];
    prime[0] = false;
    if len > 1 {
        prime[1] = false;
    }

    let mut p = 2usize;
    while p * p < len {
        if prime[p] {
            let mut multiple = p * p;
            while multiple < len {
                prime[multiple] = false;
                multiple += p;
            }
        }
        p += 1;
    }
    prime
}

/// Classic sieve over the whole range.
pub fn basic_sieve(limit: u64) -> u64 {
    if limit < 2 {
        return 0;
    }
    prime_flags(limit).iter().filter(|&&is_prime| is_prime).count() as u64
}

/// All primes `<= limit`, in increasing order.
pub fn primes_up_to(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    prime_flags(limit)
        .iter()
        .enumerate()
        .filter(|&(_, &is_prime)| is_prime)
        .map(|(n, _)| n as u64)
        .collect()
}

// ============================================================================
// Odd-only sieve
// ============================================================================

/// Sieve that only stores odd numbers; index `i` stands for `2i + 1`.
pub fn odd_sieve(limit: u64) -> u64 {
    if limit < 2 {
        return 0;
    }
    if limit == 2 {
        return 1;
    }

    let size = limit.div_ceil(2) as usize;
    let mut is_prime = vec![true; size];

    let mut p = 3u64;
    while p * p <= limit {
        if is_prime[(p / 2) as usize] {
            // Even multiples are never stored, so step over them.
            let mut multiple = p * p;
            while multiple <= limit {
                is_prime[(multiple / 2) as usize] = false;
                multiple += 2 * p;
            }
        }
        p += 2;
    }

    // Index 0 is 1; the prime 2 is counted up front.
    1 + is_prime[1..].iter().filter(|&&flag| flag).count() as u64
}

// ============================================================================
// Segmented sieve
// ============================================================================

/// Primes `<= bound` used to strike composites in every segment.
pub fn base_primes(bound: u64, capacity: BaseCapacity) -> BenchResult<Vec<u64>> {
    let primes = primes_up_to(bound);
    if let BaseCapacity::Bounded(capacity) = capacity {
        if primes.len() > capacity {
            return Err(BenchError::BaseCapacityExceeded {
                bound,
                capacity,
                found: primes.len(),
            });
        }
    }
    debug!(bound, count = primes.len(), "base primes collected");
    Ok(primes)
}

/// Counts primes in `[2, limit]` one window at a time.
///
/// Memory use is one `segment_size` buffer plus the base primes, whatever
/// the limit. The result does not depend on the segment size.
#[derive(Debug, Clone)]
pub struct SegmentedSieve {
    config: SieveConfig,
}

impl SegmentedSieve {
    pub fn new(config: SieveConfig) -> BenchResult<Self> {
        if config.segment_size == 0 {
            return Err(BenchError::InvalidSegmentSize {
                segment_size: config.segment_size,
            });
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    pub fn count(&self, limit: u64) -> BenchResult<u64> {
        if limit < 2 {
            return Ok(0);
        }

        let required = isqrt(limit);
        let bound = match self.config.base_bound {
            BaseBound::SqrtLimit => required,
            BaseBound::Fixed(bound) if bound < required => {
                return Err(BenchError::BaseBoundTooSmall {
                    bound,
                    limit,
                    required,
                });
            }
            BaseBound::Fixed(bound) => bound,
        };

        let primes = base_primes(bound, self.config.capacity)?;
        Ok(scan_segments(limit, self.config.segment_size as u64, &primes))
    }
}

/// Segmented sieve with the default configuration.
pub fn segmented_sieve(limit: u64) -> u64 {
    if limit < 2 {
        return 0;
    }
    scan_segments(limit, DEFAULT_SEGMENT_SIZE as u64, &primes_up_to(isqrt(limit)))
}

/// `base` must be sorted ascending and cover every prime `<= sqrt(limit)`.
fn scan_segments(limit: u64, segment_size: u64, base: &[u64]) -> u64 {
    let mut total = 0u64;
    let mut low = 2u64;

    while low <= limit {
        let high = low.saturating_add(segment_size - 1).min(limit);
        let mut segment = vec![true; (high - low + 1) as usize];

        for &p in base {
            // Only ends this segment's pass; the next segment retests from 2.
            if p.saturating_mul(p) > high {
                break;
            }

            let mut start = (low / p) * p;
            if start < low {
                start += p;
            }
            if start == p {
                start += p;
            }

            let mut multiple = start;
            while multiple <= high {
                segment[(multiple - low) as usize] = false;
                multiple += p;
            }
        }

        let found = segment.iter().filter(|&&flag| flag).count() as u64;
        trace!(low, high, found, "segment scanned");
        total += found;

        low = match low.checked_add(segment_size) {
            Some(next) => next,
            None => break,
        };
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SIEVE_VERIFICATION;

    #[test]
    fn isqrt_matches_floor() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(99), 9);
        assert_eq!(isqrt(100), 10);
        assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn known_counts_all_variants() {
        for (limit, expected) in SIEVE_VERIFICATION {
            assert_eq!(basic_sieve(limit), expected, "basic {limit}");
            assert_eq!(odd_sieve(limit), expected, "odd {limit}");
            assert_eq!(segmented_sieve(limit), expected, "segmented {limit}");
        }
    }

    #[test]
    fn small_limits() {
        let sieves: [fn(u64) -> u64; 3] = [basic_sieve, odd_sieve, segmented_sieve];
        for sieve in sieves {
            assert_eq!(sieve(0), 0);
            assert_eq!(sieve(1), 0);
            assert_eq!(sieve(2), 1);
            assert_eq!(sieve(3), 2);
            assert_eq!(sieve(4), 2);
        }
    }

    #[test]
    fn production_limit() {
        assert_eq!(segmented_sieve(100_000), 9_592);
        assert_eq!(odd_sieve(100_000), 9_592);
        assert_eq!(basic_sieve(100_000), 9_592);
    }

    #[test]
    fn primes_up_to_lists_in_order() {
        assert_eq!(primes_up_to(1), Vec::<u64>::new());
        assert_eq!(primes_up_to(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn reference_config_fits_capacity() {
        let primes = base_primes(1_000, BaseCapacity::Bounded(200)).unwrap();
        assert_eq!(primes.len(), 168);
        assert_eq!(primes.last(), Some(&997));
    }

    #[test]
    fn bounded_capacity_overflow_is_reported() {
        let err = base_primes(1_000, BaseCapacity::Bounded(100)).unwrap_err();
        assert_eq!(
            err,
            BenchError::BaseCapacityExceeded {
                bound: 1_000,
                capacity: 100,
                found: 168,
            }
        );
    }

    #[test]
    fn reference_config_counts() {
        let sieve = SegmentedSieve::new(SieveConfig::reference()).unwrap();
        assert_eq!(sieve.count(100_000).unwrap(), 9_592);
        assert_eq!(sieve.count(1).unwrap(), 0);
    }

    #[test]
    fn fixed_bound_too_small() {
        let config = SieveConfig::default().with_base_bound(BaseBound::Fixed(10));
        let sieve = SegmentedSieve::new(config).unwrap();
        assert_eq!(sieve.count(120).unwrap(), 30);
        assert_eq!(
            sieve.count(144).unwrap_err(),
            BenchError::BaseBoundTooSmall {
                bound: 10,
                limit: 144,
                required: 12,
            }
        );
    }

    #[test]
    fn zero_segment_size_rejected() {
        let config = SieveConfig::default().with_segment_size(0);
        assert_eq!(
            SegmentedSieve::new(config).unwrap_err(),
            BenchError::InvalidSegmentSize { segment_size: 0 }
        );
    }

    #[test]
    fn segment_size_does_not_change_result() {
        for segment_size in [1, 2, 3, 7, 100, 9_999, 10_000, 10_001] {
            let sieve =
                SegmentedSieve::new(SieveConfig::default().with_segment_size(segment_size))
                    .unwrap();
            assert_eq!(sieve.count(10_000).unwrap(), 1_229, "segment {segment_size}");
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let sieve = SegmentedSieve::new(SieveConfig::default().with_segment_size(97)).unwrap();
        let first = sieve.count(5_000).unwrap();
        assert_eq!(sieve.count(5_000).unwrap(), first);
        assert_eq!(segmented_sieve(5_000), segmented_sieve(5_000));
    }
}
