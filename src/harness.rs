//! Timing, verification tables and stress loops shared by the programs.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::{FIB_VERIFICATION, SIEVE_VERIFICATION};
use crate::error::{BenchError, BenchResult};
use crate::fibonacci::{
    fibonacci_doubling_mod, fibonacci_iterative, fibonacci_iterative_mod, fibonacci_recursive,
};
use crate::sieve::{basic_sieve, odd_sieve, SegmentedSieve};

/// Result of a timed benchmark: the value of the last run and the mean
/// wall time per run.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<T> {
    pub name: String,
    pub value: T,
    pub runs: u32,
    pub average: Duration,
}

impl<T> Measurement<T> {
    pub fn average_ms(&self) -> f64 {
        self.average.as_secs_f64() * 1000.0
    }
}

impl<T, E> Measurement<Result<T, E>> {
    /// Surfaces the error of a fallible benchmarked call.
    pub fn transpose(self) -> Result<Measurement<T>, E> {
        Ok(Measurement {
            name: self.name,
            value: self.value?,
            runs: self.runs,
            average: self.average,
        })
    }
}

/// Runs `f` once against the monotonic clock.
pub fn time<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let value = black_box(f());
    (value, start.elapsed())
}

/// One warmup call, then `runs` timed calls (at least one).
pub fn run_benchmark<F, R>(name: &str, runs: u32, f: F) -> Measurement<R>
where
    F: Fn() -> R,
{
    let runs = runs.max(1);

    // Warmup
    black_box(f());

    let (mut value, mut total) = time(&f);
    for _ in 1..runs {
        let (next, elapsed) = time(&f);
        total += elapsed;
        value = next;
    }

    let average = total / runs;
    debug!(name, runs, ?average, "benchmark finished");
    Measurement {
        name: name.to_string(),
        value,
        runs,
        average,
    }
}

fn check(program: &str, input: String, expected: u64, got: u64) -> BenchResult<()> {
    if got == expected {
        Ok(())
    } else {
        Err(BenchError::Mismatch {
            program: program.to_string(),
            input,
            expected,
            got,
        })
    }
}

/// Checks every sieve variant against the known prime counts and returns
/// the verified `(limit, count)` rows.
pub fn verify_sieves(segmented: &SegmentedSieve) -> BenchResult<Vec<(u64, u64)>> {
    for (limit, expected) in SIEVE_VERIFICATION {
        let input = format!("limit={limit}");
        check("basic", input.clone(), expected, basic_sieve(limit))?;
        check("optimized", input.clone(), expected, odd_sieve(limit))?;
        check("segmented", input, expected, segmented.count(limit)?)?;
    }
    info!(cases = SIEVE_VERIFICATION.len(), "sieve verification passed");
    Ok(SIEVE_VERIFICATION.to_vec())
}

/// Checks every Fibonacci variant against the known values.
pub fn verify_fibonacci() -> BenchResult<Vec<(u32, u64)>> {
    for (n, expected) in FIB_VERIFICATION {
        let input = format!("n={n}");
        check("recursive", input.clone(), expected, fibonacci_recursive(n))?;
        check("iterative", input.clone(), expected, fibonacci_iterative(n)?)?;
        check(
            "iterative_mod",
            input.clone(),
            expected,
            fibonacci_iterative_mod(n, u64::MAX)?,
        )?;
        check("doubling", input, expected, fibonacci_doubling_mod(n, u64::MAX)?)?;
    }
    info!(cases = FIB_VERIFICATION.len(), "fibonacci verification passed");
    Ok(FIB_VERIFICATION.to_vec())
}

/// Sum of `odd_sieve(limit)` for `limit` in `start..=end` by `step`.
pub fn sieve_stress(start: u64, end: u64, step: u64) -> (u64, usize) {
    let limits = (start..=end).step_by(step.max(1) as usize);
    let mut iterations = 0;
    let mut total = 0;
    for limit in limits {
        total += odd_sieve(limit);
        iterations += 1;
    }
    (total, iterations)
}

/// Sum of F(i) mod `modulus` for `i` in `1..=count`.
pub fn fibonacci_stress(count: u32, modulus: u64) -> BenchResult<u64> {
    (1..=count).try_fold(0u64, |total, n| -> BenchResult<u64> {
        Ok(total + fibonacci_iterative_mod(n, modulus)?)
    })
}
