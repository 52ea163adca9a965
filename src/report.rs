//! Plain-text output of the benchmark programs.

use std::fmt;

use crate::harness::Measurement;

pub fn print_header(title: &str) {
    println!();
    println!("=== {} ===", title);
}

pub fn print_sieve_timing(label: &str, limit: u64, m: &Measurement<u64>) {
    println!("{}: Finding primes up to {}...", label, limit);
    println!(
        "Found {} primes in {:.3}ms (avg of {} runs)",
        m.value,
        m.average_ms(),
        m.runs
    );
}

/// Final block printed by `prime_sieve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SieveSummary {
    pub basic: u64,
    pub optimized: u64,
    pub segmented: u64,
    pub stress_total: u64,
}

impl fmt::Display for SieveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Basic sieve result: {} primes", self.basic)?;
        writeln!(f, "Optimized sieve result: {} primes", self.optimized)?;
        writeln!(f, "Segmented sieve result: {} primes", self.segmented)?;
        write!(f, "Stress test total: {} primes", self.stress_total)
    }
}

/// Final block printed by `fibonacci`. Large results are already reduced
/// modulo `modulus`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciSummary {
    pub recursive_n: u32,
    pub recursive: u64,
    pub iterative_n: u32,
    pub iterative: u64,
    pub doubling_n: u32,
    pub doubling: u64,
    pub modulus: u64,
    pub stress_sum: u64,
}

impl fmt::Display for FibonacciSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recursive result (n={}): {}", self.recursive_n, self.recursive)?;
        writeln!(
            f,
            "Iterative result (n={}, mod {}): {}",
            self.iterative_n, self.modulus, self.iterative
        )?;
        writeln!(
            f,
            "Doubling result (n={}, mod {}): {}",
            self.doubling_n, self.modulus, self.doubling
        )?;
        write!(f, "Stress test sum: {}", self.stress_sum)
    }
}
