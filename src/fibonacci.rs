//! Fibonacci variants, F(0) = 0, F(1) = 1.

use crate::error::{BenchError, BenchResult};

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_EXACT_N: u32 = 93;

pub fn fibonacci_recursive(n: u32) -> u64 {
    if n <= 1 {
        n as u64
    } else {
        fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2)
    }
}

pub fn fibonacci_iterative(n: u32) -> BenchResult<u64> {
    if n <= 1 {
        return Ok(n as u64);
    }
    let mut a = 0u64;
    let mut b = 1u64;
    for _ in 2..=n {
        let temp = a.checked_add(b).ok_or(BenchError::Overflow {
            what: "fibonacci",
            n,
        })?;
        a = b;
        b = temp;
    }
    Ok(b)
}

/// F(n) mod `modulus`, one addition per step.
pub fn fibonacci_iterative_mod(n: u32, modulus: u64) -> BenchResult<u64> {
    if modulus == 0 {
        return Err(BenchError::InvalidModulus);
    }
    let m = modulus as u128;
    let mut a = 0u128;
    let mut b = 1u128 % m;
    for _ in 0..n {
        let temp = (a + b) % m;
        a = b;
        b = temp;
    }
    Ok(a as u64)
}

/// F(n) mod `modulus` by fast doubling, O(log n) steps:
///
/// ```text
/// F(2k)   = F(k) * (2 F(k+1) - F(k))
/// F(2k+1) = F(k)^2 + F(k+1)^2
/// ```
pub fn fibonacci_doubling_mod(n: u32, modulus: u64) -> BenchResult<u64> {
    if modulus == 0 {
        return Err(BenchError::InvalidModulus);
    }
    let m = modulus as u128;
    // (a, b) = (F(k), F(k+1)) for the prefix of n's bits consumed so far.
    let mut a = 0u128;
    let mut b = 1u128 % m;
    for bit in (0..u32::BITS - n.leading_zeros()).rev() {
        let c = a * ((2 * b + m - a) % m) % m;
        let d = (a * a % m + b * b % m) % m;
        if (n >> bit) & 1 == 1 {
            a = d;
            b = (c + d) % m;
        } else {
            a = c;
            b = d;
        }
    }
    Ok(a as u64)
}
