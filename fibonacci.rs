// Fibonacci Benchmarks - Rust
//
// Run: cargo run --release --bin fibonacci
//
// Large results are reported modulo 1000000.

use clap::Parser;
use tracing::info;

use sieve_benchmarks::config::{
    DEFAULT_FIB_DOUBLING_N, DEFAULT_FIB_ITERATIVE_N, DEFAULT_FIB_RECURSIVE_N, FIB_REPORT_MODULUS,
    FIB_STRESS_COUNT, FIB_STRESS_MODULUS,
};
use sieve_benchmarks::harness::{fibonacci_stress, run_benchmark, time, verify_fibonacci};
use sieve_benchmarks::report::{print_header, FibonacciSummary};
use sieve_benchmarks::{
    fibonacci_doubling_mod, fibonacci_iterative_mod, fibonacci_recursive, init_logging,
};

/// Fibonacci CPU benchmark.
#[derive(Parser)]
#[command(name = "fibonacci")]
#[command(version, about, long_about = None)]
struct Cli {
    /// n for the naive recursive variant
    #[arg(long, default_value_t = DEFAULT_FIB_RECURSIVE_N)]
    recursive_n: u32,

    /// n for the iterative variant
    #[arg(long, default_value_t = DEFAULT_FIB_ITERATIVE_N)]
    iterative_n: u32,

    /// n for the fast-doubling variant
    #[arg(long, default_value_t = DEFAULT_FIB_DOUBLING_N)]
    doubling_n: u32,

    /// Timed runs per benchmark, after one warmup
    #[arg(short, long, default_value_t = 1)]
    runs: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    info!(
        recursive_n = cli.recursive_n,
        iterative_n = cli.iterative_n,
        doubling_n = cli.doubling_n,
        "starting fibonacci benchmark"
    );

    println!("=== Rust Fibonacci Benchmark ===");
    println!();

    println!("Verifying correctness...");
    if let Err(err) = verify_fibonacci() {
        println!("ERROR: {}", err);
        return Err(err.into());
    }
    println!("All implementations match expected values");

    print_header("Performance Benchmarks");

    let n = cli.recursive_n;
    let recursive = run_benchmark("fibonacci_recursive", cli.runs, || fibonacci_recursive(n));
    println!(
        "Recursive Fibonacci({}) = {} in {:.3}ms",
        n,
        recursive.value,
        recursive.average_ms()
    );

    let n = cli.iterative_n;
    let iterative = run_benchmark("fibonacci_iterative_mod", cli.runs, || {
        fibonacci_iterative_mod(n, FIB_REPORT_MODULUS)
    })
    .transpose()?;
    println!(
        "Iterative Fibonacci({}) = {} (mod {}) in {:.3}ms",
        n,
        iterative.value,
        FIB_REPORT_MODULUS,
        iterative.average_ms()
    );

    let n = cli.doubling_n;
    let doubling = run_benchmark("fibonacci_doubling_mod", cli.runs, || {
        fibonacci_doubling_mod(n, FIB_REPORT_MODULUS)
    })
    .transpose()?;
    println!(
        "Doubling Fibonacci({}) = {} (mod {}) in {:.3}ms",
        n,
        doubling.value,
        FIB_REPORT_MODULUS,
        doubling.average_ms()
    );

    print_header("Stress Test");

    println!("Computing Fibonacci for 1..{}...", FIB_STRESS_COUNT);
    let (stress_sum, elapsed) = time(|| fibonacci_stress(FIB_STRESS_COUNT, FIB_STRESS_MODULUS));
    let stress_sum = stress_sum?;
    println!(
        "Stress test completed: sum(fib(1..{}) mod {}) = {} in {:.3}ms",
        FIB_STRESS_COUNT,
        FIB_STRESS_MODULUS,
        stress_sum,
        elapsed.as_secs_f64() * 1000.0
    );

    print_header("Summary");
    let summary = FibonacciSummary {
        recursive_n: cli.recursive_n,
        recursive: recursive.value,
        iterative_n: cli.iterative_n,
        iterative: iterative.value,
        doubling_n: cli.doubling_n,
        doubling: doubling.value,
        modulus: FIB_REPORT_MODULUS,
        stress_sum,
    };
    println!("{}", summary);

    println!("Fibonacci benchmark completed successfully");
    Ok(())
}
