// Prime Sieve Benchmarks - Rust
//
// Run: cargo run --release --bin prime_sieve -- --limit 100000
//
// Verifies all three sieves against known prime counts, times each one at
// the production limit, runs the stress loop and prints a summary.

use clap::Parser;
use tracing::info;

use sieve_benchmarks::config::{DEFAULT_SEGMENT_SIZE, DEFAULT_SIEVE_LIMIT, SIEVE_STRESS_RANGE};
use sieve_benchmarks::harness::{run_benchmark, sieve_stress, time, verify_sieves};
use sieve_benchmarks::report::{print_header, print_sieve_timing, SieveSummary};
use sieve_benchmarks::{
    basic_sieve, init_logging, odd_sieve, BaseBound, BaseCapacity, SegmentedSieve, SieveConfig,
};

/// Prime sieve CPU benchmark.
#[derive(Parser)]
#[command(name = "prime_sieve")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Upper bound for the timed sieves
    #[arg(short, long, default_value_t = DEFAULT_SIEVE_LIMIT)]
    limit: u64,

    /// Width of each segmented-sieve window
    #[arg(short, long, default_value_t = DEFAULT_SEGMENT_SIZE)]
    segment_size: usize,

    /// Fixed base-prime bound (default: sqrt of each limit)
    #[arg(short, long)]
    base_bound: Option<u64>,

    /// Fail instead of growing past this many base primes
    #[arg(long)]
    bounded_capacity: Option<usize>,

    /// Timed runs per benchmark, after one warmup
    #[arg(short, long, default_value_t = 1)]
    runs: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn sieve_config(&self) -> SieveConfig {
        let base_bound = self.base_bound.map_or(BaseBound::SqrtLimit, BaseBound::Fixed);
        let capacity = self
            .bounded_capacity
            .map_or(BaseCapacity::Growable, BaseCapacity::Bounded);
        SieveConfig::default()
            .with_segment_size(self.segment_size)
            .with_base_bound(base_bound)
            .with_capacity(capacity)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let segmented = SegmentedSieve::new(cli.sieve_config())?;
    info!(config = ?segmented.config(), limit = cli.limit, "starting prime sieve benchmark");

    println!("=== Rust Prime Sieve Benchmark ===");
    println!();

    println!("Verifying correctness...");
    match verify_sieves(&segmented) {
        Ok(rows) => {
            for (limit, count) in rows {
                println!("✓ Limit {}: {} primes", limit, count);
            }
            println!("All implementations produce correct results");
        }
        Err(err) => {
            println!("ERROR: {}", err);
            return Err(err.into());
        }
    }

    print_header("Performance Benchmarks");

    let limit = cli.limit;
    let basic = run_benchmark("basic_sieve", cli.runs, || basic_sieve(limit));
    print_sieve_timing("Basic Sieve", limit, &basic);

    let optimized = run_benchmark("odd_sieve", cli.runs, || odd_sieve(limit));
    print_sieve_timing("Optimized Sieve", limit, &optimized);

    let segmented_run =
        run_benchmark("segmented_sieve", cli.runs, || segmented.count(limit)).transpose()?;
    print_sieve_timing("Segmented Sieve", limit, &segmented_run);

    print_header("Stress Test");

    let (start, end, step) = SIEVE_STRESS_RANGE;
    println!("Stress test: Computing multiple sieves...");
    let ((stress_total, iterations), elapsed) = time(|| sieve_stress(start, end, step));
    println!("Computed sieves for limits {}-{} ({} iterations)", start, end, iterations);
    println!(
        "Total primes found: {} in {:.3}ms",
        stress_total,
        elapsed.as_secs_f64() * 1000.0
    );

    print_header("Summary");
    let summary = SieveSummary {
        basic: basic.value,
        optimized: optimized.value,
        segmented: segmented_run.value,
        stress_total,
    };
    println!("{}", summary);

    println!("Prime sieve benchmark completed successfully");
    Ok(())
}
