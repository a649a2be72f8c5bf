//! Benchmark command handler
//!
//! Runs the benchmark suite and prints per-method statistics.

use crate::benchmark::{run as run_benchmark, BenchmarkReport};
use crate::config::Config;
use crate::constants::bench::DEFAULT_RUNS;
use crate::error::{Error, Result};
use crate::generator::QuantumRng;
use crate::rng::get_source_with_key;
use clap::Args;

/// Benchmark command arguments
#[derive(Args)]
pub struct BenchmarkArgs {
    /// Repetitions per method
    #[arg(long, short = 'r')]
    pub runs: Option<usize>,

    /// Random source feeding the sampler
    #[arg(long, short = 'b')]
    pub source: Option<String>,

    /// Output format: text or json
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Run the benchmark command
pub fn run(args: BenchmarkArgs) -> Result<()> {
    let config = Config::load()?;

    let runs = args.runs.unwrap_or(DEFAULT_RUNS);
    let format = args.format.unwrap_or(config.defaults.format.clone());
    let source_name = args.source.unwrap_or(config.defaults.source.clone());

    let api_key = if config.api_keys.anu.is_empty() {
        None
    } else {
        Some(config.api_keys.anu.as_str())
    };

    let mut engine = QuantumRng::new(get_source_with_key(&source_name, api_key));

    eprintln!("Benchmarking all methods ({} runs each)...", runs);
    let report = run_benchmark(&mut engine, runs);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print_table(&report),
        other => {
            return Err(Error::Config(format!("Unknown format: {}", other)));
        }
    }

    Ok(())
}

/// Print per-method statistics as an aligned table
fn print_table(report: &BenchmarkReport) {
    println!(
        "{:<10} {:>6} {:>12} {:>12} {:>10} {:>10}",
        "method", "runs", "avg time (s)", "std time (s)", "avg H", "std H"
    );

    // Stable ordering across runs
    let mut keys: Vec<&String> = report.results.keys().collect();
    keys.sort();

    for key in keys {
        let stats = &report.results[key];
        println!(
            "{:<10} {:>6} {:>12.6} {:>12.6} {:>10.4} {:>10.4}",
            key,
            stats.successful_runs,
            stats.avg_time,
            stats.std_time,
            stats.avg_entropy,
            stats.std_entropy
        );
    }
}
