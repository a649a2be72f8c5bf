//! Benchmark harness
//!
//! Runs every generation method repeatedly at a fixed small shot count,
//! timing each run and aggregating latency/entropy statistics. Per-run
//! failures are logged and excluded; a method with zero successful runs is
//! omitted from the report entirely rather than reported as zeros.

use crate::constants::bench::SHOTS_PER_RUN;
use crate::generator::{Method, QuantumRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use tracing::warn;

/// Aggregate statistics for one method across its successful runs
///
/// Times are wall-clock seconds; standard deviations are population std.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodStats {
    pub avg_time: f64,
    pub std_time: f64,
    pub avg_entropy: f64,
    pub std_entropy: f64,
    pub min_time: f64,
    pub max_time: f64,
    pub successful_runs: usize,
}

impl MethodStats {
    /// Aggregate collected (latency, entropy) samples
    ///
    /// Returns None when there were no successful runs, so callers can omit
    /// the method instead of reporting misleading zeros.
    pub fn from_samples(times: &[f64], entropies: &[f64]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }

        let avg_time = mean(times);
        let avg_entropy = mean(entropies);

        Some(Self {
            avg_time,
            std_time: std_dev(times, avg_time),
            avg_entropy,
            std_entropy: std_dev(entropies, avg_entropy),
            min_time: times.iter().cloned().fold(f64::INFINITY, f64::min),
            max_time: times.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            successful_runs: times.len(),
        })
    }
}

/// Benchmark results for all methods with at least one successful run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Method key -> aggregate statistics
    pub results: HashMap<String, MethodStats>,
    /// Requested repetitions per method
    pub runs: usize,
}

/// The fixed method suite the benchmark exercises
pub fn suite() -> Vec<Method> {
    vec![
        Method::Hadamard { qubits: 1 },
        Method::Bell,
        Method::Ghz { qubits: 3 },
        Method::Nist,
    ]
}

/// Run every method `runs` times at the benchmark shot count
///
/// Never fails as a whole: per-run failures only shrink (or omit) the
/// affected method's statistics.
pub fn run(engine: &mut QuantumRng, runs: usize) -> BenchmarkReport {
    let mut results = HashMap::new();

    for method in suite() {
        let mut times = Vec::with_capacity(runs);
        let mut entropies = Vec::with_capacity(runs);

        for _ in 0..runs {
            let start = Instant::now();
            match engine.generate(&method, SHOTS_PER_RUN) {
                Ok(result) => {
                    times.push(start.elapsed().as_secs_f64());
                    entropies.push(result.entropy);
                }
                Err(e) => {
                    warn!(method = method.key(), error = %e, "benchmark run failed");
                }
            }
        }

        if let Some(stats) = MethodStats::from_samples(&times, &entropies) {
            results.insert(method.key().to_string(), stats);
        }
    }

    BenchmarkReport { results, runs }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}
