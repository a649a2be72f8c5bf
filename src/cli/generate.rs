//! Generate command handler
//!
//! Runs one generation method and prints the result.

use crate::config::Config;
use crate::entropy::bit_sequence_entropy;
use crate::error::{Error, Result};
use crate::generator::{GenerationResult, Method, QuantumRng};
use crate::rng::{get_source_with_key, pseudo::SeededSource};
use clap::Args;

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Generation method: hadamard, bell, ghz, or nist
    #[arg(long, short = 'm')]
    pub method: Option<String>,

    /// Qubit count (hadamard and ghz only)
    #[arg(long, short = 'q')]
    pub qubits: Option<usize>,

    /// Number of measurement shots
    #[arg(long, short = 's')]
    pub shots: Option<usize>,

    /// Random source feeding the sampler
    #[arg(long, short = 'b')]
    pub source: Option<String>,

    /// Seed for a reproducible run (overrides --source)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format: text or json
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = Config::load()?;

    let method_key = args.method.unwrap_or(config.defaults.method.clone());
    let method = Method::from_key(&method_key, args.qubits)?;

    let shots = args.shots.unwrap_or(config.defaults.shots);
    let format = args.format.unwrap_or(config.defaults.format.clone());

    // Seeded runs take priority so results can be reproduced exactly
    let source = match args.seed {
        Some(seed) => Box::new(SeededSource::new(seed)) as Box<dyn crate::rng::RandomSource>,
        None => {
            let source_name = args.source.unwrap_or(config.defaults.source.clone());
            let api_key = if config.api_keys.anu.is_empty() {
                None
            } else {
                Some(config.api_keys.anu.as_str())
            };
            get_source_with_key(&source_name, api_key)
        }
    };

    let mut engine = QuantumRng::new(source);
    let result = engine.generate(&method, shots)?;

    let output = match format.as_str() {
        "json" => serde_json::to_string_pretty(&result)?,
        "text" => format_text(&result),
        other => {
            return Err(Error::Config(format!("Unknown format: {}", other)));
        }
    };

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Human-readable result summary
fn format_text(result: &GenerationResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Method:  {}\n", result.method));
    out.push_str(&format!(
        "Shots:   {} ({} qubits)\n",
        result.shots, result.qubits
    ));
    out.push_str(&format!("Entropy: {:.4} bits\n", result.entropy));
    out.push_str(&format!(
        "Raw bit entropy: {:.4} bits\n",
        bit_sequence_entropy(&result.random_bits)
    ));

    // Stable ordering for the histogram
    let mut outcomes: Vec<(&String, &u64)> = result.counts.iter().collect();
    outcomes.sort_by(|a, b| a.0.cmp(b.0));

    out.push_str("Counts:\n");
    for (outcome, count) in outcomes {
        out.push_str(&format!("  {}: {}\n", outcome, count));
    }

    let preview: String = result
        .random_bits
        .iter()
        .take(32)
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    if !preview.is_empty() {
        out.push_str(&format!("Bits:    {} ...\n", preview));
    }

    if let Some(processed) = &result.processed_bits {
        let shown: String = processed.chars().take(64).collect();
        out.push_str(&format!(
            "Debiased ({} bits): {}\n",
            processed.len(),
            shown
        ));
    }

    out
}
