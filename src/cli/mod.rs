//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod benchmark;
pub mod config;
pub mod generate;
pub mod methods;
pub mod serve;

use clap::{Parser, Subcommand};

/// Quantum random number generator
#[derive(Parser)]
#[command(name = "q-rng")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate random bits
    Generate(generate::GenerateArgs),

    /// Benchmark all generation methods
    Benchmark(benchmark::BenchmarkArgs),

    /// List available generation methods
    Methods,

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Benchmark(args) => benchmark::run(args),
        Commands::Methods => methods::run(),
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}
