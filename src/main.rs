//! q-rng CLI entry point
//!
//! Quantum random number generator - CLI + web app

use q_rng::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
