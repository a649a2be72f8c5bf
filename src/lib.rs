//! q-rng: Quantum Random Number Generator
//!
//! A library and CLI tool for generating random bit sequences by simulating
//! small quantum circuits, sampling measurement outcomes under the Born
//! rule, and post-processing the raw outcomes into debiased bitstreams.
//!
//! ## Features
//!
//! - Dense state-vector simulation (Hadamard, Z-rotation, CNOT)
//! - Four generation methods: hadamard, bell, ghz, nist
//! - Von Neumann debiasing and Shannon-entropy quality measures
//! - Pluggable random sources for sampling (pseudo, seeded, ANU QRNG)
//! - Benchmark harness + HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use q_rng::generator::{Method, QuantumRng};
//! use q_rng::rng::pseudo::SeededSource;
//!
//! let mut engine = QuantumRng::new(Box::new(SeededSource::new(42)));
//! let result = engine.generate(&Method::Bell, 1024).unwrap();
//!
//! // Bell-pair outcomes are perfectly correlated
//! assert_eq!(result.counts.values().sum::<u64>(), 1024);
//! assert!(result.counts.keys().all(|k| k == "00" || k == "11"));
//! println!("entropy: {:.3} bits", result.entropy);
//! ```

pub mod benchmark;
pub mod cli;
pub mod config;
pub mod constants;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod rng;
pub mod server;
pub mod sim;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use generator::{GenerationResult, Method, QuantumRng};
