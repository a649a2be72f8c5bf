//! Random sources feeding the measurement sampler
//!
//! This module defines the `RandomSource` trait and implementations for the
//! available randomness backends. The sampler is the only consumer: one
//! uniform float in [0, 1) per measurement shot. Each source is a single
//! file implementing the trait.
//!
//! ## Flex Point
//! Adding a new source requires:
//! 1. Create `src/rng/{source_name}.rs` implementing `RandomSource`
//! 2. Add `pub mod {source_name};` below
//! 3. Register it in `get_source` and `available_sources`

pub mod anu;
pub mod pseudo;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Trait for the randomness backends that drive measurement sampling
///
/// Implementations must be thread-safe (Send + Sync) to work with the async
/// server.
pub trait RandomSource: Send + Sync {
    /// Returns the source name (e.g., "pseudo", "anu")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of this source
    fn description(&self) -> &'static str;

    /// Generate n floats, each uniformly distributed in [0.0, 1.0)
    ///
    /// This is the single entry point through which randomness reaches the
    /// sampler, so implementations must cover the full [0, 1) range
    /// uniformly.
    fn floats(&self, n: usize) -> Result<Vec<f64>>;
}

/// Information about a source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Source name (used in config/API)
    pub name: String,
    /// Human-readable description
    pub description: String,
}

/// Get a source by name
///
/// Returns the pseudo source as default if name is not recognized
pub fn get_source(name: &str) -> Box<dyn RandomSource> {
    match name {
        "pseudo" => Box::new(pseudo::PseudoSource::new()),
        "anu" => Box::new(anu::AnuSource::new()),
        _ => Box::new(pseudo::PseudoSource::new()), // Default to pseudo
    }
}

/// Get a source by name with optional API key
pub fn get_source_with_key(name: &str, api_key: Option<&str>) -> Box<dyn RandomSource> {
    match name {
        "pseudo" => Box::new(pseudo::PseudoSource::new()),
        "anu" => {
            if let Some(key) = api_key {
                Box::new(anu::AnuSource::with_api_key(key))
            } else {
                Box::new(anu::AnuSource::new())
            }
        }
        _ => Box::new(pseudo::PseudoSource::new()),
    }
}

/// List all available sources with their info
pub fn available_sources() -> Vec<SourceInfo> {
    vec![
        SourceInfo {
            name: "pseudo".to_string(),
            description: "Pseudo-random number generator (for testing)".to_string(),
        },
        SourceInfo {
            name: "anu".to_string(),
            description: "Australian National University Quantum Random Number Generator"
                .to_string(),
        },
    ]
}
