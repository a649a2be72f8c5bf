//! Generation methods and the engine facade
//!
//! `Method` is the closed set of circuit-based generation methods;
//! `QuantumRng` wires a random source (and an optional results cache) to the
//! simulation pipeline: build circuit(s), evolve the state, sample shots,
//! post-process into a `GenerationResult`.

use crate::config::defaults::{DEFAULT_GHZ_QUBITS, DEFAULT_QUBITS};
use crate::entropy::{bit_entropy, shannon_entropy, von_neumann};
use crate::error::{Error, Result};
use crate::rng::RandomSource;
use crate::sim::{sample, Circuit};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Number of independent sub-circuits in the NIST-inspired method
const NIST_SUB_CIRCUITS: usize = 4;

/// A generation method with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// Hadamard on every qubit independently
    Hadamard { qubits: usize },
    /// Entangled 2-qubit Bell pair
    Bell,
    /// Greenberger-Horne-Zeilinger multi-qubit entanglement
    Ghz { qubits: usize },
    /// Four rotated 2-qubit sources with Von Neumann post-processing
    Nist,
}

impl Method {
    /// Short key used in the API and config (e.g. "hadamard")
    pub fn key(&self) -> &'static str {
        match self {
            Method::Hadamard { .. } => "hadamard",
            Method::Bell => "bell",
            Method::Ghz { .. } => "ghz",
            Method::Nist => "nist",
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Method::Hadamard { .. } => "Hadamard",
            Method::Bell => "Bell State",
            Method::Ghz { .. } => "GHZ State",
            Method::Nist => "NIST-inspired",
        }
    }

    /// Parse a method key, applying per-method qubit defaults when the
    /// caller did not supply one
    ///
    /// Bell and NIST-inspired circuits are fixed at 2 qubits; a supplied
    /// qubit count is ignored for them.
    pub fn from_key(key: &str, qubits: Option<usize>) -> Result<Self> {
        match key.to_lowercase().as_str() {
            "hadamard" => Ok(Method::Hadamard {
                qubits: qubits.unwrap_or(DEFAULT_QUBITS),
            }),
            "bell" => Ok(Method::Bell),
            "ghz" => Ok(Method::Ghz {
                qubits: qubits.unwrap_or(DEFAULT_GHZ_QUBITS),
            }),
            "nist" => Ok(Method::Nist),
            _ => Err(Error::UnknownMethod(key.to_string())),
        }
    }

    /// Qubit count of the circuit(s) this method runs
    pub fn qubits(&self) -> usize {
        match self {
            Method::Hadamard { qubits } | Method::Ghz { qubits } => *qubits,
            Method::Bell | Method::Nist => 2,
        }
    }

    /// Build the circuit(s) for one invocation
    ///
    /// A fresh circuit per call: circuits are never reused. The
    /// NIST-inspired method builds four independent sub-circuits.
    fn circuits(&self) -> Result<Vec<Circuit>> {
        match self {
            Method::Hadamard { qubits } => Ok(vec![Circuit::hadamard(*qubits)?]),
            Method::Bell => Ok(vec![Circuit::bell()]),
            Method::Ghz { qubits } => Ok(vec![Circuit::ghz(*qubits)?]),
            Method::Nist => Ok((0..NIST_SUB_CIRCUITS)
                .map(|_| Circuit::multi_source())
                .collect()),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Static metadata about a method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodInfo {
    pub key: String,
    pub name: String,
    pub description: String,
    pub parameters: Vec<String>,
}

/// Describe all available methods (no engine computation involved)
pub fn describe_methods() -> Vec<MethodInfo> {
    vec![
        MethodInfo {
            key: "hadamard".to_string(),
            name: "Hadamard Method".to_string(),
            description: "Uses Hadamard gates to create superposition states".to_string(),
            parameters: vec!["qubits".to_string(), "shots".to_string()],
        },
        MethodInfo {
            key: "bell".to_string(),
            name: "Bell State Method".to_string(),
            description: "Uses entangled Bell states for correlated randomness".to_string(),
            parameters: vec!["shots".to_string()],
        },
        MethodInfo {
            key: "ghz".to_string(),
            name: "GHZ State Method".to_string(),
            description: "Uses Greenberger-Horne-Zeilinger multi-qubit entanglement".to_string(),
            parameters: vec!["qubits".to_string(), "shots".to_string()],
        },
        MethodInfo {
            key: "nist".to_string(),
            name: "NIST-inspired Method".to_string(),
            description: "Combines multiple quantum sources with Von Neumann post-processing"
                .to_string(),
            parameters: vec!["shots".to_string()],
        },
    ]
}

/// The result of one generation invocation, owned by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Unique id for this generation
    pub id: String,
    /// Method display name
    pub method: String,
    /// Outcome string -> observed shot count
    pub counts: HashMap<String, u64>,
    /// Flattened per-shot outcome strings
    pub random_bits: Vec<String>,
    /// Von Neumann extractor output (NIST-inspired method only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_bits: Option<String>,
    /// Shannon entropy in bits: over the count distribution, or over the
    /// processed bit stream for the NIST-inspired method
    pub entropy: f64,
    /// Requested shot count
    pub shots: usize,
    /// Qubit count of the underlying circuit(s)
    pub qubits: usize,
    /// When this was generated
    pub timestamp: String,
}

/// Opt-in cache of the latest result per method key
///
/// Unbounded and without any eviction policy; the engine's default carries
/// no cache at all, so nothing is retained unless a caller explicitly
/// supplies one via `QuantumRng::with_cache`.
#[derive(Debug, Default)]
pub struct ResultsCache {
    entries: HashMap<String, GenerationResult>,
}

impl ResultsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest cached result for a method key
    pub fn get(&self, key: &str) -> Option<&GenerationResult> {
        self.entries.get(key)
    }

    fn insert(&mut self, key: &str, result: GenerationResult) {
        self.entries.insert(key.to_string(), result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Quantum random number generation engine
///
/// Single-threaded and synchronous: circuit construction, state evolution,
/// sampling, and post-processing run sequentially per call.
pub struct QuantumRng {
    source: Box<dyn RandomSource>,
    cache: Option<ResultsCache>,
}

impl QuantumRng {
    /// Create an engine over a random source, with no results cache
    pub fn new(source: Box<dyn RandomSource>) -> Self {
        Self {
            source,
            cache: None,
        }
    }

    /// Create an engine that keeps the latest result per method key
    pub fn with_cache(source: Box<dyn RandomSource>, cache: ResultsCache) -> Self {
        Self {
            source,
            cache: Some(cache),
        }
    }

    /// Name of the underlying random source
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// The results cache, if one was supplied
    pub fn cache(&self) -> Option<&ResultsCache> {
        self.cache.as_ref()
    }

    /// Run one generation method for the given shot count
    ///
    /// Parameter errors (invalid qubit count) surface directly; any failure
    /// inside the simulation pipeline is wrapped as a structured
    /// `Generation` failure carrying the method name and cause. Zero shots
    /// is not an error: it yields empty counts and entropy 0.0.
    pub fn generate(&mut self, method: &Method, shots: usize) -> Result<GenerationResult> {
        let circuits = method.circuits()?;

        // The NIST-inspired method splits shots evenly across sub-circuits
        let shots_per_circuit = match method {
            Method::Nist => shots / NIST_SUB_CIRCUITS,
            _ => shots,
        };

        let (counts, random_bits) = self
            .execute(&circuits, shots_per_circuit)
            .map_err(|e| Error::Generation {
                method: method.display_name().to_string(),
                cause: e.to_string(),
            })?;

        let (processed_bits, entropy) = match method {
            Method::Nist => {
                let processed = von_neumann(&random_bits);
                let entropy = bit_entropy(&processed);
                (Some(processed), entropy)
            }
            _ => (None, shannon_entropy(&counts)),
        };

        debug!(
            method = method.key(),
            shots,
            outcomes = random_bits.len(),
            entropy,
            "generation complete"
        );

        let result = GenerationResult {
            id: uuid::Uuid::new_v4().to_string(),
            method: method.display_name().to_string(),
            counts,
            random_bits,
            processed_bits,
            entropy,
            shots,
            qubits: method.qubits(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        if let Some(cache) = &mut self.cache {
            cache.insert(method.key(), result.clone());
        }

        Ok(result)
    }

    /// Evolve and sample each circuit, merging counts and outcome lists
    fn execute(
        &self,
        circuits: &[Circuit],
        shots_per_circuit: usize,
    ) -> Result<(HashMap<String, u64>, Vec<String>)> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut outcomes = Vec::new();

        for circuit in circuits {
            let state = circuit.run()?;
            let drawn = sample(
                &state,
                circuit.measured(),
                shots_per_circuit,
                self.source.as_ref(),
            )?;

            for (outcome, count) in drawn.counts {
                *counts.entry(outcome).or_insert(0) += count;
            }
            outcomes.extend(drawn.outcomes);
        }

        Ok((counts, outcomes))
    }
}
