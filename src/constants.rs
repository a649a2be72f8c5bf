//! Centralized constants for the q-rng crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Simulation constants
pub mod sim {
    /// Tolerance for the state normalization invariant: the sum of squared
    /// amplitude magnitudes must stay within this distance of 1.0 after any
    /// gate sequence. A violation is a fatal internal error.
    pub const NORM_TOLERANCE: f64 = 1e-9;

    /// Upper bound on qubit count. State size is 2^n amplitudes, so this
    /// keeps a single circuit at ~16 MiB of state.
    pub const MAX_QUBITS: usize = 20;
}

/// Benchmark constants
pub mod bench {
    /// Shot count used for every benchmark run
    pub const SHOTS_PER_RUN: usize = 100;

    /// Default number of repetitions per method
    pub const DEFAULT_RUNS: usize = 100;
}

/// External API endpoints
pub mod api {
    /// ANU QRNG free tier (rate limited)
    pub const ANU_FREE_URL: &str = "https://qrng.anu.edu.au/API/jsonI.php";

    /// ANU QRNG paid tier (requires API key)
    pub const ANU_PAID_URL: &str = "https://api.quantumnumbers.anu.edu.au";
}
