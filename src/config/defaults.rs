//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default random source
pub const DEFAULT_SOURCE: &str = "pseudo";

/// Default generation method
pub const DEFAULT_METHOD: &str = "hadamard";

/// Default number of measurement shots
pub const DEFAULT_SHOTS: usize = 1024;

/// Default qubit count for the Hadamard method
pub const DEFAULT_QUBITS: usize = 1;

/// Default qubit count for the GHZ method
pub const DEFAULT_GHZ_QUBITS: usize = 3;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5000;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "q-rng";
