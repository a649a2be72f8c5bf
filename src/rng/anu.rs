//! ANU Quantum Random Number Generator source
//!
//! Uses the Australian National University's QRNG API to drive sampling with
//! real quantum randomness instead of the local PRNG.
//! API documentation: https://qrng.anu.edu.au/contact/api-documentation/
//!
//! Two tiers:
//! - Free: rate limited, no auth
//! - Paid: requires API key, sent as the x-api-key header
//!
//! If an API key is provided, the paid endpoint is used automatically.

use crate::constants::api::{ANU_FREE_URL, ANU_PAID_URL};
use crate::error::{Error, Result};
use crate::rng::RandomSource;
use serde::Deserialize;
use std::sync::mpsc;
use std::thread;

/// Maximum bytes per request
const MAX_BLOCK_SIZE: usize = 1024;

/// ANU QRNG source
///
/// Note: HTTP requests run in a separate thread to avoid conflicts with
/// tokio's async runtime.
#[derive(Debug)]
pub struct AnuSource {
    api_key: Option<String>,
}

/// Which API tier is being used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnuTier {
    Free,
    Paid,
}

/// ANU API success response for uint8 type
///
/// Example: `{"success": true, "type": "uint8", "length": "5", "data": [172, 216, 180, 138, 46]}`
#[derive(Debug, Deserialize)]
struct AnuResponse {
    success: bool,
    #[serde(default)]
    data: Option<Vec<u8>>,
    #[allow(dead_code)]
    r#type: Option<String>,
    #[allow(dead_code)]
    length: Option<String>,
    /// Present on error responses: `{"success": false, "message": "..."}`
    #[serde(default)]
    message: Option<String>,
}

impl AnuSource {
    /// Create a new ANU source
    pub fn new() -> Self {
        Self { api_key: None }
    }

    /// Create a new ANU source with an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    /// Get which API tier is being used
    pub fn tier(&self) -> AnuTier {
        match &self.api_key {
            Some(key) if !key.is_empty() => AnuTier::Paid,
            _ => AnuTier::Free,
        }
    }

    /// Fetch random bytes from the ANU API
    ///
    /// Runs the HTTP request in a separate thread to avoid tokio runtime
    /// conflicts.
    fn fetch_bytes(&self, count: usize) -> Result<Vec<u8>> {
        let count = count.min(MAX_BLOCK_SIZE);

        // Select endpoint based on whether we have an API key
        let (url, api_key) = match &self.api_key {
            Some(key) if !key.is_empty() => {
                // Paid endpoint uses header auth
                (
                    format!("{}?length={}&type=uint8", ANU_PAID_URL, count),
                    Some(key.clone()),
                )
            }
            _ => {
                // Free endpoint, no auth needed
                (
                    format!("{}?length={}&type=uint8", ANU_FREE_URL, count),
                    None,
                )
            }
        };

        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = (|| -> Result<Vec<u8>> {
                let client = reqwest::blocking::Client::builder()
                    .timeout(std::time::Duration::from_secs(30))
                    .build()
                    .map_err(|e| Error::Source(format!("Failed to build HTTP client: {}", e)))?;

                let mut request = client.get(&url);

                // Add API key header for paid endpoint
                if let Some(key) = api_key {
                    request = request.header("x-api-key", key);
                }

                let response = request
                    .send()
                    .map_err(|e| Error::Source(format!("ANU API request failed: {}", e)))?;

                if !response.status().is_success() {
                    return Err(Error::Source(format!(
                        "ANU API returned status: {}",
                        response.status()
                    )));
                }

                let anu_response: AnuResponse = response
                    .json()
                    .map_err(|e| Error::Source(format!("Failed to parse ANU response: {}", e)))?;

                if !anu_response.success {
                    let msg = anu_response
                        .message
                        .unwrap_or_else(|| "Unknown error".to_string());
                    return Err(Error::Source(format!("ANU API error: {}", msg)));
                }

                anu_response
                    .data
                    .ok_or_else(|| Error::Source("ANU API returned no data".to_string()))
            })();

            let _ = tx.send(result);
        });

        rx.recv()
            .map_err(|_| Error::Source("Failed to receive response from HTTP thread".to_string()))?
    }

    /// Fetch an arbitrary number of bytes, batching API calls as needed
    fn bytes(&self, count: usize) -> Result<Vec<u8>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut result = Vec::with_capacity(count);
        let mut remaining = count;

        while remaining > 0 {
            let batch_size = remaining.min(MAX_BLOCK_SIZE);
            let bytes = self.fetch_bytes(batch_size)?;
            result.extend(bytes);
            remaining = remaining.saturating_sub(batch_size);
        }

        Ok(result)
    }
}

impl Default for AnuSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for AnuSource {
    fn name(&self) -> &'static str {
        "anu"
    }

    fn description(&self) -> &'static str {
        "Australian National University Quantum Random Number Generator"
    }

    fn floats(&self, n: usize) -> Result<Vec<f64>> {
        if n == 0 {
            return Ok(Vec::new());
        }

        // 8 bytes per f64; the top 53 bits give a uniform value in [0, 1)
        let bytes = self.bytes(n * 8)?;
        let mut floats = Vec::with_capacity(n);

        for chunk in bytes.chunks_exact(8) {
            let value = u64::from_le_bytes(chunk.try_into().unwrap());
            let float = (value >> 11) as f64 / (1u64 << 53) as f64;
            floats.push(float);
        }

        Ok(floats)
    }
}
