//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::benchmark;
use crate::constants::bench::DEFAULT_RUNS;
use crate::error::Error;
use crate::generator::{describe_methods, Method, MethodInfo};
use crate::rng::{available_sources, SourceInfo};
use crate::server::state::AppState;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/generate/:method", post(generate_handler))
        .route("/api/benchmark", post(benchmark_handler))
        .route("/api/methods", get(methods_handler))
        .route("/api/status", get(status_handler))
        .route("/api/sources", get(sources_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

/// Map an engine error to a status code and error body
fn error_response(err: Error) -> (StatusCode, Json<ApiError>) {
    let (status, code) = match &err {
        Error::UnknownMethod(_) => (StatusCode::BAD_REQUEST, "INVALID_METHOD"),
        Error::InvalidQubits(_) => (StatusCode::BAD_REQUEST, "INVALID_QUBITS"),
        Error::Generation { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "GENERATION_ERROR"),
        Error::Source(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SOURCE_ERROR"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };
    (
        status,
        Json(ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }),
    )
}

/// API info response
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
    pub version: String,
    pub endpoints: HashMap<String, String>,
}

/// API info
///
/// GET /
async fn home_handler() -> Json<HomeResponse> {
    let mut endpoints = HashMap::new();
    endpoints.insert(
        "/api/generate/:method".to_string(),
        "Generate random bits using the specified method".to_string(),
    );
    endpoints.insert(
        "/api/benchmark".to_string(),
        "Benchmark all methods".to_string(),
    );
    endpoints.insert(
        "/api/methods".to_string(),
        "Get available methods".to_string(),
    );
    endpoints.insert(
        "/api/status".to_string(),
        "Server status and entropy check".to_string(),
    );
    endpoints.insert(
        "/api/sources".to_string(),
        "List available random sources".to_string(),
    );

    Json(HomeResponse {
        message: "Quantum Random Number Generator API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

/// Generate request body
///
/// All fields optional; defaults come from the server configuration and the
/// per-method qubit defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    /// Number of measurement shots
    pub shots: Option<usize>,
    /// Qubit count (hadamard and ghz only)
    pub qubits: Option<usize>,
}

/// Generate response
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub id: String,
    pub method: String,
    /// Outcome string -> observed shot count, for distribution charts
    pub counts: HashMap<String, u64>,
    pub random_bits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_bits: Option<String>,
    pub entropy: f64,
    /// Classical PRNG bitstrings of the same width and count, for the
    /// quantum-vs-classical comparison chart
    pub classical_comparison: Vec<String>,
    pub total_bits: usize,
    pub shots: usize,
    pub qubits: usize,
    pub timestamp: String,
}

/// Generate random bits endpoint
///
/// POST /api/generate/:method
async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Path(method_key): Path<String>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ApiError>)> {
    // Reject unknown methods before touching the engine
    let method = Method::from_key(&method_key, req.qubits).map_err(error_response)?;

    let shots = match req.shots {
        Some(shots) => shots,
        None => state.config.read().await.defaults.shots,
    };

    let mut engine = state.engine().await;
    let result = engine.generate(&method, shots).map_err(error_response)?;

    let classical_comparison = classical_bits(result.random_bits.len(), result.qubits);
    let total_bits = result.random_bits.len();

    Ok(Json(GenerateResponse {
        id: result.id,
        method: result.method,
        counts: result.counts,
        random_bits: result.random_bits,
        processed_bits: result.processed_bits,
        entropy: result.entropy,
        classical_comparison,
        total_bits,
        shots: result.shots,
        qubits: result.qubits,
        timestamp: result.timestamp,
    }))
}

/// Classical PRNG bitstrings for the comparison chart
fn classical_bits(count: usize, qubits: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let max = 1u64 << qubits;
    (0..count)
        .map(|_| {
            let value = rng.gen_range(0..max);
            format!("{:0width$b}", value, width = qubits)
        })
        .collect()
}

/// Benchmark request body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BenchmarkRequest {
    /// Repetitions per method
    pub runs: Option<usize>,
}

/// Benchmark response
#[derive(Debug, Serialize, Deserialize)]
pub struct BenchmarkResponse {
    /// Method key -> aggregate statistics (zero-success methods omitted)
    pub benchmark_results: HashMap<String, benchmark::MethodStats>,
    pub total_runs: usize,
}

/// Benchmark all methods endpoint
///
/// POST /api/benchmark
async fn benchmark_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BenchmarkRequest>,
) -> Json<BenchmarkResponse> {
    let runs = req.runs.unwrap_or(DEFAULT_RUNS);

    let mut engine = state.engine().await;
    let report = benchmark::run(&mut engine, runs);

    Json(BenchmarkResponse {
        benchmark_results: report.results,
        total_runs: report.runs,
    })
}

/// Methods list response
#[derive(Debug, Serialize, Deserialize)]
pub struct MethodsResponse {
    pub methods: Vec<MethodInfo>,
}

/// List available generation methods
///
/// GET /api/methods
async fn methods_handler() -> Json<MethodsResponse> {
    Json(MethodsResponse {
        methods: describe_methods(),
    })
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Current random source
    pub source: String,
    /// Quick engine entropy check (if the engine is healthy)
    pub entropy_check: Option<EntropyCheck>,
}

/// Result of a quick entropy sample through the full pipeline
#[derive(Debug, Serialize, Deserialize)]
pub struct EntropyCheck {
    pub method: String,
    pub shots: usize,
    pub entropy: f64,
    pub max_entropy: f64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let source = state.source_name().await;

    // Run a small single-qubit generation as a health check
    let mut engine = state.engine().await;
    let entropy_check = match engine.generate(&Method::Hadamard { qubits: 1 }, 1024) {
        Ok(result) => Some(EntropyCheck {
            method: result.method,
            shots: result.shots,
            entropy: result.entropy,
            max_entropy: 1.0,
        }),
        Err(_) => None,
    };

    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        source,
        entropy_check,
    })
}

/// Sources list response
#[derive(Debug, Serialize, Deserialize)]
pub struct SourcesResponse {
    pub sources: Vec<SourceInfo>,
    pub current: String,
}

/// List available random sources
///
/// GET /api/sources
async fn sources_handler(State(state): State<Arc<AppState>>) -> Json<SourcesResponse> {
    let current = state.source_name().await;
    Json(SourcesResponse {
        sources: available_sources(),
        current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(crate::config::Config::default()))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_home_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let home: HomeResponse = serde_json::from_slice(&body).unwrap();

        assert!(home.message.contains("Quantum"));
        assert!(home.endpoints.contains_key("/api/benchmark"));
    }

    #[tokio::test]
    async fn test_methods_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/methods")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let methods: MethodsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(methods.methods.len(), 4);
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();

        assert!(status.running);
        assert_eq!(status.source, "pseudo");

        let check = status.entropy_check.unwrap();
        assert_eq!(check.shots, 1024);
        assert!(check.entropy > 0.9 && check.entropy <= check.max_entropy);
    }

    #[tokio::test]
    async fn test_sources_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/sources")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let sources: SourcesResponse = serde_json::from_slice(&body).unwrap();

        assert!(sources.sources.iter().any(|s| s.name == "pseudo"));
        assert_eq!(sources.current, "pseudo");
    }

    #[tokio::test]
    async fn test_generate_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json(
                "/api/generate/hadamard",
                serde_json::json!({ "shots": 512, "qubits": 2 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let gen: GenerateResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(gen.method, "Hadamard");
        assert_eq!(gen.shots, 512);
        assert_eq!(gen.qubits, 2);
        assert_eq!(gen.counts.values().sum::<u64>(), 512);
        assert_eq!(gen.random_bits.len(), 512);
        assert_eq!(gen.classical_comparison.len(), 512);
        assert_eq!(gen.total_bits, 512);
        assert!(gen.processed_bits.is_none());
        for bits in &gen.classical_comparison {
            assert_eq!(bits.len(), 2);
        }
    }

    #[tokio::test]
    async fn test_generate_defaults_from_config() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json("/api/generate/bell", serde_json::json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let gen: GenerateResponse = serde_json::from_slice(&body).unwrap();

        // Config default shots
        assert_eq!(gen.shots, 1024);
        for outcome in gen.counts.keys() {
            assert!(outcome == "00" || outcome == "11");
        }
    }

    #[tokio::test]
    async fn test_generate_nist_has_processed_bits() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json(
                "/api/generate/nist",
                serde_json::json!({ "shots": 400 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let gen: GenerateResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(gen.random_bits.len(), 400);
        assert!(gen.processed_bits.is_some());
    }

    #[tokio::test]
    async fn test_generate_unknown_method() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json("/api/generate/bogus", serde_json::json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "INVALID_METHOD");
    }

    #[tokio::test]
    async fn test_generate_invalid_qubits() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json(
                "/api/generate/hadamard",
                serde_json::json!({ "qubits": 0 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "INVALID_QUBITS");
    }

    #[tokio::test]
    async fn test_benchmark_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json("/api/benchmark", serde_json::json!({ "runs": 2 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let bench: BenchmarkResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(bench.total_runs, 2);
        assert_eq!(bench.benchmark_results.len(), 4);
        for stats in bench.benchmark_results.values() {
            assert_eq!(stats.successful_runs, 2);
        }
    }
}
