//! HTTP classification server.
//!
//! Accepts a symbol sequence as JSON, runs the classifier and returns the
//! verdict with its evidence. The classifier is immutable, so handlers share
//! it through an `Arc` without locking.

use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use rngprobe_core::{Classifier, ClassifierConfig, SymbolEncoding, Verdict, symbols_from_json};

/// Smallest sequence the service will forward to the classifier.
pub const DEFAULT_MIN_SYMBOLS: usize = 5;

/// Server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests with fewer symbols are rejected before classification.
    pub min_symbols: usize,
    pub classifier: ClassifierConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8042,
            min_symbols: DEFAULT_MIN_SYMBOLS,
            classifier: ClassifierConfig::default(),
        }
    }
}

/// Shared server state.
struct AppState {
    classifier: Classifier,
    min_symbols: usize,
}

#[derive(Deserialize)]
struct ClassifyRequest {
    symbols: Vec<serde_json::Value>,
    /// Symbol encoding: first_occurrence (default) or identity.
    #[serde(default)]
    encoding: SymbolEncoding,
}

#[derive(Serialize)]
struct ClassifyResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<Verdict>,
    /// Error message if request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ClassifyResponse {
    fn rejected(message: String) -> (StatusCode, Json<Self>) {
        warn!("rejected classify request: {message}");
        Json(Self {
            success: false,
            verdict: None,
            error: Some(message),
        })
        .with_status(StatusCode::BAD_REQUEST)
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

trait JsonWithStatus<T> {
    fn with_status(self, status: StatusCode) -> (StatusCode, Json<T>);
}

impl<T> JsonWithStatus<T> for Json<T> {
    fn with_status(self, status: StatusCode) -> (StatusCode, Json<T>) {
        (status, self)
    }
}

async fn handle_classify(
    State(state): State<Arc<AppState>>,
    request: Result<Json<ClassifyRequest>, JsonRejection>,
) -> (StatusCode, Json<ClassifyResponse>) {
    // Malformed bodies get the same JSON error shape as invalid symbols.
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return ClassifyResponse::rejected(rejection.body_text()),
    };

    let symbols = match symbols_from_json(&request.symbols) {
        Ok(symbols) => symbols,
        Err(e) => return ClassifyResponse::rejected(e.to_string()),
    };

    if !symbols.is_empty() && symbols.len() < state.min_symbols {
        return ClassifyResponse::rejected(format!(
            "Need at least {} symbols for analysis, got {}",
            state.min_symbols,
            symbols.len()
        ));
    }

    match state.classifier.classify_symbols(&symbols, request.encoding) {
        Ok(verdict) => (
            StatusCode::OK,
            Json(ClassifyResponse {
                success: true,
                verdict: Some(verdict),
                error: None,
            }),
        ),
        Err(e) => ClassifyResponse::rejected(e.to_string()),
    }
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

async fn handle_index(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let config = state.classifier.config();
    Json(serde_json::json!({
        "name": "rngprobe server",
        "version": rngprobe_core::VERSION,
        "config": {
            "min_symbols": state.min_symbols,
            "ratio_decimals": config.ratio_decimals,
            "outlier_sigma": config.outlier_sigma,
        },
        "endpoints": {
            "/": "This API index",
            "/api/v1/classify": {
                "method": "POST",
                "description": "Classify the PRNG family behind a symbol sequence",
                "body": {
                    "symbols": "Array of integers or strings",
                    "encoding": "first_occurrence (default) or identity",
                }
            },
            "/health": "Health check",
        },
        "examples": {
            "cards": r#"{"symbols": ["Hearts", "Spades", "Clubs", "Hearts", "Diamonds"]}"#,
            "numeric": r#"{"symbols": [1, 2, 4, 8, 16], "encoding": "identity"}"#,
        }
    }))
}

/// Build the axum router.
pub fn build_router(classifier: Classifier, min_symbols: usize) -> Router {
    let state = Arc::new(AppState {
        classifier,
        min_symbols,
    });

    Router::new()
        .route("/", get(handle_index))
        .route("/api/v1/classify", post(handle_classify))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the HTTP classification server until it fails.
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let app = build_router(Classifier::new(config.classifier), config.min_symbols);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await
}
