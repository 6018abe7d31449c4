use crate::types::{AnalyzeRequest, AnalyzeResponse};
use axum::{
    response::Html,
    routing::{get, post},
    extract::State,
    Json, Router,
};
use empath_core::Classifier;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

/// Shared state for the gateway server. The classifier is immutable
/// after startup, so handlers only ever read through the Arc.
#[derive(Clone)]
struct AppState {
    classifier: Arc<Classifier>,
}

/// The gateway HTTP server.
///
/// - `POST /analyze` — classify text, return the selected response
/// - `GET /` — static landing page
/// - `GET /health` — health check
pub struct GatewayServer {
    classifier: Arc<Classifier>,
    host: String,
    port: u16,
}

impl GatewayServer {
    pub fn new(classifier: Arc<Classifier>, host: &str, port: u16) -> Self {
        Self {
            classifier,
            host: host.to_string(),
            port,
        }
    }

    /// Build the router. Split out from `start` so handler tests can
    /// drive it without binding a socket.
    pub fn router(classifier: Arc<Classifier>) -> Router {
        let state = AppState { classifier };
        Router::new()
            .route("/", get(landing))
            .route("/health", get(health))
            .route("/analyze", post(analyze))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Start the server. This spawns a background task and returns the
    /// join handle.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        let app = Self::router(self.classifier);
        let addr = format!("{}:{}", self.host, self.port);

        tokio::spawn(async move {
            let listener = match tokio::net::TcpListener::bind(&addr).await {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!("Gateway failed to bind {}: {}", addr, e);
                    return;
                }
            };
            tracing::info!("Gateway listening on {}", addr);
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Gateway server error: {}", e);
            }
        })
    }
}

// ============================================================================
// Route handlers
// ============================================================================

async fn landing() -> Html<&'static str> {
    Html(include_str!("landing.html"))
}

async fn health() -> &'static str {
    "ok"
}

/// POST /analyze — run the classification pipeline on the request body.
///
/// Malformed JSON or a missing `input` field never reaches this handler;
/// the Json extractor rejects those with a client-error status.
async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let request_id = Uuid::new_v4();
    let outcome = state.classifier.classify(&req.input);

    tracing::debug!(
        %request_id,
        input_chars = req.input.chars().count(),
        matches = outcome.tally.total(),
        category = outcome.category.map(|c| c.as_str()),
        "analyzed request"
    );

    Json(AnalyzeResponse {
        response: outcome.response,
    })
}
