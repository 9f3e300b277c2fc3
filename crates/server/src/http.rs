use std::sync::Arc;

use ares_core::api::{
    AnalyzeRequest, ErrorBody, WaitlistListing, WaitlistRequest, WaitlistResponse,
};
use ares_core::model::AnalysisResult;
use ares_core::validation::{self, WaitlistError};
use ares_core::{now_timestamp, AresEngine};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use ulid::Ulid;

use crate::pages;
use crate::sink::WaitlistSink;

#[derive(Clone)]
pub struct AppState {
    engine: Arc<AresEngine>,
    sink: Arc<dyn WaitlistSink>,
}

impl AppState {
    pub fn new(sink: Arc<dyn WaitlistSink>) -> Self {
        Self {
            engine: Arc::new(AresEngine::new()),
            sink,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/dashboard", get(pages::dashboard))
        .route("/healthz", get(healthz))
        .route("/api/analyse", post(analyze))
        .route("/api/analyze", post(analyze))
        .route("/api/waitlist", post(join_waitlist).get(list_waitlist))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

// Bodies are parsed by hand: Content-Type is not checked, and JSON that does
// not parse maps to the endpoint's 500 error.
async fn analyze(
    State(st): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, ApiError> {
    let req: AnalyzeRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::AnalysisFailed(e.to_string()))?;
    let input = req.input.filter(|s| !s.is_empty()).ok_or(ApiError::NoInput)?;

    let analysis_id = Ulid::new();
    let result = st.engine.analyze(&input);
    info!(
        %analysis_id,
        input_bytes = input.len(),
        findings = result.findings.len(),
        "analysis complete"
    );
    Ok(Json(result))
}

async fn join_waitlist(
    State(st): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<WaitlistResponse>), ApiError> {
    let req: WaitlistRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::SystemFailure(e.to_string()))?;
    let entry = validation::into_entry(req, now_timestamp()).map_err(ApiError::Rejected)?;

    st.sink
        .append(&entry)
        .await
        .map_err(|e| ApiError::SystemFailure(e.to_string()))?;

    info!(sink = st.sink.name(), email = %entry.email, "waitlist entry saved");
    Ok((
        StatusCode::CREATED,
        Json(WaitlistResponse::granted(entry.timestamp)),
    ))
}

async fn list_waitlist(State(st): State<AppState>) -> Result<Json<WaitlistListing>, ApiError> {
    let rows = st
        .sink
        .list()
        .await
        .map_err(|e| ApiError::FetchFailed(e.to_string()))?;
    Ok(Json(WaitlistListing::from(rows)))
}

/// Handler failures, each mapped to a fixed wire error.
#[derive(Debug)]
pub enum ApiError {
    NoInput,
    AnalysisFailed(String),
    Rejected(WaitlistError),
    SystemFailure(String),
    FetchFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NoInput => (StatusCode::BAD_REQUEST, ErrorBody::new("No input provided")),
            ApiError::AnalysisFailed(msg) => {
                error!(error = %msg, "analysis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Analysis failed"),
                )
            }
            ApiError::Rejected(e) => {
                warn!(code = e.code(), "waitlist submission rejected");
                (StatusCode::BAD_REQUEST, ErrorBody::new(e.code()))
            }
            ApiError::SystemFailure(msg) => {
                error!(error = %msg, "waitlist submission failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("SYSTEM_FAILURE").with_details(msg),
                )
            }
            ApiError::FetchFailed(msg) => {
                error!(error = %msg, "waitlist listing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Failed to fetch data"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
