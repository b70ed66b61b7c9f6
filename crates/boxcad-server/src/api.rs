//! The generate endpoint: validate, build the solid, export, return bytes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tower_http::cors::{AllowHeaders, CorsLayer};

use boxcad_export::ExportError;
use boxcad_types::{FileFormat, ModelRequest};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

/// Build the service router with CORS applied.
pub fn build_router(config: ServerConfig) -> Router {
    let cors = build_cors_layer(&config);
    let state = AppState {
        config: Arc::new(config),
    };
    Router::new()
        // FastAPI-era clients post to the trailing-slash path; axum treats
        // the two as distinct routes.
        .route("/generate", post(generate_model))
        .route("/generate/", post(generate_model))
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    // Wildcard headers cannot be combined with credentials; mirroring the
    // request's headers covers the same clients.
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unsupported file format '{0}'. Use 'stl', 'step', or 'obj'")]
    UnsupportedFormat(String),

    #[error("width, height, and depth must be finite and positive")]
    InvalidDimensions,

    #[error("model generation failed: {0}")]
    Generation(#[from] ExportError),

    #[error("model generation task failed to complete")]
    TaskFailed,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedFormat(_) | ApiError::InvalidDimensions => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Generation(_) | ApiError::TaskFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "model generation failed");
        }
        (status, self.to_string()).into_response()
    }
}

/// Mesh tolerance proportional to the smallest dimension keeps triangle
/// counts stable across model scales.
fn mesh_tolerance(width: f64, height: f64, depth: f64) -> f64 {
    width.min(height).min(depth) / 100.0
}

async fn generate_model(
    State(state): State<AppState>,
    Json(req): Json<ModelRequest>,
) -> Result<Response, ApiError> {
    let format = FileFormat::from_tag(&req.file_format)
        .ok_or_else(|| ApiError::UnsupportedFormat(req.file_format.clone()))?;

    if [req.width, req.height, req.depth]
        .iter()
        .any(|d| !d.is_finite() || *d <= 0.0)
    {
        return Err(ApiError::InvalidDimensions);
    }

    let config = state.config.clone();
    // Geometry and export are CPU-bound; keep them off the async runtime.
    let (path, bytes) = tokio::task::spawn_blocking(move || {
        let solid = boxcad_kernel::drilled_box(req.width, req.height, req.depth)?;
        let tolerance = mesh_tolerance(req.width, req.height, req.depth);
        boxcad_export::write_model(&solid, format, &config.model_dir, tolerance)
    })
    .await
    .map_err(|_| ApiError::TaskFailed)??;

    tracing::info!(
        path = %path.display(),
        size = bytes.len(),
        format = format.extension(),
        "model generated"
    );

    Ok((
        [
            (
                header::CONTENT_TYPE,
                format.media_type().to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"model.{}\"", format.extension()),
            ),
        ],
        bytes,
    )
        .into_response())
}
