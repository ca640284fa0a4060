use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use parish_core::{ArticleListing, Error};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info};

use crate::AppState;

/// Per-request ceiling on store I/O; expiry maps to 504.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Error bodies are generic on purpose: file-system paths and parse
/// detail stay in the logs, never in the response.
fn error_response(err: &Error) -> Response {
    match err {
        Error::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Article not found"})),
        )
            .into_response(),
        other => {
            error!(error = %other, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal server error"})),
            )
                .into_response()
        }
    }
}

fn timeout_response() -> Response {
    (
        StatusCode::GATEWAY_TIMEOUT,
        Json(json!({"error": "Request timed out"})),
    )
        .into_response()
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> Response {
    match timeout(REQUEST_TIMEOUT, parish_store::build_index(state.store.as_ref())).await {
        Err(_) => timeout_response(),
        Ok(Err(e)) => error_response(&e),
        Ok(Ok(articles)) => {
            info!(count = articles.len(), "served article listing");
            Json(ArticleListing { articles }).into_response()
        }
    }
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    let resolved = timeout(
        REQUEST_TIMEOUT,
        parish_store::resolve_with_map(state.store.as_ref(), &state.slugs, &state.ctx, &slug),
    )
    .await;

    match resolved {
        Err(_) => timeout_response(),
        Ok(Err(e)) => error_response(&e),
        Ok(Ok(resolved)) => {
            info!(slug = %slug, "served article");
            Json(resolved).into_response()
        }
    }
}

pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
