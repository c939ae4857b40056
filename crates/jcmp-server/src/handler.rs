use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use jcmp_sdk::{compare_direct, Comparison};

use crate::error::ServerError;
use crate::router::AppState;

/// Request body for a URL-mode comparison.
#[derive(Debug, Deserialize)]
pub struct CompareUrlsRequest {
    pub url1: String,
    pub url2: String,
}

/// Request body for a direct-mode comparison. Each field is a raw JSON
/// text, not an embedded JSON value.
#[derive(Debug, Deserialize)]
pub struct CompareDirectRequest {
    pub json1: String,
    pub json2: String,
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "jcmp-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fetch two URLs and compare the documents they return.
pub async fn compare_urls_handler(
    State(state): State<AppState>,
    Json(request): Json<CompareUrlsRequest>,
) -> Result<Json<Comparison>, ServerError> {
    info!(url1 = %request.url1, url2 = %request.url2, "compare by URLs");
    let comparison = state
        .comparator
        .compare_urls(&request.url1, &request.url2)
        .await?;
    Ok(Json(comparison))
}

/// Compare two documents supplied in the request body.
pub async fn compare_direct_handler(
    Json(request): Json<CompareDirectRequest>,
) -> Result<Json<Comparison>, ServerError> {
    info!("compare direct inputs");
    let comparison = compare_direct(&request.json1, &request.json2)?;
    Ok(Json(comparison))
}
