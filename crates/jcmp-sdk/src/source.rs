//! Document acquisition: URL validation, HTTP fetch, and text parsing.

use reqwest::header;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{CompareError, CompareResult, InputLabel};

/// Validate that `url` is well-formed and uses an HTTP scheme.
///
/// Runs before any network I/O; both URLs of a comparison are validated
/// before either fetch starts.
pub fn validate_url(url: &str) -> CompareResult<Url> {
    let parsed = Url::parse(url).map_err(|e| CompareError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(CompareError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {scheme:?}, expected http or https"),
        }),
    }
}

/// Fetch one JSON document over HTTP.
///
/// Fails if the request cannot complete, if the response status is not a
/// success, if the declared content type does not contain
/// `application/json`, or if the body does not parse as JSON.
pub async fn fetch_json(client: &reqwest::Client, url: &Url) -> CompareResult<Value> {
    debug!(url = %url, "fetching document");

    let response = client
        .get(url.clone())
        .header(header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| fetch_error(url, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_error(url, status.to_string()));
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !content_type.contains("application/json") {
        return Err(CompareError::ContentType {
            url: url.to_string(),
            content_type,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| fetch_error(url, format!("failed to read body: {e}")))?;

    serde_json::from_str(&body)
        .map_err(|e| fetch_error(url, format!("response body is not valid JSON: {e}")))
}

fn fetch_error(url: &Url, reason: String) -> CompareError {
    CompareError::Fetch {
        url: url.to_string(),
        reason,
    }
}

/// Parse one direct-mode input as JSON.
pub fn parse_json(text: &str, label: InputLabel) -> CompareResult<Value> {
    serde_json::from_str(text).map_err(|e| CompareError::Parse {
        label,
        reason: e.to_string(),
    })
}
