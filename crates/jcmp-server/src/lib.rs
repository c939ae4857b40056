//! HTTP server for jcmp.
//!
//! Exposes the two comparison modes over a small JSON API: POST two URLs
//! to `/v1/compare/urls` or two raw JSON texts to `/v1/compare/direct`,
//! and receive the parsed documents plus their classified differences.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::{build_router, AppState};
pub use server::CompareServer;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn test_router() -> axum::Router {
        CompareServer::new(ServerConfig::default()).router()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn info_endpoint() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/v1/info")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["name"], json!("jcmp-server"));
        assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn direct_compare_returns_the_comparison() {
        let request = post_json(
            "/v1/compare/direct",
            json!({
                "json1": r#"{"a": 1, "b": 2}"#,
                "json2": r#"{"a": 1, "c": 3}"#,
            }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["identical"], json!(false));
        assert_eq!(body["differences"]["added"], json!(["c"]));
        assert_eq!(body["differences"]["removed"], json!(["b"]));
        assert_eq!(body["differences"]["changed"], json!([]));
        assert_eq!(body["json1"], json!({"a": 1, "b": 2}));
    }

    #[tokio::test]
    async fn direct_compare_identical_documents() {
        let request = post_json(
            "/v1/compare/direct",
            json!({
                "json1": r#"{"same": [1, 2]}"#,
                "json2": r#"{"same": [1, 2]}"#,
            }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["identical"], json!(true));
    }

    #[tokio::test]
    async fn direct_parse_failure_is_unprocessable() {
        let request = post_json(
            "/v1/compare/direct",
            json!({ "json1": "{broken", "json2": "{}" }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("First JSON"));
    }

    #[tokio::test]
    async fn invalid_url_is_a_bad_request() {
        let request = post_json(
            "/v1/compare/urls",
            json!({ "url1": "not a url", "url2": "https://example.com/a.json" }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("invalid URL"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/v1/compare")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let config = ServerConfig {
            max_body_bytes: 1024,
            ..ServerConfig::default()
        };
        let router = CompareServer::new(config).router();

        let request = post_json(
            "/v1/compare/direct",
            json!({ "json1": "x".repeat(4096), "json2": "{}" }),
        );
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn cors_preflight_is_allowed() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/v1/compare/direct")
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
