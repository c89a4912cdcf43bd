//! # Cross-Origin Resource Sharing
//!
//! Builds the `tower_http` CORS layer from [`CorsConfig`]. The API is
//! read-only and carries no credentials, so only `GET` and preflight
//! `OPTIONS` are allowed.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// Build a CORS layer from config.
///
/// Origins are validated when the configuration is loaded; any that still
/// fail to encode here are skipped.
pub fn build_cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if cfg.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    if origins.is_empty() {
        warn!("no valid CORS origins configured; cross-origin requests will be refused");
    }
    layer.allow_origin(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn allow_origin(cfg: &CorsConfig, origin: &str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(build_cors_layer(cfg));
        let request = Request::builder()
            .uri("/")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn wildcard_allows_any_origin() {
        let allowed = allow_origin(&CorsConfig::default(), "https://anywhere.example").await;
        assert_eq!(allowed, Some(HeaderValue::from_static("*")));
    }

    #[tokio::test]
    async fn explicit_list_echoes_listed_origin_only() {
        let cfg = CorsConfig {
            allowed_origins: vec!["https://app.example".to_string()],
        };
        assert_eq!(
            allow_origin(&cfg, "https://app.example").await,
            Some(HeaderValue::from_static("https://app.example"))
        );
        assert_eq!(allow_origin(&cfg, "https://other.example").await, None);
    }

    #[tokio::test]
    async fn empty_list_refuses_every_origin() {
        let cfg = CorsConfig {
            allowed_origins: Vec::new(),
        };
        assert_eq!(allow_origin(&cfg, "https://app.example").await, None);
    }
}
