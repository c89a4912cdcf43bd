//! # Nigel Number Endpoint
//!
//! `GET /api/nigel-number/?n=<N>` returns the sum of all primes ≤ N and the
//! primes themselves.
//!
//! The handler only moves data between HTTP and the core: it extracts the raw
//! `n`, runs the validator, offloads the sieve to Tokio's blocking pool, and
//! lets [`AppError`] shape any failure.

use std::net::SocketAddr;

use axum::extract::rejection::QueryRejection;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Extension, Json, Router};
use nigel_core::{CalculationError, CalculationResult, ValidationError, PARAMETER_NAME};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

/// Successful calculation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NigelNumberResponse {
    /// The N that was requested.
    pub input: u64,
    /// Sum of all primes ≤ N.
    pub nigel_number: u64,
    /// Primes ≤ N in ascending order.
    pub primes_found: Vec<u64>,
}

impl From<CalculationResult> for NigelNumberResponse {
    fn from(result: CalculationResult) -> Self {
        let (input, nigel_number, primes_found) = result.into_parts();
        Self {
            input,
            nigel_number,
            primes_found,
        }
    }
}

/// Build the Nigel Number router. The route answers with and without the
/// trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/nigel-number/", get(nigel_number))
        .route("/api/nigel-number", get(nigel_number))
}

/// GET /api/nigel-number/ — Compute the Nigel Number of `n`.
#[utoipa::path(
    get,
    path = "/api/nigel-number/",
    params(
        ("n" = String, Query, description = "Positive integer upper bound (inclusive)"),
    ),
    responses(
        (status = 200, description = "Nigel Number computed", body = NigelNumberResponse),
        (status = 400, description = "Missing, malformed, non-positive or too large `n`", body = crate::error::ErrorBody),
        (status = 500, description = "Unexpected failure during calculation", body = crate::error::ErrorBody),
    ),
    tag = "nigel-number"
)]
pub async fn nigel_number(
    State(state): State<AppState>,
    headers: HeaderMap,
    peer: Option<Extension<ConnectInfo<SocketAddr>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<NigelNumberResponse>, AppError> {
    let client = client_ip(&headers, peer.map(|Extension(ConnectInfo(addr))| addr));

    let raw = match query {
        Ok(Query(pairs)) => last_value(pairs, PARAMETER_NAME),
        Err(rejection) => {
            tracing::warn!(%client, error = %rejection.body_text(), "undecodable query string");
            return Err(ValidationError::InvalidType.into());
        }
    };
    tracing::info!(
        %client,
        n = ?raw.as_deref().map(log_preview),
        "Nigel Number calculation requested"
    );

    let input = state.validator.validate(raw.as_deref()).map_err(|err| {
        tracing::warn!(%client, code = err.code(), details = %err.details(), "invalid input");
        err
    })?;

    let engine = state.engine;
    let result = tokio::task::spawn_blocking(move || engine.compute(input))
        .await
        .map_err(|e| CalculationError::InternalFailure(format!("calculation task failed: {e}")))??;

    tracing::info!(
        %client,
        n = result.input(),
        nigel_number = result.nigel_number(),
        primes = result.primes_found().len(),
        "calculation succeeded"
    );

    Ok(Json(result.into()))
}

/// Client address for logging: first `X-Forwarded-For` hop, else the peer.
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Raw values are client-controlled; only this many characters are logged.
const LOG_PREVIEW_CHARS: usize = 32;

/// Prefix of `raw` short enough to log.
fn log_preview(raw: &str) -> &str {
    raw.char_indices()
        .nth(LOG_PREVIEW_CHARS)
        .map_or(raw, |(end, _)| &raw[..end])
}

/// Value of the last occurrence of `key`, if any.
fn last_value(pairs: Vec<(String, String)>, key: &str) -> Option<String> {
    pairs
        .into_iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}
