//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nigel Number API",
        version = "0.1.0",
        description = "Sum of all primes less than or equal to a positive integer N.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(crate::routes::nigel_number::nigel_number),
    components(schemas(
        crate::routes::nigel_number::NigelNumberResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "nigel-number", description = "Nigel Number calculation"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_the_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/nigel-number/"));
    }

    #[test]
    fn document_registers_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("NigelNumberResponse"));
        assert!(schemas.contains_key("ErrorBody"));
    }
}
