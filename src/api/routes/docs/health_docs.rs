//! # Health Documentation
//!
//! - `GET /health`: Basic health check endpoint (liveness check)

/// Handles the `/health` endpoint.
///
/// Returns an `HttpResponse` with a status of `200 OK` and a body of `"OK"`.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    operation_id = "health",
    responses(
        (status = 200, description = "Service is alive", body = String, example = json!("OK")),
    )
)]
#[allow(dead_code)]
pub(crate) fn doc_health() {}
