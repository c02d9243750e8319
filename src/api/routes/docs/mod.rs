//! OpenAPI documentation of the HTTP endpoints.
//!
//! The `#[utoipa::path]` items live in `*_docs.rs` so the route handlers stay
//! free of documentation attributes. The assembled document is served at
//! `/api-docs/openapi.json`, with the donate paths rebased onto the
//! configured base path.

pub mod donate_docs;
pub mod health_docs;

use actix_web::{get, web, HttpResponse};
use utoipa::openapi::OpenApi;

use crate::openapi::ApiDoc;

#[get("/api-docs/openapi.json")]
async fn openapi_json(doc: web::Data<OpenApi>) -> HttpResponse {
    HttpResponse::Ok().json(doc.get_ref())
}

/// Registers the document endpoint for the donate routes mounted at `base_path`.
pub fn init(cfg: &mut web::ServiceConfig, base_path: &str) {
    cfg.app_data(web::Data::new(ApiDoc::for_base_path(base_path)));
    cfg.service(openapi_json);
}
