//! # API Routes Module
//!
//! Configures HTTP routes for the donate action service.
//!
//! ## Routes
//!
//! * `/health` - Liveness endpoint
//! * `/api-docs/openapi.json` - OpenAPI document
//! * `{base_path}` - Donate action endpoints, mounted under the configured base path

pub mod docs;
pub mod donate;
pub mod health;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig, base_path: &str) {
    cfg.configure(health::init)
        .configure(|cfg| docs::init(cfg, base_path))
        .service(web::scope(base_path).configure(donate::init));
}
