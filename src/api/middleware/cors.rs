//! CORS headers required by Solana Actions clients.
//!
//! Wallets and action unfurlers call the endpoints cross-origin, so every
//! response carries the permissive headers below, error responses included.

use actix_web::middleware::DefaultHeaders;

use crate::constants::{
    ACTIONS_CORS_ALLOW_HEADERS, ACTIONS_CORS_ALLOW_METHODS, ACTIONS_CORS_ALLOW_ORIGIN,
};

pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", ACTIONS_CORS_ALLOW_ORIGIN))
        .add(("Access-Control-Allow-Methods", ACTIONS_CORS_ALLOW_METHODS))
        .add(("Access-Control-Allow-Headers", ACTIONS_CORS_ALLOW_HEADERS))
}
