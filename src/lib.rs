//! Solana donate action service.
//!
//! Serves a Solana Actions compatible "donate" endpoint: clients discover the
//! suggested amounts and receive an unsigned, base64-encoded transfer
//! transaction to sign on their side. The service never holds keys and never
//! submits transactions.

pub mod api;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod services;
pub mod utils;
