//! Configuration for the donate action service.
//!
//! Everything is read from the environment (a `.env` file is loaded first by
//! the binary). Values are validated once at startup so request handling never
//! has to deal with a malformed setting.

use thiserror::Error;

mod donate_config;
pub use donate_config::*;

mod rpc_config;
pub use rpc_config::*;

mod server_config;
pub use server_config::*;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid account for {field}: {reason}")]
    InvalidAccount { field: String, reason: String },
    #[error("Invalid amount for {field}: {reason}")]
    InvalidAmount { field: String, reason: String },
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid format for {field}: {reason}")]
    InvalidFormat { field: String, reason: String },
}
