use std::env;

use crate::constants::{
    DEFAULT_RPC_TIMEOUT_SECONDS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SOLANA_RPC_URL,
};

use super::{ConfigError, RpcConfig};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rpc: RpcConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let rpc_timeout_seconds = match env::var("RPC_TIMEOUT_SECONDS") {
            Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidFormat {
                field: "RPC_TIMEOUT_SECONDS".to_string(),
                reason: format!("'{}' is not a whole number of seconds", value),
            })?,
            Err(_) => DEFAULT_RPC_TIMEOUT_SECONDS,
        };

        let rpc = RpcConfig::new(
            env::var("SOLANA_RPC_URL").unwrap_or_else(|_| DEFAULT_SOLANA_RPC_URL.to_string()),
            rpc_timeout_seconds,
        );
        rpc.validate()?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_SERVER_PORT),
            rpc,
        })
    }
}
