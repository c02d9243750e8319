//! Configuration for the Solana RPC endpoint.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Configuration for an RPC endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RpcConfig {
    /// The RPC endpoint URL.
    pub url: String,
    /// Timeout applied to each RPC call, in seconds.
    pub timeout_seconds: u64,
}

impl RpcConfig {
    pub fn new(url: String, timeout_seconds: u64) -> Self {
        Self {
            url,
            timeout_seconds,
        }
    }

    /// Validates that the URL parses and uses the http or https scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.url, e)))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::InvalidUrl(format!(
                    "{}: unsupported scheme '{}'",
                    self.url, scheme
                )))
            }
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::InvalidFormat {
                field: "RPC_TIMEOUT_SECONDS".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
