//! Solana Provider Module
//!
//! This module provides an abstraction layer over the Solana RPC client for
//! the one piece of chain state the donate action needs: the latest
//! blockhash used to bound a transaction's validity.
//!
//! The provider uses the non-blocking `RpcClient` and classifies client
//! failures into `SolanaProviderError`.
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Url;
use serde::Serialize;
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
};
use solana_sdk::{commitment_config::CommitmentConfig, hash::Hash};
use std::time::Duration;
use thiserror::Error;

use crate::config::RpcConfig;

/// Errors that can occur when interacting with the Solana provider.
#[derive(Error, Debug, Serialize, PartialEq)]
pub enum SolanaProviderError {
    /// Network/IO error (connection issues, timeouts)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// RPC protocol error returned by the node
    #[error("RPC error: {0}")]
    RpcError(String),

    /// HTTP request error with status code
    #[error("Request error (HTTP {status_code}): {error}")]
    RequestError { error: String, status_code: u16 },

    /// Provider configuration error
    #[error("Network configuration error: {0}")]
    NetworkConfiguration(String),
}

impl SolanaProviderError {
    /// Classifies a Solana RPC client error into the appropriate error variant.
    pub fn from_rpc_error(error: ClientError) -> Self {
        match error.kind() {
            ClientErrorKind::Io(_) => SolanaProviderError::NetworkError(error.to_string()),

            ClientErrorKind::Reqwest(reqwest_err) => {
                if let Some(status) = reqwest_err.status() {
                    SolanaProviderError::RequestError {
                        error: error.to_string(),
                        status_code: status.as_u16(),
                    }
                } else {
                    // No status code available (e.g., connection refused, timeout)
                    SolanaProviderError::NetworkError(error.to_string())
                }
            }

            _ => SolanaProviderError::RpcError(error.to_string()),
        }
    }
}

/// A trait that abstracts the Solana provider operations used by the assembler.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait SolanaProviderTrait: Send + Sync {
    /// Retrieves the latest blockhash.
    async fn get_latest_blockhash(&self) -> Result<Hash, SolanaProviderError>;
}

pub struct SolanaProvider {
    client: RpcClient,
    timeout: Duration,
}

impl SolanaProvider {
    pub fn new(config: &RpcConfig) -> Result<Self, SolanaProviderError> {
        Self::new_with_commitment(config, CommitmentConfig::confirmed())
    }

    /// Creates a new SolanaProvider for the configured endpoint.
    ///
    /// # Arguments
    ///
    /// * `config` - RPC endpoint and per-call timeout
    /// * `commitment` - Commitment level used when querying the node
    pub fn new_with_commitment(
        config: &RpcConfig,
        commitment: CommitmentConfig,
    ) -> Result<Self, SolanaProviderError> {
        let rpc_url: Url = config.url.parse().map_err(|e| {
            SolanaProviderError::NetworkConfiguration(format!("Invalid URL format: {e}"))
        })?;
        let timeout = Duration::from_secs(config.timeout_seconds);

        let client =
            RpcClient::new_with_timeout_and_commitment(rpc_url.to_string(), timeout, commitment);

        Ok(Self { client, timeout })
    }

    pub fn url(&self) -> String {
        self.client.url()
    }
}

#[async_trait]
impl SolanaProviderTrait for SolanaProvider {
    async fn get_latest_blockhash(&self) -> Result<Hash, SolanaProviderError> {
        log::debug!(
            "Fetching latest blockhash from {} (timeout: {}s)",
            self.client.url(),
            self.timeout.as_secs()
        );

        self.client
            .get_latest_blockhash()
            .await
            .map_err(SolanaProviderError::from_rpc_error)
    }
}
