//! Wire encoding of unsigned transactions for JSON transport.

use solana_sdk::transaction::VersionedTransaction;
use thiserror::Error;

use super::{base64_decode, base64_encode};

#[derive(Error, Debug, PartialEq)]
pub enum TransactionEncodingError {
    #[error("Failed to serialize transaction: {0}")]
    Serialize(String),
    #[error("Failed to decode base64 transaction: {0}")]
    Base64(String),
    #[error("Failed to deserialize transaction: {0}")]
    Deserialize(String),
}

/// Serializes `tx` to its bincode wire form and encodes it as base64.
pub fn encode_transaction(tx: &VersionedTransaction) -> Result<String, TransactionEncodingError> {
    let bytes =
        bincode::serialize(tx).map_err(|e| TransactionEncodingError::Serialize(e.to_string()))?;
    Ok(base64_encode(&bytes))
}

/// Inverse of [`encode_transaction`].
pub fn decode_transaction(encoded: &str) -> Result<VersionedTransaction, TransactionEncodingError> {
    let bytes = base64_decode(encoded).map_err(|e| TransactionEncodingError::Base64(e.to_string()))?;
    bincode::deserialize(&bytes).map_err(|e| TransactionEncodingError::Deserialize(e.to_string()))
}
