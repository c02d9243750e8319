use thiserror::Error;

use super::ApiError;
use crate::models::AmountError;

/// Failures of a single donate request. None of them are fatal to the process.
#[derive(Error, Debug, PartialEq)]
pub enum DonateError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    #[error("Failed to assemble transaction: {0}")]
    AssemblyFailed(String),

    #[error("Failed to encode transaction: {0}")]
    EncodingFailed(String),
}

impl From<AmountError> for DonateError {
    fn from(error: AmountError) -> Self {
        DonateError::InvalidAmount(error.to_string())
    }
}

impl From<DonateError> for ApiError {
    fn from(error: DonateError) -> Self {
        match error {
            DonateError::InvalidAmount(_) | DonateError::InvalidAccount(_) => {
                ApiError::BadRequest(error.to_string())
            }
            DonateError::AssemblyFailed(_) => ApiError::ServiceUnavailable(error.to_string()),
            DonateError::EncodingFailed(_) => ApiError::InternalError(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        let api: ApiError = DonateError::InvalidAmount("'abc' is not a decimal number".into()).into();
        assert_eq!(
            api,
            ApiError::BadRequest("Invalid amount: 'abc' is not a decimal number".to_string())
        );

        let api: ApiError = DonateError::InvalidAccount("wrong size".into()).into();
        assert!(matches!(api, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_assembly_failure_maps_to_service_unavailable() {
        let api: ApiError = DonateError::AssemblyFailed("node down".into()).into();
        assert_eq!(
            api,
            ApiError::ServiceUnavailable("Failed to assemble transaction: node down".to_string())
        );
    }

    #[test]
    fn test_amount_error_conversion() {
        let error: DonateError = AmountError::Missing.into();
        assert_eq!(error, DonateError::InvalidAmount("amount is missing".to_string()));
    }
}
