//! Request and response bodies of the donate action endpoints.
//!
//! Field names follow the Solana Actions wire format, so they serialize as
//! camelCase where the format requires it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Discovery payload returned by the `GET` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ActionGetResponse {
    /// Absolute URL of the image shown with the action.
    pub icon: String,
    /// Label of the primary action button.
    pub label: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub links: Option<ActionLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

/// A follow-up action the client can render as a button or form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct LinkedAction {
    /// Target of the action; may contain `{name}` placeholders for parameters.
    pub href: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub parameters: Option<Vec<ActionParameter>>,
}

/// User input substituted into a `LinkedAction` href.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ActionParameter {
    pub name: String,
    pub label: String,
}

/// Body of the `POST` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema, Validate)]
pub struct ActionPostRequest {
    /// Base58-encoded public key of the donor; becomes the fee payer.
    #[validate(length(min = 32, max = 44, message = "account must be a base58 public key"))]
    #[schema(example = "GALn5nQYPkgnbC2yiZa4VRcM2zYsBLXTN64GcFFVzuq1")]
    pub account: String,
}

/// Response of the `POST` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ActionPostResponse {
    /// Base64-encoded, serialized, unsigned versioned transaction.
    pub transaction: String,
}

/// Error body returned by every endpoint on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ActionError {
    pub message: String,
}
