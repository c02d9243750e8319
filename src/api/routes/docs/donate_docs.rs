//! # Donate Documentation
//!
//! Documents the donate action endpoints at the default base path
//! `/api/donate`. The served document moves them to the configured base path
//! (see `ApiDoc::for_base_path`).
//!
//! ## Endpoints
//!
//! - `GET /api/donate`: Suggested amounts and the custom amount action
//! - `GET /api/donate/{amount}`: Action for a specific amount
//! - `POST /api/donate`: Unsigned transaction for the default amount
//! - `POST /api/donate/{amount}`: Unsigned transaction for a specific amount

use crate::models::{ActionError, ActionGetResponse, ActionPostRequest, ActionPostResponse};

/// Lists the suggested donation amounts.
///
/// Returns one linked action per suggested amount followed by an action
/// taking a custom `amount` parameter.
#[utoipa::path(
    get,
    path = "/api/donate",
    tag = "Donate",
    operation_id = "listDonateActions",
    responses(
        (status = 200, description = "Donate action listing", body = ActionGetResponse)
    )
)]
#[allow(dead_code)]
pub(crate) fn doc_list_donate_actions() {}

/// Describes the donate action for a specific amount.
///
/// The amount is echoed into the label without validation.
#[utoipa::path(
    get,
    path = "/api/donate/{amount}",
    tag = "Donate",
    operation_id = "getDonateAction",
    params(
        ("amount" = String, Path, description = "Amount of SOL to donate", example = "1")
    ),
    responses(
        (status = 200, description = "Donate action for the amount", body = ActionGetResponse)
    )
)]
#[allow(dead_code)]
pub(crate) fn doc_get_donate_action() {}

/// Builds an unsigned donation transaction for the default amount.
#[utoipa::path(
    post,
    path = "/api/donate",
    tag = "Donate",
    operation_id = "createDefaultDonateTransaction",
    request_body = ActionPostRequest,
    responses(
        (status = 200, description = "Unsigned transaction", body = ActionPostResponse),
        (status = 400, description = "Invalid account or request body", body = ActionError),
        (status = 503, description = "Ledger node unavailable", body = ActionError)
    )
)]
#[allow(dead_code)]
pub(crate) fn doc_create_default_donate_transaction() {}

/// Builds an unsigned donation transaction for a specific amount.
///
/// The returned transaction is base64-encoded and must be signed by
/// `account`, which pays both the donation and the fee.
#[utoipa::path(
    post,
    path = "/api/donate/{amount}",
    tag = "Donate",
    operation_id = "createDonateTransaction",
    params(
        ("amount" = String, Path, description = "Amount of SOL to donate", example = "1")
    ),
    request_body = ActionPostRequest,
    responses(
        (status = 200, description = "Unsigned transaction", body = ActionPostResponse),
        (status = 400, description = "Invalid amount, account or request body", body = ActionError),
        (status = 503, description = "Ledger node unavailable", body = ActionError)
    )
)]
#[allow(dead_code)]
pub(crate) fn doc_create_donate_transaction() {}
