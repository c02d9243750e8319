//! Donate action controller.
//!
//! Runs each request through the resolve, build and encode pipeline and
//! shapes the HTTP response.

use actix_web::HttpResponse;
use log::info;

use crate::{
    domain::{DonateResolver, TransferTransactionBuilder},
    models::{ActionPostRequest, ApiError, AppState},
};

/// Lists the suggested donation amounts and the custom amount action.
pub async fn list_donate_actions(state: &AppState) -> Result<HttpResponse, ApiError> {
    let response = DonateResolver::new(&state.config).resolve_listing();

    Ok(HttpResponse::Ok().json(response))
}

/// Describes the action donating `amount`.
pub async fn get_donate_action(amount: String, state: &AppState) -> Result<HttpResponse, ApiError> {
    let response = DonateResolver::new(&state.config).resolve_amount_descriptor(&amount);

    Ok(HttpResponse::Ok().json(response))
}

/// Builds the unsigned transaction for a donation.
///
/// When `amount` is `None` the configured default amount is used.
pub async fn create_donate_transaction(
    amount: Option<String>,
    request: ActionPostRequest,
    state: &AppState,
) -> Result<HttpResponse, ApiError> {
    info!(
        "Donation transaction requested by {} (amount: {})",
        request.account,
        amount.as_deref().unwrap_or("default")
    );

    let donation =
        DonateResolver::new(&state.config).resolve_build_request(amount.as_deref(), &request)?;

    let response = TransferTransactionBuilder::new(state.assembler.as_ref())
        .build_response(&donation.payer, &state.config.destination, donation.lamports)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
