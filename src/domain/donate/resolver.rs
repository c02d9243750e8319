//! Turns inbound requests into action descriptors and validated build inputs.

use log::debug;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use validator::Validate;

use super::DonateInfo;
use crate::{
    config::DonateConfig,
    constants::{
        DONATION_AMOUNT_PARAMETER_NAME, DONATION_CUSTOM_AMOUNT_LABEL,
        DONATION_CUSTOM_AMOUNT_PROMPT, SOL_UNIT_LABEL,
    },
    models::{
        ActionGetResponse, ActionLinks, ActionParameter, ActionPostRequest, DonateError,
        LinkedAction, SolAmount,
    },
};

/// Validated inputs of a transfer: who pays and how many lamports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonationRequest {
    pub payer: Pubkey,
    pub lamports: u64,
}

pub struct DonateResolver<'a> {
    config: &'a DonateConfig,
}

impl<'a> DonateResolver<'a> {
    pub fn new(config: &'a DonateConfig) -> Self {
        Self { config }
    }

    /// Descriptor of the root endpoint: one link per suggested amount, then
    /// a parameterized link for a custom amount.
    pub fn resolve_listing(&self) -> ActionGetResponse {
        let mut actions: Vec<LinkedAction> = self
            .config
            .amount_options
            .iter()
            .map(|amount| LinkedAction {
                href: self.config.amount_href(amount),
                label: sol_label(amount),
                parameters: None,
            })
            .collect();

        actions.push(LinkedAction {
            href: self
                .config
                .amount_href(format!("{{{}}}", DONATION_AMOUNT_PARAMETER_NAME)),
            label: DONATION_CUSTOM_AMOUNT_LABEL.to_string(),
            parameters: Some(vec![ActionParameter {
                name: DONATION_AMOUNT_PARAMETER_NAME.to_string(),
                label: DONATION_CUSTOM_AMOUNT_PROMPT.to_string(),
            }]),
        });

        self.descriptor(
            sol_label(&self.config.default_amount),
            Some(ActionLinks { actions }),
        )
    }

    /// Descriptor of a single amount. The amount is echoed verbatim; it is
    /// only validated once a transaction is requested.
    pub fn resolve_amount_descriptor(&self, amount: &str) -> ActionGetResponse {
        self.descriptor(sol_label(amount), None)
    }

    /// Resolves the payer and lamport amount of a transfer.
    ///
    /// Falls back to the configured default when `amount` is `None`.
    pub fn resolve_build_request(
        &self,
        amount: Option<&str>,
        body: &ActionPostRequest,
    ) -> Result<DonationRequest, DonateError> {
        let amount = match amount {
            Some(raw) => SolAmount::from_str(raw)?,
            None => self.config.default_amount,
        };
        let payer = parse_account(body)?;

        debug!(
            "Resolved donation of {} {} ({} lamports) from {}",
            amount,
            SOL_UNIT_LABEL,
            amount.to_lamports(),
            payer
        );

        Ok(DonationRequest {
            payer,
            lamports: amount.to_lamports(),
        })
    }

    fn descriptor(&self, label: String, links: Option<ActionLinks>) -> ActionGetResponse {
        let DonateInfo {
            icon,
            title,
            description,
        } = DonateInfo::describe();

        ActionGetResponse {
            icon,
            label,
            title,
            description,
            links,
        }
    }
}

fn sol_label(amount: impl std::fmt::Display) -> String {
    format!("{} {}", amount, SOL_UNIT_LABEL)
}

fn parse_account(body: &ActionPostRequest) -> Result<Pubkey, DonateError> {
    body.validate()
        .map_err(|_| DonateError::InvalidAccount(format!("'{}' is not a public key", body.account)))?;

    Pubkey::from_str(&body.account)
        .map_err(|e| DonateError::InvalidAccount(format!("'{}': {}", body.account, e)))
}
