//! Settings for the donate action: where donations go and which amounts are offered.

use solana_sdk::pubkey::Pubkey;
use std::{env, str::FromStr};

use crate::{
    constants::{
        DEFAULT_DONATE_BASE_PATH, DEFAULT_DONATION_AMOUNT_SOL, DONATION_AMOUNT_SOL_OPTIONS,
        DONATION_DESTINATION_WALLET,
    },
    models::SolAmount,
};

use super::ConfigError;

/// Injected into the resolver and the HTTP layer; never mutated after startup.
#[derive(Debug, Clone, PartialEq)]
pub struct DonateConfig {
    /// Account receiving every donation.
    pub destination: Pubkey,
    /// Amounts offered as one-click links, in listing order.
    pub amount_options: Vec<SolAmount>,
    /// Amount used when a request does not name one.
    pub default_amount: SolAmount,
    /// Path the routes are mounted under, without a trailing slash.
    pub base_path: String,
}

impl DonateConfig {
    pub fn new(
        destination: Pubkey,
        amount_options: Vec<SolAmount>,
        default_amount: SolAmount,
        base_path: &str,
    ) -> Result<Self, ConfigError> {
        if amount_options.is_empty() {
            return Err(ConfigError::InvalidAmount {
                field: "DONATION_AMOUNT_OPTIONS".to_string(),
                reason: "at least one amount must be offered".to_string(),
            });
        }

        Ok(Self {
            destination,
            amount_options,
            default_amount,
            base_path: normalize_base_path(base_path)?,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let destination = parse_destination(
            &env::var("DONATION_DESTINATION_WALLET")
                .unwrap_or_else(|_| DONATION_DESTINATION_WALLET.to_string()),
        )?;

        let amount_options = match env::var("DONATION_AMOUNT_OPTIONS") {
            Ok(raw) => parse_amount_list(&raw)?,
            Err(_) => DONATION_AMOUNT_SOL_OPTIONS
                .iter()
                .map(|amount| config_amount("DONATION_AMOUNT_OPTIONS", *amount))
                .collect::<Result<Vec<_>, _>>()?,
        };

        let default_amount = match env::var("DEFAULT_DONATION_AMOUNT") {
            Ok(raw) => parse_amount("DEFAULT_DONATION_AMOUNT", &raw)?,
            Err(_) => config_amount("DEFAULT_DONATION_AMOUNT", DEFAULT_DONATION_AMOUNT_SOL)?,
        };

        let base_path =
            env::var("DONATE_BASE_PATH").unwrap_or_else(|_| DEFAULT_DONATE_BASE_PATH.to_string());

        Self::new(destination, amount_options, default_amount, &base_path)
    }

    /// Href of the action donating `amount`.
    pub fn amount_href(&self, amount: impl std::fmt::Display) -> String {
        format!("{}/{}", self.base_path, amount)
    }
}

fn parse_destination(raw: &str) -> Result<Pubkey, ConfigError> {
    Pubkey::from_str(raw.trim()).map_err(|e| ConfigError::InvalidAccount {
        field: "DONATION_DESTINATION_WALLET".to_string(),
        reason: format!("'{}': {}", raw, e),
    })
}

fn config_amount(field: &str, sol: f64) -> Result<SolAmount, ConfigError> {
    SolAmount::new(sol).map_err(|e| ConfigError::InvalidAmount {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

fn parse_amount(field: &str, raw: &str) -> Result<SolAmount, ConfigError> {
    SolAmount::from_str(raw).map_err(|e| ConfigError::InvalidAmount {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

fn parse_amount_list(raw: &str) -> Result<Vec<SolAmount>, ConfigError> {
    raw.split(',')
        .map(|item| parse_amount("DONATION_AMOUNT_OPTIONS", item))
        .collect()
}

fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !trimmed.is_empty() && !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidFormat {
            field: "DONATE_BASE_PATH".to_string(),
            reason: format!("'{}' must start with '/'", raw),
        });
    }
    Ok(trimmed.to_string())
}
