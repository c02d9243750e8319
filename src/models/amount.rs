//! Donation amounts expressed in SOL and their lamport conversion.

use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::constants::LAMPORTS_PER_SOL;

#[derive(Error, Debug, PartialEq)]
pub enum AmountError {
    #[error("amount is missing")]
    Missing,
    #[error("'{0}' is not a decimal number")]
    NotNumeric(String),
    #[error("amount must be a finite, non-negative number of SOL, got '{0}'")]
    OutOfRange(String),
}

/// A validated amount of SOL.
///
/// Holds a finite, non-negative value whose lamport equivalent fits in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SolAmount(f64);

impl SolAmount {
    pub fn new(sol: f64) -> Result<Self, AmountError> {
        if !sol.is_finite() || sol < 0.0 {
            return Err(AmountError::OutOfRange(sol.to_string()));
        }
        if (sol * LAMPORTS_PER_SOL as f64).round() >= u64::MAX as f64 {
            return Err(AmountError::OutOfRange(sol.to_string()));
        }
        Ok(Self(sol))
    }

    pub fn as_sol(&self) -> f64 {
        self.0
    }

    /// Converts to lamports, rounding half-up to the nearest lamport.
    ///
    /// `0.1 * 1e9` is not an exact integer in binary floating point, so the
    /// product is rounded instead of truncated.
    pub fn to_lamports(&self) -> u64 {
        (self.0 * LAMPORTS_PER_SOL as f64).round() as u64
    }
}

impl FromStr for SolAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Missing);
        }
        let sol: f64 = trimmed
            .parse()
            .map_err(|_| AmountError::NotNumeric(trimmed.to_string()))?;
        Self::new(sol)
    }
}

impl fmt::Display for SolAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
