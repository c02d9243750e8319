//! Providers for ledger access.

pub mod solana;
pub use solana::*;
