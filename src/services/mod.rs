//! # Services Module
//!
//! Integrations with the Solana ledger: the RPC provider that fetches the
//! recent blockhash and the assembler that compiles unsigned transactions.

mod assembler;
pub use assembler::*;

pub mod provider;
pub use provider::*;
