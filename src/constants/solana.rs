//! Solana ledger constants.

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Ticker used in action labels.
pub const SOL_UNIT_LABEL: &str = "SOL";

/// Default JSON-RPC endpoint used to fetch the recent blockhash.
pub const DEFAULT_SOLANA_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Default timeout for RPC calls and transaction assembly, in seconds.
pub const DEFAULT_RPC_TIMEOUT_SECONDS: u64 = 10;
