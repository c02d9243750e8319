//! Defaults for the donate action.
//!
//! Every value here can be overridden through `DonateConfig::from_env`.

/// Wallet that receives donations.
pub const DONATION_DESTINATION_WALLET: &str = "GALn5nQYPkgnbC2yiZa4VRcM2zYsBLXTN64GcFFVzuq1";

/// Suggested donation amounts, in SOL, offered as one-click links.
pub const DONATION_AMOUNT_SOL_OPTIONS: [f64; 3] = [0.25, 0.5, 1.0];

/// Amount used when a donation request does not carry one, in SOL.
pub const DEFAULT_DONATION_AMOUNT_SOL: f64 = 1.0;

/// Path the donate routes are mounted under.
pub const DEFAULT_DONATE_BASE_PATH: &str = "/api/donate";

/// Name of the path parameter carrying a custom amount.
pub const DONATION_AMOUNT_PARAMETER_NAME: &str = "amount";

/// Label of the custom amount link.
pub const DONATION_CUSTOM_AMOUNT_LABEL: &str = "Donate";

/// Prompt shown for the custom amount input.
pub const DONATION_CUSTOM_AMOUNT_PROMPT: &str = "Enter a custom SOL amount";

pub const DONATE_ICON_URL: &str =
    "https://pbs.twimg.com/profile_banners/1473560408346689536/1718333092/600x200";
pub const DONATE_TITLE: &str = "Donate to SOL Maniac";
pub const DONATE_DESCRIPTION: &str = "We make Solana Easy! | Content Creator for Solana.";
