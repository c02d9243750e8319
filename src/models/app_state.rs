use std::sync::Arc;

use crate::{config::DonateConfig, services::TransactionAssemblerTrait};

/// Shared, read-only state handed to every request handler.
pub struct AppState {
    pub config: DonateConfig,
    pub assembler: Arc<dyn TransactionAssemblerTrait>,
}

impl AppState {
    pub fn new(config: DonateConfig, assembler: Arc<dyn TransactionAssemblerTrait>) -> Self {
        Self { config, assembler }
    }
}
