//! Builds the unsigned donation transfer.

use log::{error, info};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, transaction::VersionedTransaction};
use solana_system_interface::instruction as system_instruction;

use crate::{
    models::{ActionPostResponse, DonateError},
    services::TransactionAssemblerTrait,
    utils::encode_transaction,
};

pub struct TransferTransactionBuilder<'a> {
    assembler: &'a dyn TransactionAssemblerTrait,
}

impl<'a> TransferTransactionBuilder<'a> {
    pub fn new(assembler: &'a dyn TransactionAssemblerTrait) -> Self {
        Self { assembler }
    }

    /// Builds a transaction moving `lamports` from `payer` to `recipient`.
    ///
    /// The payer also pays the fee. The transaction is returned exactly as
    /// the assembler compiled it, without signatures.
    pub async fn build(
        &self,
        payer: &Pubkey,
        recipient: &Pubkey,
        lamports: u64,
    ) -> Result<VersionedTransaction, DonateError> {
        let instructions = [transfer_instruction(payer, recipient, lamports)];

        self.assembler
            .assemble(&instructions, payer)
            .await
            .map_err(|e| {
                error!("Failed to assemble donation from {}: {}", payer, e);
                DonateError::from(e)
            })
    }

    /// Builds the transaction and encodes it for the `POST` response.
    pub async fn build_response(
        &self,
        payer: &Pubkey,
        recipient: &Pubkey,
        lamports: u64,
    ) -> Result<ActionPostResponse, DonateError> {
        let transaction = self.build(payer, recipient, lamports).await?;
        let encoded = encode_transaction(&transaction)
            .map_err(|e| DonateError::EncodingFailed(e.to_string()))?;

        info!(
            "Prepared donation of {} lamports from {} to {}",
            lamports, payer, recipient
        );

        Ok(ActionPostResponse {
            transaction: encoded,
        })
    }
}

/// System program transfer of native SOL.
pub fn transfer_instruction(payer: &Pubkey, recipient: &Pubkey, lamports: u64) -> Instruction {
    system_instruction::transfer(payer, recipient, lamports)
}
