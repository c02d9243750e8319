//! Transaction assembly.
//!
//! Turns a list of instructions and a fee payer into a compiled, unsigned
//! versioned transaction. The recent blockhash is fetched from the ledger
//! node, which is the only I/O performed while building a donation.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};
use std::{sync::Arc, time::Duration};
use thiserror::Error;

use super::{SolanaProviderError, SolanaProviderTrait};
use crate::models::DonateError;

#[derive(Error, Debug, PartialEq)]
pub enum AssemblyError {
    #[error("Failed to fetch recent blockhash: {0}")]
    Provider(#[from] SolanaProviderError),

    #[error("Failed to compile message: {0}")]
    Compile(String),

    #[error("Timed out after {0:?} waiting for the ledger node")]
    Timeout(Duration),
}

impl From<AssemblyError> for DonateError {
    fn from(error: AssemblyError) -> Self {
        DonateError::AssemblyFailed(error.to_string())
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait TransactionAssemblerTrait: Send + Sync {
    /// Compiles `instructions` into an unsigned transaction paid for by `fee_payer`.
    async fn assemble(
        &self,
        instructions: &[Instruction],
        fee_payer: &Pubkey,
    ) -> Result<VersionedTransaction, AssemblyError>;
}

/// Assembler backed by a Solana RPC provider.
pub struct SolanaTransactionAssembler<P> {
    provider: Arc<P>,
    timeout: Duration,
}

impl<P: SolanaProviderTrait> SolanaTransactionAssembler<P> {
    pub fn new(provider: Arc<P>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }
}

#[async_trait]
impl<P: SolanaProviderTrait + 'static> TransactionAssemblerTrait for SolanaTransactionAssembler<P> {
    async fn assemble(
        &self,
        instructions: &[Instruction],
        fee_payer: &Pubkey,
    ) -> Result<VersionedTransaction, AssemblyError> {
        let recent_blockhash =
            tokio::time::timeout(self.timeout, self.provider.get_latest_blockhash())
                .await
                .map_err(|_| AssemblyError::Timeout(self.timeout))??;

        compile_unsigned_transaction(instructions, fee_payer, recent_blockhash)
    }
}

/// Compiles a v0 message without address lookup tables and pairs it with
/// placeholder signatures, one per required signer.
pub fn compile_unsigned_transaction(
    instructions: &[Instruction],
    fee_payer: &Pubkey,
    recent_blockhash: Hash,
) -> Result<VersionedTransaction, AssemblyError> {
    let message = v0::Message::try_compile(fee_payer, instructions, &[], recent_blockhash)
        .map_err(|e| AssemblyError::Compile(e.to_string()))?;
    let num_required_signatures = message.header.num_required_signatures as usize;

    Ok(VersionedTransaction {
        signatures: vec![Signature::default(); num_required_signatures],
        message: VersionedMessage::V0(message),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockSolanaProviderTrait;
    use solana_system_interface::instruction as system_instruction;

    struct StalledProvider;

    #[async_trait]
    impl SolanaProviderTrait for StalledProvider {
        async fn get_latest_blockhash(&self) -> Result<Hash, SolanaProviderError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Hash::default())
        }
    }

    #[tokio::test]
    async fn test_assemble_injects_blockhash_and_fee_payer() {
        let payer = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let blockhash = Hash::new_unique();

        let mut provider = MockSolanaProviderTrait::new();
        provider
            .expect_get_latest_blockhash()
            .times(1)
            .returning(move || Box::pin(async move { Ok(blockhash) }));

        let assembler = SolanaTransactionAssembler::new(Arc::new(provider), Duration::from_secs(1));
        let instructions = [system_instruction::transfer(&payer, &recipient, 42)];

        let tx = assembler.assemble(&instructions, &payer).await.unwrap();

        assert_eq!(tx.message.recent_blockhash(), &blockhash);
        assert_eq!(tx.message.static_account_keys()[0], payer);
        assert_eq!(tx.signatures, vec![Signature::default()]);
        assert!(matches!(tx.message, VersionedMessage::V0(_)));
    }

    #[tokio::test]
    async fn test_assemble_propagates_provider_failure() {
        let mut provider = MockSolanaProviderTrait::new();
        provider.expect_get_latest_blockhash().returning(|| {
            Box::pin(async {
                Err(SolanaProviderError::NetworkError(
                    "connection refused".to_string(),
                ))
            })
        });

        let assembler = SolanaTransactionAssembler::new(Arc::new(provider), Duration::from_secs(1));
        let payer = Pubkey::new_unique();
        let instructions = [system_instruction::transfer(
            &payer,
            &Pubkey::new_unique(),
            1,
        )];

        let result = assembler.assemble(&instructions, &payer).await;

        assert_eq!(
            result.unwrap_err(),
            AssemblyError::Provider(SolanaProviderError::NetworkError(
                "connection refused".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_assemble_times_out() {
        let assembler =
            SolanaTransactionAssembler::new(Arc::new(StalledProvider), Duration::from_millis(20));
        let payer = Pubkey::new_unique();
        let instructions = [system_instruction::transfer(
            &payer,
            &Pubkey::new_unique(),
            1,
        )];

        let result = assembler.assemble(&instructions, &payer).await;

        assert!(matches!(result, Err(AssemblyError::Timeout(_))));
    }

    #[test]
    fn test_compile_orders_accounts_signer_first() {
        let payer = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let instruction = system_instruction::transfer(&payer, &recipient, 5);

        let tx = compile_unsigned_transaction(&[instruction], &payer, Hash::new_unique()).unwrap();

        let VersionedMessage::V0(message) = &tx.message else {
            panic!("Expected a v0 message");
        };
        assert_eq!(message.header.num_required_signatures, 1);
        assert_eq!(message.header.num_readonly_signed_accounts, 0);
        assert_eq!(message.header.num_readonly_unsigned_accounts, 1);
        assert_eq!(
            message.account_keys,
            vec![payer, recipient, solana_system_interface::program::id()]
        );
        assert!(message.address_table_lookups.is_empty());
    }

    #[test]
    fn test_assembly_error_converts_to_donate_error() {
        let error: DonateError = AssemblyError::Compile("too many accounts".to_string()).into();
        assert_eq!(
            error,
            DonateError::AssemblyFailed("Failed to compile message: too many accounts".to_string())
        );
    }
}
