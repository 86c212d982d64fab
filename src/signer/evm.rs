use super::{PendingTxId, SignAndSendSigner, TransactionRequestObserver, TxReceipt};
use crate::chain::{Chain, Platform};
use crate::queue::{GlobalPendingStore, PendingBatch, PendingTransactionStore};
use crate::unsigned::{
    SignableTransaction, SignableTransactionBuilder, UnsignedTransaction, ValidationMode,
};
use crate::{prelude::Result, Error};
use async_trait::async_trait;
use chrono::Utc;
use ethers::providers::{Http, Provider};
use log::{debug, info};
use std::fmt;
use std::sync::Arc;

/// EVM signer for an address whose key lives somewhere else.
///
/// `sign_and_send` never signs. It converts the batch into
/// [`SignableTransaction`]s, lets the observer (if any) know, stages the batch
/// in its store and returns [`TxReceipt::Pending`] placeholders right away.
/// Whoever holds the key picks the batch up from the store.
pub struct EvmExternalSigner {
    chain: Chain,
    provider: Arc<Provider<Http>>,
    address: String,
    observer: Option<Arc<dyn TransactionRequestObserver>>,
    store: Arc<dyn PendingTransactionStore>,
    builder: SignableTransactionBuilder,
}

/// A converted batch that has not been shown to the observer yet.
#[derive(Debug)]
pub struct PreparedBatch<'a> {
    originals: &'a [UnsignedTransaction],
    transactions: Vec<SignableTransaction>,
}

impl PreparedBatch<'_> {
    pub fn transactions(&self) -> &[SignableTransaction] {
        &self.transactions
    }
}

/// A batch the observer has finished with. Only [`EvmExternalSigner::notify`]
/// produces one, and only this type can be committed.
#[derive(Debug)]
pub struct NotifiedBatch {
    transactions: Vec<SignableTransaction>,
}

impl NotifiedBatch {
    pub fn transactions(&self) -> &[SignableTransaction] {
        &self.transactions
    }
}

impl EvmExternalSigner {
    /// Stages into the process-wide store read by
    /// [`get_pending_transactions`](crate::get_pending_transactions).
    pub fn new(chain: Chain, provider: Arc<Provider<Http>>, address: impl Into<String>) -> Self {
        let address = address.into();
        EvmExternalSigner {
            chain,
            provider,
            builder: SignableTransactionBuilder::new(address.clone(), ValidationMode::default()),
            address,
            observer: None,
            store: Arc::new(GlobalPendingStore),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn TransactionRequestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn PendingTransactionStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.builder.validation = validation;
        self
    }

    pub fn provider(&self) -> &Arc<Provider<Http>> {
        &self.provider
    }

    pub fn validation(&self) -> ValidationMode {
        self.builder.validation
    }

    pub fn store(&self) -> &Arc<dyn PendingTransactionStore> {
        &self.store
    }

    pub fn prepare<'a>(&self, txs: &'a [UnsignedTransaction]) -> Result<PreparedBatch<'a>> {
        let transactions = self.builder.build_batch(txs)?;
        Ok(PreparedBatch {
            originals: txs,
            transactions,
        })
    }

    pub async fn notify(&self, prepared: PreparedBatch<'_>) -> Result<NotifiedBatch> {
        if let Some(observer) = &self.observer {
            debug!(
                "Notifying observer of {} transaction(s) for {}",
                prepared.originals.len(),
                self.address
            );
            observer
                .on_transaction_request(prepared.originals)
                .await
                .map_err(|e| match e {
                    Error::Observer(_) => e,
                    other => Error::Observer(other.to_string()),
                })?;
        }
        Ok(NotifiedBatch {
            transactions: prepared.transactions,
        })
    }

    /// Replace the staged batch and hand out one placeholder per transaction.
    pub fn commit(&self, notified: NotifiedBatch) -> Result<Vec<TxReceipt>> {
        let staged_at = Utc::now();
        let issued_at = staged_at.timestamp_millis();

        let json = serde_json::to_string_pretty(&notified.transactions)
            .map_err(|e| Error::JsonParse(e.to_string()))?;

        let receipts = notified
            .transactions
            .iter()
            .enumerate()
            .map(|(index, tx)| {
                TxReceipt::Pending(PendingTxId::new(index, tx.chain_id, issued_at))
            })
            .collect::<Vec<_>>();

        let batch = PendingBatch::new(self.chain.clone(), staged_at, notified.transactions);
        if batch.is_empty() {
            debug!("Staging an empty batch for {}", self.address);
        } else {
            debug!("Staging batch {} of {} transaction(s)", batch.id, batch.len());
        }
        self.store.stage(batch);

        info!("Transactions requiring signature: {json}");
        for receipt in &receipts {
            debug!("Issued placeholder {receipt}");
        }
        Ok(receipts)
    }
}

#[async_trait]
impl SignAndSendSigner for EvmExternalSigner {
    fn chain(&self) -> &Chain {
        &self.chain
    }

    fn platform(&self) -> Platform {
        Platform::Evm
    }

    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_and_send(&self, txs: &[UnsignedTransaction]) -> Result<Vec<TxReceipt>> {
        let prepared = self.prepare(txs)?;
        let notified = self.notify(prepared).await?;
        self.commit(notified)
    }
}

impl fmt::Debug for EvmExternalSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvmExternalSigner")
            .field("chain", &self.chain)
            .field("address", &self.address)
            .field("validation", &self.builder.validation)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
