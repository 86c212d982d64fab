//! Staging area an external signer polls for the latest batch.
//!
//! Staging is last-write-wins: a new batch replaces the previous one outright,
//! even if nobody has read it yet.

use crate::chain::Chain;
use crate::unsigned::SignableTransaction;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use uuid::Uuid;

/// Descriptors produced by one `sign_and_send` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingBatch {
    pub id: Uuid,
    pub chain: Chain,
    pub staged_at: DateTime<Utc>,
    pub transactions: Vec<SignableTransaction>,
}

impl PendingBatch {
    pub fn new(
        chain: Chain,
        staged_at: DateTime<Utc>,
        transactions: Vec<SignableTransaction>,
    ) -> Self {
        PendingBatch {
            id: Uuid::new_v4(),
            chain,
            staged_at,
            transactions,
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

pub trait PendingTransactionStore: Send + Sync {
    /// Replace whatever is staged with `batch`.
    fn stage(&self, batch: PendingBatch);

    fn latest(&self) -> Option<PendingBatch>;

    fn pending_transactions(&self) -> Vec<SignableTransaction> {
        self.latest()
            .map(|batch| batch.transactions)
            .unwrap_or_default()
    }
}

/// A single slot holding the most recently staged batch.
#[derive(Debug, Default)]
pub struct LatestBatchStore {
    slot: RwLock<Option<PendingBatch>>,
}

impl LatestBatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PendingTransactionStore for LatestBatchStore {
    fn stage(&self, batch: PendingBatch) {
        // The slot only ever holds a complete batch, so a poisoned lock is still usable.
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(batch);
    }

    fn latest(&self) -> Option<PendingBatch> {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

lazy_static! {
    static ref PENDING_TRANSACTIONS: LatestBatchStore = LatestBatchStore::new();
}

/// Handle on the process-wide slot read by [`get_pending_transactions`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalPendingStore;

impl PendingTransactionStore for GlobalPendingStore {
    fn stage(&self, batch: PendingBatch) {
        PENDING_TRANSACTIONS.stage(batch)
    }

    fn latest(&self) -> Option<PendingBatch> {
        PENDING_TRANSACTIONS.latest()
    }
}

/// Descriptors of the most recent batch staged through the global store, or
/// an empty vector if nothing was ever staged.
pub fn get_pending_transactions() -> Vec<SignableTransaction> {
    PENDING_TRANSACTIONS.pending_transactions()
}

pub fn latest_pending_batch() -> Option<PendingBatch> {
    PENDING_TRANSACTIONS.latest()
}
