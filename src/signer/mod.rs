//! The signer capability handed to the pipeline and the receipts it returns.

mod evm;
mod observer;

pub use evm::{EvmExternalSigner, NotifiedBatch, PreparedBatch};
pub use observer::{observer_fn, ObserverFn, TransactionRequestObserver};

use crate::chain::{Chain, Platform};
use crate::consts::{PENDING_ID_PREFIX, UNKNOWN_NETWORK_ID};
use crate::unsigned::UnsignedTransaction;
use crate::{prelude::Result, Error};
use async_trait::async_trait;
use ethers::types::TxHash;
use std::fmt;
use std::str::FromStr;

/// Something the pipeline can hand unsigned transactions to.
#[async_trait]
pub trait SignAndSendSigner: fmt::Debug + Send + Sync {
    fn chain(&self) -> &Chain;

    fn platform(&self) -> Platform;

    fn address(&self) -> &str;

    /// Returns one receipt per transaction, in input order.
    async fn sign_and_send(&self, txs: &[UnsignedTransaction]) -> Result<Vec<TxReceipt>>;
}

/// Placeholder for a transaction handed to an external signer.
///
/// Renders as `tx-pending-<index>-<network id>-<unix millis>`. It is not a
/// chain hash and says nothing about whether the transaction was ever signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingTxId {
    pub index: usize,
    pub network_id: Option<u64>,
    pub issued_at: i64,
}

impl PendingTxId {
    pub fn new(index: usize, network_id: Option<u64>, issued_at: i64) -> Self {
        PendingTxId {
            index,
            network_id,
            issued_at,
        }
    }
}

impl fmt::Display for PendingTxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PENDING_ID_PREFIX}-{}-", self.index)?;
        match self.network_id {
            Some(id) => write!(f, "{id}")?,
            None => f.write_str(UNKNOWN_NETWORK_ID)?,
        }
        write!(f, "-{}", self.issued_at)
    }
}

impl FromStr for PendingTxId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPendingId(s.to_string());
        let rest = s
            .strip_prefix(PENDING_ID_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .ok_or_else(invalid)?;

        let mut parts = rest.splitn(3, '-');
        let (Some(index), Some(network), Some(issued_at)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let network_id = match network {
            UNKNOWN_NETWORK_ID => None,
            id => Some(id.parse().map_err(|_| invalid())?),
        };
        Ok(PendingTxId {
            index: index.parse().map_err(|_| invalid())?,
            network_id,
            issued_at: issued_at.parse().map_err(|_| invalid())?,
        })
    }
}

/// Outcome of handing a transaction to a signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxReceipt {
    /// Staged for an external party; nothing has reached the chain.
    Pending(PendingTxId),
    Confirmed(TxHash),
}

impl TxReceipt {
    pub fn is_pending(&self) -> bool {
        matches!(self, TxReceipt::Pending(_))
    }

    pub fn pending_id(&self) -> Option<&PendingTxId> {
        match self {
            TxReceipt::Pending(id) => Some(id),
            TxReceipt::Confirmed(_) => None,
        }
    }

    pub fn tx_hash(&self) -> Option<&TxHash> {
        match self {
            TxReceipt::Pending(_) => None,
            TxReceipt::Confirmed(hash) => Some(hash),
        }
    }
}

impl fmt::Display for TxReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxReceipt::Pending(id) => write!(f, "{id}"),
            TxReceipt::Confirmed(hash) => write!(f, "{hash:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_id_format() {
        let id = PendingTxId::new(0, Some(1), 1_700_000_000_123);
        assert_eq!(id.to_string(), "tx-pending-0-1-1700000000123");

        let unknown = PendingTxId::new(2, None, 42);
        assert_eq!(unknown.to_string(), "tx-pending-2-unknown-42");
    }

    #[test]
    fn test_pending_id_parses_back() {
        for id in [
            PendingTxId::new(3, Some(11155111), 1_700_000_000_000),
            PendingTxId::new(0, None, 5),
        ] {
            assert_eq!(id.to_string().parse::<PendingTxId>().unwrap(), id);
        }
    }

    #[test]
    fn test_pending_id_rejects_hashes() {
        for raw in [
            "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060",
            "tx-pending-0-1",
            "tx-pending-x-1-2",
            "tx-confirmed-0-1-2",
        ] {
            assert_eq!(
                raw.parse::<PendingTxId>(),
                Err(Error::InvalidPendingId(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_receipt_variants_do_not_mix() {
        let pending = TxReceipt::Pending(PendingTxId::new(0, Some(1), 7));
        assert!(pending.is_pending());
        assert!(pending.tx_hash().is_none());

        let confirmed = TxReceipt::Confirmed(TxHash::zero());
        assert!(!confirmed.is_pending());
        assert!(confirmed.pending_id().is_none());
        assert_eq!(
            confirmed.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000000"
        );
    }
}
