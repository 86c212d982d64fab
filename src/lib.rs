#![deny(unreachable_pub)]
mod chain;
mod config;
mod consts;
mod dispatch;
mod errors;
mod helpers;
pub mod prelude;
mod queue;
mod signer;
mod unsigned;

pub use chain::{Chain, ChainAddress, ChainContext, EvmChainContext, Platform};
pub use config::{
    SignerConfig, ADDRESS_VAR, CHAIN_VAR, NETWORK_VAR, RPC_URL_VAR, VALIDATION_VAR,
};
pub use consts::{PENDING_ID_PREFIX, UNKNOWN_NETWORK_ID, ZERO_VALUE};
pub use dispatch::{get_signer, get_signer_with, SignerContext, SignerOptions};
pub use errors::Error;
pub use helpers::Network;
pub use queue::{
    get_pending_transactions, latest_pending_batch, GlobalPendingStore, LatestBatchStore,
    PendingBatch, PendingTransactionStore,
};
pub use signer::{
    observer_fn, EvmExternalSigner, NotifiedBatch, ObserverFn, PendingTxId, PreparedBatch,
    SignAndSendSigner, TransactionRequestObserver, TxReceipt,
};
pub use unsigned::{
    NativeTransaction, SignableTransaction, SignableTransactionBuilder, UnsignedTransaction,
    ValidationMode,
};
