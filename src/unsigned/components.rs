use crate::chain::{Chain, Platform};
use crate::helpers::Network;
use ethers::types::{transaction::eip2718::TypedTransaction, Bytes};
use serde::{Deserialize, Serialize};

/// A transaction in the native shape of its chain family.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeTransaction {
    Evm(TypedTransaction),
    /// Already-serialized payload for a family without an external signer.
    Serialized { platform: Platform, bytes: Bytes },
}

impl NativeTransaction {
    pub fn platform(&self) -> Platform {
        match self {
            NativeTransaction::Evm(_) => Platform::Evm,
            NativeTransaction::Serialized { platform, .. } => *platform,
        }
    }
}

impl From<TypedTransaction> for NativeTransaction {
    fn from(tx: TypedTransaction) -> Self {
        NativeTransaction::Evm(tx)
    }
}

/// An unsigned transaction as produced by the multi-chain pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsignedTransaction {
    pub transaction: NativeTransaction,
    pub network: Network,
    pub chain: Chain,
    pub description: String,
    pub parallelizable: bool,
}

impl UnsignedTransaction {
    pub fn new(
        transaction: impl Into<NativeTransaction>,
        network: Network,
        chain: Chain,
        description: impl Into<String>,
    ) -> Self {
        UnsignedTransaction {
            transaction: transaction.into(),
            network,
            chain,
            description: description.into(),
            parallelizable: false,
        }
    }

    pub fn parallelizable(mut self, parallelizable: bool) -> Self {
        self.parallelizable = parallelizable;
        self
    }
}

/// What an external signer needs to reproduce and sign one EVM transaction.
///
/// Every integer that can outgrow 2^53 is carried as a base-10 string so the
/// JSON stays exact for consumers that parse numbers as doubles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignableTransaction {
    pub from: String,
    pub to: Option<String>,
    pub data: Option<String>,
    pub value: String,
    pub gas_limit: Option<String>,
    pub gas_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,
    pub nonce: Option<String>,
    pub chain_id: Option<u64>,
}
