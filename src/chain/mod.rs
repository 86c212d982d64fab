//! Vocabulary borrowed from the multi-chain SDK: chain names, platform
//! families, chain-scoped addresses and the context a signer is built from.

mod context;

pub use context::{ChainContext, EvmChainContext};

use crate::{prelude::Result, Error};
use ethers::types::H160;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical chain name, e.g. `Ethereum`, `Sepolia` or `Solana`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain(String);

impl Chain {
    pub fn new(name: impl Into<String>) -> Self {
        Chain(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Chain {
    fn from(name: &str) -> Self {
        Chain::new(name)
    }
}

/// Platform families known to the SDK. Only some of them have an external signer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Evm,
    Solana,
    Cosmwasm,
    Algorand,
    Sui,
    Aptos,
    Near,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Evm,
        Platform::Solana,
        Platform::Cosmwasm,
        Platform::Algorand,
        Platform::Sui,
        Platform::Aptos,
        Platform::Near,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Evm => "Evm",
            Platform::Solana => "Solana",
            Platform::Cosmwasm => "Cosmwasm",
            Platform::Algorand => "Algorand",
            Platform::Sui => "Sui",
            Platform::Aptos => "Aptos",
            Platform::Near => "Near",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    /// Platform ids are matched exactly as the SDK reports them.
    fn from_str(s: &str) -> Result<Self> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| Error::UnrecognizedPlatform(s.to_string()))
    }
}

/// An address scoped to the chain it lives on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainAddress {
    pub chain: Chain,
    pub address: String,
}

impl ChainAddress {
    pub fn new(chain: Chain, address: impl Into<String>) -> Self {
        ChainAddress {
            chain,
            address: address.into(),
        }
    }

    pub fn evm_address(&self) -> Result<H160> {
        self.address
            .parse::<H160>()
            .map_err(|_| Error::InvalidAddress(self.address.clone()))
    }
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain, self.address)
    }
}
