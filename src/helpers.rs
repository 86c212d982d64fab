use crate::{prelude::Result, Error};
use ethers::types::{Bytes, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network tier a chain context belongs to, as the multi-chain SDK names it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
            Network::Devnet => "Devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            _ => Err(Error::Config(format!("unknown network {s:?}"))),
        }
    }
}

/// Exact base-10 rendering of a 256-bit integer.
pub(crate) fn to_decimal(value: &U256) -> String {
    value.to_string()
}

pub(crate) fn to_hex_data(data: &Bytes) -> String {
    format!("0x{}", hex::encode(data))
}
