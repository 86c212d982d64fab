use crate::chain::{Chain, EvmChainContext};
use crate::consts::{DEFAULT_CHAIN, DEFAULT_RPC_URL};
use crate::dispatch::SignerOptions;
use crate::helpers::Network;
use crate::unsigned::ValidationMode;
use crate::{prelude::Result, Error};
use std::env;

pub const RPC_URL_VAR: &str = "EXTERNAL_SIGNER_RPC_URL";
pub const CHAIN_VAR: &str = "EXTERNAL_SIGNER_CHAIN";
pub const NETWORK_VAR: &str = "EXTERNAL_SIGNER_NETWORK";
pub const ADDRESS_VAR: &str = "EXTERNAL_SIGNER_ADDRESS";
pub const VALIDATION_VAR: &str = "EXTERNAL_SIGNER_VALIDATION";

/// Settings for wiring an external signer from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct SignerConfig {
    pub rpc_url: String,
    pub chain: Chain,
    pub network: Network,
    pub address: Option<String>,
    pub validation: ValidationMode,
}

impl Default for SignerConfig {
    fn default() -> Self {
        SignerConfig {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            chain: Chain::from(DEFAULT_CHAIN),
            network: Network::Testnet,
            address: None,
            validation: ValidationMode::Lenient,
        }
    }
}

impl SignerConfig {
    /// Reads `EXTERNAL_SIGNER_*` variables, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SignerConfig::default();
        let network = match lookup(NETWORK_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.network,
        };
        let validation = match lookup(VALIDATION_VAR) {
            Some(raw) => parse_validation(&raw)?,
            None => defaults.validation,
        };

        Ok(SignerConfig {
            rpc_url: lookup(RPC_URL_VAR).unwrap_or(defaults.rpc_url),
            chain: lookup(CHAIN_VAR).map(Chain::new).unwrap_or(defaults.chain),
            network,
            address: lookup(ADDRESS_VAR).filter(|addr| !addr.is_empty()),
            validation,
        })
    }

    pub fn chain_context(&self) -> EvmChainContext {
        EvmChainContext::new(self.chain.clone(), self.network, self.rpc_url.clone())
    }

    pub fn signer_options(&self) -> SignerOptions {
        SignerOptions::default().validation(self.validation)
    }
}

fn parse_validation(raw: &str) -> Result<ValidationMode> {
    match raw.to_ascii_lowercase().as_str() {
        "lenient" => Ok(ValidationMode::Lenient),
        "strict" => Ok(ValidationMode::Strict),
        _ => Err(Error::Config(format!("{VALIDATION_VAR} must be lenient or strict, got {raw:?}"))),
    }
}
