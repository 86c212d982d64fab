use super::{Chain, Platform};
use crate::{helpers::Network, prelude::Result, Error};
use async_trait::async_trait;
use ethers::providers::{Http, Provider};
use std::sync::Arc;
use std::time::Duration;

/// A resolved chain as handed out by the multi-chain SDK.
///
/// The platform id is reported as a raw string; the dispatcher decides whether
/// it names a known family.
#[async_trait]
pub trait ChainContext: Send + Sync {
    fn chain(&self) -> Chain;

    fn platform_id(&self) -> &str;

    fn network(&self) -> Network;

    /// Acquire an RPC handle for an EVM chain. May suspend on client setup.
    async fn evm_provider(&self) -> Result<Arc<Provider<Http>>>;
}

/// Chain context for an EVM chain reachable over HTTP JSON-RPC.
#[derive(Debug, Clone)]
pub struct EvmChainContext {
    chain: Chain,
    network: Network,
    rpc_url: String,
    poll_interval: Option<Duration>,
}

impl EvmChainContext {
    pub fn new(chain: Chain, network: Network, rpc_url: impl Into<String>) -> Self {
        EvmChainContext {
            chain,
            network,
            rpc_url: rpc_url.into(),
            poll_interval: None,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl ChainContext for EvmChainContext {
    fn chain(&self) -> Chain {
        self.chain.clone()
    }

    fn platform_id(&self) -> &str {
        Platform::Evm.as_str()
    }

    fn network(&self) -> Network {
        self.network
    }

    async fn evm_provider(&self) -> Result<Arc<Provider<Http>>> {
        let provider = Provider::<Http>::try_from(self.rpc_url.as_str())
            .map_err(|e| Error::Rpc(e.to_string()))?;
        let provider = match self.poll_interval {
            Some(interval) => provider.interval(interval),
            None => provider,
        };
        Ok(Arc::new(provider))
    }
}
