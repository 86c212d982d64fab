//! Picks the external signer for a chain's platform family.

use crate::chain::{Chain, ChainAddress, ChainContext, Platform};
use crate::queue::PendingTransactionStore;
use crate::signer::{EvmExternalSigner, SignAndSendSigner, TransactionRequestObserver};
use crate::unsigned::ValidationMode;
use crate::{prelude::Result, Error};
use log::{debug, warn};
use std::sync::Arc;

/// A signer together with the chain address it signs for.
#[derive(Debug)]
pub struct SignerContext {
    pub signer: Box<dyn SignAndSendSigner>,
    pub address: ChainAddress,
}

impl SignerContext {
    pub fn chain(&self) -> &Chain {
        self.signer.chain()
    }

    pub fn address(&self) -> &str {
        self.signer.address()
    }
}

/// Knobs forwarded to whichever signer the dispatcher builds.
#[derive(Clone, Default)]
pub struct SignerOptions {
    pub observer: Option<Arc<dyn TransactionRequestObserver>>,
    /// Falls back to the process-wide store when unset.
    pub store: Option<Arc<dyn PendingTransactionStore>>,
    pub validation: ValidationMode,
}

impl SignerOptions {
    pub fn observer(mut self, observer: Arc<dyn TransactionRequestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn store(mut self, store: Arc<dyn PendingTransactionStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }
}

pub async fn get_signer<C>(chain: &C, address: &str) -> Result<SignerContext>
where
    C: ChainContext + ?Sized,
{
    get_signer_with(chain, address, SignerOptions::default()).await
}

/// Build the signer for `chain`'s platform, bound to `address`.
///
/// Known families without an external signer fail with
/// [`Error::PlatformNotImplemented`]; ids that name no known family fail with
/// [`Error::UnrecognizedPlatform`]. Nothing is retried.
pub async fn get_signer_with<C>(
    chain: &C,
    address: &str,
    options: SignerOptions,
) -> Result<SignerContext>
where
    C: ChainContext + ?Sized,
{
    let platform_id = chain.platform_id();
    let platform = platform_id.parse::<Platform>().map_err(|e| {
        warn!(
            "Refusing signer for {}: unrecognized platform {platform_id:?}",
            chain.chain()
        );
        e
    })?;

    let signer: Box<dyn SignAndSendSigner> = match platform {
        Platform::Evm => {
            let provider = chain.evm_provider().await?;
            let mut signer = EvmExternalSigner::new(chain.chain(), provider, address)
                .with_validation(options.validation);
            if let Some(observer) = options.observer {
                signer = signer.with_observer(observer);
            }
            if let Some(store) = options.store {
                signer = signer.with_store(store);
            }
            Box::new(signer)
        }
        Platform::Solana
        | Platform::Cosmwasm
        | Platform::Algorand
        | Platform::Sui
        | Platform::Aptos
        | Platform::Near => {
            warn!(
                "Refusing signer for {}: {platform} has no external signer",
                chain.chain()
            );
            return Err(Error::PlatformNotImplemented(platform));
        }
    };

    debug!(
        "Built {} external signer for {} on {} ({})",
        signer.platform(),
        signer.address(),
        signer.chain(),
        chain.network()
    );
    let address = ChainAddress::new(chain.chain(), signer.address());
    Ok(SignerContext { signer, address })
}
