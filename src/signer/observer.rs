use crate::prelude::Result;
use crate::unsigned::UnsignedTransaction;
use async_trait::async_trait;
use std::future::Future;

/// Told about every batch before it is staged. Staging waits for it to finish,
/// and an error aborts the request with nothing staged.
#[async_trait]
pub trait TransactionRequestObserver: Send + Sync {
    async fn on_transaction_request(&self, txs: &[UnsignedTransaction]) -> Result<()>;
}

/// Observer backed by an async closure. The closure receives its own copy of the batch.
pub struct ObserverFn<F>(F);

pub fn observer_fn<F, Fut>(f: F) -> ObserverFn<F>
where
    F: Fn(Vec<UnsignedTransaction>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    ObserverFn(f)
}

#[async_trait]
impl<F, Fut> TransactionRequestObserver for ObserverFn<F>
where
    F: Fn(Vec<UnsignedTransaction>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    async fn on_transaction_request(&self, txs: &[UnsignedTransaction]) -> Result<()> {
        (self.0)(txs.to_vec()).await
    }
}
