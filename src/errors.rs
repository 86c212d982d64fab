use crate::chain::Platform;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unrecognized platform: {0}")]
    UnrecognizedPlatform(String),
    #[error("{0} external signer not implemented")]
    PlatformNotImplemented(Platform),
    #[error("Unsupported platform: signer built for {expected}, transaction is for {actual}")]
    UnsupportedPlatform { expected: Platform, actual: Platform },
    #[error("Invalid transaction at index {index}: {reason}")]
    InvalidTransaction { index: usize, reason: String },
    #[error("Transaction request observer failed: {0}")]
    Observer(String),
    #[error("Rpc error: {0:?}")]
    Rpc(String),
    #[error("Invalid address {0:?}")]
    InvalidAddress(String),
    #[error("Invalid pending transaction id {0:?}")]
    InvalidPendingId(String),
    #[error("Json parse error {0:?}")]
    JsonParse(String),
    #[error("Config error: {0}")]
    Config(String),
}
