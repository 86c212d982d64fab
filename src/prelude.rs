pub use crate::chain::{Chain, ChainAddress, Platform};
pub use crate::signer::{SignAndSendSigner, TxReceipt};
pub use crate::unsigned::UnsignedTransaction;

pub type Result<T> = std::result::Result<T, crate::Error>;
