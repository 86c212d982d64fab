//! Unsigned transactions coming in from the pipeline and the canonical,
//! precision-safe descriptors staged for an external signer.

mod builder;
mod components;

pub use builder::{SignableTransactionBuilder, ValidationMode};
pub use components::{NativeTransaction, SignableTransaction, UnsignedTransaction};
