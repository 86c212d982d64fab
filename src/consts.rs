/// Prefix of every placeholder identifier handed back by `sign_and_send`.
pub const PENDING_ID_PREFIX: &str = "tx-pending";

/// Rendered in place of the network id when a transaction carries no chain id.
pub const UNKNOWN_NETWORK_ID: &str = "unknown";

/// Zero-value convention for an omitted EVM `value`.
pub const ZERO_VALUE: &str = "0";

pub(crate) const DEFAULT_CHAIN: &str = "Sepolia";
pub(crate) const DEFAULT_RPC_URL: &str = "http://localhost:8545";
