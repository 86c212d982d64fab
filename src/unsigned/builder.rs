use super::components::{NativeTransaction, SignableTransaction, UnsignedTransaction};
use crate::chain::Platform;
use crate::consts::ZERO_VALUE;
use crate::helpers::{to_decimal, to_hex_data};
use crate::{prelude::Result, Error};
use ethers::types::{transaction::eip2718::TypedTransaction, NameOrAddress};
use serde::{Deserialize, Serialize};

/// How strictly incoming transactions are checked before staging.
///
/// `Lenient` stages whatever it is given: missing fields are left empty and an
/// absent `value` becomes zero. `Strict` refuses empty batches and
/// transactions without a recipient, gas limit or chain id.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Lenient,
    Strict,
}

/// Converts native EVM transactions into [`SignableTransaction`]s for one sender.
#[derive(Debug, Clone)]
pub struct SignableTransactionBuilder {
    pub from: String,
    pub validation: ValidationMode,
}

impl SignableTransactionBuilder {
    pub fn new(from: impl Into<String>, validation: ValidationMode) -> Self {
        SignableTransactionBuilder {
            from: from.into(),
            validation,
        }
    }

    pub fn build_batch(&self, txs: &[UnsignedTransaction]) -> Result<Vec<SignableTransaction>> {
        if txs.is_empty() && self.validation == ValidationMode::Strict {
            return Err(Error::InvalidTransaction {
                index: 0,
                reason: "batch is empty".to_string(),
            });
        }
        txs.iter()
            .enumerate()
            .map(|(index, tx)| match &tx.transaction {
                NativeTransaction::Evm(evm_tx) => self.build(index, evm_tx),
                other => Err(Error::UnsupportedPlatform {
                    expected: Platform::Evm,
                    actual: other.platform(),
                }),
            })
            .collect()
    }

    pub fn build(&self, index: usize, tx: &TypedTransaction) -> Result<SignableTransaction> {
        let (gas_price, max_fee_per_gas, max_priority_fee_per_gas) = match tx {
            TypedTransaction::Eip1559(req) => (
                None,
                req.max_fee_per_gas.as_ref().map(to_decimal),
                req.max_priority_fee_per_gas.as_ref().map(to_decimal),
            ),
            _ => (tx.gas_price().as_ref().map(to_decimal), None, None),
        };

        let signable = SignableTransaction {
            from: self.from.clone(),
            to: tx.to().map(recipient),
            data: tx.data().map(to_hex_data),
            value: tx
                .value()
                .map(to_decimal)
                .unwrap_or_else(|| ZERO_VALUE.to_string()),
            gas_limit: tx.gas().map(to_decimal),
            gas_price,
            max_fee_per_gas,
            max_priority_fee_per_gas,
            nonce: tx.nonce().map(to_decimal),
            chain_id: tx.chain_id().map(|id| id.as_u64()),
        };

        if self.validation == ValidationMode::Strict {
            check_required(index, &signable)?;
        }
        Ok(signable)
    }
}

fn recipient(to: &NameOrAddress) -> String {
    match to {
        NameOrAddress::Address(address) => format!("{address:?}"),
        NameOrAddress::Name(name) => name.clone(),
    }
}

fn check_required(index: usize, tx: &SignableTransaction) -> Result<()> {
    let missing = [
        ("to", tx.to.is_none()),
        ("gasLimit", tx.gas_limit.is_none()),
        ("chainId", tx.chain_id.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, absent)| absent.then_some(field))
    .collect::<Vec<_>>();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidTransaction {
            index,
            reason: format!("missing {}", missing.join(", ")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Chain;
    use crate::helpers::Network;
    use ethers::types::{Bytes, Eip1559TransactionRequest, TransactionRequest, H160, U256};

    const SENDER: &str = "0xsender";

    fn recipient_address() -> H160 {
        "0x1234567890123456789012345678901234567890".parse().unwrap()
    }

    fn unsigned(tx: TypedTransaction) -> UnsignedTransaction {
        UnsignedTransaction::new(tx, Network::Mainnet, Chain::from("Ethereum"), "transfer")
    }

    #[test]
    fn test_legacy_transaction_fields_become_decimal_strings() {
        let tx: TypedTransaction = TransactionRequest::new()
            .to(recipient_address())
            .value(U256::from(10u64).pow(U256::from(20u64)))
            .gas(21_000u64)
            .gas_price(30_000_000_000u64)
            .nonce(7u64)
            .data(Bytes::from(vec![0xde, 0xad]))
            .chain_id(1u64)
            .into();

        let signable = SignableTransactionBuilder::new(SENDER, ValidationMode::Lenient)
            .build(0, &tx)
            .unwrap();

        assert_eq!(signable.from, SENDER);
        assert_eq!(
            signable.to.as_deref(),
            Some("0x1234567890123456789012345678901234567890")
        );
        assert_eq!(signable.value, "100000000000000000000");
        assert_eq!(signable.gas_limit.as_deref(), Some("21000"));
        assert_eq!(signable.gas_price.as_deref(), Some("30000000000"));
        assert_eq!(signable.nonce.as_deref(), Some("7"));
        assert_eq!(signable.data.as_deref(), Some("0xdead"));
        assert_eq!(signable.chain_id, Some(1));
        assert!(signable.max_fee_per_gas.is_none());
    }

    #[test]
    fn test_missing_fields_default_in_lenient_mode() {
        let tx: TypedTransaction = TransactionRequest::new().into();
        let signable = SignableTransactionBuilder::new(SENDER, ValidationMode::Lenient)
            .build(0, &tx)
            .unwrap();

        assert_eq!(signable.value, "0");
        assert_eq!(signable.to, None);
        assert_eq!(signable.data, None);
        assert_eq!(signable.gas_limit, None);
        assert_eq!(signable.gas_price, None);
        assert_eq!(signable.nonce, None);
        assert_eq!(signable.chain_id, None);
    }

    #[test]
    fn test_strict_mode_names_missing_fields() {
        let tx: TypedTransaction = TransactionRequest::new().to(recipient_address()).into();
        let err = SignableTransactionBuilder::new(SENDER, ValidationMode::Strict)
            .build(3, &tx)
            .unwrap_err();

        assert_eq!(
            err,
            Error::InvalidTransaction {
                index: 3,
                reason: "missing gasLimit, chainId".to_string()
            }
        );
    }

    #[test]
    fn test_strict_mode_rejects_empty_batch() {
        let builder = SignableTransactionBuilder::new(SENDER, ValidationMode::Strict);
        assert!(matches!(
            builder.build_batch(&[]),
            Err(Error::InvalidTransaction { index: 0, .. })
        ));
        let lenient = SignableTransactionBuilder::new(SENDER, ValidationMode::Lenient);
        assert_eq!(lenient.build_batch(&[]).unwrap(), vec![]);
    }

    #[test]
    fn test_eip1559_fee_caps() {
        let max_fee = U256::from_dec_str("340282366920938463463374607431768211456").unwrap();
        let tx: TypedTransaction = Eip1559TransactionRequest::new()
            .to(recipient_address())
            .max_fee_per_gas(max_fee)
            .max_priority_fee_per_gas(2_000_000_000u64)
            .gas(50_000u64)
            .chain_id(11155111u64)
            .into();

        let signable = SignableTransactionBuilder::new(SENDER, ValidationMode::Strict)
            .build(0, &tx)
            .unwrap();

        assert_eq!(signable.gas_price, None);
        assert_eq!(
            signable.max_fee_per_gas.as_deref(),
            Some("340282366920938463463374607431768211456")
        );
        assert_eq!(signable.max_priority_fee_per_gas.as_deref(), Some("2000000000"));
        assert_eq!(signable.chain_id, Some(11155111));
    }

    #[test]
    fn test_parallelizable_flag_does_not_change_descriptor() {
        let tx: TypedTransaction = TransactionRequest::new().nonce(1u64).into();
        let sequential = unsigned(tx.clone());
        let parallel = unsigned(tx).parallelizable(true);
        assert!(!sequential.parallelizable);
        assert!(parallel.parallelizable);

        let builder = SignableTransactionBuilder::new(SENDER, ValidationMode::Lenient);
        assert_eq!(
            builder.build_batch(&[sequential]).unwrap(),
            builder.build_batch(&[parallel]).unwrap()
        );
    }

    #[test]
    fn test_ens_recipient_kept_as_name() {
        let tx: TypedTransaction = TransactionRequest::new().to("vitalik.eth").into();
        let signable = SignableTransactionBuilder::new(SENDER, ValidationMode::Lenient)
            .build(0, &tx)
            .unwrap();
        assert_eq!(signable.to.as_deref(), Some("vitalik.eth"));
    }

    #[test]
    fn test_batch_rejects_foreign_platform() {
        let foreign = UnsignedTransaction::new(
            NativeTransaction::Serialized {
                platform: Platform::Solana,
                bytes: Bytes::from(vec![1, 2, 3]),
            },
            Network::Mainnet,
            Chain::from("Solana"),
            "spl transfer",
        );
        let evm = unsigned(TransactionRequest::new().into());

        let err = SignableTransactionBuilder::new(SENDER, ValidationMode::Lenient)
            .build_batch(&[evm, foreign])
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedPlatform {
                expected: Platform::Evm,
                actual: Platform::Solana
            }
        );
    }

    #[test]
    fn test_serialized_json_uses_camel_case_and_strings() {
        let tx: TypedTransaction = TransactionRequest::new()
            .value(U256::MAX)
            .gas(21_000u64)
            .chain_id(1u64)
            .into();
        let signable = SignableTransactionBuilder::new(SENDER, ValidationMode::Lenient)
            .build(0, &tx)
            .unwrap();

        let json = serde_json::to_value(&signable).unwrap();
        assert_eq!(json["gasLimit"], "21000");
        assert_eq!(json["chainId"], 1);
        assert_eq!(
            json["value"],
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
        assert!(json.get("maxFeePerGas").is_none());
    }
}
