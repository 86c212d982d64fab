use ethers::types::{transaction::eip2718::TypedTransaction, TransactionRequest, H160, U256};
use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use ranger_external_signer::{get_signer, Chain, EvmChainContext, Network, UnsignedTransaction};
use std::sync::Mutex;

lazy_static! {
    static ref RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
}

/// Keeps every info-or-louder record emitted by the crate.
struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            RECORDS.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

#[tokio::test]
async fn test_logged_batch_keeps_exact_decimals() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);

    let ctx = EvmChainContext::new(
        Chain::from("Ethereum"),
        Network::Mainnet,
        "http://localhost:8545",
    );
    let signer = get_signer(&ctx, "0xsender").await.unwrap();

    let huge = U256::MAX - U256::from(1u64);
    let to: H160 = "0x1234567890123456789012345678901234567890".parse().unwrap();
    let tx: TypedTransaction = TransactionRequest::new()
        .to(to)
        .value(U256::from(10u64).pow(U256::from(20u64)))
        .gas(21_000u64)
        .gas_price(huge)
        .chain_id(1u64)
        .into();
    let unsigned =
        UnsignedTransaction::new(tx, Network::Mainnet, Chain::from("Ethereum"), "transfer");

    signer.signer.sign_and_send(&[unsigned]).await.unwrap();

    let records = RECORDS.lock().unwrap();
    let staged = records
        .iter()
        .find(|msg| msg.starts_with("Transactions requiring signature:"))
        .expect("staged batch should be logged");
    assert!(staged.contains(r#""value": "100000000000000000000""#));
    assert!(staged.contains(r#""gasLimit": "21000""#));
    assert!(staged.contains(&format!(r#""gasPrice": "{huge}""#)));
    assert!(staged.contains(r#""chainId": 1"#));
}
