use ethers::types::{
    transaction::eip2718::TypedTransaction, Bytes, TransactionRequest, H160, U256,
};
use log::info;
use ranger_external_signer::prelude::Result;
use ranger_external_signer::{
    get_pending_transactions, get_signer_with, observer_fn, Error, SignableTransaction,
    SignerConfig, TxReceipt, UnsignedTransaction,
};
use std::sync::Arc;

const DEMO_SENDER: &str = "0x1234567890123456789012345678901234567890";
const DEMO_RECIPIENT: &str = "0xF5Bc9107916B91A3Ea5966cd2e51655D21B7Eb02";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = SignerConfig::from_env()?;
    let sender = config
        .address
        .clone()
        .unwrap_or_else(|| DEMO_SENDER.to_string());
    let ctx = config.chain_context();

    let observer = observer_fn(|txs: Vec<UnsignedTransaction>| async move {
        for tx in &txs {
            info!("Signature requested: {} on {}", tx.description, tx.chain);
        }
        Ok::<(), Error>(())
    });
    let options = config.signer_options().observer(Arc::new(observer));

    let signer = get_signer_with(&ctx, &sender, options).await?;
    println!("✅ External signer ready for {}", signer.address);

    let recipient: H160 = DEMO_RECIPIENT
        .parse()
        .map_err(|_| Error::InvalidAddress(DEMO_RECIPIENT.to_string()))?;

    // 100 ETH transfer followed by an ERC-20 transfer(address,uint256) call
    let transfer: TypedTransaction = TransactionRequest::new()
        .to(recipient)
        .value(U256::from(10u64).pow(U256::from(20u64)))
        .gas(21_000u64)
        .gas_price(30_000_000_000u64)
        .nonce(0u64)
        .chain_id(11155111u64)
        .into();
    let erc20_call: TypedTransaction = TransactionRequest::new()
        .to(recipient)
        .data(Bytes::from(erc20_transfer_data(recipient, U256::from(5_000_000u64))))
        .gas(65_000u64)
        .nonce(1u64)
        .chain_id(11155111u64)
        .into();

    let batch = vec![
        UnsignedTransaction::new(
            transfer,
            config.network,
            config.chain.clone(),
            "Native transfer",
        ),
        UnsignedTransaction::new(
            erc20_call,
            config.network,
            config.chain.clone(),
            "USDC transfer",
        ),
    ];

    let receipts = signer.signer.sign_and_send(&batch).await?;
    println!("\n📝 Placeholder receipts");
    for receipt in &receipts {
        print_receipt(receipt);
    }

    println!("\n📋 Pending batch for the external signer");
    for (index, tx) in get_pending_transactions().iter().enumerate() {
        print_signable(index, tx);
    }

    println!("\nNext: have the key holder sign the pending batch and broadcast it.");
    Ok(())
}

fn erc20_transfer_data(to: H160, amount: U256) -> Vec<u8> {
    let mut data = vec![0xa9, 0x05, 0x9c, 0xbb];
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(to.as_bytes());
    let mut amount_bytes = [0u8; 32];
    amount.to_big_endian(&mut amount_bytes);
    data.extend_from_slice(&amount_bytes);
    data
}

fn print_receipt(receipt: &TxReceipt) {
    match receipt {
        TxReceipt::Pending(id) => println!(
            "  #{} pending on network {:?} since {} -> {}",
            id.index, id.network_id, id.issued_at, receipt
        ),
        TxReceipt::Confirmed(hash) => println!("  confirmed {hash:?}"),
    }
}

fn print_signable(index: usize, tx: &SignableTransaction) {
    println!("  [{index}] from {} to {:?}", tx.from, tx.to);
    println!("      value: {}", tx.value);
    println!("      gas limit: {:?}, gas price: {:?}", tx.gas_limit, tx.gas_price);
    println!("      nonce: {:?}, chain id: {:?}", tx.nonce, tx.chain_id);
    if let Some(data) = &tx.data {
        println!("      data: {data}");
    }
}
