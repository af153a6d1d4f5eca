// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for bankscan integration tests
//!
//! Provides builders for fully-populated RPC logs so handler tests can
//! exercise the same decode path a live indexing pipeline would.

use alloy_primitives::{Address, BlockNumber, TxHash, B256, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use bankscan::{Deposit, Withdrawal};

/// Contract address used for all test logs.
#[allow(dead_code)]
pub const BANK: Address = Address::new([0xba; 20]);

/// Initialize tracing output for tests (honors `RUST_LOG`).
///
/// Safe to call from every test; only the first call installs a subscriber.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
fn test_log(
    data: alloy_primitives::LogData,
    tx_hash: TxHash,
    block: BlockNumber,
    log_index: u64,
) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address: BANK,
            data,
        },
        block_hash: Some(B256::ZERO),
        block_number: Some(block),
        block_timestamp: Some(1_700_000_000 + block),
        transaction_hash: Some(tx_hash),
        transaction_index: Some(0),
        log_index: Some(log_index),
        removed: false,
    }
}

/// Build a fully-populated Deposit log.
#[allow(dead_code)]
pub fn deposit_log(
    depositor: Address,
    amount: u64,
    tx_hash: TxHash,
    block: BlockNumber,
    log_index: u64,
) -> Log {
    let event = Deposit {
        depositor,
        amount: U256::from(amount),
    };
    test_log(event.encode_log_data(), tx_hash, block, log_index)
}

/// Build a fully-populated Withdrawal log.
#[allow(dead_code)]
pub fn withdrawal_log(
    withdrawer: Address,
    amount: u64,
    tx_hash: TxHash,
    block: BlockNumber,
    log_index: u64,
) -> Log {
    let event = Withdrawal {
        withdrawer,
        amount: U256::from(amount),
    };
    test_log(event.encode_log_data(), tx_hash, block, log_index)
}

/// A transaction hash whose last byte is `n`, for readable test ids.
#[allow(dead_code)]
pub fn tx(n: u8) -> TxHash {
    let mut bytes = [0u8; 32];
    bytes[31] = n;
    TxHash::new(bytes)
}
