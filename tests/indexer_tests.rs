// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for the SimpleBank handler pair.
//!
//! Each test drives [`BankIndexer`] through the same decode-then-handle
//! path a live dispatcher would use and asserts the resulting entity-store
//! state: one immutable record per event, and account aggregates holding
//! `balance == total_deposited - total_withdrawn` after every update.

mod helpers;

use alloy_primitives::{address, Address, I256, U256};
use bankscan::{
    AccountId, BankIndexer, EntityStore, EventId, IndexingError, MemoryStore, ObservedWithdrawal,
};
use helpers::{deposit_log, init_tracing, tx, withdrawal_log};

const ADDR_X: Address = address!("00000000000000000000000000000000000000aa");
const ADDR_Y: Address = address!("00000000000000000000000000000000000000bb");

fn balance(n: u64) -> I256 {
    I256::try_from(U256::from(n)).unwrap()
}

fn setup() -> (MemoryStore, BankIndexer<MemoryStore>) {
    init_tracing();
    let store = MemoryStore::new();
    let indexer = BankIndexer::new(store.clone());
    (store, indexer)
}

#[test]
fn test_single_deposit_creates_record_and_account() {
    let (store, indexer) = setup();

    indexer
        .handle_deposit_log(&deposit_log(ADDR_X, 100, tx(1), 1000, 0))
        .unwrap();

    let record = store
        .deposit(&EventId::new(tx(1), 0))
        .unwrap()
        .expect("record written");
    assert_eq!(record.depositor, ADDR_X);
    assert_eq!(record.amount, U256::from(100));
    assert_eq!(record.block_number, 1000);

    let account = store
        .account(&AccountId::from_address(ADDR_X))
        .unwrap()
        .expect("account created");
    assert_eq!(account.total_deposited, U256::from(100));
    assert_eq!(account.total_withdrawn, U256::ZERO);
    assert_eq!(account.balance, balance(100));
}

#[test]
fn test_deposit_then_withdrawal_nets_out() {
    let (store, indexer) = setup();

    indexer
        .handle_deposit_log(&deposit_log(ADDR_X, 100, tx(1), 1000, 0))
        .unwrap();
    indexer
        .handle_withdrawal_log(&withdrawal_log(ADDR_X, 40, tx(2), 1001, 0))
        .unwrap();

    let account = store
        .account(&AccountId::from_address(ADDR_X))
        .unwrap()
        .expect("account exists");
    assert_eq!(account.total_deposited, U256::from(100));
    assert_eq!(account.total_withdrawn, U256::from(40));
    assert_eq!(account.balance, balance(60));

    // Both event records exist independently of the aggregate.
    assert_eq!(store.deposit_count(), 1);
    assert_eq!(store.withdrawal_count(), 1);
}

#[test]
fn test_withdrawal_without_deposit_records_but_does_not_project() {
    let (store, indexer) = setup();

    indexer
        .handle_withdrawal_log(&withdrawal_log(ADDR_Y, 50, tx(3), 1000, 2))
        .unwrap();

    // Record is written with all fields.
    let record = store
        .withdrawal(&EventId::new(tx(3), 2))
        .unwrap()
        .expect("withdrawal record written");
    assert_eq!(record.withdrawer, ADDR_Y);
    assert_eq!(record.amount, U256::from(50));

    // Deliberate policy: withdrawals cannot create an account.
    assert!(store
        .account(&AccountId::from_address(ADDR_Y))
        .unwrap()
        .is_none());
    assert_eq!(store.account_count(), 0);
}

#[test]
fn test_duplicate_delivery_overwrites_record_but_doubles_totals() {
    let (store, indexer) = setup();
    let log = deposit_log(ADDR_X, 100, tx(1), 1000, 0);

    indexer.handle_deposit_log(&log).unwrap();
    indexer.handle_deposit_log(&log).unwrap();

    // The record write is an idempotent overwrite: same id, one row.
    assert_eq!(store.deposit_count(), 1);

    // The projection is NOT idempotent: totals accumulate on every
    // delivery. Duplicate suppression is the upstream dispatcher's job;
    // this test pins the asymmetry so it stays documented behavior.
    let account = store
        .account(&AccountId::from_address(ADDR_X))
        .unwrap()
        .expect("account exists");
    assert_eq!(account.total_deposited, U256::from(200));
    assert_eq!(account.balance, balance(200));
}

#[test]
fn test_accounts_are_independent() {
    let (store, indexer) = setup();

    indexer
        .handle_deposit_log(&deposit_log(ADDR_X, 100, tx(1), 1000, 0))
        .unwrap();
    indexer
        .handle_deposit_log(&deposit_log(ADDR_Y, 5, tx(1), 1000, 1))
        .unwrap();
    indexer
        .handle_withdrawal_log(&withdrawal_log(ADDR_X, 30, tx(2), 1001, 0))
        .unwrap();

    let y = store
        .account(&AccountId::from_address(ADDR_Y))
        .unwrap()
        .expect("Y exists");
    assert_eq!(y.total_deposited, U256::from(5));
    assert_eq!(y.total_withdrawn, U256::ZERO);
    assert_eq!(y.balance, balance(5));
}

#[test]
fn test_balance_can_go_negative_on_existing_account() {
    let (store, indexer) = setup();

    indexer
        .handle_deposit_log(&deposit_log(ADDR_X, 40, tx(1), 1000, 0))
        .unwrap();
    indexer
        .handle_withdrawal_log(&withdrawal_log(ADDR_X, 100, tx(2), 1001, 0))
        .unwrap();

    let account = store
        .account(&AccountId::from_address(ADDR_X))
        .unwrap()
        .expect("account exists");
    assert_eq!(account.balance, -balance(60));
    assert!(account.invariant_holds());
}

#[test]
fn test_same_event_id_is_shared_by_both_record_kinds_without_collision() {
    // Deposit and Withdrawal records live in separate keyspaces, so the
    // same <tx>-<index> id in each cannot clobber the other.
    let (store, indexer) = setup();

    indexer
        .handle_deposit_log(&deposit_log(ADDR_X, 100, tx(1), 1000, 0))
        .unwrap();
    let withdrawal = ObservedWithdrawal {
        withdrawer: ADDR_X,
        amount: U256::from(10),
        meta: bankscan::EventMeta::new(tx(1), 1000, 1_700_001_000, 0),
    };
    indexer.handle_withdrawal(&withdrawal).unwrap();

    assert!(store.deposit(&EventId::new(tx(1), 0)).unwrap().is_some());
    assert!(store.withdrawal(&EventId::new(tx(1), 0)).unwrap().is_some());
}

#[test]
fn test_pruned_log_is_rejected_before_any_write() {
    let (store, indexer) = setup();

    let mut log = deposit_log(ADDR_X, 100, tx(1), 1000, 0);
    log.block_timestamp = None;

    let err = indexer.handle_deposit_log(&log).unwrap_err();
    assert!(matches!(err, IndexingError::Decode(_)));

    assert_eq!(store.deposit_count(), 0);
    assert_eq!(store.account_count(), 0);
}

#[test]
fn test_wrong_event_shape_is_a_decode_error() {
    let (_, indexer) = setup();

    // A Deposit log handed to the withdrawal handler must not decode.
    let err = indexer
        .handle_withdrawal_log(&deposit_log(ADDR_X, 100, tx(1), 1000, 0))
        .unwrap_err();
    assert!(matches!(err, IndexingError::Decode(_)));
}

#[test]
fn test_chain_ordered_sequence_matches_expected_ledger() {
    let (store, indexer) = setup();

    // block 1000: X deposits 100 (log 0), Y deposits 20 (log 1)
    // block 1001: X withdraws 30
    // block 1002: X deposits 10, Y withdraws 25 (overdraw, still applied)
    indexer
        .handle_deposit_log(&deposit_log(ADDR_X, 100, tx(1), 1000, 0))
        .unwrap();
    indexer
        .handle_deposit_log(&deposit_log(ADDR_Y, 20, tx(1), 1000, 1))
        .unwrap();
    indexer
        .handle_withdrawal_log(&withdrawal_log(ADDR_X, 30, tx(2), 1001, 0))
        .unwrap();
    indexer
        .handle_deposit_log(&deposit_log(ADDR_X, 10, tx(3), 1002, 0))
        .unwrap();
    indexer
        .handle_withdrawal_log(&withdrawal_log(ADDR_Y, 25, tx(3), 1002, 1))
        .unwrap();

    let x = store
        .account(&AccountId::from_address(ADDR_X))
        .unwrap()
        .expect("X exists");
    assert_eq!(x.total_deposited, U256::from(110));
    assert_eq!(x.total_withdrawn, U256::from(30));
    assert_eq!(x.balance, balance(80));

    let y = store
        .account(&AccountId::from_address(ADDR_Y))
        .unwrap()
        .expect("Y exists");
    assert_eq!(y.total_deposited, U256::from(20));
    assert_eq!(y.total_withdrawn, U256::from(25));
    assert_eq!(y.balance, -balance(5));

    assert_eq!(store.deposit_count(), 3);
    assert_eq!(store.withdrawal_count(), 2);
}
