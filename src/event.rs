// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical SimpleBank event definitions and log decoding.
//!
//! The `Deposit` and `Withdrawal` events are defined with the `sol!` macro
//! so their `SIGNATURE_HASH` constants can be used to build log filters
//! upstream. [`ObservedDeposit`] and [`ObservedWithdrawal`] pair the decoded
//! payload with the block metadata the derived entities need.

use std::fmt::Debug;

use alloy_primitives::{Address, BlockNumber, TxHash, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::{sol, SolEvent};

use crate::errors::EventDecodeError;

/// The canonical Deposit event signature
pub const DEPOSIT_EVENT_SIGNATURE: &str = "Deposit(address,uint256)";

sol! {
    event Deposit(address indexed depositor, uint256 amount);
}

impl Debug for Deposit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Deposit(depositor: {}, amount: {})",
            self.depositor, self.amount
        )
    }
}

/// The canonical Withdrawal event signature
pub const WITHDRAWAL_EVENT_SIGNATURE: &str = "Withdrawal(address,uint256)";

sol! {
    event Withdrawal(address indexed withdrawer, uint256 amount);
}

impl Debug for Withdrawal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Withdrawal(withdrawer: {}, amount: {})",
            self.withdrawer, self.amount
        )
    }
}

/// Block and transaction metadata attached to an observed event.
///
/// All four fields are required: the deterministic event id is built from
/// the transaction hash and log index, and the record entities copy the
/// block number and timestamp verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventMeta {
    /// Hash of the transaction that emitted the event
    pub transaction_hash: TxHash,
    /// Number of the block containing the transaction
    pub block_number: BlockNumber,
    /// Timestamp of the block containing the transaction
    pub block_timestamp: u64,
    /// Position of the log within the block
    pub log_index: u64,
}

impl EventMeta {
    /// Create event metadata from its four components.
    pub const fn new(
        transaction_hash: TxHash,
        block_number: BlockNumber,
        block_timestamp: u64,
        log_index: u64,
    ) -> Self {
        Self {
            transaction_hash,
            block_number,
            block_timestamp,
            log_index,
        }
    }

    /// Extract metadata from an RPC log entry.
    ///
    /// Logs delivered by an indexing pipeline carry all four fields; a log
    /// missing any of them is a caller contract violation and is rejected
    /// with [`EventDecodeError::MissingMetadata`].
    pub fn from_log(log: &Log) -> Result<Self, EventDecodeError> {
        let transaction_hash = log
            .transaction_hash
            .ok_or_else(|| EventDecodeError::missing_metadata("transaction_hash"))?;
        let block_number = log
            .block_number
            .ok_or_else(|| EventDecodeError::missing_metadata("block_number"))?;
        let block_timestamp = log
            .block_timestamp
            .ok_or_else(|| EventDecodeError::missing_metadata("block_timestamp"))?;
        let log_index = log
            .log_index
            .ok_or_else(|| EventDecodeError::missing_metadata("log_index"))?;

        Ok(Self {
            transaction_hash,
            block_number,
            block_timestamp,
            log_index,
        })
    }
}

/// A fully-populated Deposit event as delivered by the upstream dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedDeposit {
    /// Address that made the deposit
    pub depositor: Address,
    /// Deposited amount in chain-native token units
    pub amount: U256,
    /// Block and transaction metadata
    pub meta: EventMeta,
}

impl ObservedDeposit {
    /// Decode an observed deposit from an RPC log entry.
    ///
    /// # Errors
    ///
    /// Returns [`EventDecodeError::DecodeFailed`] if the log does not match
    /// the Deposit event signature, or
    /// [`EventDecodeError::MissingMetadata`] if block or transaction
    /// metadata is absent.
    pub fn from_log(log: &Log) -> Result<Self, EventDecodeError> {
        let event = Deposit::decode_log(&log.inner)
            .map_err(|e| EventDecodeError::decode_failed(e.to_string()))?;
        let meta = EventMeta::from_log(log)?;

        Ok(Self {
            depositor: event.depositor,
            amount: event.amount,
            meta,
        })
    }
}

/// A fully-populated Withdrawal event as delivered by the upstream dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedWithdrawal {
    /// Address that made the withdrawal
    pub withdrawer: Address,
    /// Withdrawn amount in chain-native token units
    pub amount: U256,
    /// Block and transaction metadata
    pub meta: EventMeta,
}

impl ObservedWithdrawal {
    /// Decode an observed withdrawal from an RPC log entry.
    ///
    /// # Errors
    ///
    /// Returns [`EventDecodeError::DecodeFailed`] if the log does not match
    /// the Withdrawal event signature, or
    /// [`EventDecodeError::MissingMetadata`] if block or transaction
    /// metadata is absent.
    pub fn from_log(log: &Log) -> Result<Self, EventDecodeError> {
        let event = Withdrawal::decode_log(&log.inner)
            .map_err(|e| EventDecodeError::decode_failed(e.to_string()))?;
        let meta = EventMeta::from_log(log)?;

        Ok(Self {
            withdrawer: event.withdrawer,
            amount: event.amount,
            meta,
        })
    }
}
