// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Derived entities written to the entity store.
//!
//! [`DepositRecord`] and [`WithdrawalRecord`] are immutable per-event rows;
//! once written they are never mutated or deleted, and re-writing one under
//! the same id replaces it with identical content. [`Account`] is the
//! mutable per-address aggregate; all mutation goes through [`Account::credit`]
//! and [`Account::debit`], which re-derive `balance` from the totals so the
//! ledger invariant `balance == total_deposited - total_withdrawn` holds
//! after every update.

use alloy_primitives::{Address, BlockNumber, TxHash, I256, U256};
use serde::{Deserialize, Serialize};

use crate::errors::ProjectionError;
use crate::types::{AccountId, EventId};

/// Immutable record of one observed Deposit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    /// Deterministic `<tx-hash>-<log-index>` id
    pub id: EventId,
    /// Address that made the deposit
    pub depositor: Address,
    /// Deposited amount in chain-native token units
    pub amount: U256,
    /// Timestamp of the containing block
    pub timestamp: u64,
    /// Number of the containing block
    pub block_number: BlockNumber,
    /// Hash of the emitting transaction
    pub transaction_hash: TxHash,
}

/// Immutable record of one observed Withdrawal event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRecord {
    /// Deterministic `<tx-hash>-<log-index>` id
    pub id: EventId,
    /// Address that made the withdrawal
    pub withdrawer: Address,
    /// Withdrawn amount in chain-native token units
    pub amount: U256,
    /// Timestamp of the containing block
    pub timestamp: u64,
    /// Number of the containing block
    pub block_number: BlockNumber,
    /// Hash of the emitting transaction
    pub transaction_hash: TxHash,
}

/// Per-address running totals with a derived balance.
///
/// `balance` is signed: nothing in the projection prevents
/// `total_withdrawn` from exceeding `total_deposited` on an existing
/// aggregate, and the ledger must represent that state faithfully rather
/// than clamp it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Normalized lowercase hex address this aggregate belongs to
    pub id: AccountId,
    /// Sum of all deposits applied to this account
    pub total_deposited: U256,
    /// Sum of all withdrawals applied to this account
    pub total_withdrawn: U256,
    /// `total_deposited - total_withdrawn`, re-derived on every update
    pub balance: I256,
}

impl Account {
    /// Create a fresh aggregate with all totals at zero.
    pub const fn new(id: AccountId) -> Self {
        Self {
            id,
            total_deposited: U256::ZERO,
            total_withdrawn: U256::ZERO,
            balance: I256::ZERO,
        }
    }

    /// Add a deposit to the running totals and re-derive the balance.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::AmountOverflow`] if the total no longer
    /// fits in a `U256` (or the balance in an `I256`). Overflow fails
    /// loudly instead of saturating: a clamped total would silently break
    /// the ledger invariant.
    pub fn credit(&mut self, amount: U256) -> Result<(), ProjectionError> {
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or_else(|| ProjectionError::amount_overflow(&self.id))?;
        self.recompute_balance()
    }

    /// Add a withdrawal to the running totals and re-derive the balance.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::AmountOverflow`] under the same
    /// conditions as [`Account::credit`].
    pub fn debit(&mut self, amount: U256) -> Result<(), ProjectionError> {
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or_else(|| ProjectionError::amount_overflow(&self.id))?;
        self.recompute_balance()
    }

    /// Whether the ledger invariant currently holds.
    ///
    /// True for every aggregate produced through [`Account::credit`] /
    /// [`Account::debit`]; exposed for tests and store-side consistency
    /// checks.
    pub fn invariant_holds(&self) -> bool {
        match (
            I256::try_from(self.total_deposited),
            I256::try_from(self.total_withdrawn),
        ) {
            (Ok(deposited), Ok(withdrawn)) => self.balance == deposited - withdrawn,
            _ => false,
        }
    }

    /// Recompute `balance` from the totals.
    ///
    /// Always derived, never incremented, so the balance cannot drift even
    /// if the totals are ever corrected independently.
    fn recompute_balance(&mut self) -> Result<(), ProjectionError> {
        let deposited = I256::try_from(self.total_deposited)
            .map_err(|_| ProjectionError::amount_overflow(&self.id))?;
        let withdrawn = I256::try_from(self.total_withdrawn)
            .map_err(|_| ProjectionError::amount_overflow(&self.id))?;

        // Both operands are in [0, I256::MAX], so the difference cannot
        // overflow.
        self.balance = deposited - withdrawn;
        Ok(())
    }
}
