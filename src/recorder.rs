// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Event recorder: one immutable record per observed event.

use tracing::debug;

use crate::errors::StoreError;
use crate::event::{ObservedDeposit, ObservedWithdrawal};
use crate::store::EntityStore;
use crate::tracing::spans;
use crate::types::{DepositRecord, EventId, WithdrawalRecord};

/// Writes one immutable record per raw event into the injected store.
///
/// The record id is the deterministic `<tx-hash>-<log-index>` key, so
/// re-delivery of the same event overwrites the existing record with
/// identical content instead of creating a duplicate. That overwrite is the
/// recorder's entire resilience story; there are no retries and no
/// deduplication state.
///
/// Records are copied verbatim from the observed payload. Nothing is
/// validated here: a fully-populated payload is the caller's contract, and
/// the only failure mode is the store itself.
pub struct EventRecorder<S> {
    store: S,
}

impl<S: EntityStore> EventRecorder<S> {
    /// Create a recorder writing to `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist the record for one observed Deposit event.
    ///
    /// Returns the written record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store write fails.
    pub fn record_deposit(&self, event: &ObservedDeposit) -> Result<DepositRecord, StoreError> {
        let id = EventId::new(event.meta.transaction_hash, event.meta.log_index);
        let span = spans::record_deposit(&id);
        let _guard = span.enter();

        let record = DepositRecord {
            id,
            depositor: event.depositor,
            amount: event.amount,
            timestamp: event.meta.block_timestamp,
            block_number: event.meta.block_number,
            transaction_hash: event.meta.transaction_hash,
        };
        self.store.put_deposit(record.clone())?;

        debug!(event_id = %record.id, amount = %record.amount, "Wrote deposit record");
        Ok(record)
    }

    /// Persist the record for one observed Withdrawal event.
    ///
    /// Returns the written record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store write fails.
    pub fn record_withdrawal(
        &self,
        event: &ObservedWithdrawal,
    ) -> Result<WithdrawalRecord, StoreError> {
        let id = EventId::new(event.meta.transaction_hash, event.meta.log_index);
        let span = spans::record_withdrawal(&id);
        let _guard = span.enter();

        let record = WithdrawalRecord {
            id,
            withdrawer: event.withdrawer,
            amount: event.amount,
            timestamp: event.meta.block_timestamp,
            block_number: event.meta.block_number,
            transaction_hash: event.meta.transaction_hash,
        };
        self.store.put_withdrawal(record.clone())?;

        debug!(event_id = %record.id, amount = %record.amount, "Wrote withdrawal record");
        Ok(record)
    }
}
