// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Dispatcher-facing handler pair.

use alloy_rpc_types::Log;
use tracing::info;

use crate::errors::IndexingError;
use crate::event::{ObservedDeposit, ObservedWithdrawal};
use crate::projector::AccountProjector;
use crate::recorder::EventRecorder;
use crate::store::EntityStore;
use crate::tracing::spans;

/// The pair of SimpleBank event handlers.
///
/// One handler per event type, each performing the same two steps the
/// original contract mapping does: write the immutable event record, then
/// run the account projection. The recorder and projector never call each
/// other; this facade invokes them in sequence exactly as an external
/// dispatcher would.
///
/// The store handle is cloned into both components, so `S` is typically
/// [`MemoryStore`](crate::MemoryStore), an `Arc` of a backend, or a
/// reference to one.
pub struct BankIndexer<S> {
    recorder: EventRecorder<S>,
    projector: AccountProjector<S>,
}

impl<S: EntityStore + Clone> BankIndexer<S> {
    /// Create the handler pair over a shared store.
    pub fn new(store: S) -> Self {
        Self {
            recorder: EventRecorder::new(store.clone()),
            projector: AccountProjector::new(store),
        }
    }

    /// Handle one Deposit event: record it, then project it.
    ///
    /// # Errors
    ///
    /// Returns [`IndexingError`] if the record write or the projection
    /// fails. A failure between the two steps leaves the record written and
    /// the aggregate untouched; the upstream re-delivery policy governs
    /// retry, and re-recording is an idempotent overwrite.
    pub fn handle_deposit(&self, event: &ObservedDeposit) -> Result<(), IndexingError> {
        let span = spans::handle_deposit(event.meta.transaction_hash, event.meta.log_index);
        let _guard = span.enter();

        info!(
            depositor = %event.depositor,
            amount = %event.amount,
            block = event.meta.block_number,
            "Processing Deposit event"
        );

        self.recorder.record_deposit(event)?;
        self.projector.apply_deposit(event.depositor, event.amount)?;
        Ok(())
    }

    /// Handle one Withdrawal event: record it, then project it.
    ///
    /// The projection step is a no-op when the withdrawer has no aggregate;
    /// the record is written regardless.
    ///
    /// # Errors
    ///
    /// Returns [`IndexingError`] if the record write or the projection
    /// fails.
    pub fn handle_withdrawal(&self, event: &ObservedWithdrawal) -> Result<(), IndexingError> {
        let span = spans::handle_withdrawal(event.meta.transaction_hash, event.meta.log_index);
        let _guard = span.enter();

        info!(
            withdrawer = %event.withdrawer,
            amount = %event.amount,
            block = event.meta.block_number,
            "Processing Withdrawal event"
        );

        self.recorder.record_withdrawal(event)?;
        self.projector
            .apply_withdrawal(event.withdrawer, event.amount)?;
        Ok(())
    }

    /// Decode a raw log as a Deposit event and handle it.
    ///
    /// # Errors
    ///
    /// Returns [`IndexingError::Decode`] if the log does not match the
    /// Deposit signature or lacks block/transaction metadata, otherwise as
    /// [`BankIndexer::handle_deposit`].
    pub fn handle_deposit_log(&self, log: &Log) -> Result<(), IndexingError> {
        let event = ObservedDeposit::from_log(log)?;
        self.handle_deposit(&event)
    }

    /// Decode a raw log as a Withdrawal event and handle it.
    ///
    /// # Errors
    ///
    /// Returns [`IndexingError::Decode`] if the log does not match the
    /// Withdrawal signature or lacks block/transaction metadata, otherwise
    /// as [`BankIndexer::handle_withdrawal`].
    pub fn handle_withdrawal_log(&self, log: &Log) -> Result<(), IndexingError> {
        let event = ObservedWithdrawal::from_log(log)?;
        self.handle_withdrawal(&event)
    }
}
