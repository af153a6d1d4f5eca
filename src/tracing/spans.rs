// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for bankscan operations.
//!
//! Telemetry is kept orthogonal to business logic: instead of `#[instrument]`
//! attributes on handler functions, each instrumented operation has a
//! corresponding span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use alloy_primitives::{Address, TxHash, U256};
use tracing::Span;

use crate::types::EventId;

/// Create span for handling one Deposit event end to end.
///
/// Parent: None (root span for this operation)
/// Children: record_deposit, apply_deposit spans
#[inline]
pub(crate) fn handle_deposit(tx_hash: TxHash, log_index: u64) -> Span {
    tracing::info_span!(
        "bankscan.handle_deposit",
        tx_hash = %tx_hash,
        log_index = log_index,
    )
}

/// Create span for handling one Withdrawal event end to end.
///
/// Parent: None (root span for this operation)
/// Children: record_withdrawal, apply_withdrawal spans
#[inline]
pub(crate) fn handle_withdrawal(tx_hash: TxHash, log_index: u64) -> Span {
    tracing::info_span!(
        "bankscan.handle_withdrawal",
        tx_hash = %tx_hash,
        log_index = log_index,
    )
}

/// Create span for writing one deposit record.
///
/// Parent: handle_deposit span (when dispatched through the facade)
#[inline]
pub(crate) fn record_deposit(id: &EventId) -> Span {
    tracing::debug_span!("bankscan.record_deposit", event_id = %id)
}

/// Create span for writing one withdrawal record.
///
/// Parent: handle_withdrawal span (when dispatched through the facade)
#[inline]
pub(crate) fn record_withdrawal(id: &EventId) -> Span {
    tracing::debug_span!("bankscan.record_withdrawal", event_id = %id)
}

/// Create span for projecting a deposit onto an account aggregate.
///
/// Parent: handle_deposit span (when dispatched through the facade)
#[inline]
pub(crate) fn apply_deposit(depositor: Address, amount: U256) -> Span {
    tracing::debug_span!(
        "bankscan.apply_deposit",
        depositor = %depositor,
        amount = %amount,
    )
}

/// Create span for projecting a withdrawal onto an account aggregate.
///
/// Parent: handle_withdrawal span (when dispatched through the facade)
#[inline]
pub(crate) fn apply_withdrawal(withdrawer: Address, amount: U256) -> Span {
    tracing::debug_span!(
        "bankscan.apply_withdrawal",
        withdrawer = %withdrawer,
        amount = %amount,
    )
}
