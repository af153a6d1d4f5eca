// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the account projector.

use crate::errors::StoreError;
use crate::types::AccountId;

/// Errors that can occur while projecting an event onto an account
/// aggregate.
///
/// The absent-aggregate branch of a withdrawal is *not* represented here;
/// it is a defined no-op and
/// [`AccountProjector::apply_withdrawal`](crate::AccountProjector::apply_withdrawal)
/// reports it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    /// The entity store failed during load or save.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A running total or the derived balance left its representable range.
    ///
    /// Totals accumulate with checked arithmetic; exceeding `U256` (or the
    /// signed `I256` balance range) is the only path that could violate the
    /// ledger invariant, so it fails loudly instead of saturating.
    #[error("Amount overflow while updating account {account}")]
    AmountOverflow {
        /// Aggregate whose update overflowed
        account: AccountId,
    },
}

impl ProjectionError {
    /// Create an `AmountOverflow` error for a specific account.
    pub fn amount_overflow(account: &AccountId) -> Self {
        ProjectionError::AmountOverflow {
            account: account.clone(),
        }
    }
}
