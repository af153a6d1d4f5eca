// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Account projector: folds events into per-address running totals.

use alloy_primitives::{Address, U256};
use tracing::debug;

use crate::errors::ProjectionError;
use crate::store::EntityStore;
use crate::tracing::spans;
use crate::types::{Account, AccountId};

/// Maintains the per-address [`Account`] aggregate in the injected store.
///
/// Each call is one load-modify-save sequence. The upstream dispatcher
/// delivers events strictly one at a time in chain order, which makes that
/// sequence a single-writer critical section; any deployment that relaxes
/// sequential delivery (for example sharding by address) must wrap these
/// calls in per-account mutual exclusion or the
/// `balance == total_deposited - total_withdrawn` invariant can be lost to
/// a load-modify-save race.
///
/// Projection is deliberately *not* idempotent: totals accumulate on every
/// delivery, and re-delivered events are expected to be filtered out
/// upstream. Only the event record write (see
/// [`EventRecorder`](crate::EventRecorder)) is re-delivery safe.
pub struct AccountProjector<S> {
    store: S,
}

impl<S: EntityStore> AccountProjector<S> {
    /// Create a projector over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Apply a deposit to the depositor's aggregate.
    ///
    /// The aggregate is created with zeroed totals on first sight of the
    /// address; deposits are the only transition from absent to present.
    /// Returns the aggregate as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::Store`] if the store fails, or
    /// [`ProjectionError::AmountOverflow`] if the running total leaves its
    /// representable range.
    pub fn apply_deposit(
        &self,
        depositor: Address,
        amount: U256,
    ) -> Result<Account, ProjectionError> {
        let span = spans::apply_deposit(depositor, amount);
        let _guard = span.enter();

        let id = AccountId::from_address(depositor);
        let mut account = match self.store.account(&id)? {
            Some(existing) => existing,
            None => {
                debug!(account = %id, "Creating account aggregate on first deposit");
                Account::new(id)
            }
        };

        account.credit(amount)?;
        self.store.put_account(account.clone())?;

        debug!(
            account = %account.id,
            total_deposited = %account.total_deposited,
            balance = %account.balance,
            "Applied deposit to account"
        );
        Ok(account)
    }

    /// Apply a withdrawal to the withdrawer's aggregate.
    ///
    /// Returns `Ok(None)` if no aggregate exists for the address: the
    /// withdrawal stays recorded as an event, but it neither creates nor
    /// updates an aggregate. Withdrawals cannot create an account, only
    /// deposits can.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::Store`] if the store fails, or
    /// [`ProjectionError::AmountOverflow`] if the running total leaves its
    /// representable range.
    pub fn apply_withdrawal(
        &self,
        withdrawer: Address,
        amount: U256,
    ) -> Result<Option<Account>, ProjectionError> {
        let span = spans::apply_withdrawal(withdrawer, amount);
        let _guard = span.enter();

        let id = AccountId::from_address(withdrawer);
        let mut account = match self.store.account(&id)? {
            Some(existing) => existing,
            None => {
                debug!(
                    account = %id,
                    amount = %amount,
                    "No aggregate for withdrawer; skipping projection"
                );
                return Ok(None);
            }
        };

        account.debit(amount)?;
        self.store.put_account(account.clone())?;

        debug!(
            account = %account.id,
            total_withdrawn = %account.total_withdrawn,
            balance = %account.balance,
            "Applied withdrawal to account"
        );
        Ok(Some(account))
    }
}
