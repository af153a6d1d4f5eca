// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory entity store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::StoreError;
use crate::store::EntityStore;
use crate::types::{Account, AccountId, DepositRecord, EventId, WithdrawalRecord};

#[derive(Debug, Default)]
struct Inner {
    deposits: HashMap<EventId, DepositRecord>,
    withdrawals: HashMap<EventId, WithdrawalRecord>,
    accounts: HashMap<AccountId, Account>,
}

/// HashMap-backed [`EntityStore`] used by tests and as the reference
/// backend.
///
/// Cloning produces another handle to the same underlying maps, so the
/// recorder and projector (and test assertions) can share one store. The
/// interior lock only guards handle sharing; the delivery model remains one
/// event at a time.
///
/// # Examples
///
/// ```
/// use bankscan::MemoryStore;
///
/// let store = MemoryStore::new();
/// assert_eq!(store.account_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of deposit records currently stored.
    pub fn deposit_count(&self) -> usize {
        self.read().map_or(0, |inner| inner.deposits.len())
    }

    /// Number of withdrawal records currently stored.
    pub fn withdrawal_count(&self) -> usize {
        self.read().map_or(0, |inner| inner.withdrawals.len())
    }

    /// Number of account aggregates currently stored.
    pub fn account_count(&self) -> usize {
        self.read().map_or(0, |inner| inner.accounts.len())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|e| StoreError::backend(format!("read lock poisoned: {e}")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|e| StoreError::backend(format!("write lock poisoned: {e}")))
    }
}

impl EntityStore for MemoryStore {
    fn deposit(&self, id: &EventId) -> Result<Option<DepositRecord>, StoreError> {
        Ok(self.read()?.deposits.get(id).cloned())
    }

    fn put_deposit(&self, record: DepositRecord) -> Result<(), StoreError> {
        self.write()?.deposits.insert(record.id.clone(), record);
        Ok(())
    }

    fn withdrawal(&self, id: &EventId) -> Result<Option<WithdrawalRecord>, StoreError> {
        Ok(self.read()?.withdrawals.get(id).cloned())
    }

    fn put_withdrawal(&self, record: WithdrawalRecord) -> Result<(), StoreError> {
        self.write()?.withdrawals.insert(record.id.clone(), record);
        Ok(())
    }

    fn account(&self, id: &AccountId) -> Result<Option<Account>, StoreError> {
        Ok(self.read()?.accounts.get(id).cloned())
    }

    fn put_account(&self, account: Account) -> Result<(), StoreError> {
        self.write()?.accounts.insert(account.id.clone(), account);
        Ok(())
    }
}
