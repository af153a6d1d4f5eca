// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Entity store abstraction.
//!
//! The handlers never touch ambient persistence; they go through an
//! injected [`EntityStore`]. That keeps the load-modify-save sequences
//! explicit and lets tests run against [`MemoryStore`] while production
//! deployments plug in whatever the surrounding framework persists to.
//!
//! # Design Philosophy
//!
//! - **Synchronous**: Handlers are straight-line load-modify-save sequences
//!   delivered one event at a time; nothing here needs to suspend
//! - **Absence is not an error**: Lookups return `Ok(None)` for entities
//!   that were never written
//! - **Put is an upsert**: Writing an entity under an existing id replaces
//!   it unconditionally, which is what makes re-delivery of an event an
//!   idempotent overwrite of its record

use std::sync::Arc;

use crate::errors::StoreError;
use crate::types::{Account, AccountId, DepositRecord, EventId, WithdrawalRecord};

mod memory;

pub use memory::MemoryStore;

/// Keyed storage for the derived entities.
///
/// The trait is object-safe, so dispatch code can hold a
/// `Box<dyn EntityStore>` when the backend is chosen at runtime. Blanket
/// implementations for `&S` and `Arc<S>` let the recorder and projector
/// share one backend without the backend itself being `Clone`.
pub trait EntityStore: Send + Sync {
    /// Load a deposit record by its deterministic id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails. An absent record is
    /// `Ok(None)`.
    fn deposit(&self, id: &EventId) -> Result<Option<DepositRecord>, StoreError>;

    /// Write a deposit record, replacing any record under the same id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn put_deposit(&self, record: DepositRecord) -> Result<(), StoreError>;

    /// Load a withdrawal record by its deterministic id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails. An absent record is
    /// `Ok(None)`.
    fn withdrawal(&self, id: &EventId) -> Result<Option<WithdrawalRecord>, StoreError>;

    /// Write a withdrawal record, replacing any record under the same id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn put_withdrawal(&self, record: WithdrawalRecord) -> Result<(), StoreError>;

    /// Load an account aggregate by its normalized address id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails. An account that has
    /// never received a deposit is `Ok(None)`.
    fn account(&self, id: &AccountId) -> Result<Option<Account>, StoreError>;

    /// Write an account aggregate, replacing any aggregate under the same
    /// id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn put_account(&self, account: Account) -> Result<(), StoreError>;
}

impl<S: EntityStore + ?Sized> EntityStore for &S {
    fn deposit(&self, id: &EventId) -> Result<Option<DepositRecord>, StoreError> {
        (**self).deposit(id)
    }

    fn put_deposit(&self, record: DepositRecord) -> Result<(), StoreError> {
        (**self).put_deposit(record)
    }

    fn withdrawal(&self, id: &EventId) -> Result<Option<WithdrawalRecord>, StoreError> {
        (**self).withdrawal(id)
    }

    fn put_withdrawal(&self, record: WithdrawalRecord) -> Result<(), StoreError> {
        (**self).put_withdrawal(record)
    }

    fn account(&self, id: &AccountId) -> Result<Option<Account>, StoreError> {
        (**self).account(id)
    }

    fn put_account(&self, account: Account) -> Result<(), StoreError> {
        (**self).put_account(account)
    }
}

impl<S: EntityStore + ?Sized> EntityStore for Arc<S> {
    fn deposit(&self, id: &EventId) -> Result<Option<DepositRecord>, StoreError> {
        (**self).deposit(id)
    }

    fn put_deposit(&self, record: DepositRecord) -> Result<(), StoreError> {
        (**self).put_deposit(record)
    }

    fn withdrawal(&self, id: &EventId) -> Result<Option<WithdrawalRecord>, StoreError> {
        (**self).withdrawal(id)
    }

    fn put_withdrawal(&self, record: WithdrawalRecord) -> Result<(), StoreError> {
        (**self).put_withdrawal(record)
    }

    fn account(&self, id: &AccountId) -> Result<Option<Account>, StoreError> {
        (**self).account(id)
    }

    fn put_account(&self, account: Account) -> Result<(), StoreError> {
        (**self).put_account(account)
    }
}
