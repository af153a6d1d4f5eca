// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Bankscan indexes SimpleBank contract events into derived entities.
//!
//! The crate reacts to two on-chain events, `Deposit` and `Withdrawal`, and
//! maintains two kinds of derived state in an injected [`EntityStore`]:
//!
//! - **Event records** ([`DepositRecord`], [`WithdrawalRecord`]): one
//!   immutable row per observed event, keyed by the deterministic
//!   `<tx-hash>-<log-index>` id so that re-delivery of the same event is an
//!   idempotent overwrite rather than a duplicate.
//! - **Account aggregates** ([`Account`]): per-address running totals with
//!   the ledger invariant `balance == total_deposited - total_withdrawn`
//!   re-derived after every update.
//!
//! # Architecture
//!
//! ```text
//! chain log ──> ObservedDeposit / ObservedWithdrawal
//!                      │
//!              BankIndexer::handle_*
//!                ├── EventRecorder   (immutable per-event record)
//!                └── AccountProjector (load-modify-save aggregate)
//!                      │
//!                 EntityStore (injected; MemoryStore for tests)
//! ```
//!
//! The upstream dispatcher delivers events one at a time in chain order
//! (block order, then log order); every handler runs to completion before
//! the next is invoked, so the load-modify-save sequence for an account is
//! a single-writer critical section by construction. Anything that relaxes
//! sequential delivery must add per-account exclusion around
//! [`AccountProjector`].
//!
//! # Example
//!
//! ```
//! use alloy_primitives::{address, U256};
//! use bankscan::{AccountId, BankIndexer, EntityStore, MemoryStore};
//! use bankscan::event::{EventMeta, ObservedDeposit};
//!
//! let store = MemoryStore::new();
//! let indexer = BankIndexer::new(store.clone());
//!
//! let observed = ObservedDeposit {
//!     depositor: address!("00000000000000000000000000000000000000aa"),
//!     amount: U256::from(100),
//!     meta: EventMeta::new(Default::default(), 0, 1_700_000_000, 42),
//! };
//! indexer.handle_deposit(&observed).unwrap();
//!
//! let id = AccountId::from_address(observed.depositor);
//! let account = store.account(&id).unwrap().unwrap();
//! assert_eq!(account.total_deposited, U256::from(100));
//! assert_eq!(account.balance, alloy_primitives::I256::try_from(U256::from(100)).unwrap());
//! ```

pub mod errors;
pub mod event;
mod indexer;
mod projector;
mod recorder;
pub mod store;
mod tracing;
pub mod types;

pub use errors::{EventDecodeError, IndexingError, ProjectionError, StoreError};
pub use event::{Deposit, EventMeta, ObservedDeposit, ObservedWithdrawal, Withdrawal};
pub use indexer::BankIndexer;
pub use projector::AccountProjector;
pub use recorder::EventRecorder;
pub use store::{EntityStore, MemoryStore};
pub use types::{Account, AccountId, DepositRecord, EventId, WithdrawalRecord};
