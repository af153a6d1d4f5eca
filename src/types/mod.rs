// SPDX-FileCopyrightText: 2026 Bankscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for derived entities and their identifiers.

mod entities;
mod ids;

pub use entities::{Account, DepositRecord, WithdrawalRecord};
pub use ids::{AccountId, EventId};
